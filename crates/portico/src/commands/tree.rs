//! `portico tree` command implementation.

use std::path::PathBuf;

use clap::Args;

use portico_config::NavItem;
use portico_sidebars::SidebarNode;
use portico_site::{Assembled, Site};

use crate::commands::load_inputs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Site directory to print.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Docs directory, relative to the site directory.
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded or fails validation.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (config, sidebars, corpus) = load_inputs(&self.dir, &self.docs_dir)?;
        let assembled = Site::assemble(&config, &sidebars, &corpus)
            .map_err(|diag| CliError::Validation(diag.to_string()))?;

        print_site(&output, &assembled);
        Ok(())
    }
}

fn print_site(output: &Output, assembled: &Assembled) {
    let site = &assembled.site;

    output.highlight(&site.config.title);

    let navbar = &site.config.theme.navbar;
    if !navbar.items.is_empty() {
        output.info("navbar:");
        for item in &navbar.items {
            output.info(&format!("  {}", describe_nav_item(item)));
        }
    }

    for sidebar in site.sidebars.iter() {
        output.highlight(&format!("\nsidebar {}", sidebar.id));
        print_nodes(output, &sidebar.items, 1);
    }

    if !assembled.warnings.is_empty() {
        output.warning(&format!("\n{} warning(s):", assembled.warnings.len()));
        for warning in &assembled.warnings {
            output.warning(&format!("  {warning}"));
        }
    }
}

fn describe_nav_item(item: &NavItem) -> String {
    match item {
        NavItem::Sidebar {
            label, sidebar_id, ..
        } => format!("{label} -> sidebar {sidebar_id}"),
        NavItem::Link { label, to, .. } => format!("{label} -> {to}"),
        NavItem::External { label, href, .. } => format!("{label} -> {href}"),
    }
}

fn print_nodes(output: &Output, nodes: &[SidebarNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            SidebarNode::Doc { id, label } => match label {
                Some(label) => output.info(&format!("{indent}{label} ({id})")),
                None => output.info(&format!("{indent}{id}")),
            },
            SidebarNode::Category { label, items, .. } => {
                output.info(&format!("{indent}{label}/"));
                print_nodes(output, items, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use portico_config::NavPosition;

    use super::*;

    #[test]
    fn test_describe_sidebar_item() {
        let item = NavItem::Sidebar {
            label: "Guides".to_owned(),
            position: NavPosition::Left,
            sidebar_id: "guides".to_owned(),
        };

        assert_eq!(describe_nav_item(&item), "Guides -> sidebar guides");
    }

    #[test]
    fn test_describe_link_item() {
        let item = NavItem::Link {
            label: "Blog".to_owned(),
            position: NavPosition::Left,
            to: "/blog".to_owned(),
        };

        assert_eq!(describe_nav_item(&item), "Blog -> /blog");
    }

    #[test]
    fn test_describe_external_item() {
        let item = NavItem::External {
            label: "GitHub".to_owned(),
            position: NavPosition::Right,
            href: "https://github.com/example".to_owned(),
        };

        assert_eq!(
            describe_nav_item(&item),
            "GitHub -> https://github.com/example"
        );
    }
}
