//! Cross-reference validation.
//!
//! Runs after the schema loader and tree builder, because it needs both
//! of their outputs plus the external document corpus.

use portico_config::{NavItem, SiteConfig};
use portico_corpus::DocCorpus;
use portico_diag::{Issue, TreePath};
use portico_sidebars::{SidebarNode, Sidebars};

/// Check that every weak reference in the model resolves.
///
/// Pure and exhaustive: the whole model is walked even after the first
/// finding, so one invocation reports every dangling reference. Order is
/// deterministic: navbar items in declaration order, then sidebars in
/// declaration order with nodes in depth-first pre-order.
#[must_use]
pub fn verify_references(
    config: &SiteConfig,
    sidebars: &Sidebars,
    corpus: &DocCorpus,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for item in &config.theme.navbar.items {
        if let NavItem::Sidebar {
            label, sidebar_id, ..
        } = item
            && !sidebars.contains(sidebar_id)
        {
            issues.push(Issue::DanglingSidebarReference {
                label: label.clone(),
                sidebar: sidebar_id.clone(),
            });
        }
    }

    for sidebar in sidebars.iter() {
        let mut trail = TreePath::new();
        verify_nodes(&sidebar.id, &sidebar.items, &mut trail, corpus, &mut issues);
    }

    issues
}

fn verify_nodes(
    sidebar: &str,
    nodes: &[SidebarNode],
    trail: &mut TreePath,
    corpus: &DocCorpus,
    issues: &mut Vec<Issue>,
) {
    for node in nodes {
        match node {
            SidebarNode::Doc { id, .. } => {
                if !corpus.contains(id) {
                    issues.push(Issue::DanglingDocumentReference {
                        sidebar: sidebar.to_owned(),
                        path: trail.clone(),
                        doc: id.clone(),
                    });
                }
            }
            SidebarNode::Category { label, items, .. } => {
                trail.push(label.clone());
                verify_nodes(sidebar, items, trail, corpus, issues);
                trail.pop();
            }
        }
    }
}
