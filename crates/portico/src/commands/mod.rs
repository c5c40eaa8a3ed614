//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod tree;

use std::fs;
use std::path::Path;

use portico_config::RawSiteConfig;
use portico_corpus::{DocCorpus, scan_dir};
use portico_sidebars::RawSidebars;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use tree::TreeArgs;

/// Site configuration file name.
const CONFIG_FILE: &str = "portico.toml";

/// Sidebars definition file name.
const SIDEBARS_FILE: &str = "sidebars.json";

/// Read, parse, and scan one site directory's inputs.
///
/// `sidebars.json` is optional; a site without it simply has no
/// sidebars. `portico.toml` and the docs directory are required.
pub(crate) fn load_inputs(
    dir: &Path,
    docs_dir: &Path,
) -> Result<(RawSiteConfig, RawSidebars, DocCorpus), CliError> {
    let config_path = dir.join(CONFIG_FILE);
    let config: RawSiteConfig = toml::from_str(&read_file(&config_path)?)?;

    let sidebars_path = dir.join(SIDEBARS_FILE);
    let sidebars: RawSidebars = if sidebars_path.is_file() {
        serde_json::from_str(&read_file(&sidebars_path)?)?
    } else {
        tracing::debug!(path = %sidebars_path.display(), "no sidebars file, site has no sidebars");
        RawSidebars::default()
    };

    let corpus = scan_dir(&dir.join(docs_dir))?;

    Ok((config, sidebars, corpus))
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_site_dir() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("portico.toml"),
            r#"
title = "Portico"
url = "https://docs.example.com"
base_url = "/"
"#,
        )
        .unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("intro.md"), "# Intro").unwrap();
        temp_dir
    }

    #[test]
    fn test_load_inputs_from_complete_site() {
        let site = create_site_dir();
        fs::write(
            site.path().join("sidebars.json"),
            r#"{ "guides": ["intro"] }"#,
        )
        .unwrap();

        let (config, sidebars, corpus) =
            load_inputs(site.path(), Path::new("docs")).unwrap();

        assert_eq!(config.title.as_deref(), Some("Portico"));
        assert_eq!(sidebars.entries().len(), 1);
        assert!(corpus.contains("intro"));
    }

    #[test]
    fn test_absent_sidebars_file_means_no_sidebars() {
        let site = create_site_dir();

        let (_, sidebars, _) = load_inputs(site.path(), Path::new("docs")).unwrap();

        assert!(sidebars.is_empty());
    }

    #[test]
    fn test_missing_config_file_is_reported_with_its_path() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = load_inputs(temp_dir.path(), Path::new("docs")).unwrap_err();

        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("portico.toml"));
    }

    #[test]
    fn test_missing_docs_dir_is_reported() {
        let site = create_site_dir();
        fs::remove_dir_all(site.path().join("docs")).unwrap();

        let err = load_inputs(site.path(), Path::new("docs")).unwrap_err();

        assert!(matches!(err, CliError::Corpus(_)));
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let site = create_site_dir();
        fs::write(site.path().join("portico.toml"), "title = [unclosed").unwrap();

        let err = load_inputs(site.path(), Path::new("docs")).unwrap_err();

        assert!(matches!(err, CliError::Toml(_)));
    }
}
