//! Site assembly.
//!
//! Orchestrates the validation pipeline: schema loading
//! (`portico-config`), sidebar tree building (`portico-sidebars`), and
//! cross-reference validation against the document corpus
//! (`portico-corpus`). The result is either an immutable [`Site`] with
//! any warnings attached, or the complete ordered set of findings.
//!
//! ```
//! use portico_config::RawSiteConfig;
//! use portico_corpus::DocCorpus;
//! use portico_sidebars::RawSidebars;
//! use portico_site::Site;
//!
//! let config: RawSiteConfig = toml::from_str(
//!     r#"
//! title = "Portico"
//! url = "https://docs.example.com"
//! base_url = "/"
//! "#,
//! )?;
//! let sidebars: RawSidebars = serde_json::from_str(
//!     r#"{ "guides": ["guides/intro"] }"#,
//! )?;
//! let corpus = DocCorpus::from_ids(["guides/intro"]);
//!
//! let assembled = Site::assemble(&config, &sidebars, &corpus)
//!     .map_err(|diag| diag.to_string())?;
//! assert_eq!(assembled.site.config.title, "Portico");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod site;
pub(crate) mod verify;

pub use site::{Assembled, Site};
pub use verify::verify_references;
