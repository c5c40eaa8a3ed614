//! CLI error types.

use std::path::PathBuf;

use portico_corpus::CorpusError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Corpus(#[from] CorpusError),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
