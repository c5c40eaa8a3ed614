//! Filesystem scanner that turns a docs tree into a [`DocCorpus`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::corpus::DocCorpus;

/// Failure to read a docs tree.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The docs directory does not exist or is not a directory.
    #[error("docs directory not found: {}", path.display())]
    NotFound { path: PathBuf },
}

/// Scan a docs tree and collect the ID of every `.md` and `.mdx` file.
///
/// IDs are `/`-separated paths relative to `dir` with the extension
/// stripped. Hidden and underscore-prefixed entries are skipped, as are
/// common non-documentation directories. Unreadable subdirectories are
/// logged and skipped rather than failing the whole scan.
pub fn scan_dir(dir: &Path) -> Result<DocCorpus, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut corpus = DocCorpus::new();
    scan_level(dir, "", &mut corpus);
    Ok(corpus)
}

fn scan_level(dir: &Path, prefix: &str, corpus: &mut DocCorpus) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(path = %dir.display(), %error, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };

        // Skip hidden and underscore-prefixed files/dirs
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            // Skip common non-documentation directories
            if matches!(
                name.to_lowercase().as_str(),
                "node_modules" | "target" | "dist" | "build" | ".cache" | "vendor" | "__pycache__"
            ) {
                continue;
            }
            scan_level(&entry.path(), &join_id(prefix, name), corpus);
        } else if let Some(stem) = doc_stem(name) {
            corpus.insert(join_id(prefix, stem));
        }
    }
}

/// The ID stem of a documentation file name, when it is one.
fn doc_stem(name: &str) -> Option<&str> {
    name.strip_suffix(".md").or_else(|| name.strip_suffix(".mdx"))
}

fn join_id(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}
