//! Document corpus discovery.
//!
//! A corpus is the set of document IDs a site's sidebars may reference.
//! The cross-reference validator only consumes the set; this crate also
//! provides the filesystem scanner that produces one from a docs tree.
//!
//! ```
//! use portico_corpus::DocCorpus;
//!
//! let corpus = DocCorpus::from_ids(["guides/intro", "guides/cli"]);
//! assert!(corpus.contains("guides/intro"));
//! assert!(!corpus.contains("guides/deleted"));
//! ```

pub(crate) mod corpus;
pub(crate) mod scan;

pub use corpus::DocCorpus;
pub use scan::{CorpusError, scan_dir};
