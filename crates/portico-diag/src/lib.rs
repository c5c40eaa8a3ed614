//! Validation diagnostics for Portico.
//!
//! Every validation stage reports its findings through [`Diagnostics`]:
//! hard failures as [`Issue`]s, non-fatal findings as [`Warning`]s.
//! Findings carry a location, either a dotted configuration path
//! ([`FieldPath`]) or a chain of category labels inside a sidebar tree
//! ([`TreePath`]), so a report always tells the user where to look.

pub(crate) mod diagnostics;
pub(crate) mod issue;
pub(crate) mod path;

pub use diagnostics::Diagnostics;
pub use issue::{Issue, Warning};
pub use path::{FieldPath, TreePath};
