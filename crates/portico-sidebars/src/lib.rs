//! Sidebar navigation trees.
//!
//! A sidebars file maps sidebar IDs to ordered node lists. [`RawSidebars`]
//! keeps that mapping exactly as declared, including declaration order
//! and repeated IDs; [`Sidebars::from_raw`] validates it into immutable
//! trees, collecting every finding instead of stopping at the first.
//!
//! ```
//! use portico_diag::Diagnostics;
//! use portico_sidebars::{RawSidebars, Sidebars};
//!
//! let raw: RawSidebars = serde_json::from_str(
//!     r#"{ "guides": [
//!         "guides/intro",
//!         { "type": "category", "label": "Usage", "items": ["guides/cli"] }
//!     ] }"#,
//! )?;
//!
//! let mut diag = Diagnostics::new();
//! let sidebars = Sidebars::from_raw(&raw, &mut diag);
//! assert!(sidebars.is_some());
//! # Ok::<(), serde_json::Error>(())
//! ```

pub(crate) mod raw;
pub(crate) mod tree;

pub use raw::{RawNode, RawSidebarNode, RawSidebars};
pub use tree::{Sidebar, SidebarNode, Sidebars};
