//! Site configuration schema for Portico.
//!
//! This crate turns raw configuration tables into the validated
//! [`SiteConfig`] model:
//! - [`RawSiteConfig`] and friends are the serde surface. Every field is
//!   optional, so any concrete format that deserializes into them works;
//!   the CLI feeds them from `portico.toml`, tests from inline strings.
//! - [`SiteConfig::from_raw`] applies the schema rules and records every
//!   finding in a [`Diagnostics`](portico_diag::Diagnostics) accumulator
//!   instead of stopping at the first.
//!
//! No file I/O happens here; reading configuration files is the caller's
//! job.
//!
//! # Quick Start
//!
//! ```
//! use portico_config::{RawSiteConfig, SiteConfig};
//! use portico_diag::Diagnostics;
//!
//! let raw: RawSiteConfig = toml::from_str(
//!     r#"
//!     title = "My Docs"
//!     url = "https://docs.example.com"
//!     base_url = "/"
//!     "#,
//! )?;
//!
//! let mut diag = Diagnostics::new();
//! let config = SiteConfig::from_raw(&raw, &mut diag);
//! assert!(config.is_some());
//! # Ok::<(), toml::de::Error>(())
//! ```

pub(crate) mod raw;
pub(crate) mod site;
pub(crate) mod theme;
pub(crate) mod validate;

pub use raw::{
    RawFooter, RawFooterLink, RawFooterLinkGroup, RawI18n, RawLogo, RawNavItem, RawNavbar,
    RawPrism, RawSearch, RawSiteConfig, RawThemeConfig,
};
pub use site::{BrokenLinkPolicy, I18n, SiteConfig, TrailingSlash};
pub use theme::{
    Footer, FooterLink, FooterLinkGroup, FooterStyle, LinkTarget, Logo, NavItem, NavPosition,
    Navbar, Prism, Search, SearchProvider, ThemeConfig,
};
