//! Raw configuration tables as deserialized from `portico.toml`.
//!
//! Everything here is optional and unchecked. The schema loader in
//! [`site`](crate::site) and [`theme`](crate::theme) decides what is
//! required and reports what is malformed.

use serde::Deserialize;

/// Raw site configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Site title shown in the browser tab and navbar fallback.
    pub title: Option<String>,
    /// Short slogan for meta tags and the landing page.
    pub tagline: Option<String>,
    /// Public origin the site is served from.
    pub url: Option<String>,
    /// Path prefix under the origin.
    pub base_url: Option<String>,
    /// Favicon path relative to the static directory.
    pub favicon: Option<String>,
    /// Organization owning the site (deployment metadata).
    pub organization: Option<String>,
    /// Project name (deployment metadata).
    pub project: Option<String>,
    /// Trailing-slash policy for generated routes.
    pub trailing_slash: Option<String>,
    /// Policy for broken internal links.
    pub on_broken_links: Option<String>,
    /// Policy for broken markdown links.
    pub on_broken_markdown_links: Option<String>,
    /// Locale configuration.
    pub i18n: Option<RawI18n>,
    /// Theme configuration.
    pub theme: Option<RawThemeConfig>,
}

/// Raw locale configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawI18n {
    pub default_locale: Option<String>,
    pub locales: Option<Vec<String>>,
}

/// Raw theme configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawThemeConfig {
    /// Social-card image path.
    pub image: Option<String>,
    pub navbar: Option<RawNavbar>,
    pub footer: Option<RawFooter>,
    pub prism: Option<RawPrism>,
    pub search: Option<RawSearch>,
}

/// Raw navbar configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNavbar {
    pub title: Option<String>,
    pub logo: Option<RawLogo>,
    pub hide_on_scroll: Option<bool>,
    pub items: Option<Vec<RawNavItem>>,
}

/// Raw navbar logo.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLogo {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// Raw navbar item.
///
/// The `type` tag is optional; untyped items are classified by whichever
/// of `sidebar_id`, `to`, or `href` is set.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub label: Option<String>,
    pub position: Option<String>,
    pub sidebar_id: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
}

/// Raw footer configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooter {
    pub style: Option<String>,
    pub copyright: Option<String>,
    pub link_groups: Option<Vec<RawFooterLinkGroup>>,
}

/// Raw footer link column.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooterLinkGroup {
    pub title: Option<String>,
    pub items: Option<Vec<RawFooterLink>>,
}

/// Raw footer link.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooterLink {
    pub label: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
}

/// Raw syntax-highlight configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPrism {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
    pub additional_languages: Option<Vec<String>>,
}

/// Raw search configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSearch {
    pub provider: Option<String>,
    pub index_name: Option<String>,
    pub app_id: Option<String>,
    pub api_key: Option<String>,
}
