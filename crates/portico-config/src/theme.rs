//! The validated theme configuration model.
//!
//! Theme tables are entirely optional: an absent section resolves to its
//! defaults. Whatever is present is validated exhaustively, with one
//! issue per finding.

use serde::Serialize;

use portico_diag::{Diagnostics, FieldPath, Issue};

use crate::raw::{
    RawFooter, RawFooterLink, RawNavItem, RawNavbar, RawPrism, RawSearch, RawThemeConfig,
};
use crate::validate;

/// `type` tags a navbar item accepts.
const NAV_ITEM_TYPES: [&str; 3] = ["sidebar", "link", "external"];

/// Highlight themes bundled with the renderer.
const PRISM_THEMES: [&str; 10] = [
    "dracula",
    "duotone-dark",
    "duotone-light",
    "github",
    "night-owl",
    "oceanic-next",
    "okaidia",
    "palenight",
    "vs-dark",
    "vs-light",
];

/// Which side of the navbar an item sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

impl NavPosition {
    /// Values accepted in configuration files.
    pub const ALLOWED: [&str; 2] = ["left", "right"];

    /// Parse a configuration value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Footer color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

impl FooterStyle {
    /// Values accepted in configuration files.
    pub const ALLOWED: [&str; 2] = ["light", "dark"];

    /// Parse a configuration value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Search backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    Algolia,
    Typesense,
}

impl SearchProvider {
    /// Values accepted in configuration files.
    pub const ALLOWED: [&str; 2] = ["algolia", "typesense"];

    /// Parse a configuration value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "algolia" => Some(Self::Algolia),
            "typesense" => Some(Self::Typesense),
            _ => None,
        }
    }
}

/// Navbar logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Logo {
    /// Image path relative to the static directory.
    pub src: String,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A single navbar entry.
///
/// Closed sum type: every processing stage matches exhaustively, so a new
/// variant cannot be half-supported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavItem {
    /// Opens a sidebar, referenced by ID. The reference is weak; the
    /// cross-reference pass checks it against the declared sidebars.
    Sidebar {
        label: String,
        position: NavPosition,
        sidebar_id: String,
    },
    /// Links to an internal route.
    Link {
        label: String,
        position: NavPosition,
        to: String,
    },
    /// Links to an external URL.
    External {
        label: String,
        position: NavPosition,
        href: String,
    },
}

impl NavItem {
    /// The item's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Sidebar { label, .. } | Self::Link { label, .. } | Self::External { label, .. } => {
                label
            }
        }
    }

    /// Which side of the navbar the item sits on.
    #[must_use]
    pub fn position(&self) -> NavPosition {
        match self {
            Self::Sidebar { position, .. }
            | Self::Link { position, .. }
            | Self::External { position, .. } => *position,
        }
    }
}

/// Validated navbar configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navbar {
    /// Brand title. Falls back to the site title in the renderer when
    /// absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Brand logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Hide the navbar while scrolling down.
    pub hide_on_scroll: bool,
    /// Entries in declaration order.
    pub items: Vec<NavItem>,
}

/// Target of a footer link: an internal route or an external URL.
///
/// Routes are opaque here; resolving them against the route table is the
/// renderer's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Internal route.
    To(String),
    /// External URL.
    Href(String),
}

/// A single footer link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(flatten)]
    pub target: LinkTarget,
}

/// A titled column of footer links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLinkGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<FooterLink>,
}

/// Validated footer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// Link columns in declaration order.
    pub link_groups: Vec<FooterLinkGroup>,
}

/// Validated syntax-highlight configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prism {
    /// Theme for the light color scheme.
    pub theme: String,
    /// Theme for the dark color scheme.
    pub dark_theme: String,
    /// Extra language grammars to load.
    pub additional_languages: Vec<String>,
}

impl Default for Prism {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: "dracula".to_owned(),
            additional_languages: Vec::new(),
        }
    }
}

/// Validated search configuration.
///
/// The section is optional, but once present every credential field is
/// required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Search {
    pub provider: SearchProvider,
    pub index_name: String,
    pub app_id: String,
    pub api_key: String,
}

/// Validated theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Social-card image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub navbar: Navbar,
    pub footer: Footer,
    pub prism: Prism,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
}

impl ThemeConfig {
    /// Validate a raw theme table. An absent table resolves to the
    /// defaults without any finding.
    pub fn from_raw(raw: Option<&RawThemeConfig>, diag: &mut Diagnostics) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        Self {
            image: validate::optional(raw.image.as_deref()),
            navbar: Navbar::from_raw(raw.navbar.as_ref(), diag),
            footer: Footer::from_raw(raw.footer.as_ref(), diag),
            prism: Prism::from_raw(raw.prism.as_ref(), diag),
            search: Search::from_raw(raw.search.as_ref(), diag),
        }
    }
}

impl Navbar {
    fn from_raw(raw: Option<&RawNavbar>, diag: &mut Diagnostics) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let base = FieldPath::new("theme.navbar");

        let logo = raw.logo.as_ref().and_then(|logo| {
            let src = validate::require_non_empty(
                logo.src.as_deref(),
                &base.child("logo").child("src"),
                diag,
            )?;
            Some(Logo {
                src: src.to_owned(),
                alt: validate::optional(logo.alt.as_deref()),
            })
        });

        let items = raw
            .items
            .iter()
            .flatten()
            .enumerate()
            .filter_map(|(i, item)| {
                resolve_nav_item(item, &base.child("items").index(i), diag)
            })
            .collect();

        Self {
            title: validate::optional(raw.title.as_deref()),
            logo,
            hide_on_scroll: raw.hide_on_scroll.unwrap_or(false),
            items,
        }
    }
}

/// Resolve one raw navbar item to its variant.
///
/// Field checks are not short-circuited: a single item can report a
/// missing label and a missing target in the same run.
fn resolve_nav_item(
    raw: &RawNavItem,
    path: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<NavItem> {
    let label = validate::require_non_empty(raw.label.as_deref(), &path.child("label"), diag);
    let position = validate::resolve_enum(
        raw.position.as_deref(),
        &path.child("position"),
        NavPosition::parse,
        &NavPosition::ALLOWED,
        NavPosition::default(),
        diag,
    );

    if raw.to.is_some() && raw.href.is_some() {
        diag.error(Issue::InvalidValue {
            path: path.clone(),
            reason: "`to` and `href` are mutually exclusive".to_owned(),
        });
    }

    let item_type = match raw.item_type.as_deref() {
        Some(tag @ ("sidebar" | "link" | "external")) => tag,
        Some(other) => {
            diag.error(Issue::InvalidEnum {
                path: path.child("type"),
                value: other.to_owned(),
                allowed: NAV_ITEM_TYPES.iter().map(|s| (*s).to_owned()).collect(),
            });
            return None;
        }
        // Untyped items are classified by whichever target field is set.
        None if raw.sidebar_id.is_some() => "sidebar",
        None if raw.to.is_some() => "link",
        None if raw.href.is_some() => "external",
        None => {
            diag.error(Issue::InvalidValue {
                path: path.clone(),
                reason: "item needs one of `sidebar_id`, `to`, or `href`".to_owned(),
            });
            return None;
        }
    };

    let target = match item_type {
        "sidebar" => validate::require_non_empty(
            raw.sidebar_id.as_deref(),
            &path.child("sidebar_id"),
            diag,
        ),
        "link" => validate::require_non_empty(raw.to.as_deref(), &path.child("to"), diag),
        _ => validate::require_non_empty(raw.href.as_deref(), &path.child("href"), diag),
    };

    let (label, target) = (label?, target?);
    Some(match item_type {
        "sidebar" => NavItem::Sidebar {
            label: label.to_owned(),
            position,
            sidebar_id: target.to_owned(),
        },
        "link" => NavItem::Link {
            label: label.to_owned(),
            position,
            to: target.to_owned(),
        },
        _ => NavItem::External {
            label: label.to_owned(),
            position,
            href: target.to_owned(),
        },
    })
}

impl Footer {
    fn from_raw(raw: Option<&RawFooter>, diag: &mut Diagnostics) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let base = FieldPath::new("theme.footer");

        let style = validate::resolve_enum(
            raw.style.as_deref(),
            &base.child("style"),
            FooterStyle::parse,
            &FooterStyle::ALLOWED,
            FooterStyle::default(),
            diag,
        );

        let link_groups = raw
            .link_groups
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, group)| {
                let group_path = base.child("link_groups").index(i);
                let items = match &group.items {
                    None => {
                        diag.error(Issue::MissingField {
                            path: group_path.child("items"),
                        });
                        Vec::new()
                    }
                    Some(items) if items.is_empty() => {
                        diag.error(Issue::EmptyCollection {
                            path: group_path.child("items"),
                        });
                        Vec::new()
                    }
                    Some(items) => items
                        .iter()
                        .enumerate()
                        .filter_map(|(j, link)| {
                            resolve_footer_link(link, &group_path.child("items").index(j), diag)
                        })
                        .collect(),
                };
                FooterLinkGroup {
                    title: validate::optional(group.title.as_deref()),
                    items,
                }
            })
            .collect();

        Self {
            style,
            copyright: validate::optional(raw.copyright.as_deref()),
            link_groups,
        }
    }
}

fn resolve_footer_link(
    raw: &RawFooterLink,
    path: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<FooterLink> {
    let label = validate::require_non_empty(raw.label.as_deref(), &path.child("label"), diag);

    let target = match (&raw.to, &raw.href) {
        (Some(_), Some(_)) => {
            diag.error(Issue::InvalidValue {
                path: path.clone(),
                reason: "`to` and `href` are mutually exclusive".to_owned(),
            });
            None
        }
        (Some(to), None) => Some(LinkTarget::To(to.clone())),
        (None, Some(href)) => Some(LinkTarget::Href(href.clone())),
        (None, None) => {
            diag.error(Issue::InvalidValue {
                path: path.clone(),
                reason: "link needs either `to` or `href`".to_owned(),
            });
            None
        }
    };

    Some(FooterLink {
        label: label?.to_owned(),
        target: target?,
    })
}

impl Prism {
    fn from_raw(raw: Option<&RawPrism>, diag: &mut Diagnostics) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let base = FieldPath::new("theme.prism");

        Self {
            theme: resolve_prism_theme(raw.theme.as_deref(), &base.child("theme"), "github", diag),
            dark_theme: resolve_prism_theme(
                raw.dark_theme.as_deref(),
                &base.child("dark_theme"),
                "dracula",
                diag,
            ),
            additional_languages: raw.additional_languages.clone().unwrap_or_default(),
        }
    }
}

fn resolve_prism_theme(
    value: Option<&str>,
    path: &FieldPath,
    default: &str,
    diag: &mut Diagnostics,
) -> String {
    match value {
        None => default.to_owned(),
        Some(theme) if PRISM_THEMES.contains(&theme) => theme.to_owned(),
        Some(other) => {
            diag.error(Issue::InvalidEnum {
                path: path.clone(),
                value: other.to_owned(),
                allowed: PRISM_THEMES.iter().map(|s| (*s).to_owned()).collect(),
            });
            default.to_owned()
        }
    }
}

impl Search {
    fn from_raw(raw: Option<&RawSearch>, diag: &mut Diagnostics) -> Option<Self> {
        let raw = raw?;
        let base = FieldPath::new("theme.search");

        let provider = validate::resolve_enum(
            raw.provider.as_deref(),
            &base.child("provider"),
            SearchProvider::parse,
            &SearchProvider::ALLOWED,
            SearchProvider::Algolia,
            diag,
        );
        let index_name =
            validate::require_non_empty(raw.index_name.as_deref(), &base.child("index_name"), diag);
        let app_id = validate::require_non_empty(raw.app_id.as_deref(), &base.child("app_id"), diag);
        let api_key =
            validate::require_non_empty(raw.api_key.as_deref(), &base.child("api_key"), diag);

        Some(Self {
            provider,
            index_name: index_name?.to_owned(),
            app_id: app_id?.to_owned(),
            api_key: api_key?.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn nav_item(raw: &RawNavItem) -> Option<NavItem> {
        let mut diag = Diagnostics::new();
        let item = resolve_nav_item(raw, &"items[0]".into(), &mut diag);
        assert!(!diag.has_errors(), "unexpected errors: {:?}", diag.errors());
        item
    }

    fn nav_item_errors(raw: &RawNavItem) -> Vec<Issue> {
        let mut diag = Diagnostics::new();
        resolve_nav_item(raw, &"items[0]".into(), &mut diag);
        assert!(diag.has_errors(), "expected errors");
        diag.errors().to_vec()
    }

    // ===== Navbar items =====

    #[test]
    fn test_typed_sidebar_item_resolves() {
        let item = nav_item(&RawNavItem {
            item_type: Some("sidebar".to_owned()),
            label: Some("Guides".to_owned()),
            sidebar_id: Some("guides".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            item,
            Some(NavItem::Sidebar {
                label: "Guides".to_owned(),
                position: NavPosition::Left,
                sidebar_id: "guides".to_owned(),
            })
        );
    }

    #[test]
    fn test_untyped_item_with_to_becomes_link() {
        let item = nav_item(&RawNavItem {
            label: Some("Blog".to_owned()),
            to: Some("/blog".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            item,
            Some(NavItem::Link {
                label: "Blog".to_owned(),
                position: NavPosition::Left,
                to: "/blog".to_owned(),
            })
        );
    }

    #[test]
    fn test_untyped_item_with_href_becomes_external() {
        let item = nav_item(&RawNavItem {
            label: Some("GitHub".to_owned()),
            href: Some("https://github.com/example/docs".to_owned()),
            position: Some("right".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            item,
            Some(NavItem::External {
                label: "GitHub".to_owned(),
                position: NavPosition::Right,
                href: "https://github.com/example/docs".to_owned(),
            })
        );
    }

    #[test]
    fn test_unknown_item_type_is_rejected() {
        let errors = nav_item_errors(&RawNavItem {
            item_type: Some("dropdown".to_owned()),
            label: Some("More".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            errors,
            [Issue::InvalidEnum {
                path: "items[0].type".into(),
                value: "dropdown".to_owned(),
                allowed: vec![
                    "sidebar".to_owned(),
                    "link".to_owned(),
                    "external".to_owned()
                ],
            }]
        );
    }

    #[test]
    fn test_sidebar_item_requires_sidebar_id() {
        let errors = nav_item_errors(&RawNavItem {
            item_type: Some("sidebar".to_owned()),
            label: Some("Guides".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            errors,
            [Issue::MissingField {
                path: "items[0].sidebar_id".into()
            }]
        );
    }

    #[test]
    fn test_item_without_label_and_target_reports_both() {
        let errors = nav_item_errors(&RawNavItem {
            item_type: Some("link".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            errors,
            [
                Issue::MissingField {
                    path: "items[0].label".into()
                },
                Issue::MissingField {
                    path: "items[0].to".into()
                },
            ]
        );
    }

    #[test]
    fn test_item_with_both_targets_is_rejected() {
        let errors = nav_item_errors(&RawNavItem {
            label: Some("Blog".to_owned()),
            to: Some("/blog".to_owned()),
            href: Some("https://blog.example.com".to_owned()),
            ..Default::default()
        });

        assert!(errors.iter().any(|e| matches!(
            e,
            Issue::InvalidValue { path, .. } if path.as_str() == "items[0]"
        )));
    }

    #[test]
    fn test_item_without_any_target_is_rejected() {
        let errors = nav_item_errors(&RawNavItem {
            label: Some("Mystery".to_owned()),
            ..Default::default()
        });

        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], Issue::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_position_is_rejected() {
        let errors = nav_item_errors(&RawNavItem {
            label: Some("Guides".to_owned()),
            sidebar_id: Some("guides".to_owned()),
            position: Some("center".to_owned()),
            ..Default::default()
        });

        assert_eq!(
            errors,
            [Issue::InvalidEnum {
                path: "items[0].position".into(),
                value: "center".to_owned(),
                allowed: vec!["left".to_owned(), "right".to_owned()],
            }]
        );
    }

    // ===== Navbar =====

    fn theme_from(toml: &str) -> (ThemeConfig, Diagnostics) {
        let raw: RawThemeConfig = toml::from_str(toml).unwrap();
        let mut diag = Diagnostics::new();
        let theme = ThemeConfig::from_raw(Some(&raw), &mut diag);
        (theme, diag)
    }

    #[test]
    fn test_absent_theme_resolves_to_defaults() {
        let mut diag = Diagnostics::new();

        let theme = ThemeConfig::from_raw(None, &mut diag);

        assert_eq!(theme, ThemeConfig::default());
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_navbar_items_keep_declaration_order() {
        let (theme, diag) = theme_from(
            r#"
[[navbar.items]]
label = "Guides"
sidebar_id = "guides"

[[navbar.items]]
label = "API"
sidebar_id = "api"

[[navbar.items]]
label = "Blog"
to = "/blog"
"#,
        );

        assert!(!diag.has_errors());
        let labels: Vec<_> = theme.navbar.items.iter().map(NavItem::label).collect();
        assert_eq!(labels, ["Guides", "API", "Blog"]);
    }

    #[test]
    fn test_logo_requires_src() {
        let (_, diag) = theme_from(
            r#"
[navbar.logo]
alt = "Docs logo"
"#,
        );

        assert_eq!(
            diag.errors(),
            [Issue::MissingField {
                path: "theme.navbar.logo.src".into()
            }]
        );
    }

    #[test]
    fn test_logo_with_src_resolves() {
        let (theme, diag) = theme_from(
            r#"
[navbar]
title = "Docs"
hide_on_scroll = true

[navbar.logo]
src = "img/logo.svg"
alt = "Docs logo"
"#,
        );

        assert!(!diag.has_errors());
        assert_eq!(theme.navbar.title.as_deref(), Some("Docs"));
        assert!(theme.navbar.hide_on_scroll);
        assert_eq!(
            theme.navbar.logo,
            Some(Logo {
                src: "img/logo.svg".to_owned(),
                alt: Some("Docs logo".to_owned()),
            })
        );
    }

    // ===== Footer =====

    #[test]
    fn test_footer_defaults() {
        let (theme, diag) = theme_from("");

        assert!(!diag.has_errors());
        assert_eq!(theme.footer.style, FooterStyle::Light);
        assert!(theme.footer.link_groups.is_empty());
    }

    #[test]
    fn test_footer_dark_style_parses() {
        let (theme, diag) = theme_from(
            r#"
[footer]
style = "dark"
copyright = "© example"
"#,
        );

        assert!(!diag.has_errors());
        assert_eq!(theme.footer.style, FooterStyle::Dark);
        assert_eq!(theme.footer.copyright.as_deref(), Some("© example"));
    }

    #[test]
    fn test_footer_invalid_style_is_rejected() {
        let (_, diag) = theme_from(
            r#"
[footer]
style = "midnight"
"#,
        );

        assert_eq!(
            diag.errors(),
            [Issue::InvalidEnum {
                path: "theme.footer.style".into(),
                value: "midnight".to_owned(),
                allowed: vec!["light".to_owned(), "dark".to_owned()],
            }]
        );
    }

    #[test]
    fn test_footer_group_requires_items() {
        let (_, diag) = theme_from(
            r#"
[[footer.link_groups]]
title = "Community"
"#,
        );

        assert_eq!(
            diag.errors(),
            [Issue::MissingField {
                path: "theme.footer.link_groups[0].items".into()
            }]
        );
    }

    #[test]
    fn test_footer_group_rejects_empty_items() {
        let (_, diag) = theme_from(
            r#"
[[footer.link_groups]]
title = "Community"
items = []
"#,
        );

        assert_eq!(
            diag.errors(),
            [Issue::EmptyCollection {
                path: "theme.footer.link_groups[0].items".into()
            }]
        );
    }

    #[test]
    fn test_footer_links_resolve_targets() {
        let (theme, diag) = theme_from(
            r#"
[[footer.link_groups]]
title = "Docs"

[[footer.link_groups.items]]
label = "Getting Started"
to = "/docs/intro"

[[footer.link_groups.items]]
label = "Forum"
href = "https://forum.example.com"
"#,
        );

        assert!(!diag.has_errors());
        let group = &theme.footer.link_groups[0];
        assert_eq!(
            group.items,
            [
                FooterLink {
                    label: "Getting Started".to_owned(),
                    target: LinkTarget::To("/docs/intro".to_owned()),
                },
                FooterLink {
                    label: "Forum".to_owned(),
                    target: LinkTarget::Href("https://forum.example.com".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_footer_link_requires_exactly_one_target() {
        let (_, diag) = theme_from(
            r#"
[[footer.link_groups]]

[[footer.link_groups.items]]
label = "Nowhere"

[[footer.link_groups.items]]
label = "Everywhere"
to = "/a"
href = "https://example.com/a"
"#,
        );

        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| matches!(e, Issue::InvalidValue { .. })));
    }

    // ===== Prism =====

    #[test]
    fn test_prism_defaults() {
        let (theme, diag) = theme_from("");

        assert!(!diag.has_errors());
        assert_eq!(theme.prism, Prism::default());
        assert_eq!(theme.prism.theme, "github");
        assert_eq!(theme.prism.dark_theme, "dracula");
    }

    #[test]
    fn test_prism_themes_and_languages_resolve() {
        let (theme, diag) = theme_from(
            r#"
[prism]
theme = "night-owl"
dark_theme = "palenight"
additional_languages = ["ocaml", "bash", "diff"]
"#,
        );

        assert!(!diag.has_errors());
        assert_eq!(theme.prism.theme, "night-owl");
        assert_eq!(theme.prism.dark_theme, "palenight");
        assert_eq!(theme.prism.additional_languages, ["ocaml", "bash", "diff"]);
    }

    #[test]
    fn test_prism_unknown_theme_is_rejected() {
        let (_, diag) = theme_from(
            r#"
[prism]
theme = "solarized"
"#,
        );

        assert_eq!(diag.len(), 1);
        assert!(matches!(
            &diag.errors()[0],
            Issue::InvalidEnum { path, value, .. }
                if path.as_str() == "theme.prism.theme" && value == "solarized"
        ));
    }

    // ===== Search =====

    #[test]
    fn test_search_absent_is_none() {
        let (theme, diag) = theme_from("");

        assert!(!diag.has_errors());
        assert_eq!(theme.search, None);
    }

    #[test]
    fn test_search_section_resolves() {
        let (theme, diag) = theme_from(
            r#"
[search]
provider = "algolia"
index_name = "docs"
app_id = "APP123"
api_key = "key456"
"#,
        );

        assert!(!diag.has_errors());
        assert_eq!(
            theme.search,
            Some(Search {
                provider: SearchProvider::Algolia,
                index_name: "docs".to_owned(),
                app_id: "APP123".to_owned(),
                api_key: "key456".to_owned(),
            })
        );
    }

    #[test]
    fn test_search_section_requires_credentials() {
        let (_, diag) = theme_from(
            r#"
[search]
provider = "algolia"
index_name = "docs"
"#,
        );

        assert_eq!(
            diag.errors(),
            [
                Issue::MissingField {
                    path: "theme.search.app_id".into()
                },
                Issue::MissingField {
                    path: "theme.search.api_key".into()
                },
            ]
        );
    }

    // ===== Serialization =====

    #[test]
    fn test_nav_item_serializes_with_type_tag() {
        let item = NavItem::Sidebar {
            label: "Guides".to_owned(),
            position: NavPosition::Left,
            sidebar_id: "guides".to_owned(),
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "sidebar");
        assert_eq!(json["label"], "Guides");
        assert_eq!(json["position"], "left");
        assert_eq!(json["sidebar_id"], "guides");
    }

    #[test]
    fn test_footer_link_serializes_flat() {
        let link = FooterLink {
            label: "Forum".to_owned(),
            target: LinkTarget::Href("https://forum.example.com".to_owned()),
        };

        let json = serde_json::to_value(&link).unwrap();

        assert_eq!(json["label"], "Forum");
        assert_eq!(json["href"], "https://forum.example.com");
        assert!(json.get("to").is_none());
    }
}
