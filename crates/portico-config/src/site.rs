//! The validated site configuration model.

use serde::Serialize;

use portico_diag::{Diagnostics, FieldPath, Issue};

use crate::raw::{RawI18n, RawSiteConfig};
use crate::theme::ThemeConfig;
use crate::validate;

/// Trailing-slash policy for generated routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// Append a trailing slash to every route.
    Always,
    /// Strip the trailing slash from every route.
    Never,
    /// Keep routes exactly as written.
    #[default]
    Preserve,
}

impl TrailingSlash {
    /// Values accepted in configuration files.
    pub const ALLOWED: [&str; 3] = ["always", "never", "preserve"];

    /// Parse a configuration value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "preserve" => Some(Self::Preserve),
            _ => None,
        }
    }
}

/// What the builder does when it finds a broken link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Accept silently.
    Ignore,
    /// Log and continue.
    Warn,
    /// Fail the build.
    Throw,
}

impl BrokenLinkPolicy {
    /// Values accepted in configuration files.
    pub const ALLOWED: [&str; 3] = ["ignore", "warn", "throw"];

    /// Parse a configuration value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ignore" => Some(Self::Ignore),
            "warn" => Some(Self::Warn),
            "throw" => Some(Self::Throw),
            _ => None,
        }
    }
}

/// Validated locale configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct I18n {
    /// Locale served without a locale prefix.
    pub default_locale: String,
    /// Locales the site builds, in declaration order.
    pub locales: Vec<String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

impl I18n {
    fn from_raw(raw: Option<&RawI18n>, diag: &mut Diagnostics) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let base = FieldPath::new("i18n");
        let default_locale = raw
            .default_locale
            .clone()
            .unwrap_or_else(|| "en".to_owned());

        // An absent list builds just the default locale.
        let locales = match &raw.locales {
            None => vec![default_locale.clone()],
            Some(locales) if locales.is_empty() => {
                diag.error(Issue::EmptyCollection {
                    path: base.child("locales"),
                });
                vec![default_locale.clone()]
            }
            Some(locales) => {
                if !locales.contains(&default_locale) {
                    diag.error(Issue::InvalidEnum {
                        path: base.child("default_locale"),
                        value: default_locale.clone(),
                        allowed: locales.clone(),
                    });
                }
                locales.clone()
            }
        };

        Self {
            default_locale,
            locales,
        }
    }
}

/// Validated site configuration.
///
/// Constructed once by [`from_raw`](Self::from_raw) and immutable
/// thereafter. Owns exactly one [`ThemeConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Short slogan.
    pub tagline: Option<String>,
    /// Public origin the site is served from.
    pub url: String,
    /// Path prefix under the origin. Starts and ends with `/`.
    pub base_url: String,
    /// Favicon path.
    pub favicon: Option<String>,
    /// Organization owning the site.
    pub organization: Option<String>,
    /// Project name.
    pub project: Option<String>,
    /// Trailing-slash policy.
    pub trailing_slash: TrailingSlash,
    /// Policy for broken internal links.
    pub on_broken_links: BrokenLinkPolicy,
    /// Policy for broken markdown links.
    pub on_broken_markdown_links: BrokenLinkPolicy,
    /// Locale configuration.
    pub i18n: I18n,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Validate a raw configuration.
    ///
    /// Walks the whole input and records every finding in `diag` rather
    /// than stopping at the first. Returns `None` when any error was
    /// recorded during the walk.
    ///
    /// # Arguments
    ///
    /// * `raw` - Deserialized but unchecked configuration
    /// * `diag` - Accumulator the findings are reported into
    pub fn from_raw(raw: &RawSiteConfig, diag: &mut Diagnostics) -> Option<Self> {
        let before = diag.len();

        let title = validate::require_non_empty(raw.title.as_deref(), &"title".into(), diag);

        let url = validate::require_non_empty(raw.url.as_deref(), &"url".into(), diag);
        if let Some(url) = url {
            validate::require_http_url(url, &"url".into(), diag);
        }

        let base_url =
            validate::require_non_empty(raw.base_url.as_deref(), &"base_url".into(), diag);
        if let Some(base_url) = base_url {
            validate::require_slash_wrapped(base_url, &"base_url".into(), diag);
        }

        let trailing_slash = validate::resolve_enum(
            raw.trailing_slash.as_deref(),
            &"trailing_slash".into(),
            TrailingSlash::parse,
            &TrailingSlash::ALLOWED,
            TrailingSlash::default(),
            diag,
        );
        let on_broken_links = validate::resolve_enum(
            raw.on_broken_links.as_deref(),
            &"on_broken_links".into(),
            BrokenLinkPolicy::parse,
            &BrokenLinkPolicy::ALLOWED,
            BrokenLinkPolicy::Throw,
            diag,
        );
        let on_broken_markdown_links = validate::resolve_enum(
            raw.on_broken_markdown_links.as_deref(),
            &"on_broken_markdown_links".into(),
            BrokenLinkPolicy::parse,
            &BrokenLinkPolicy::ALLOWED,
            BrokenLinkPolicy::Warn,
            diag,
        );

        let i18n = I18n::from_raw(raw.i18n.as_ref(), diag);
        let theme = ThemeConfig::from_raw(raw.theme.as_ref(), diag);

        if diag.len() > before {
            return None;
        }

        Some(Self {
            title: title?.to_owned(),
            tagline: validate::optional(raw.tagline.as_deref()),
            url: url?.to_owned(),
            base_url: base_url?.to_owned(),
            favicon: validate::optional(raw.favicon.as_deref()),
            organization: validate::optional(raw.organization.as_deref()),
            project: validate::optional(raw.project.as_deref()),
            trailing_slash,
            on_broken_links,
            on_broken_markdown_links,
            i18n,
            theme,
        })
    }
}
