//! Field-level validation helpers shared by the schema loader.

use portico_diag::{Diagnostics, FieldPath, Issue};

/// Require a field to be present and non-blank.
///
/// Records a missing-field issue and returns `None` when the value is
/// absent or empty after trimming. The returned value is not trimmed.
pub(crate) fn require_non_empty<'a>(
    value: Option<&'a str>,
    path: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            diag.error(Issue::MissingField { path: path.clone() });
            None
        }
    }
}

/// Blank strings in optional fields count as absent.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_owned)
}

/// Require a URL to use an http or https scheme.
pub(crate) fn require_http_url(url: &str, path: &FieldPath, diag: &mut Diagnostics) {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        diag.error(Issue::InvalidValue {
            path: path.clone(),
            reason: "must start with http:// or https://".to_owned(),
        });
    }
}

/// Require a base path to start and end with `/`.
pub(crate) fn require_slash_wrapped(value: &str, path: &FieldPath, diag: &mut Diagnostics) {
    if !value.starts_with('/') || !value.ends_with('/') {
        diag.error(Issue::InvalidValue {
            path: path.clone(),
            reason: "must start and end with /".to_owned(),
        });
    }
}

/// Resolve an enumerated string field.
///
/// Absent values take the default. Unrecognized values record an
/// invalid-enum issue and also fall back to the default so validation can
/// continue past the field.
pub(crate) fn resolve_enum<T>(
    value: Option<&str>,
    path: &FieldPath,
    parse: impl Fn(&str) -> Option<T>,
    allowed: &[&str],
    default: T,
    diag: &mut Diagnostics,
) -> T {
    match value {
        None => default,
        Some(raw) => parse(raw).unwrap_or_else(|| {
            diag.error(Issue::InvalidEnum {
                path: path.clone(),
                value: raw.to_owned(),
                allowed: allowed.iter().map(|s| (*s).to_owned()).collect(),
            });
            default
        }),
    }
}
