//! Paths that locate a finding in the configuration or a sidebar tree.

use std::fmt;

use serde::Serialize;

/// Dotted path to a configuration field (e.g. `theme.navbar.items[2].label`).
///
/// Built incrementally while walking the raw configuration: [`child`](Self::child)
/// appends a field segment, [`index`](Self::index) appends a list position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Create a path from a literal segment string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a field segment (`theme` + `navbar` = `theme.navbar`).
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            Self(segment.to_owned())
        } else {
            Self(format!("{}.{segment}", self.0))
        }
    }

    /// Append a list position (`items` + 2 = `items[2]`).
    #[must_use]
    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{idx}]", self.0))
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chain of category labels locating a node inside one sidebar tree.
///
/// The sidebar ID is not part of the path; issues carry it as a separate
/// field. An empty path means the node sits directly under the sidebar
/// root and displays as `(root)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TreePath(Vec<String>);

impl TreePath {
    /// Create an empty path (sidebar root).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from label segments.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Descend into a category.
    pub fn push(&mut self, label: impl Into<String>) {
        self.0.push(label.into());
    }

    /// Ascend out of the current category.
    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// True at the sidebar root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The label segments from outermost to innermost.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0.join(" > "))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // FieldPath tests

    #[test]
    fn test_field_path_child_appends_with_dot() {
        let path = FieldPath::new("theme").child("navbar").child("title");

        assert_eq!(path.as_str(), "theme.navbar.title");
    }

    #[test]
    fn test_field_path_child_on_empty_has_no_leading_dot() {
        let path = FieldPath::new("").child("title");

        assert_eq!(path.as_str(), "title");
    }

    #[test]
    fn test_field_path_index_appends_brackets() {
        let path = FieldPath::new("theme.navbar")
            .child("items")
            .index(2)
            .child("label");

        assert_eq!(path.as_str(), "theme.navbar.items[2].label");
    }

    #[test]
    fn test_field_path_display_matches_as_str() {
        let path = FieldPath::new("i18n").child("locales");

        assert_eq!(path.to_string(), "i18n.locales");
    }

    #[test]
    fn test_field_path_serializes_as_string() {
        let path = FieldPath::new("title");

        let json = serde_json::to_value(&path).unwrap();

        assert_eq!(json, serde_json::json!("title"));
    }

    // TreePath tests

    #[test]
    fn test_tree_path_empty_displays_root() {
        let path = TreePath::new();

        assert_eq!(path.to_string(), "(root)");
    }

    #[test]
    fn test_tree_path_joins_labels() {
        let path = TreePath::from_segments(["Tutorials", "Advanced"]);

        assert_eq!(path.to_string(), "Tutorials > Advanced");
    }

    #[test]
    fn test_tree_path_push_pop_restores_parent() {
        let mut path = TreePath::new();
        path.push("Tutorials");
        path.push("Advanced");
        path.pop();

        assert_eq!(path.segments(), ["Tutorials"]);
    }

    #[test]
    fn test_tree_path_serializes_as_segments() {
        let path = TreePath::from_segments(["Guides"]);

        let json = serde_json::to_value(&path).unwrap();

        assert_eq!(json, serde_json::json!(["Guides"]));
    }
}
