//! The validation issue and warning taxonomy.

use std::fmt;

use serde::Serialize;

use crate::path::{FieldPath, TreePath};

/// A single validation failure with enough context to locate it.
///
/// Structural issues (everything up to [`DuplicateSidebarId`](Self::DuplicateSidebarId))
/// come out of the schema loader and the tree builder and abort assembly.
/// The two dangling-reference issues come out of cross-reference
/// validation, which always runs to completion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Required field absent, or present but empty.
    #[error("missing required field `{path}`")]
    MissingField {
        /// Location of the field in the configuration.
        path: FieldPath,
    },
    /// Value outside the allowed set for an enumerated field.
    #[error("invalid value `{value}` for `{path}` (allowed: {})", allowed.join(", "))]
    InvalidEnum {
        /// Location of the field in the configuration.
        path: FieldPath,
        /// The rejected value.
        value: String,
        /// Values the field accepts.
        allowed: Vec<String>,
    },
    /// Collection that must contain at least one element.
    #[error("`{path}` must not be empty")]
    EmptyCollection {
        /// Location of the collection in the configuration.
        path: FieldPath,
    },
    /// Malformed value that is not an enum mismatch.
    #[error("invalid value for `{path}`: {reason}")]
    InvalidValue {
        /// Location of the field in the configuration.
        path: FieldPath,
        /// What is wrong with the value.
        reason: String,
    },
    /// Sidebar node with an unrecognized `type` tag.
    #[error("unknown node type `{node_type}` in sidebar `{sidebar}` at {path}")]
    UnknownNodeType {
        /// Sidebar the node belongs to.
        sidebar: String,
        /// Category chain leading to the node.
        path: TreePath,
        /// The unrecognized tag.
        node_type: String,
    },
    /// Two siblings at the same nesting level share a label.
    #[error("duplicate sibling label `{label}` in sidebar `{sidebar}` at {path}")]
    DuplicateSiblingLabel {
        /// Sidebar the siblings belong to.
        sidebar: String,
        /// Category chain leading to the level with the clash.
        path: TreePath,
        /// The label both siblings declare.
        label: String,
    },
    /// Two sidebars assembled under the same ID.
    #[error("duplicate sidebar id `{id}`")]
    DuplicateSidebarId {
        /// The contested ID.
        id: String,
    },
    /// Navbar item pointing at a sidebar that is not declared.
    #[error("navbar item `{label}` references unknown sidebar `{sidebar}`")]
    DanglingSidebarReference {
        /// Label of the navbar item holding the reference.
        label: String,
        /// The undeclared sidebar ID.
        sidebar: String,
    },
    /// Sidebar doc entry pointing at a document absent from the corpus.
    #[error("sidebar `{sidebar}` references unknown document `{doc}` at {path}")]
    DanglingDocumentReference {
        /// Sidebar holding the reference.
        sidebar: String,
        /// Category chain leading to the doc entry.
        path: TreePath,
        /// The unresolved document ID.
        doc: String,
    },
}

/// A non-fatal finding. Warnings never abort assembly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Category declared with an empty `items` list.
    EmptyCategory {
        /// Sidebar the category belongs to.
        sidebar: String,
        /// Category chain leading to the category.
        path: TreePath,
        /// Label of the empty category.
        label: String,
    },
    /// `collapsed` set on a category that is not collapsible.
    ///
    /// The builder keeps the category expanded; this records the
    /// contradiction in the input.
    CollapsedNotCollapsible {
        /// Sidebar the category belongs to.
        sidebar: String,
        /// Category chain leading to the category.
        path: TreePath,
        /// Label of the category.
        label: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory {
                sidebar,
                path,
                label,
            } => write!(
                f,
                "empty category `{label}` in sidebar `{sidebar}` at {path}"
            ),
            Self::CollapsedNotCollapsible {
                sidebar,
                path,
                label,
            } => write!(
                f,
                "category `{label}` in sidebar `{sidebar}` at {path} is collapsed but not collapsible; keeping it expanded"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_field_display() {
        let issue = Issue::MissingField {
            path: "title".into(),
        };

        assert_eq!(issue.to_string(), "missing required field `title`");
    }

    #[test]
    fn test_invalid_enum_display_lists_allowed_values() {
        let issue = Issue::InvalidEnum {
            path: "trailing_slash".into(),
            value: "maybe".to_owned(),
            allowed: vec![
                "always".to_owned(),
                "never".to_owned(),
                "preserve".to_owned(),
            ],
        };

        assert_eq!(
            issue.to_string(),
            "invalid value `maybe` for `trailing_slash` (allowed: always, never, preserve)"
        );
    }

    #[test]
    fn test_duplicate_sibling_label_display_includes_path() {
        let issue = Issue::DuplicateSiblingLabel {
            sidebar: "docs".to_owned(),
            path: TreePath::from_segments(["Tutorials"]),
            label: "Intro".to_owned(),
        };

        assert_eq!(
            issue.to_string(),
            "duplicate sibling label `Intro` in sidebar `docs` at Tutorials"
        );
    }

    #[test]
    fn test_dangling_document_reference_display_at_root() {
        let issue = Issue::DanglingDocumentReference {
            sidebar: "guides".to_owned(),
            path: TreePath::new(),
            doc: "guides/missing".to_owned(),
        };

        assert_eq!(
            issue.to_string(),
            "sidebar `guides` references unknown document `guides/missing` at (root)"
        );
    }

    #[test]
    fn test_empty_category_warning_display() {
        let warning = Warning::EmptyCategory {
            sidebar: "docs".to_owned(),
            path: TreePath::new(),
            label: "Drafts".to_owned(),
        };

        assert_eq!(
            warning.to_string(),
            "empty category `Drafts` in sidebar `docs` at (root)"
        );
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = Issue::DanglingSidebarReference {
            label: "Guides".to_owned(),
            sidebar: "guides".to_owned(),
        };

        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(json["kind"], "dangling_sidebar_reference");
        assert_eq!(json["label"], "Guides");
        assert_eq!(json["sidebar"], "guides");
    }
}
