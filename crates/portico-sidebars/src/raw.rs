//! Raw sidebar shapes as they deserialize from a sidebars file.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// A raw sidebars file: sidebar IDs mapped to their node lists.
///
/// Entries keep their declaration order. A repeated ID is kept as a
/// second entry rather than silently overwriting the first, so the
/// builder can report it.
#[derive(Clone, Debug, Default)]
pub struct RawSidebars {
    entries: Vec<(String, Vec<RawSidebarNode>)>,
}

impl RawSidebars {
    /// Assemble from `(id, nodes)` entries, keeping the given order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<RawSidebarNode>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The `(id, nodes)` entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Vec<RawSidebarNode>)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for RawSidebars {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SidebarsVisitor;

        impl<'de> Visitor<'de> for SidebarsVisitor {
            type Value = RawSidebars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of sidebar IDs to node lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<RawSidebarNode>>()? {
                    entries.push(entry);
                }
                Ok(RawSidebars { entries })
            }
        }

        deserializer.deserialize_map(SidebarsVisitor)
    }
}

/// One raw node: either the bare-string doc shorthand or an explicit
/// table.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSidebarNode {
    /// Shorthand: a bare document ID.
    Doc(String),
    /// Explicit node table.
    Node(RawNode),
}

/// An explicit node table before validation. Every field is optional;
/// the builder decides what is required for each `type`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub id: Option<String>,
    pub label: Option<String>,
    pub items: Option<Vec<RawSidebarNode>>,
    pub collapsed: Option<bool>,
    pub collapsible: Option<bool>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_entries_keep_declaration_order() {
        let raw: RawSidebars = serde_json::from_str(
            r#"{ "guides": [], "api": [], "reference": [] }"#,
        )
        .unwrap();

        let ids: Vec<_> = raw.entries().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["guides", "api", "reference"]);
    }

    #[test]
    fn test_duplicate_ids_survive_parsing() {
        let raw: RawSidebars =
            serde_json::from_str(r#"{ "docs": ["a"], "docs": ["b"] }"#).unwrap();

        assert_eq!(raw.entries().len(), 2);
        assert_eq!(raw.entries()[0].0, "docs");
        assert_eq!(raw.entries()[1].0, "docs");
    }

    #[test]
    fn test_bare_string_parses_as_doc_shorthand() {
        let raw: RawSidebars =
            serde_json::from_str(r#"{ "guides": ["guides/intro"] }"#).unwrap();

        let (_, nodes) = &raw.entries()[0];
        assert!(matches!(&nodes[0], RawSidebarNode::Doc(id) if id == "guides/intro"));
    }

    #[test]
    fn test_table_parses_with_nested_items() {
        let raw: RawSidebars = serde_json::from_str(
            r#"{
                "guides": [
                    {
                        "type": "category",
                        "label": "Usage",
                        "collapsed": false,
                        "items": ["guides/cli", { "type": "doc", "id": "guides/api" }]
                    }
                ]
            }"#,
        )
        .unwrap();

        let (_, nodes) = &raw.entries()[0];
        let RawSidebarNode::Node(table) = &nodes[0] else {
            panic!("expected a table node");
        };
        assert_eq!(table.node_type.as_deref(), Some("category"));
        assert_eq!(table.label.as_deref(), Some("Usage"));
        assert_eq!(table.collapsed, Some(false));
        assert_eq!(table.items.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw: RawSidebars = serde_json::from_str(
            r#"{ "guides": [{ "type": "doc", "id": "guides/intro", "customProps": { "badge": true } }] }"#,
        )
        .unwrap();

        let (_, nodes) = &raw.entries()[0];
        assert!(matches!(&nodes[0], RawSidebarNode::Node(_)));
    }
}
