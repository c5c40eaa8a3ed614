//! The validated sidebar model and its builder.

use serde::Serialize;

use portico_diag::{Diagnostics, FieldPath, Issue, TreePath, Warning};

use crate::raw::{RawNode, RawSidebarNode, RawSidebars};

/// A validated sidebar node.
///
/// Closed sum type. Nodes own their children, so a cycle cannot be
/// represented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarNode {
    /// Weak reference to a document in the corpus.
    Doc {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// A labeled grouping of nodes, nested to any depth.
    Category {
        label: String,
        collapsible: bool,
        collapsed: bool,
        items: Vec<SidebarNode>,
    },
}

/// One named sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub id: String,
    /// Root-level nodes in declaration order.
    pub items: Vec<SidebarNode>,
}

/// An ordered collection of named sidebars with unique IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebars {
    sidebars: Vec<Sidebar>,
}

impl Sidebars {
    /// Build validated trees from a raw sidebars file.
    ///
    /// Collects every finding instead of stopping at the first and
    /// returns `Some` only when no errors were recorded. Warnings alone
    /// do not fail the build.
    pub fn from_raw(raw: &RawSidebars, diag: &mut Diagnostics) -> Option<Self> {
        Self::from_pairs(
            raw.entries()
                .iter()
                .map(|(id, nodes)| (id.as_str(), nodes.as_slice())),
            diag,
        )
    }

    /// Build validated trees from `(id, nodes)` pairs.
    ///
    /// A repeated ID is reported as [`Issue::DuplicateSidebarId`] and the
    /// later occurrence is dropped without descending into its nodes.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a [RawSidebarNode])>,
        diag: &mut Diagnostics,
    ) -> Option<Self> {
        let before = diag.len();
        let mut sidebars: Vec<Sidebar> = Vec::new();

        for (id, nodes) in pairs {
            if sidebars.iter().any(|s| s.id == id) {
                diag.error(Issue::DuplicateSidebarId { id: id.to_owned() });
                continue;
            }
            let mut trail = TreePath::new();
            let items = build_level(id, nodes, &mut trail, &FieldPath::new(id), diag);
            sidebars.push(Sidebar {
                id: id.to_owned(),
                items,
            });
        }

        if diag.len() > before {
            return None;
        }
        Some(Self { sidebars })
    }

    /// Sidebars in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Sidebar> {
        self.sidebars.iter()
    }

    /// Look up a sidebar by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.id == id)
    }

    /// Whether `id` is a declared sidebar.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a Sidebar;
    type IntoIter = std::slice::Iter<'a, Sidebar>;

    fn into_iter(self) -> Self::IntoIter {
        self.sidebars.iter()
    }
}

/// Build one sibling level, preserving declaration order verbatim.
///
/// `trail` names the enclosing categories and `pos` the positional path
/// of the containing list, for reporting.
fn build_level(
    sidebar: &str,
    nodes: &[RawSidebarNode],
    trail: &mut TreePath,
    pos: &FieldPath,
    diag: &mut Diagnostics,
) -> Vec<SidebarNode> {
    let mut declared: Vec<&str> = Vec::new();
    let mut built = Vec::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        let node_pos = pos.index(i);

        if let Some(label) = declared_label(node) {
            if declared.contains(&label) {
                diag.error(Issue::DuplicateSiblingLabel {
                    sidebar: sidebar.to_owned(),
                    path: trail.clone(),
                    label: label.to_owned(),
                });
            } else {
                declared.push(label);
            }
        }

        match node {
            RawSidebarNode::Doc(id) => {
                if id.trim().is_empty() {
                    diag.error(Issue::InvalidValue {
                        path: node_pos,
                        reason: "doc reference must not be empty".to_owned(),
                    });
                } else {
                    built.push(SidebarNode::Doc {
                        id: id.clone(),
                        label: None,
                    });
                }
            }
            RawSidebarNode::Node(table) => {
                if let Some(node) = build_node(sidebar, table, trail, &node_pos, diag) {
                    built.push(node);
                }
            }
        }
    }

    built
}

/// The label a node declares at its level, when it declares one.
///
/// Bare-string docs and unlabeled doc tables do not participate in
/// sibling-label uniqueness.
fn declared_label(node: &RawSidebarNode) -> Option<&str> {
    match node {
        RawSidebarNode::Doc(_) => None,
        RawSidebarNode::Node(table) => table.label.as_deref().filter(|l| !l.trim().is_empty()),
    }
}

fn build_node(
    sidebar: &str,
    table: &RawNode,
    trail: &mut TreePath,
    pos: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<SidebarNode> {
    match table.node_type.as_deref() {
        Some("doc") => {
            let id = require(table.id.as_deref(), &pos.child("id"), diag)?;
            Some(SidebarNode::Doc {
                id: id.to_owned(),
                label: table
                    .label
                    .as_deref()
                    .filter(|l| !l.trim().is_empty())
                    .map(str::to_owned),
            })
        }
        Some("category") => build_category(sidebar, table, trail, pos, diag),
        Some(other) => {
            diag.error(Issue::UnknownNodeType {
                sidebar: sidebar.to_owned(),
                path: trail.clone(),
                node_type: other.to_owned(),
            });
            None
        }
        None => {
            diag.error(Issue::MissingField {
                path: pos.child("type"),
            });
            None
        }
    }
}

fn build_category(
    sidebar: &str,
    table: &RawNode,
    trail: &mut TreePath,
    pos: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<SidebarNode> {
    let label = require(table.label.as_deref(), &pos.child("label"), diag);
    let collapsible = table.collapsible.unwrap_or(true);

    // An explicit `collapsed` on a non-collapsible category is a
    // contradiction in the input; the built category stays expanded.
    if !collapsible
        && table.collapsed == Some(true)
        && let Some(label) = label
    {
        diag.warn(Warning::CollapsedNotCollapsible {
            sidebar: sidebar.to_owned(),
            path: trail.clone(),
            label: label.to_owned(),
        });
    }

    let Some(items) = &table.items else {
        diag.error(Issue::MissingField {
            path: pos.child("items"),
        });
        return None;
    };
    if items.is_empty()
        && let Some(label) = label
    {
        diag.warn(Warning::EmptyCategory {
            sidebar: sidebar.to_owned(),
            path: trail.clone(),
            label: label.to_owned(),
        });
    }

    // Descend even when the label is missing so nested findings still
    // surface in the same run.
    let children = match label {
        Some(label) => {
            trail.push(label);
            let children = build_level(sidebar, items, trail, &pos.child("items"), diag);
            trail.pop();
            children
        }
        None => build_level(sidebar, items, trail, &pos.child("items"), diag),
    };

    Some(SidebarNode::Category {
        label: label?.to_owned(),
        collapsible,
        collapsed: collapsible && table.collapsed.unwrap_or(true),
        items: children,
    })
}

/// Record a `MissingField` when `value` is absent or blank.
fn require<'a>(
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
