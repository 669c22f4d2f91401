//! Core data models for Treemark
//!
//! Defines the fundamental data structures used throughout Treemark:
//! - `ContentNode`: a node in a hierarchical content tree
//! - `SelectionSet`: the flat include/omit lists driving annotation
//! - `CheckboxType` and `AnnotatedNode`: the derived display state

use serde::{Deserialize, Serialize};

/// Minimal reference to an ancestor node.
///
/// A node's position in the tree is encoded as an ordered list of these,
/// from the root down to the immediate parent. Relationship queries are
/// containment checks over this list, so no shared tree object is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    /// Primary key of the referenced ancestor
    pub pk: String,
}

impl NodeRef {
    /// Create a reference from a primary key
    pub fn new(pk: impl Into<String>) -> Self {
        Self { pk: pk.into() }
    }
}

/// A node in a hierarchical content tree
///
/// Only `pk` is required to be unique. `path` lists the ancestors from the
/// root to the immediate parent; an empty path means a root-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Primary key, unique within the tree
    pub pk: String,

    /// Display title (breadcrumbs fall back to a placeholder when absent)
    #[serde(default)]
    pub title: Option<String>,

    /// Total resource count under/at this node
    pub total_resources: u64,

    /// Resources already present on the local device (<= total_resources)
    pub on_device_resources: u64,

    /// Ancestors from root to immediate parent
    #[serde(default)]
    pub path: Vec<NodeRef>,
}

impl ContentNode {
    /// Create a root-level node with the given resource counts
    pub fn new(pk: impl Into<String>, total_resources: u64, on_device_resources: u64) -> Self {
        Self {
            pk: pk.into(),
            title: None,
            total_resources,
            on_device_resources,
            path: Vec::new(),
        }
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the ancestor path from root to immediate parent
    pub fn with_path<I, S>(mut self, pks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = pks.into_iter().map(NodeRef::new).collect();
        self
    }

    /// Resources a transfer would actually move
    pub fn importable_resources(&self) -> u64 {
        self.total_resources.saturating_sub(self.on_device_resources)
    }

    /// Depth in the tree (0 = root-level)
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// The include/omit lists a user has built up while walking the tree
///
/// The two lists are unordered and membership is tested by `pk` equality.
/// A pk appearing in both lists is out-of-contract (see `manifest::validate`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    /// Nodes explicitly marked for transfer
    #[serde(default)]
    pub included: Vec<ContentNode>,

    /// Nodes explicitly excluded, typically beneath an included ancestor
    #[serde(default)]
    pub omitted: Vec<ContentNode>,
}

impl SelectionSet {
    /// Create a selection set from the two lists
    pub fn new(included: Vec<ContentNode>, omitted: Vec<ContentNode>) -> Self {
        Self { included, omitted }
    }

    /// True if neither list has any members
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.omitted.is_empty()
    }
}

/// Tri-state checkbox indicator for a tree row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckboxType {
    /// Fully selected
    Checked,
    /// Not selected
    Unchecked,
    /// Partially selected
    Indeterminate,
}

/// A node merged with its derived display annotations
///
/// Produced fresh on every `annotate` call; never persisted. The original
/// node is copied, not mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedNode {
    /// The annotated node's own fields
    #[serde(flatten)]
    pub node: ContentNode,

    /// Status message, already localized and formatted (may be empty)
    pub message: String,

    /// Whether the row's checkbox should be disabled
    pub disabled: bool,

    /// Checkbox display state
    pub checkbox_type: CheckboxType,
}
