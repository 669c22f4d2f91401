//! Selection manifest loading and validation
//!
//! The CLI's input format: one JSON document holding the visible tree nodes
//! plus the include/omit lists as pk references. Resolution turns the pk
//! lists into a `SelectionSet` of owned nodes; validation surfaces the
//! out-of-contract states the annotation core leaves undefined.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{TreemarkError, TreemarkResult};
use crate::models::{ContentNode, SelectionSet};

/// A content tree plus its selection lists, as loaded from disk
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionManifest {
    /// Every node the tree view knows about
    pub nodes: Vec<ContentNode>,

    /// Pks of nodes explicitly marked for transfer
    #[serde(default)]
    pub included: Vec<String>,

    /// Pks of nodes explicitly excluded from transfer
    #[serde(default)]
    pub omitted: Vec<String>,
}

/// One validation finding for a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestIssue {
    /// `on_device_resources` exceeds `total_resources`
    ResourceCountExceedsTotal {
        pk: String,
        on_device: u64,
        total: u64,
    },
    /// Two nodes share a pk
    DuplicateNode { pk: String },
    /// A pk appears in both the included and omitted lists
    IncludedAndOmitted { pk: String },
    /// A selection list references a pk with no node
    UnknownSelectionRef { pk: String, list: &'static str },
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestIssue::ResourceCountExceedsTotal {
                pk,
                on_device,
                total,
            } => write!(
                f,
                "node '{}' has {} resources on device but only {} in total",
                pk, on_device, total
            ),
            ManifestIssue::DuplicateNode { pk } => {
                write!(f, "node pk '{}' appears more than once", pk)
            }
            ManifestIssue::IncludedAndOmitted { pk } => {
                write!(f, "pk '{}' is both included and omitted", pk)
            }
            ManifestIssue::UnknownSelectionRef { pk, list } => {
                write!(f, "{} list references unknown node '{}'", list, pk)
            }
        }
    }
}

impl SelectionManifest {
    /// Parse a manifest from a JSON string
    pub fn from_json(input: &str) -> TreemarkResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> TreemarkResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Look up a node by pk
    pub fn node(&self, pk: &str) -> Option<&ContentNode> {
        self.nodes.iter().find(|node| node.pk == pk)
    }

    /// Resolve the pk lists into an owned `SelectionSet`
    ///
    /// Fails on the first pk with no matching node.
    pub fn selection_set(&self) -> TreemarkResult<SelectionSet> {
        let included = self.resolve_list(&self.included, "included")?;
        let omitted = self.resolve_list(&self.omitted, "omitted")?;
        Ok(SelectionSet::new(included, omitted))
    }

    fn resolve_list(&self, pks: &[String], list: &'static str) -> TreemarkResult<Vec<ContentNode>> {
        pks.iter()
            .map(|pk| {
                self.node(pk)
                    .cloned()
                    .ok_or_else(|| TreemarkError::UnknownSelectionRef {
                        pk: pk.clone(),
                        list,
                    })
            })
            .collect()
    }

    /// Check the structural invariants the annotator relies on
    ///
    /// Returns every finding rather than stopping at the first.
    pub fn validate(&self) -> Vec<ManifestIssue> {
        let mut issues = Vec::new();

        for (i, node) in self.nodes.iter().enumerate() {
            if node.on_device_resources > node.total_resources {
                issues.push(ManifestIssue::ResourceCountExceedsTotal {
                    pk: node.pk.clone(),
                    on_device: node.on_device_resources,
                    total: node.total_resources,
                });
            }

            if self.nodes[..i].iter().any(|earlier| earlier.pk == node.pk) {
                issues.push(ManifestIssue::DuplicateNode {
                    pk: node.pk.clone(),
                });
            }
        }

        for pk in &self.included {
            if self.omitted.contains(pk) {
                issues.push(ManifestIssue::IncludedAndOmitted { pk: pk.clone() });
            }
            if self.node(pk).is_none() {
                issues.push(ManifestIssue::UnknownSelectionRef {
                    pk: pk.clone(),
                    list: "included",
                });
            }
        }

        for pk in &self.omitted {
            if self.node(pk).is_none() {
                issues.push(ManifestIssue::UnknownSelectionRef {
                    pk: pk.clone(),
                    list: "omitted",
                });
            }
        }

        issues
    }
}
