//! Treemark - selection-state annotator for hierarchical content trees
//!
//! Treemark derives the display state of content-tree rows during a
//! transfer-selection flow: given a node plus flat include/omit lists, it
//! computes the tri-state checkbox, the disabled flag, and a formatted
//! status message ("12 of 20 resources selected"). The core is pure and
//! synchronous; the CLI around it reads selection manifests from JSON.

pub mod annotator;
pub mod breadcrumb;
pub mod error;
pub mod i18n;
pub mod manifest;
pub mod models;
pub mod ui;

// Re-exports for convenience
pub use annotator::{annotate, is_ancestor_of, is_descendant_of, SelectionAnnotator};
pub use breadcrumb::{breadcrumb_item, BreadcrumbItem, LinkResolver};
pub use error::{TreemarkError, TreemarkResult};
pub use i18n::{EnglishMessages, Message, MessageCatalog};
pub use manifest::{ManifestIssue, SelectionManifest};
pub use models::{AnnotatedNode, CheckboxType, ContentNode, NodeRef, SelectionSet};
