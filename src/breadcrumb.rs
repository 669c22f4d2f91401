//! Breadcrumb display items for content-tree navigation
//!
//! Formatting glue around the annotation core: a node becomes a
//! `{text, link}` item, with the link descriptor produced by an injected
//! resolver (routing is owned by the embedding application, not this crate).

use crate::i18n::{Message, MessageCatalog};
use crate::models::ContentNode;

/// Capability to build an opaque link descriptor for a node
pub trait LinkResolver {
    /// Link descriptor used by the embedding navigation layer
    fn topic_link(&self, node: &ContentNode) -> serde_json::Value;
}

/// One entry of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BreadcrumbItem {
    /// Display text (node title, or the catalog's no-title placeholder)
    pub text: String,
    /// Opaque link descriptor
    pub link: serde_json::Value,
}

/// Convert a node into a breadcrumb item
pub fn breadcrumb_item(
    node: &ContentNode,
    catalog: &dyn MessageCatalog,
    links: &dyn LinkResolver,
) -> BreadcrumbItem {
    let text = match &node.title {
        Some(title) => title.clone(),
        None => catalog.render(&Message::NoTitle),
    };

    BreadcrumbItem {
        text,
        link: links.topic_link(node),
    }
}
