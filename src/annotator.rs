//! Selection annotation for content-tree rows
//!
//! Pure domain logic: given one node and the flat include/omit lists, derive
//! the tri-state checkbox, disabled flag, and status message for that row.
//! No I/O, no shared state; each call is independent and deterministic.
//!
//! The decision cascade is strict first-match-wins:
//!
//! 1. everything already on device  -> checked + disabled
//! 2. included (directly or via an ancestor) and not omitted -> checked,
//!    unchecked, or indeterminate depending on omitted descendants
//! 3. not included, but fully-included descendants exist -> checked or
//!    indeterminate from their importable totals
//! 4. some resources on device -> unchecked with an on-device message
//! 5. nothing selected, nothing on device -> unchecked, no message

use crate::i18n::{EnglishMessages, Message, MessageCatalog};
use crate::models::{AnnotatedNode, CheckboxType, ContentNode, SelectionSet};

/// True iff `a` is an ancestor of `b`
///
/// Tree structure is implicit: `b` carries its ancestor pks in `path`, so
/// this is a containment check, O(depth of `b`).
pub fn is_ancestor_of(a: &ContentNode, b: &ContentNode) -> bool {
    b.path.iter().any(|step| step.pk == a.pk)
}

/// True iff `a` is a descendant of `b`
pub fn is_descendant_of(a: &ContentNode, b: &ContentNode) -> bool {
    is_ancestor_of(b, a)
}

/// Sum of `total_resources` over a set of nodes (empty sums to 0)
pub fn sum_total_resources(nodes: &[&ContentNode]) -> u64 {
    nodes.iter().map(|n| n.total_resources).sum()
}

/// Sum of `on_device_resources` over a set of nodes (empty sums to 0)
pub fn sum_on_device_resources(nodes: &[&ContentNode]) -> u64 {
    nodes.iter().map(|n| n.on_device_resources).sum()
}

fn sum_importable_resources(nodes: &[&ContentNode]) -> u64 {
    sum_total_resources(nodes).saturating_sub(sum_on_device_resources(nodes))
}

/// Derives display annotations for tree rows
///
/// Holds only the injected message catalog; all annotation state lives in
/// the arguments of [`annotate`](Self::annotate).
pub struct SelectionAnnotator<'c> {
    catalog: &'c dyn MessageCatalog,
}

impl Default for SelectionAnnotator<'static> {
    fn default() -> Self {
        Self::new(&EnglishMessages)
    }
}

impl<'c> SelectionAnnotator<'c> {
    /// Create an annotator rendering messages through `catalog`
    pub fn new(catalog: &'c dyn MessageCatalog) -> Self {
        Self { catalog }
    }

    /// Annotate one node against the selection lists
    ///
    /// Returns a fresh [`AnnotatedNode`] carrying a copy of `node`; the
    /// inputs are never mutated. Total for well-formed input. Inputs with
    /// `on_device_resources > total_resources` are out-of-contract; debug
    /// builds assert, release builds saturate.
    pub fn annotate(&self, node: &ContentNode, selection: &SelectionSet) -> AnnotatedNode {
        let total = node.total_resources;
        let on_device = node.on_device_resources;
        debug_assert!(
            on_device <= total,
            "on_device_resources > total_resources for node '{}'",
            node.pk
        );

        // Completely on device -> checked and disabled, regardless of any
        // inclusion or omission signal.
        if on_device == total {
            return self.annotated(
                node,
                Message::AlreadyOnYourDevice,
                true,
                CheckboxType::Checked,
            );
        }

        let is_included = selection.included.iter().any(|n| n.pk == node.pk);
        let is_omitted = selection.omitted.iter().any(|n| n.pk == node.pk);
        let ancestor_included = selection.included.iter().any(|n| is_ancestor_of(n, node));
        let ancestor_omitted = selection.omitted.iter().any(|n| is_ancestor_of(n, node));

        let importable = node.importable_resources();

        if !(is_omitted || ancestor_omitted) && (is_included || ancestor_included) {
            let omitted_descendants: Vec<&ContentNode> = selection
                .omitted
                .iter()
                .filter(|omitted| is_descendant_of(omitted, node))
                .collect();

            if !omitted_descendants.is_empty() {
                // Every remaining importable resource is omitted -> unchecked
                if sum_importable_resources(&omitted_descendants) == importable {
                    return self.unchecked_without_message(node);
                }

                // Partial omission -> indeterminate. The selected count
                // subtracts the omitted subtrees' raw totals, on-device
                // resources included (unlike the full-omission test above).
                let selected = total.saturating_sub(sum_total_resources(&omitted_descendants));
                return self.annotated(
                    node,
                    Message::FractionOfResourcesSelected { selected, total },
                    false,
                    CheckboxType::Indeterminate,
                );
            }

            // Completely selected -> checked
            return self.annotated(
                node,
                Message::ResourcesSelected { total },
                false,
                CheckboxType::Checked,
            );
        }

        // Not selected itself: look for descendants in the include list that
        // are not themselves punctured by a deeper omission.
        let fully_included_descendants: Vec<&ContentNode> = selection
            .included
            .iter()
            .filter(|included| is_descendant_of(included, node))
            .filter(|included| {
                !selection
                    .omitted
                    .iter()
                    .any(|omitted| is_descendant_of(omitted, included))
            })
            .collect();

        if !fully_included_descendants.is_empty() {
            let included_importable = sum_importable_resources(&fully_included_descendants);

            // Descendants cover the node's whole importable count -> treated
            // as completely selected, with the full total in the message.
            if included_importable == importable {
                return self.annotated(
                    node,
                    Message::ResourcesSelected { total },
                    false,
                    CheckboxType::Checked,
                );
            }

            return self.annotated(
                node,
                Message::FractionOfResourcesSelected {
                    selected: included_importable,
                    total,
                },
                false,
                CheckboxType::Indeterminate,
            );
        }

        // Some (but not all) resources on device -> unchecked with message.
        // Fully-on-device nodes were handled at the top.
        if on_device > 0 {
            return self.annotated(
                node,
                Message::FractionOfResourcesOnDevice { on_device, total },
                false,
                CheckboxType::Unchecked,
            );
        }

        // Nothing selected, nothing on device -> unchecked
        self.unchecked_without_message(node)
    }

    /// Annotate a batch of nodes, preserving their order
    pub fn annotate_all(
        &self,
        nodes: &[ContentNode],
        selection: &SelectionSet,
    ) -> Vec<AnnotatedNode> {
        nodes
            .iter()
            .map(|node| self.annotate(node, selection))
            .collect()
    }

    fn annotated(
        &self,
        node: &ContentNode,
        message: Message,
        disabled: bool,
        checkbox_type: CheckboxType,
    ) -> AnnotatedNode {
        AnnotatedNode {
            node: node.clone(),
            message: self.catalog.render(&message),
            disabled,
            checkbox_type,
        }
    }

    fn unchecked_without_message(&self, node: &ContentNode) -> AnnotatedNode {
        AnnotatedNode {
            node: node.clone(),
            message: String::new(),
            disabled: false,
            checkbox_type: CheckboxType::Unchecked,
        }
    }
}

/// Annotate one node with the default English catalog
pub fn annotate(node: &ContentNode, selection: &SelectionSet) -> AnnotatedNode {
    SelectionAnnotator::default().annotate(node, selection)
}
