//! Rendering of annotated tree rows
//!
//! Each row shows the checkbox icon, the node title indented by depth, and
//! the annotation message aligned to a fixed column. Functions take
//! capability flags so output stays deterministic in tests.

use unicode_width::UnicodeWidthStr;

use crate::i18n::{Message, MessageCatalog};
use crate::models::{AnnotatedNode, CheckboxType};
use crate::ui::text::ColoredText;
use crate::ui::theme::{icons, icons_ascii};

/// Column where annotation messages start
const MESSAGE_COLUMN: usize = 44;

fn checkbox_icon(checkbox_type: CheckboxType, supports_unicode: bool) -> &'static str {
    match (checkbox_type, supports_unicode) {
        (CheckboxType::Checked, true) => icons::CHECKED,
        (CheckboxType::Checked, false) => icons_ascii::CHECKED,
        (CheckboxType::Unchecked, true) => icons::UNCHECKED,
        (CheckboxType::Unchecked, false) => icons_ascii::UNCHECKED,
        (CheckboxType::Indeterminate, true) => icons::INDETERMINATE,
        (CheckboxType::Indeterminate, false) => icons_ascii::INDETERMINATE,
    }
}

/// Render one annotated node as a display line
pub fn render_annotated_node(
    annotated: &AnnotatedNode,
    catalog: &dyn MessageCatalog,
    supports_unicode: bool,
    supports_color: bool,
) -> String {
    let icon = checkbox_icon(annotated.checkbox_type, supports_unicode);
    let indent = "  ".repeat(annotated.node.depth());
    let title = match &annotated.node.title {
        Some(title) => title.clone(),
        None => catalog.render(&Message::NoTitle),
    };

    let head = format!("{}{} {}", indent, icon, title);

    let line = if annotated.message.is_empty() {
        head
    } else {
        let pad = MESSAGE_COLUMN.saturating_sub(head.width()).max(2);
        format!("{}{}{}", head, " ".repeat(pad), annotated.message)
    };

    if annotated.disabled {
        ColoredText::dim(line).render(supports_color)
    } else {
        line
    }
}

/// Render the trailing summary for a batch of annotated nodes
pub fn render_summary(annotated: &[AnnotatedNode], supports_unicode: bool) -> String {
    let checked = annotated
        .iter()
        .filter(|a| a.checkbox_type == CheckboxType::Checked)
        .count();
    let partial = annotated
        .iter()
        .filter(|a| a.checkbox_type == CheckboxType::Indeterminate)
        .count();

    let (checked_icon, partial_icon, unchecked_icon) = if supports_unicode {
        (icons::CHECKED, icons::INDETERMINATE, icons::UNCHECKED)
    } else {
        (
            icons_ascii::CHECKED,
            icons_ascii::INDETERMINATE,
            icons_ascii::UNCHECKED,
        )
    };

    format!(
        "Selected: {} checked, {} partial of {} nodes\n\n{} = selected    {} = partial    {} = not selected",
        checked,
        partial,
        annotated.len(),
        checked_icon,
        partial_icon,
        unchecked_icon
    )
}
