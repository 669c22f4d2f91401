//! Message catalog for user-facing annotation strings
//!
//! The annotation core never hardcodes display text; it asks an injected
//! `MessageCatalog` to render one of a fixed set of `Message` templates.
//! `EnglishMessages` is the default catalog and handles thousands grouping
//! and pluralization; tests can substitute a deterministic stub.

use num_format::{Locale, ToFormattedString};

/// A renderable message template with its named parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Every resource under the node is already present locally
    AlreadyOnYourDevice,
    /// Some (but not all) resources are present locally
    FractionOfResourcesOnDevice { on_device: u64, total: u64 },
    /// The node's full resource count is selected
    ResourcesSelected { total: u64 },
    /// Part of the node's resource count is selected
    FractionOfResourcesSelected { selected: u64, total: u64 },
    /// Placeholder for nodes without a title
    NoTitle,
}

/// Capability to render a `Message` into display text
///
/// Implementations own locale concerns (number grouping, plural rules).
pub trait MessageCatalog {
    /// Render a message template with its parameters
    fn render(&self, message: &Message) -> String;
}

/// Default English catalog
///
/// Numbers are grouped with `,` separators ("2,000") and "resource" is
/// pluralized when the keyed count differs from exactly 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

impl EnglishMessages {
    fn group(n: u64) -> String {
        n.to_formatted_string(&Locale::en)
    }

    fn resources(count: u64) -> &'static str {
        if count == 1 {
            "resource"
        } else {
            "resources"
        }
    }
}

impl MessageCatalog for EnglishMessages {
    fn render(&self, message: &Message) -> String {
        match *message {
            Message::AlreadyOnYourDevice => "Already on your device".to_string(),
            Message::FractionOfResourcesOnDevice { on_device, total } => format!(
                "{} of {} resources on your device",
                Self::group(on_device),
                Self::group(total)
            ),
            Message::ResourcesSelected { total } => format!(
                "{} {} selected",
                Self::group(total),
                Self::resources(total)
            ),
            Message::FractionOfResourcesSelected { selected, total } => format!(
                "{} of {} {} selected",
                Self::group(selected),
                Self::group(total),
                Self::resources(total)
            ),
            Message::NoTitle => "No title".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_on_your_device() {
        let rendered = EnglishMessages.render(&Message::AlreadyOnYourDevice);
        assert_eq!(rendered, "Already on your device");
    }

    #[test]
    fn test_grouping_uses_thousands_separators() {
        let rendered = EnglishMessages.render(&Message::FractionOfResourcesOnDevice {
            on_device: 10,
            total: 2000,
        });
        assert_eq!(rendered, "10 of 2,000 resources on your device");
    }

    #[test]
    fn test_resources_selected_pluralizes_on_total() {
        assert_eq!(
            EnglishMessages.render(&Message::ResourcesSelected { total: 1 }),
            "1 resource selected"
        );
        assert_eq!(
            EnglishMessages.render(&Message::ResourcesSelected { total: 100 }),
            "100 resources selected"
        );
    }

    #[test]
    fn test_fraction_selected_pluralizes_on_total_not_selected() {
        // The plural is keyed off the total, even when selected == 1
        assert_eq!(
            EnglishMessages.render(&Message::FractionOfResourcesSelected {
                selected: 1,
                total: 20
            }),
            "1 of 20 resources selected"
        );
    }

    #[test]
    fn test_large_counts_group_both_numbers() {
        assert_eq!(
            EnglishMessages.render(&Message::FractionOfResourcesSelected {
                selected: 1200,
                total: 1000000
            }),
            "1,200 of 1,000,000 resources selected"
        );
    }

    #[test]
    fn test_no_title_placeholder() {
        assert_eq!(EnglishMessages.render(&Message::NoTitle), "No title");
    }
}
