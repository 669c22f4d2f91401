//! Property tests for the selection annotator.

use proptest::prelude::*;

use treemark::{CheckboxType, ContentNode, SelectionAnnotator, SelectionSet};

/// Membership of one node in the selection lists.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pick {
    None,
    Included,
    Omitted,
}

fn arb_pick() -> impl Strategy<Value = Pick> {
    prop_oneof![
        3 => Just(Pick::None),
        1 => Just(Pick::Included),
        1 => Just(Pick::Omitted),
    ]
}

fn arb_counts() -> impl Strategy<Value = (u64, u64)> {
    (0u64..400).prop_flat_map(|total| (Just(total), 0..=total))
}

/// A fixed three-level topology (1 root, 3 topics, 6 leaves) with random
/// resource counts and random selection membership per node.
fn arb_family() -> impl Strategy<Value = (Vec<ContentNode>, SelectionSet)> {
    let counts = proptest::collection::vec(arb_counts(), 10);
    let picks = proptest::collection::vec(arb_pick(), 10);

    (counts, picks).prop_map(|(counts, picks)| {
        let mut nodes = Vec::new();
        nodes.push(ContentNode::new("r", counts[0].0, counts[0].1));
        for i in 0..3 {
            let (total, on_device) = counts[1 + i];
            nodes.push(ContentNode::new(format!("c{}", i), total, on_device).with_path(["r"]));
        }
        for i in 0..3 {
            for j in 0..2 {
                let (total, on_device) = counts[4 + i * 2 + j];
                nodes.push(
                    ContentNode::new(format!("g{}{}", i, j), total, on_device)
                        .with_path(["r".to_string(), format!("c{}", i)]),
                );
            }
        }

        let mut included = Vec::new();
        let mut omitted = Vec::new();
        for (node, pick) in nodes.iter().zip(&picks) {
            match pick {
                Pick::None => {}
                Pick::Included => included.push(node.clone()),
                Pick::Omitted => omitted.push(node.clone()),
            }
        }

        (nodes, SelectionSet::new(included, omitted))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: annotation is total and deterministic for well-formed input.
    #[test]
    fn property_annotate_is_deterministic((nodes, selection) in arb_family()) {
        let annotator = SelectionAnnotator::default();

        for node in &nodes {
            let first = annotator.annotate(node, &selection);
            let second = annotator.annotate(node, &selection);
            prop_assert_eq!(first, second);
        }
    }

    /// PROPERTY: a fully-on-device node is always checked and disabled,
    /// whatever the selection lists say.
    #[test]
    fn property_fully_on_device_wins((nodes, selection) in arb_family()) {
        let annotator = SelectionAnnotator::default();

        for node in nodes.iter().filter(|n| n.on_device_resources == n.total_resources) {
            let annotated = annotator.annotate(node, &selection);
            prop_assert_eq!(annotated.checkbox_type, CheckboxType::Checked);
            prop_assert!(annotated.disabled);
            prop_assert_eq!(annotated.message.as_str(), "Already on your device");
        }
    }

    /// PROPERTY: only the fully-on-device rule may disable a row.
    #[test]
    fn property_disabled_implies_fully_on_device((nodes, selection) in arb_family()) {
        let annotator = SelectionAnnotator::default();

        for node in &nodes {
            let annotated = annotator.annotate(node, &selection);
            if annotated.disabled {
                prop_assert_eq!(node.on_device_resources, node.total_resources);
            }
        }
    }

    /// PROPERTY: the annotation never mutates the node it copies.
    #[test]
    fn property_annotate_copies_node((nodes, selection) in arb_family()) {
        let annotator = SelectionAnnotator::default();

        for node in &nodes {
            let annotated = annotator.annotate(node, &selection);
            prop_assert_eq!(&annotated.node, node);
        }
    }

    /// PROPERTY: with an included ancestor and no omissions at all, every
    /// not-fully-on-device descendant reads as checked.
    #[test]
    fn property_ancestor_inclusion_selects_descendants(
        (nodes, _) in arb_family()
    ) {
        let annotator = SelectionAnnotator::default();
        let root = nodes[0].clone();
        let selection = SelectionSet::new(vec![root], vec![]);

        for node in nodes.iter().skip(1) {
            let annotated = annotator.annotate(node, &selection);
            if node.on_device_resources < node.total_resources {
                prop_assert_eq!(annotated.checkbox_type, CheckboxType::Checked);
                prop_assert!(!annotated.disabled);
            }
        }
    }

    /// PROPERTY: with empty selection lists and nothing on device, the
    /// annotation is the quiet unchecked default.
    #[test]
    fn property_empty_selection_is_unchecked(total in 1u64..10_000) {
        let node = ContentNode::new("n", total, 0);
        let annotated = treemark::annotate(&node, &SelectionSet::default());

        prop_assert_eq!(annotated.checkbox_type, CheckboxType::Unchecked);
        prop_assert!(!annotated.disabled);
        prop_assert!(annotated.message.is_empty());
    }
}
