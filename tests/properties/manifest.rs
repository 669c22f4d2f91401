//! Property tests for manifest parsing and validation.

use proptest::prelude::*;

use treemark::SelectionManifest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `from_json` never panics on arbitrary small input.
    #[test]
    fn property_from_json_never_panics(input in "(?s).{0,512}") {
        let _ = SelectionManifest::from_json(&input);
    }

    /// PROPERTY: a manifest that parses can always be validated and
    /// validation never panics.
    #[test]
    fn property_validate_is_total(
        pks in proptest::collection::vec("[a-z]{1,4}", 0..8),
        totals in proptest::collection::vec(0u64..100, 0..8),
    ) {
        let nodes: Vec<String> = pks
            .iter()
            .zip(totals.iter().chain(std::iter::repeat(&0)))
            .map(|(pk, total)| {
                format!(
                    r#"{{"pk": "{}", "total_resources": {}, "on_device_resources": 0}}"#,
                    pk, total
                )
            })
            .collect();
        let json = format!(
            r#"{{"nodes": [{}], "included": [], "omitted": []}}"#,
            nodes.join(",")
        );

        let manifest = SelectionManifest::from_json(&json).unwrap();
        let _ = manifest.validate();
    }
}
