//! Fuzz the annotation cascade end to end: any manifest that parses and
//! resolves must annotate every node without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;

use treemark::{SelectionAnnotator, SelectionManifest};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(manifest) = SelectionManifest::from_json(input) else {
        return;
    };
    // Out-of-contract manifests (on_device > total) are rejected here the
    // same way the CLI rejects them; the cascade only sees well-formed input.
    if !manifest.validate().is_empty() {
        return;
    }
    let Ok(selection) = manifest.selection_set() else {
        return;
    };

    let annotator = SelectionAnnotator::default();
    for node in &manifest.nodes {
        let _ = annotator.annotate(node, &selection);
    }
});
