//! Fuzz manifest parsing: arbitrary bytes must never panic the parser.

#![no_main]

use libfuzzer_sys::fuzz_target;

use treemark::SelectionManifest;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = SelectionManifest::from_json(input);
    }
});
