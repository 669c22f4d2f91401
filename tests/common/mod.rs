//! Common test utilities for Treemark CLI tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A small library tree: one root, two topics, one leaf under topic-1.
pub const SAMPLE_MANIFEST: &str = r#"{
    "nodes": [
        {"pk": "root", "title": "Library", "total_resources": 10, "on_device_resources": 0},
        {"pk": "topic-1", "title": "Maths", "total_resources": 6, "on_device_resources": 0,
         "path": [{"pk": "root"}]},
        {"pk": "leaf-1", "title": "Fractions", "total_resources": 2, "on_device_resources": 0,
         "path": [{"pk": "root"}, {"pk": "topic-1"}]},
        {"pk": "topic-2", "title": "Science", "total_resources": 4, "on_device_resources": 4,
         "path": [{"pk": "root"}]}
    ],
    "included": ["topic-1"],
    "omitted": []
}"#;

/// Manifest violating the on-device <= total invariant.
pub const BROKEN_MANIFEST: &str = r#"{
    "nodes": [
        {"pk": "root", "title": "Library", "total_resources": 3, "on_device_resources": 7}
    ],
    "included": ["root"],
    "omitted": ["root"]
}"#;

/// Write a manifest into `dir` and return its path.
pub fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("manifest.json");
    fs::write(&path, content).expect("write manifest fixture");
    path
}
