//! Test utilities for Folio crates.

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory that is cleaned up on drop.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Creates a temporary file with given content.
pub fn temp_file(content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("test_file");
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// Owned key/value pairs from string literals.
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Proptest strategies shared by the pagination tests.
pub mod strategies {
    use proptest::prelude::*;

    /// Parameter names that never collide with `page` or `perpage`.
    pub fn param_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,7}".prop_filter("reserved name", |s| s != "page" && s != "perpage")
    }

    /// Arbitrary printable values, including characters that need encoding.
    pub fn param_value() -> impl Strategy<Value = String> {
        "[ -~]{0,12}"
    }

    /// Unique-keyed parameter lists in insertion order.
    pub fn extra_params() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((param_name(), param_value()), 0..6).prop_map(|items| {
            let mut seen = std::collections::HashSet::new();
            items
                .into_iter()
                .filter(|(k, _)| seen.insert(k.clone()))
                .collect()
        })
    }

    /// Strings that are not plain positive integers.
    pub fn non_numeric() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("0".to_string()),
            Just("-3".to_string()),
            Just("2.5".to_string()),
            Just(" 4".to_string()),
            Just("1e3".to_string()),
            "[a-z]{1,6}",
        ]
    }
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(_) => {}
        }
    };
}
