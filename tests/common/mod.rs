//! Shared test utilities for the DXF writer integration tests.
//!
//! Fixture path resolution, fixture loading and helpers for picking
//! sections and code/value pairs out of an encoded token sequence.

#![allow(dead_code)]

pub mod builders;

use dxf_json_writer::Document;
use std::path::PathBuf;

// ===========================================================================
// Fixtures
// ===========================================================================

/// Resolve path to a file in `tests/fixtures/`.
pub fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Load a fixture document, panicking with the file name on failure.
pub fn load_fixture(filename: &str) -> Document {
    let path = fixture_path(filename);
    Document::from_file(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

// ===========================================================================
// Token helpers
// ===========================================================================

/// Tokens of one section, from its SECTION marker through ENDSEC.
pub fn section<'a>(tokens: &'a [String], name: &str) -> &'a [String] {
    let name_marker = format!("  2\n{}", name);
    let start = tokens
        .windows(2)
        .position(|w| w[0] == "  0\nSECTION" && w[1] == name_marker)
        .unwrap_or_else(|| panic!("no {} section", name));
    let len = tokens[start..]
        .iter()
        .position(|t| t == "  0\nENDSEC")
        .unwrap_or_else(|| panic!("{} section not closed", name));
    &tokens[start..=start + len]
}

/// Body of one section, without its framing markers.
pub fn section_body<'a>(tokens: &'a [String], name: &str) -> &'a [String] {
    let section = section(tokens, name);
    &section[2..section.len() - 1]
}

/// Every value that follows the given group code line.
pub fn values_for_code<'a>(tokens: &'a [String], code: &str) -> Vec<&'a str> {
    tokens
        .windows(2)
        .filter(|w| w[0] == code)
        .map(|w| w[1].as_str())
        .collect()
}

/// Whether `needle` appears as a contiguous run in `tokens`.
pub fn contains_run(tokens: &[String], needle: &[&str]) -> bool {
    tokens
        .windows(needle.len())
        .any(|w| w.iter().zip(needle).all(|(a, b)| a == b))
}

/// Number of tokens equal to `token`.
pub fn count(tokens: &[String], token: &str) -> usize {
    tokens.iter().filter(|t| *t == token).count()
}
