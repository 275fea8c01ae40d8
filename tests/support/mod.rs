#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> Result<Vec<u8>> {
    let path = fixture_path(name);
    fs::read(&path).with_context(|| format!("reading fixture {}", path.display()))
}

pub fn hypercat_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hypercat"))
}

// Relation list fragment with the mandatory catalogue relations in place.
pub fn catalogue_relations(description: &str) -> String {
    format!(
        r#"[{{"rel":"urn:X-hypercat:rels:hasDescription:en","val":"{description}"}},{{"rel":"urn:X-hypercat:rels:isContentType","val":"application/vnd.hypercat.catalogue+json"}}]"#
    )
}
