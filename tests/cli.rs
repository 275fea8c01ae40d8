// CLI behavior for the hypercat binary: exit codes, stdout shape, and stdin
// handling.
mod support;

use anyhow::{Context, Result};
use hypercat::{Codec, HYPERCAT_MEDIA_TYPE, Revision};
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

use support::{fixture_path, hypercat_binary, read_fixture};

fn run(args: &[&str]) -> Result<Output> {
    Command::new(hypercat_binary())
        .args(args)
        .output()
        .with_context(|| format!("running hypercat {args:?}"))
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> Result<Output> {
    let mut child = Command::new(hypercat_binary())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("spawning hypercat")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(input)?;
    Ok(child.wait_with_output()?)
}

#[test]
fn validate_reports_item_count() -> Result<()> {
    let fixture = fixture_path("sensors_v3.json");
    let output = run(&["validate", fixture.to_str().context("utf-8 path")?])?;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stdout)?.trim(), "ok: 2 items");
    Ok(())
}

#[test]
fn validate_fails_on_missing_description() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(br#"{"items":[],"catalogue-metadata":[]}"#)?;
    let output = run(&["validate", file.path().to_str().context("utf-8 path")?])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("hasDescription"), "{stderr}");
    Ok(())
}

#[test]
fn fmt_converts_revision_from_stdin() -> Result<()> {
    let legacy = read_fixture("legacy_v2.json")?;
    let output = run_with_stdin(&["--revision", "2.0", "fmt", "--to", "3.0"], &legacy)?;
    assert!(output.status.success(), "{output:?}");

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert!(value.get("catalogue-metadata").is_some(), "{value}");
    assert!(value["items"][0].get("item-metadata").is_some(), "{value}");

    let catalogue = Codec::default().from_slice(&output.stdout)?;
    assert_eq!(catalogue.description, "Legacy catalogue");
    Ok(())
}

#[test]
fn list_marks_nested_catalogues() -> Result<()> {
    let fixture = fixture_path("sensors_v3.json");
    let output = run(&["list", fixture.to_str().context("utf-8 path")?])?;
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["/sensor1\tSensor 1", "/nested\tNested catalogue\tcatalogue"]
    );
    Ok(())
}

#[test]
fn new_builds_catalogue_from_flags() -> Result<()> {
    let output = run(&[
        "--revision",
        "1.1",
        "new",
        "Built",
        "--item",
        "/a=Item A",
        "--rel",
        "k=v",
    ])?;
    assert!(output.status.success(), "{output:?}");

    let catalogue = Codec::for_revision(Revision::V1_1).from_slice(&output.stdout)?;
    assert_eq!(catalogue.description, "Built");
    assert_eq!(catalogue.content_type.as_deref(), Some(HYPERCAT_MEDIA_TYPE));
    assert_eq!(catalogue.vals("k"), vec!["v"]);
    assert_eq!(catalogue.item("/a").map(|i| i.description.as_str()), Some("Item A"));
    Ok(())
}

#[test]
fn new_rejects_duplicate_hrefs() -> Result<()> {
    let output = run(&["new", "Dup", "--item", "/a=one", "--item", "/a=two"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("already exists"), "{stderr}");
    Ok(())
}

#[test]
fn unknown_revision_is_rejected() -> Result<()> {
    let output = run(&["--revision", "9.9", "validate"])?;
    assert!(!output.status.success());
    Ok(())
}
