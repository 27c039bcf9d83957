//! Integration tests for the mayfail pipeline
//!
//! These tests write shard reports to a temp directory and run the full
//! load → merge → render path through the public API.

use std::fs;
use std::path::PathBuf;

use ci_report::{
    deduplicate, load_failures, render_mayfail_comment, render_mayfail_comment_with, Assertion,
    CommentConfig, FailureRecord,
};

fn write_report(dir: &tempfile::TempDir, name: &str, records: &[FailureRecord]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(records).unwrap()).unwrap();
    path
}

fn assertion(file: &str, line: u32, expression: &str) -> Assertion {
    Assertion {
        file: Some(file.to_string()),
        line: Some(line.to_string()),
        expression: Some(expression.to_string()),
        expanded: Some(format!("{expression} (expanded)")),
        messages: Vec::new(),
    }
}

/// Test: the canonical single-report example renders every section.
#[test]
fn test_single_report_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    fs::write(
        &path,
        r#"[{"test":"t1","tags":"","assertions":[{"file":"a.cpp","line":"5","expression":"x==1","expanded":"x==2","messages":["note"]}]}]"#,
    )
    .unwrap();

    let out = render_mayfail_comment(&[&path], "Linux");

    assert!(out.contains("**`t1`** | _Linux_"));
    assert!(out.contains("`a.cpp:5`: `x==1` -- expanded to `x==2`"));
    assert!(out.contains("<summary>All failed assertions (1)</summary>"));
    assert_eq!(out.matches("| `a.cpp:5` |").count(), 1);
    assert!(out.contains("INFO messages:\n- note"));
}

/// Test: a test failing on several shards is merged in argument order.
#[test]
fn test_multi_shard_merge_order() {
    let dir = tempfile::tempdir().unwrap();
    let shard1 = write_report(
        &dir,
        "shard1.json",
        &[
            FailureRecord::new("recipe_cycle")
                .with_tags("[recipes]")
                .with_assertion(assertion("a.cpp", 1, "first")),
            FailureRecord::new("consumption").with_assertion(assertion("c.cpp", 3, "only")),
        ],
    );
    let shard2 = write_report(
        &dir,
        "shard2.json",
        &[FailureRecord::new("recipe_cycle")
            .with_tags("[other]")
            .with_assertion(assertion("b.cpp", 2, "second"))
            .with_assertion(assertion("b.cpp", 4, "third"))],
    );

    let merged = deduplicate(load_failures(&[&shard1, &shard2]));
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].test, "recipe_cycle");
    assert_eq!(merged[0].tags, "[recipes]");
    let expressions: Vec<&str> = merged[0]
        .assertions
        .iter()
        .map(|a| a.expression_or_placeholder())
        .collect();
    assert_eq!(expressions, vec!["first", "second", "third"]);

    // Reversing the argument order reverses the merged assertion order
    let merged = deduplicate(load_failures(&[&shard2, &shard1]));
    assert_eq!(merged[0].tags, "[other]");
    assert_eq!(merged[0].assertions[0].expression_or_placeholder(), "second");
    assert_eq!(merged[0].assertions[2].expression_or_placeholder(), "first");

    let out = render_mayfail_comment(&[&shard1, &shard2], "Linux");
    assert!(out.contains("<summary>All failed assertions (3)</summary>"));
    assert!(out.find("`recipe_cycle`").unwrap() < out.find("`consumption`").unwrap());
}

/// Test: nothing usable anywhere produces an empty fragment.
#[test]
fn test_nothing_to_report_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.json");
    fs::write(&empty, "").unwrap();
    let object = dir.path().join("object.json");
    fs::write(&object, r#"{"test": "t"}"#).unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "[{").unwrap();
    let no_assertions = write_report(&dir, "none.json", &[FailureRecord::new("quiet")]);
    let missing = dir.path().join("missing.json");

    let paths = [empty, object, broken, no_assertions, missing];
    assert_eq!(render_mayfail_comment(&paths, "Linux"), "");

    let no_paths: [PathBuf; 0] = [];
    assert_eq!(render_mayfail_comment(&no_paths, "Linux"), "");
}

/// Test: a bad shard does not hide failures from the good ones.
#[test]
fn test_bad_shard_does_not_block_good_shard() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{{{").unwrap();
    let good = write_report(
        &dir,
        "good.json",
        &[FailureRecord::new("t").with_assertion(assertion("g.cpp", 7, "ok"))],
    );

    let out = render_mayfail_comment(&[broken, good], "macOS");
    assert!(out.starts_with("**`t`** | _macOS_\n"));
}

/// Test: the configured cell limit reaches the renderer.
#[test]
fn test_config_cell_limit_applies() {
    let dir = tempfile::tempdir().unwrap();
    let long = "v".repeat(50);
    let path = write_report(
        &dir,
        "long.json",
        &[FailureRecord::new("t").with_assertion(assertion("a.cpp", 1, &long))],
    );

    let mut config = CommentConfig::builtin().with_job_title("Linux");
    config.max_cell_len = 10;
    let out = render_mayfail_comment_with(&[&path], &config);
    assert!(out.contains(&format!("`{}...`", "v".repeat(10))));
    assert!(!out.contains(&long));
}
