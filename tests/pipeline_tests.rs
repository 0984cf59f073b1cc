//! End-to-end pipeline tests: real files in, report text out.

use jsondiff_tools::{
    cli::run_diff,
    config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig},
    pipeline::{compute_diff, exit_codes, load_document},
    reports::ReportFormat,
};
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    write!(file, "{content}").expect("write fixture");
    path
}

fn diff_config(left: PathBuf, right: PathBuf, format: ReportFormat, out: PathBuf) -> DiffConfig {
    DiffConfig {
        paths: DiffPaths { left, right },
        output: OutputConfig {
            format,
            file: Some(out),
            no_color: true,
        },
        behavior: BehaviorConfig { quiet: true },
    }
}

#[test]
fn test_listing_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let left = write_doc(
        dir.path(),
        "left.json",
        r#"{"name": "svc", "port": 80, "tags": ["a"]}"#,
    );
    let right = write_doc(
        dir.path(),
        "right.json",
        r#"{"name": "svc", "port": 8080, "tags": ["a", "b"]}"#,
    );
    let out = dir.path().join("report.txt");

    let code = run_diff(diff_config(left, right, ReportFormat::Listing, out.clone()))
        .expect("pipeline runs");
    assert_eq!(code, exit_codes::SUCCESS);

    let report = std::fs::read_to_string(out).expect("report written");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "{");
    assert!(lines.contains(&"   name: \"svc\","));
    assert!(lines.contains(&"-  port: 80,"));
    assert!(lines.contains(&"+  port: 8080,"));
    assert!(lines.contains(&"+    \"b\""));
    assert_eq!(*lines.last().expect("nonempty"), "}");
}

#[test]
fn test_json_report_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let left = write_doc(dir.path(), "left.json", r#"[1, 2]"#);
    let right = write_doc(dir.path(), "right.json", r#"[2, 1]"#);
    let out = dir.path().join("report.json");

    let code = run_diff(diff_config(left, right, ReportFormat::Json, out.clone()))
        .expect("pipeline runs");
    assert_eq!(code, exit_codes::SUCCESS);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out).expect("written")).expect("valid JSON");
    assert_eq!(report["root_kind"], "array");
    let actions: Vec<&str> = report["entries"]
        .as_array()
        .expect("entries")
        .iter()
        .map(|e| e["action"].as_str().expect("action"))
        .collect();
    // deterministic tie-break: 1 removed, 2 kept, 1 re-added
    assert_eq!(actions, vec!["remove", "common", "add"]);
}

#[test]
fn test_summary_report_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let left = write_doc(dir.path(), "left.json", r#"{"a": 1}"#);
    let right = write_doc(dir.path(), "right.json", r#"{"a": 1}"#);
    let out = dir.path().join("summary.txt");

    let code = run_diff(diff_config(left, right, ReportFormat::Summary, out.clone()))
        .expect("pipeline runs");
    assert_eq!(code, exit_codes::SUCCESS);
    let report = std::fs::read_to_string(out).expect("written");
    assert!(report.contains("No differences."));
}

#[test]
fn test_unreadable_input_maps_to_input_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let right = write_doc(dir.path(), "right.json", "{}");
    let out = dir.path().join("report.txt");

    let code = run_diff(diff_config(
        dir.path().join("missing.json"),
        right,
        ReportFormat::Listing,
        out.clone(),
    ))
    .expect("handler reports, does not fail");
    assert_eq!(code, exit_codes::INPUT_ERROR);
    assert!(!out.exists(), "no report on failure");
}

#[test]
fn test_invalid_json_maps_to_input_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let left = write_doc(dir.path(), "left.json", "{broken");
    let right = write_doc(dir.path(), "right.json", "{}");
    let out = dir.path().join("report.txt");

    let code = run_diff(diff_config(left, right, ReportFormat::Listing, out))
        .expect("handler reports, does not fail");
    assert_eq!(code, exit_codes::INPUT_ERROR);
}

#[test]
fn test_mismatched_roots_map_to_diff_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let left = write_doc(dir.path(), "left.json", r#"{"a": 1}"#);
    let right = write_doc(dir.path(), "right.json", "[1]");
    let out = dir.path().join("report.txt");

    let code = run_diff(diff_config(left, right, ReportFormat::Listing, out))
        .expect("handler reports, does not fail");
    assert_eq!(code, exit_codes::DIFF_ERROR);
}

#[test]
fn test_scalar_root_rejected_before_core() {
    let dir = tempfile::tempdir().expect("temp dir");
    let left = load_document(&write_doc(dir.path(), "l.json", "1"), true).expect("parses");
    let right = load_document(&write_doc(dir.path(), "r.json", "{}"), true).expect("parses");
    assert!(compute_diff(&left, &right).is_err());
}
