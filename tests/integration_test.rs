use serde_json::Value;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ocr-extract"))
        .args(args)
        .output()
        .expect("Failed to run binary")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout was not a single JSON document")
}

#[test]
fn test_missing_path_argument() {
    let output = run(&[]);

    assert!(!output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["error"], "No image path provided");
}

#[test]
fn test_nonexistent_file_reported_in_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");
    let output = run(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(
        value["text"],
        format!("Error: File {} does not exist", path.display())
    );
}

#[test]
fn test_undecodable_file_reported_in_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_an_image.png");
    std::fs::write(&path, b"this is plain text, not pixels").unwrap();

    let output = run(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(
        value["text"],
        format!("Error: Could not read image {}", path.display())
    );
}

#[test]
fn test_layout_mode_error_is_a_bare_json_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let output = run(&[path.to_str().unwrap(), "layout"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(
        value,
        Value::String(format!("Error: File {} does not exist", path.display()))
    );
}

#[test]
fn test_unknown_mode_falls_back_to_basic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let output = run(&[path.to_str().unwrap(), "structured"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    // Basic-mode shape: an object with a "text" field
    assert!(value["text"].is_string());
}

#[test]
fn test_diagnostics_stay_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let output = run(&[path.to_str().unwrap(), "basic", "--log-level", "debug"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim().lines().count(),
        1,
        "stdout must carry exactly one JSON document"
    );
}
