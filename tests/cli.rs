// ==============================================
// lru-script CLI TESTS (integration)
// ==============================================

#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn lru_script() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lru-script"));
    cmd.env_remove("RUST_LOG").env_remove("SLOTLRU_LOG");
    cmd
}

#[test]
fn passing_script_exits_zero_with_text_output() {
    let dir = TempDir::new().unwrap();
    let path = write_script(
        &dir,
        "ok.json",
        r#"{"operations":["LRUCache","put","get","get"],"arguments":[[1],[5,50],[5],[6]],"expected":[null,null,50,-1]}"#,
    );

    let output = lru_script().arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("-> 50"));
    assert!(stdout.contains("-> -1"));
    assert!(!stdout.contains("mismatch"));
}

#[test]
fn mismatch_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = write_script(
        &dir,
        "bad.json",
        r#"{"operations":["LRUCache","get"],"arguments":[[1],[5]],"expected":[null,5]}"#,
    );

    let output = lru_script().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("mismatch at step 1 (get): expected 5, observed -1"));
}

#[test]
fn json_format_and_capacity_override() {
    let dir = TempDir::new().unwrap();
    let path = write_script(
        &dir,
        "cap.json",
        r#"{"operations":["LRUCache","put","put","dump"],"arguments":[[1],[1,1],[2,2],[]]}"#,
    );

    let output = lru_script()
        .args(["--format", "json", "--capacity", "2"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["observed"][3], serde_json::json!([2, 1]));
    assert_eq!(report["mismatches"], serde_json::json!([]));
}

#[test]
fn invalid_script_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "neg.json", r#"{"operations":["LRUCache"],"arguments":[[-1]]}"#);

    let output = lru_script().arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("capacity"), "stderr was: {stderr}");
}
