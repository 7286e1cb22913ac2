// ==============================================
// SCRIPT HARNESS TESTS (integration)
// ==============================================
//
// Runs the JSON fixtures under tests/fixtures through the script runner.

#![cfg(feature = "script")]

use std::path::PathBuf;

use slotlru::script::{Observed, Script, run_script};

fn fixture(name: &str) -> Script {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    Script::from_path(&path).unwrap()
}

#[test]
fn capacity_two_fixture_passes() {
    let report = run_script(&fixture("capacity_two.json"), None).unwrap();
    assert!(report.passed(), "{:?}", report.mismatches);
}

#[test]
fn long_sequence_fixture_passes() {
    let script = fixture("long_sequence.json");
    assert_eq!(script.operations.len(), 110);
    let report = run_script(&script, None).unwrap();
    assert!(report.passed(), "{:?}", report.mismatches);
    assert_eq!(report.observed.len(), 110);
}

#[test]
fn extended_ops_fixture_passes() {
    let report = run_script(&fixture("extended_ops.json"), None).unwrap();
    assert!(report.passed(), "{:?}", report.mismatches);
    assert_eq!(report.observed[6], Some(Observed::Keys(vec![3, 2, 1])));
}

#[test]
fn capacity_override_changes_outcome() {
    // With room for every key, the long sequence never evicts, so some
    // expected misses turn into hits.
    let report = run_script(&fixture("long_sequence.json"), Some(64)).unwrap();
    assert!(!report.passed());
    assert!(report.mismatches.iter().all(|m| m.operation == "get"));
}
