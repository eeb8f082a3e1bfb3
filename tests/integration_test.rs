//! Integration tests for the TC 33 capture CLI.
//!
//! These tests run the actual binary against the capture files in
//! `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given input file and return stdout
fn run_capture(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("tc33-capture").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// First two columns (Message Identifier, Card Brand) of every data row
fn id_and_brand(csv: &str) -> Vec<(String, String)> {
    csv.lines()
        .skip(1)
        .map(|line| {
            let mut parts = line.split(',');
            (
                parts.next().unwrap_or_default().to_string(),
                parts.next().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

#[test]
fn test_stdout_lists_transactions_in_file_order() {
    let output = run_capture(&test_data_path("sample_capture.tc33"));

    assert!(output.starts_with("Message Identifier,Card Brand,"));
    assert_eq!(
        id_and_brand(&output),
        [
            ("MSG000000000001".to_string(), "VISA".to_string()),
            ("MSG000000000002".to_string(), "Mastercard".to_string()),
            ("MSG000000000003".to_string(), "Other".to_string()),
        ]
    );
}

#[test]
fn test_stdout_header_has_prefixed_columns() {
    let output = run_capture(&test_data_path("sample_capture.tc33"));
    let header = output.lines().next().unwrap();

    assert!(header.contains("CP01_TCR_0_Authorized Amount"));
    assert!(header.contains("CP01_TCR_1_Card ID"));
    assert!(header.contains("CP01_TCR_9_COL_Taxable Amount"));
    assert!(header.contains("Identified Card ID (Other)"));
    assert!(!header.contains("CP01_TCR_9_GENERIC"));
}

#[test]
fn test_output_dir_writes_every_sheet() {
    let out = TempDir::new().unwrap();

    Command::cargo_bin("tc33-capture")
        .unwrap()
        .arg(test_data_path("sample_capture.tc33"))
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    for name in [
        "total_amount_and_count.csv",
        "visa_transactions.csv",
        "mastercard_transactions.csv",
        "ax_transactions.csv",
        "jcb_transactions.csv",
        "diners_club_transactions.csv",
        "discover_transactions.csv",
        "other_transactions.csv",
    ] {
        assert!(out.path().join(name).is_file(), "missing {}", name);
    }
}

#[test]
fn test_output_dir_summary_sheet() {
    let out = TempDir::new().unwrap();
    Command::cargo_bin("tc33-capture")
        .unwrap()
        .arg(test_data_path("sample_capture.tc33"))
        .arg(out.path())
        .assert()
        .success();

    let summary = fs::read_to_string(out.path().join("total_amount_and_count.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "Category,Field,Value");
    assert!(lines.contains(&"Header,Capture File Number,7"));
    assert!(lines.contains(&"Header,Capture Creation Date,20240115"));
    assert!(lines.contains(&"Trailer,Total Transaction Count,3"));
    assert!(lines.contains(&"Trailer,Total Transaction Amount,2500"));
}

#[test]
fn test_output_dir_brand_sheets() {
    let out = TempDir::new().unwrap();
    Command::cargo_bin("tc33-capture")
        .unwrap()
        .arg(test_data_path("sample_capture.tc33"))
        .arg(out.path())
        .assert()
        .success();

    let visa = fs::read_to_string(out.path().join("visa_transactions.csv")).unwrap();
    assert_eq!(visa.lines().count(), 2);
    assert!(visa.lines().nth(1).unwrap().starts_with("MSG000000000001,"));
    assert!(visa.lines().next().unwrap().contains("CP01_TCR_9_COL_Payment Method"));

    let other = fs::read_to_string(out.path().join("other_transactions.csv")).unwrap();
    assert!(other.lines().next().unwrap().ends_with("Identified Card ID (Other)"));
    assert!(other.lines().nth(1).unwrap().ends_with(",UNKNOWN"));

    let jcb = fs::read_to_string(out.path().join("jcb_transactions.csv")).unwrap();
    assert_eq!(jcb, "Message\nNo JCB transactions found.\n");
}

#[test]
fn test_missing_argument() {
    Command::cargo_bin("tc33-capture")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file argument"));
}

#[test]
fn test_nonexistent_file() {
    Command::cargo_bin("tc33-capture")
        .unwrap()
        .arg("tests/data/does_not_exist.tc33")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: I/O error"));
}

#[test]
fn test_file_without_records() {
    Command::cargo_bin("tc33-capture")
        .unwrap()
        .arg(test_data_path("empty_capture.tc33"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid TC 33 records found"));
}
