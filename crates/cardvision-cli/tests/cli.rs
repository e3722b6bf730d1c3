//! Command-line tests over plain-text statements.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const ICICI_STATEMENT: &str = "ICICI Bank Credit Card\n\
Name: Rohan Mehta\n\
Card Coral Credit Card (XXXX-XXXX-XXXX-1234)\n\
Statement Date 10 Feb 2024\n\
Payment Due Date 01 Mar 2024\n\
Total Amount Due INR 5,400.00\n\
Minimum Amount Due INR 270.00\n\
12-Jan-2024 DEBIT Coffee House 350.00\n\
20-Jan-2024 CREDIT Reversal 50.00\n";

const SBI_STATEMENT: &str = "SBI Card Prime\n\
Statement Date 05 Mar 2024\n\
Total Due: 1,200.00\n";

fn cardvision() -> Command {
    Command::cargo_bin("cardvision").unwrap()
}

/// Temp dir holding a config file that keeps export names stable.
fn workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"export": {"timestamped": false}}"#).unwrap();
    (dir, config)
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn process_text_statement_as_json() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "icici.txt", ICICI_STATEMENT);

    let output = cardvision()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["filename"], "icici.txt");
    assert_eq!(json["issuer"], "ICICI Bank");
    assert_eq!(json["card_last_4"], "1234");
    assert_eq!(json["total_due"], "INR 5,400.00");
    assert_eq!(json["statement_period"], "Not found");
    assert_eq!(json["transaction_count"], 2);
    assert_eq!(json["sample_transaction"]["type"], "DEBIT");
    assert_eq!(json["customer_name"], "Rohan Mehta");
    assert!(json.get("customer_id").is_none());
    assert!(json.get("raw_text").is_none());
}

#[test]
fn process_keeps_raw_text_when_configured() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let input = write(dir.path(), "icici.txt", ICICI_STATEMENT);

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.keep_raw_text", "true"])
        .assert()
        .success();

    let output = cardvision()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["raw_text"], ICICI_STATEMENT);
    assert!(stdout.find("\"due_date\"").unwrap() < stdout.find("\"filename\"").unwrap());
}

#[test]
fn process_text_summary_masks_card() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "icici.txt", ICICI_STATEMENT);

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["process", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("XXXX-1234"))
        .stdout(predicate::str::contains("ICICI Bank"));
}

#[test]
fn process_empty_document_fails() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "blank.txt", "   \n");

    cardvision()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no text available"));
}

#[test]
fn process_rejects_unsupported_extension() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "scan.png", "not an image");

    cardvision()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format: png"));
}

#[test]
fn batch_writes_aggregate_json() {
    let (dir, config) = workspace();
    write(dir.path(), "a_icici.txt", ICICI_STATEMENT);
    write(dir.path(), "b_sbi.txt", SBI_STATEMENT);
    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    cardvision()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unique institutions:    2"))
        .stdout(predicate::str::contains("Success rate:           50%"));

    let export = fs::read_to_string(out_dir.join("cardvision_analysis.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&export).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["filename"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["a_icici.txt", "b_sbi.txt"]);
    assert_eq!(json[1]["issuer"], "SBI Card");
    assert_eq!(json[1]["total_due"], "INR 1,200.00");
}

#[test]
fn batch_csv_export() {
    let (dir, config) = workspace();
    write(dir.path(), "icici.txt", ICICI_STATEMENT);
    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    cardvision()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .args(["--format", "csv"])
        .assert()
        .success();

    let export = fs::read_to_string(out_dir.join("cardvision_analysis.csv")).unwrap();
    let header = export.lines().next().unwrap();

    assert!(header.starts_with("Document,Institution,Account_Last4"));
    assert!(header.ends_with("Customer_Name"));
}

#[test]
fn batch_continue_on_error_lists_failures() {
    let (dir, config) = workspace();
    write(dir.path(), "good.txt", ICICI_STATEMENT);
    write(dir.path(), "empty.txt", "");
    let pattern = dir.path().join("*.txt");

    cardvision()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .assert()
        .failure();

    cardvision()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .arg("--continue-on-error")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"))
        .stdout(predicate::str::contains("empty.txt"));
}

#[test]
fn issuers_lists_supported_banks() {
    cardvision()
        .arg("issuers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Axis Bank"))
        .stdout(predicate::str::contains("IDFC FIRST Bank"))
        .stdout(predicate::str::contains("sbi prime"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.json");

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "export.file_prefix", "statements"])
        .assert()
        .success();

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "export.file_prefix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"statements\""));

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "export.missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn config_init_refuses_overwrite() {
    let (_dir, config) = workspace();

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cardvision()
        .arg("--config")
        .arg(&config)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}
