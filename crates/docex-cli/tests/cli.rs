use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ENV_KEYS: &[&str] = &[
    "OLLAMA_BASE_URL",
    "OLLAMA_MODEL",
    "EXTRACTION_MODE",
    "DOCEX_OCR_MODEL_DIR",
];

/// `docex` with a private config file and no ambient overrides.
fn docex(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docex").unwrap();
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd.arg("--config").arg(config);
    cmd
}

fn offline_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"ocr": {"enabled": false}}"#).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("docex")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    docex(&dir.path().join("absent.json"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"acquisition\""))
        .stdout(predicate::str::contains("\"native_min_chars\": 50"))
        .stdout(predicate::str::contains("http://localhost:11434"));
}

#[test]
fn test_config_init_set_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.json");

    docex(&config).args(["config", "init"]).assert().success();
    assert!(config.exists());

    docex(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    docex(&config)
        .args(["config", "set", "extraction.mode", "rules"])
        .assert()
        .success();

    docex(&config)
        .args(["config", "get", "extraction.mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rules\""));
}

#[test]
fn test_config_get_applies_environment() {
    let dir = TempDir::new().unwrap();
    docex(&dir.path().join("absent.json"))
        .env("OLLAMA_MODEL", "mistral")
        .args(["config", "get", "generation.model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mistral"));
}

#[test]
fn test_config_set_rejects_unknown_key_and_bad_value() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    docex(&config)
        .args(["config", "set", "generation.colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    docex(&config)
        .args(["config", "set", "generation.timeout_secs", "0"])
        .assert()
        .failure();
}

#[test]
fn test_process_missing_file() {
    let dir = TempDir::new().unwrap();
    docex(&offline_config(&dir))
        .args(["process", "no-such-file.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_process_rejects_non_pdf() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "INVOICE\nTotal: $5.00").unwrap();

    docex(&offline_config(&dir))
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_process_unreadable_pdf_has_insufficient_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.pdf");
    fs::write(&input, b"not really a pdf").unwrap();

    docex(&offline_config(&dir))
        .args(["process", "--mode", "rules"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient text"));
}

#[test]
fn test_process_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.pdf");
    fs::write(&input, b"%PDF-1.4").unwrap();

    docex(&offline_config(&dir))
        .args(["process", "--mode", "magic"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown extraction mode"));
}

#[test]
fn test_batch_without_matches() {
    let dir = TempDir::new().unwrap();
    let pattern = dir.path().join("*.pdf");

    docex(&offline_config(&dir))
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}

#[test]
fn test_batch_continue_on_error_writes_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("a.pdf"), b"garbage").unwrap();
    fs::write(inputs.join("b.pdf"), b"more garbage").unwrap();

    docex(&offline_config(&dir))
        .args(["batch", "--mode", "rules", "--continue-on-error", "--summary"])
        .arg(inputs.join("*.pdf").to_str().unwrap())
        .arg("--output-dir")
        .arg(&outputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 successful, 2 failed"));

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("filename,status,doc_type,vendor,document_number,document_date,total_amount,currency,processing_time_ms,error")
    );
    assert_eq!(lines.clone().count(), 2);
    assert!(lines.all(|line| line.contains(",error,")));
}

#[test]
fn test_batch_stops_on_first_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.pdf"), b"garbage").unwrap();

    docex(&offline_config(&dir))
        .args(["batch", "--mode", "rules"])
        .arg(dir.path().join("*.pdf").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}
