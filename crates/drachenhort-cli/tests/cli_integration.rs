//! CLI Integration Tests
//!
//! These tests run the `drachenhort` binary end-to-end against a card file
//! written into a temporary directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const CARDS: &str = r#"{
  "Drachenhort": {
    "Raum": [
      {"Name": "Drachenhöhle", "Description": "Viel Gold.\\nEin Drache schläft.", "Image": "a.png"},
      {"Name": "Schatzkammer", "Description": "Gold überall.", "Image": "b.png"}
    ],
    "Leiche": [
      {"Name": "Skelett", "Description": "Ein Abenteurer mit Gold.", "Image": "c.png"}
    ]
  },
  "Andere": {
    "Raum": [{"Name": "Keller", "Description": "", "Image": ""}]
  }
}"#;

/// Write the fixture card file and return its path
fn write_cards(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("allCards.json");
    std::fs::write(&path, CARDS).expect("Failed to write card file");
    path
}

/// Create a CLI command pointed at the fixture card file
fn cli_cmd(dir: &TempDir) -> Command {
    let cards = write_cards(dir);
    let mut cmd = Command::cargo_bin("drachenhort").expect("Failed to find drachenhort binary");
    cmd.arg("--cards").arg(cards);
    cmd
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_all_cards() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Raum] Drachenhöhle"))
        .stdout(predicate::str::contains("[Raum] Schatzkammer"))
        .stdout(predicate::str::contains("[Leiche] Skelett"))
        .stdout(predicate::str::contains("3 Karten gefunden"));
}

#[test]
fn test_list_keeps_file_order() {
    let dir = TempDir::new().unwrap();

    let output = cli_cmd(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let hoehle = stdout.find("Drachenhöhle").unwrap();
    let kammer = stdout.find("Schatzkammer").unwrap();
    let skelett = stdout.find("Skelett").unwrap();
    assert!(hoehle < kammer && kammer < skelett);
}

#[test]
fn test_list_search_highlights_name() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--search", "DRACHE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Raum] «Drache»nhöhle"))
        .stdout(predicate::str::contains("Skelett").not())
        .stdout(predicate::str::contains("1 Karte gefunden"));
}

#[test]
fn test_list_search_descriptions() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--search", "gold", "--descriptions", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Viel «Gold»."))
        .stdout(predicate::str::contains("Ein Drache schläft."))
        .stdout(predicate::str::contains("3 Karten gefunden"));
}

#[test]
fn test_list_category_filter() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--category", "Leiche"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Leiche] Skelett"))
        .stdout(predicate::str::contains("Drachenhöhle").not());
}

#[test]
fn test_list_unknown_category_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--category", "Zauber"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zauber"));
}

#[test]
fn test_list_no_matches() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--search", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keine Karten gefunden"));
}

#[test]
fn test_list_other_collection() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--collection", "Andere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Raum] Keller"))
        .stdout(predicate::str::contains("1 Karte gefunden"));
}

// ============================================================================
// Categories / Show Tests
// ============================================================================

#[test]
fn test_categories_with_counts() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Raum (2)"))
        .stdout(predicate::str::contains("Leiche (1)"));
}

#[test]
fn test_show_card() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["show", "skelett"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skelett"))
        .stdout(predicate::str::contains("Typ: Leiche"))
        .stdout(predicate::str::contains("Ein Abenteurer mit Gold."));
}

#[test]
fn test_show_unknown_card_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["show", "Einhorn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Card not found"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_card_file_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("drachenhort")
        .unwrap()
        .arg("--cards")
        .arg(dir.path().join("missing.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fehler beim Laden der Karten"));
}

#[test]
fn test_missing_collection_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["list", "--collection", "Fehlt"])
        .assert()
        .failure();
}

#[test]
fn test_log_dir_receives_jsonl() {
    let dir = TempDir::new().unwrap();
    let logs = dir.path().join("logs");

    cli_cmd(&dir)
        .arg("-v")
        .arg("--log-dir")
        .arg(&logs)
        .arg("list")
        .assert()
        .success();

    let files: Vec<_> = std::fs::read_dir(&logs).unwrap().collect();
    assert_eq!(files.len(), 1);
}
