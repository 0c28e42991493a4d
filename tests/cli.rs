//! CLI integration tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_input(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn converts_phone_directory_to_markdown() {
    let input = write_input(r#"{"phones": [{"İsim": "AFAD", "Numara": "122"}]}"#);

    Command::cargo_bin("reliefmd")
        .unwrap()
        .arg(input.path())
        .args(["--category", "phone-number-list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("İsim"))
        .stdout(predicate::str::contains("[122](tel:122)"));
}

#[test]
fn detects_category_from_data_type_key() {
    let input = write_input(
        r#"{"dataType": "useful-links", "usefulLinks": [{"İsim": "Ahbap", "URL": "https://ahbap.org/x"}]}"#,
    );

    Command::cargo_bin("reliefmd")
        .unwrap()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[ahbap.org](https://ahbap.org/x)"));
}

#[test]
fn writes_output_file() {
    let input = write_input(
        r#"{"items": [{"İl": "Hatay", "İlçe": "Antakya", "Adres": "Köprübaşı", "Harita": "https://maps.google.com/k"}]}"#,
    );
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pharmacies.md");

    Command::cargo_bin("reliefmd")
        .unwrap()
        .arg(input.path())
        .args(["--category", "container-pharmacy"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let markdown = std::fs::read_to_string(&out).unwrap();
    assert!(markdown.contains("[Google Maps](https://maps.google.com/k)"));
    assert!(markdown.ends_with('\n'));
}

#[test]
fn unknown_category_tag_fails() {
    let input = write_input(r#"{"items": []}"#);

    Command::cargo_bin("reliefmd")
        .unwrap()
        .arg(input.path())
        .args(["--category", "blood-donationlist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category tag"));
}

#[test]
fn missing_category_and_data_type_fails() {
    let input = write_input(r#"{"items": []}"#);

    Command::cargo_bin("reliefmd")
        .unwrap()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataType"));
}
