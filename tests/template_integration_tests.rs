//! Integration tests for the `template` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn check_valid_template() {
    let fixture = TestFixture::new();
    let template = fixture.create_utility_template();

    csv_guard!()
        .args(["template", "check"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template is valid"))
        .stdout(predicate::str::contains("(4 columns)"));
}

#[test]
fn check_reports_inconsistent_bounds() {
    let fixture = TestFixture::new();
    let template = fixture.create_file(
        "bad.toml",
        "[[columns]]\nname = \"Code\"\nmin_length = 8\nmax_length = 3\n",
    );

    csv_guard!()
        .args(["template", "check"])
        .arg(&template)
        .env("NO_COLOR", "1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ Template:"))
        .stderr(predicate::str::contains(
            "min_length (8) is greater than max_length (3)",
        ));
}

#[test]
fn check_reports_unknown_fields() {
    let fixture = TestFixture::new();
    let template = fixture.create_file("bad.toml", "[[columns]]\nname = \"Code\"\nmaxlen = 3\n");

    csv_guard!()
        .args(["template", "check"])
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn check_missing_file() {
    let fixture = TestFixture::new();

    csv_guard!()
        .current_dir(fixture.path())
        .args(["template", "check", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Template file not found"));
}

#[test]
fn show_text() {
    let fixture = TestFixture::new();
    let template = fixture.create_utility_template();

    csv_guard!()
        .args(["template", "show"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Template: utility ==="))
        .stdout(predicate::str::contains("name = \"Zone\""))
        .stdout(predicate::str::contains("data_type = date"));
}

#[test]
fn show_json() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();

    let output = csv_guard!()
        .args(["template", "show", "--format", "json"])
        .arg(&template)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["columns"][0]["name"], "MeterID");
    assert_eq!(json["columns"][0]["max_length"], 10);
    assert_eq!(json["settings"]["date_format"], "%Y-%m-%d");
}
