//! Integration tests for the `validate` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn valid_file_exits_zero() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID\nA1\nA2\n");

    csv_guard!()
        .args(["--color", "never", "validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✓ VALID: 2 rows, 0 errors, 0 warnings"));
}

#[test]
fn invalid_file_exits_one() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID\nA1\nA1\nA-VERY-LONG-ID\n");

    csv_guard!()
        .args(["--color", "never", "validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ INVALID: 3 rows, 2 errors"))
        .stdout(predicate::str::contains("row 2 [unique]"))
        .stdout(predicate::str::contains("row 3 [max_length]"));
}

#[test]
fn warnings_alone_keep_file_valid() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID,Notes\nA1,first\n");

    csv_guard!()
        .args(["--color", "never", "validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1 warnings"))
        .stdout(predicate::str::contains("[extra_column]"));
}

#[test]
fn unterminated_quote_exits_two() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID\nA1\n\"A2\nA3\n");

    csv_guard!()
        .args(["validate"])
        .arg(&csv)
        .arg(&template)
        .env("NO_COLOR", "1")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "file could not be read as CSV: unterminated quoted field starting on line 3",
        ));
}

#[test]
fn invalid_utf8_exits_two() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_binary_file("upload.csv", b"MeterID\n\xff\xfe\n");

    csv_guard!()
        .args(["validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid UTF-8"));
}

#[test]
fn missing_csv_exits_two() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();

    csv_guard!()
        .args(["validate", "does-not-exist.csv"])
        .arg(&template)
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn invalid_template_exits_two() {
    let fixture = TestFixture::new();
    let template = fixture.create_file(
        "bad.toml",
        "[[columns]]\nname = \"A\"\n\n[[columns]]\nname = \"A\"\n",
    );
    let csv = fixture.create_file("upload.csv", "A\n1\n");

    csv_guard!()
        .args(["validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("template rule 2 is invalid (A)"));
}

// =============================================================================
// Report content
// =============================================================================

#[test]
fn json_output_is_the_full_result() {
    let fixture = TestFixture::new();
    let template = fixture.create_utility_template();
    let csv = fixture.create_file(
        "upload.csv",
        "MeterID,Reading,Installed\nM-1,12.5,2024-01-15\nM-2,lots,2024-13-01\n",
    );

    let output = csv_guard!()
        .args(["validate", "--format", "json"])
        .arg(&csv)
        .arg(&template)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["total_rows"], 2);
    assert_eq!(json["missing_columns"], serde_json::json!(["Zone"]));
    assert_eq!(json["summary"], "2 rows, 3 errors");

    let rules: Vec<&str> = json["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["rule"].as_str().unwrap())
        .collect();
    assert_eq!(rules, vec!["missing_column", "data_type", "data_type"]);
    assert!(json["findings"][0]["row"].is_null());
    assert_eq!(json["findings"][1]["row"], 2);
    assert_eq!(json["findings"][1]["value"], "lots");
}

#[test]
fn json_template_file_is_supported() {
    let fixture = TestFixture::new();
    let template = fixture.create_file(
        "meters.json",
        r#"{"version": "1", "columns": [{"name": "MeterID", "required": true}]}"#,
    );
    let csv = fixture.create_file("upload.csv", "MeterID\n\n");

    csv_guard!()
        .args(["--color", "never", "validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("0 rows, 0 errors"));
}

#[test]
fn output_flag_writes_report_file() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID\nA1\nA1\n");
    let report = fixture.path().join("report.json");

    csv_guard!()
        .args(["validate", "--format", "json", "--output"])
        .arg(&report)
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["summary"], "2 rows, 1 errors");
}

#[test]
fn parallel_flag_gives_identical_json() {
    let fixture = TestFixture::new();
    let template = fixture.create_utility_template();
    let mut csv = String::from("MeterID,Zone,Reading\n");
    for i in 0..200 {
        let id = if i % 9 == 0 { "SAME".to_string() } else { format!("M-{i}") };
        let zone = if i % 4 == 0 { "Up" } else { "West" };
        csv.push_str(&format!("{id},{zone},{i}\n"));
    }
    let csv = fixture.create_file("upload.csv", &csv);

    let run = |parallel: bool| {
        let mut cmd = csv_guard!();
        cmd.args(["validate", "--format", "json"]).arg(&csv).arg(&template);
        if parallel {
            cmd.arg("--parallel");
        }
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(false), run(true));
}

#[test]
fn verbose_text_shows_notes() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID\nA1\nA1\n");

    csv_guard!()
        .args(["--color", "never", "-v", "validate"])
        .arg(&csv)
        .arg(&template)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("notes: Serial number printed on the meter"));
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    let fixture = TestFixture::new();
    let template = fixture.create_meter_template();
    let csv = fixture.create_file("upload.csv", "MeterID\nA1\n");

    let output = csv_guard!()
        .args(["-v", "--log-format", "json", "validate", "--format", "json"])
        .arg(&csv)
        .arg(&template)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_valid"], true);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation finished"));
}
