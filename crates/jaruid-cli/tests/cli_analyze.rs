use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn jaruid_cmd() -> Command {
    Command::cargo_bin("jaruid").unwrap()
}

fn write_test_jar(path: &std::path::Path) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options: zip::write::FileOptions<()> = zip::write::FileOptions::default();
    writer.start_file("pom.xml", options).unwrap();
    writer
        .write_all(b"<project><groupId>org.example</groupId><artifactId>demo</artifactId><version>1.0.0</version></project>")
        .unwrap();
    writer.finish().unwrap();
}

#[test]
fn analyze_missing_path_fails() {
    let tmp = TempDir::new().unwrap();

    jaruid_cmd()
        .current_dir(tmp.path())
        .args(["analyze", "--jars", "does-not-exist.jar", "--offline"])
        .assert()
        .failure();
}

#[test]
fn analyze_offline_writes_a_report() {
    let tmp = TempDir::new().unwrap();
    let jar_path = tmp.path().join("demo-1.0.0.jar");
    write_test_jar(&jar_path);

    let report_path = tmp.path().join("report.json");

    jaruid_cmd()
        .current_dir(tmp.path())
        .args([
            "analyze",
            "--jars",
            jar_path.to_str().unwrap(),
            "--offline",
            "--skip-not-found",
            "--report-file",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("report written to"));

    let content = std::fs::read_to_string(&report_path).unwrap();
    assert!(content.contains("\"jarResults\""));
    assert!(content.contains("demo-1.0.0.jar"));
}

#[test]
fn analyze_with_no_jars_found_in_empty_dir_succeeds_quietly() {
    let tmp = TempDir::new().unwrap();
    let empty_dir = tmp.path().join("empty");
    std::fs::create_dir(&empty_dir).unwrap();

    jaruid_cmd()
        .current_dir(tmp.path())
        .args(["analyze", "--jars", empty_dir.to_str().unwrap(), "--offline"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no jar files found"));
}
