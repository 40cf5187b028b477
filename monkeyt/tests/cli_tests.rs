//! End-to-end tests for the `monkeyt` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn test_run_evaluates_file() {
    let file = source_file("5 + 5 + 5 + 5 - 10\n");

    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["run"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_run_with_ast_emit() {
    let file = source_file("-a * b");

    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["run", "--emit", "ast"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("((-a) * b)\n");
}

#[test]
fn test_run_reports_parse_errors() {
    let file = source_file("let = 5;");

    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["run"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expected next token to be 'identifier'",
        ));
}

#[test]
fn test_tokens_command() {
    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["tokens", "const five = 5;"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Const(\"const\")"))
        .stdout(predicate::str::contains("Integer(\"5\")"));
}

#[test]
fn test_repl_evaluates_piped_input() {
    Command::cargo_bin("monkeyt")
        .unwrap()
        .arg("repl")
        .write_stdin("2 * (5 + 10)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("30"))
        .stdout(predicate::str::contains("Welcome to Monkey"));
}

#[test]
fn test_repl_no_banner() {
    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["repl", "--no-banner"])
        .write_stdin("1 + 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not())
        .stdout(predicate::str::contains("2"));
}

#[test]
fn test_repl_lists_parse_errors_and_continues() {
    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["repl", "--no-banner"])
        .write_stdin("let = 5;\n40 + 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Expected next token to be 'identifier'",
        ))
        .stdout(predicate::str::contains("42"));
}

#[test]
fn test_repl_ast_mode() {
    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["repl", "--no-banner", "--ast"])
        .write_stdin("3 + 4 * 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 + (4 * 5))"));
}

#[test]
fn test_explicit_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "prompt = \"monkey> \"\nbanner = false").unwrap();

    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["--config"])
        .arg(config.path())
        .args(["repl"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("monkey> "))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_bad_config_file_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "prompt = [broken").unwrap();

    Command::cargo_bin("monkeyt")
        .unwrap()
        .args(["--config"])
        .arg(config.path())
        .args(["repl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
