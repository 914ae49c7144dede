use assert_cmd::Command;
use predicates::prelude::*;

fn cxxlex_cmd() -> Command {
    Command::cargo_bin("cxxlex").unwrap()
}

#[test]
fn test_analyze_file_prints_report_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("main.cpp");
    std::fs::write(&source, "int x = 42; // answer\n").unwrap();
    let saved = dir.path().join("tokens.txt");

    cxxlex_cmd()
        .arg("analyze")
        .arg(&source)
        .arg("--save")
        .arg(&saved)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Developed for Compiler Design Course\n"))
        .stdout(predicate::str::contains("   1 | int                 | KEYWORD\n"))
        .stdout(predicate::str::contains("Total Tokens: 5\n"))
        .stdout(predicate::str::contains("answer").not());

    let report = std::fs::read_to_string(&saved).unwrap();
    assert!(report.contains("Punctuations: 1\n"));
}

#[test]
fn test_analyze_stdin_json() {
    let dir = tempfile::tempdir().unwrap();

    let assert = cxxlex_cmd()
        .current_dir(dir.path())
        .args(["analyze", "-", "--json", "--no-save"])
        .write_stdin("a <<= b;")
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["tokens"][1]["value"], "<<=");
    assert_eq!(json["tokens"][1]["type"], "OPERATOR");
    assert_eq!(json["counts"]["Total Tokens"], 4);
    assert!(!dir.path().join("tokens.txt").exists());
}

#[test]
fn test_analyze_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("report.json");
    std::fs::write(&config, r#"{"banner": [], "include_unknown": false}"#).unwrap();

    cxxlex_cmd()
        .current_dir(dir.path())
        .args(["analyze", "--no-save", "--config"])
        .arg(&config)
        .write_stdin("@")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Tokens:\n"))
        .stdout(predicate::str::contains("Unknowns").not());
}

#[test]
fn test_analyze_missing_file() {
    cxxlex_cmd()
        .args(["analyze", "/nonexistent/input.cpp", "--no-save"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read /nonexistent/input.cpp"));
}

#[test]
fn test_analyze_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("report.json");
    std::fs::write(&config, "{ not json").unwrap();

    cxxlex_cmd()
        .args(["analyze", "--no-save", "--config"])
        .arg(&config)
        .write_stdin("int x;")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Internal error: Failed to parse config file"));
}

#[test]
fn test_vocab() {
    cxxlex_cmd()
        .args(["vocab", "--category", "punctuation"])
        .assert()
        .success()
        .stdout("Punctuations (12):\n( ) { } [ ] ; : , . ? #\n");

    cxxlex_cmd()
        .arg("vocab")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keywords (97):"))
        .stdout(predicate::str::contains("Operators (36):"));
}
