use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn mscan(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mscan"))
        .args(args)
        .env("MSCAN_CONFIG", config_dir.join("config.json"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn scan_prints_tokens_stats_and_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ok.lang");
    fs::write(&source, "start\nTotal = 1 ;\nfinish\n").unwrap();

    let output = mscan(&["scan", source.to_str().unwrap()], dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("<START, \"start\", Line: 1, Col: 1>"));
    assert!(stdout.contains("<IDENTIFIER, \"Total\", Line: 2, Col: 1>"));
    assert!(stdout.contains("Total Tokens: 6"));
    assert!(stdout.contains("--- Symbol Table ---"));
    assert!(output.stderr.is_empty());
}

#[test]
fn diagnostics_go_to_stderr_with_exit_code_one() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("bad.lang");
    fs::write(&source, "X @ \"open").unwrap();

    let output = mscan(&["scan", source.to_str().unwrap(), "--no-stats", "--no-symbols"], dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("<IDENTIFIER, \"X\", Line: 1, Col: 1>"));
    assert!(!stdout.contains("--- Symbol Table ---"));
    assert!(stderr.contains("Error: [Invalid Character] at 1:3 - Lexeme: '@' -> Unexpected character"));
    assert!(stderr.contains("Unterminated string"));
    assert!(stderr.contains("--- Errors Found ---"));
}

#[test]
fn json_output_is_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ok.lang");
    fs::write(&source, "Foo Foo").unwrap();

    let output = mscan(&["scan", source.to_str().unwrap(), "--format", "json"], dir.path());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(value["symbols"]["Foo"]["frequency"], 2);
    assert_eq!(value["complete"], true);
}

#[test]
fn missing_source_is_a_setup_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.lang");

    let output = mscan(&["scan", missing.to_str().unwrap()], dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("file not found"));
    assert!(output.stdout.is_empty());
}

#[test]
fn config_file_sets_identifier_limit() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.json"), r#"{ "max_identifier_len": 3 }"#).unwrap();
    let source = dir.path().join("ids.lang");
    fs::write(&source, "Abc Abcd").unwrap();

    let output = mscan(&["scan", source.to_str().unwrap(), "--quiet"], dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("[ID Length] at 1:5 - Lexeme: 'Abcd' -> Exceeds 3 characters"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let output = mscan(&["config", "init"], dir.path());
    assert!(output.status.success());

    let written = fs::read_to_string(dir.path().join("config.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["max_identifier_len"], 30);
    assert_eq!(value["format"], "text");
}
