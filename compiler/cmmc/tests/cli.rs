//! Tests of the `cmm` binary.

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn cmm() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmm"));
    cmd.env_remove("RUST_LOG").env_remove("CMM_PRINT_RESULT");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn program(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".cmm")
        .tempfile()
        .unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn run_prints_output_and_result() {
    let file = program("x = 2\nprint x\n(x * 21)");
    let output = cmm().arg("run").arg(file.path()).output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "2 42");
}

#[test]
fn quiet_flag_and_env_suppress_result() {
    let file = program("print 1\n5");

    let output = cmm().args(["run", "-q"]).arg(file.path()).output().unwrap();
    assert_eq!(stdout(&output), "1 ");

    let output = cmm()
        .arg("run")
        .arg(file.path())
        .env("CMM_PRINT_RESULT", "0")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "1 ");
}

#[test]
fn bare_path_is_run() {
    let file = program("print 3 % 2");
    let output = cmm().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 ");
}

#[test]
fn reads_stdin() {
    let mut child = cmm()
        .args(["run", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"print 4, 5")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4 5 ");
}

#[test]
fn syntax_errors_exit_nonzero() {
    let file = program("x = 1 2");
    let output = cmm().arg("run").arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Syntax error, didn't expect 2\n");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.cmm");
    let output = cmm().arg("run").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"), "{}", stderr(&output));
}

#[test]
fn lex_and_parse_dumps() {
    let file = program("print 1 + 2");

    let output = cmm().arg("lex").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("(5 tokens)"), "{text}");
    assert!(text.contains("  PRINT \"print\" @ 0..5"), "{text}");

    let output = cmm().arg("parse").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("  print (1 + 2)\n"));
}

#[test]
fn usage_and_version() {
    let output = cmm().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: cmm"));

    let output = cmm().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("cmm {}\n", env!("CARGO_PKG_VERSION")));

    let output = cmm().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}
