//! Integration tests for the gridcalc binary

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn run_command(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gridcalc"))
        // Tests must be deterministic and not depend on a user's ~/.config/gridcalc/config.toml.
        .arg("--no-config")
        .args(args)
        .env_remove("GRIDCALC_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
    }
    let output = child.wait_with_output().expect("Failed to wait for command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn write_sheet(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const EXAMPLE: &str = "a1: 1\na2: 2\nb1: 3\nb2: =SUM(a1, a2)\n";

#[test]
fn test_render_grd_as_table() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "sheet.grd", EXAMPLE);

    let (stdout, _, code) = run_command(&[sheet.to_str().unwrap()], None);
    assert_eq!(stdout, "  | a | b\n1 | 1 | 3\n2 | 2 | 3\n");
    assert_eq!(code, 0);
}

#[test]
fn test_render_csv_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "sheet.csv", "1,3\n2,\"=AVG(a1, a2)\"\n");

    let (stdout, _, code) = run_command(&["-f", "csv", sheet.to_str().unwrap()], None);
    assert_eq!(stdout, "1,3\n2,1.50\n");
    assert_eq!(code, 0);
}

#[test]
fn test_render_json_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(
        dir.path(),
        "sheet.json",
        r#"{"cells": {
            "a1": {"value": "1", "type": "primitive"},
            "a2": {"value": "2", "type": "primitive"},
            "b1": {"value": "3", "kind": "literal"},
            "b2": {"value": "=MUL(a1, a2)", "type": "formula"}
        }}"#,
    );

    let (stdout, _, code) = run_command(&["-f", "csv", sheet.to_str().unwrap()], None);
    assert_eq!(stdout, "1,3\n2,2\n");
    assert_eq!(code, 0);
}

#[test]
fn test_render_markdown_from_stdin() {
    let (stdout, _, code) = run_command(&["--format", "markdown", "-"], Some(EXAMPLE));
    assert!(stdout.contains("|   | a | b |"));
    assert!(stdout.contains("| 2 | 2 | 3 |"));
    assert_eq!(code, 0);
}

#[test]
fn test_rounding_flag() {
    let input = "a1: 1\na2: 0\na3: 0\na4: 0\na5: 0\na6: 0\na7: 0\na8: 0\n\
                 a9: =AVG(a1, a2, a3, a4, a5, a6, a7, a8)\n";

    let (stdout, _, _) = run_command(&["-f", "csv", "-"], Some(input));
    assert!(stdout.ends_with("0.13\n"));

    let (stdout, _, _) = run_command(&["-f", "csv", "--rounding", "half-even", "-"], Some(input));
    assert!(stdout.ends_with("0.12\n"));
}

#[test]
fn test_config_file_sets_format() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "sheet.grd", EXAMPLE);
    let config = write_sheet(dir.path(), "config.toml", "format = \"csv\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_gridcalc"))
        .args(["--config", config.to_str().unwrap(), sheet.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1,3\n2,3\n");
    assert!(output.status.success());
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(dir.path(), "sheet.grd", EXAMPLE);
    let out = dir.path().join("out.csv");

    let (stdout, _, code) = run_command(
        &["-f", "csv", "-o", out.to_str().unwrap(), sheet.to_str().unwrap()],
        None,
    );
    assert_eq!(stdout, "");
    assert_eq!(code, 0);
    assert_eq!(std::fs::read_to_string(out).unwrap(), "1,3\n2,3\n");
}

#[test]
fn test_cycle_exit_code() {
    let (stdout, stderr, code) = run_command(&["-"], Some("a1: =SUM(a1)\n"));
    assert_eq!(stdout, "");
    assert!(stderr.contains("Error: Failed to render sheet: Circular dependency detected among a1"));
    assert_eq!(code, 1);
}

#[test]
fn test_division_by_zero_exit_code() {
    let input = "a1: 1\na2: 2\nb1: 3\nb2: =AVG()\n";
    let (_, stderr, code) = run_command(&["-"], Some(input));
    assert!(stderr.contains("Division by zero in b2"));
    assert_eq!(code, 1);
}

#[test]
fn test_unknown_operator_reports_line() {
    let input = "a1: 1\na2: 2\nb1: 3\nb2: =FOO(a1, a2)\n";
    let (_, stderr, code) = run_command(&["-"], Some(input));
    assert!(stderr.contains("line 4"));
    assert!(stderr.contains("Unknown operator 'FOO'"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_file() {
    let (_, stderr, code) = run_command(&["/nonexistent/sheet.grd"], None);
    assert!(stderr.contains("Failed to read /nonexistent/sheet.grd"));
    assert_eq!(code, 1);
}

#[test]
fn test_bad_format_flag() {
    let (_, stderr, code) = run_command(&["-f", "html", "-"], Some(EXAMPLE));
    assert!(stderr.contains("Unknown output format 'html'"));
    assert_eq!(code, 2);
}
