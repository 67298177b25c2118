//! E2E tests for command-line argument workflows

use std::process::Command;

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_roman");

fn run_command(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"))
}

#[test]
fn test_single_number() {
    let output = run_command(&["1679"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "MDCLXXIX");
}

#[test]
fn test_multiple_numbers() {
    let output = run_command(&["1", "4", "90", "2378"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "I\nIV\nXC\nMMCCCLXXVIII\n"
    );
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = run_command(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_non_integer_argument() {
    let output = run_command(&["twelve"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_PARSE"));
    assert!(stderr.contains("twelve"));
}

#[test]
fn test_out_of_range_rejected_by_default() {
    let output = run_command(&["4310"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"));
    assert!(stderr.contains("4310"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_negative_rejected_by_default() {
    let output = run_command(&["-1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"));
}

#[test]
fn test_permissive_mode() {
    let output = run_command(&["--permissive", "4310"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "MMMMCCCX");
    // Non-standard output is flagged on stderr
    assert!(String::from_utf8_lossy(&output.stderr).contains("no standard numeral"));
}

#[test]
fn test_permissive_zero_prints_empty_line() {
    let output = run_command(&["--permissive", "0"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
}

#[test]
fn test_verbose_logs_conversions() {
    let output = run_command(&["-v", "78"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "LXXVIII");
    assert!(String::from_utf8_lossy(&output.stderr).contains("converted"));
}

#[test]
fn test_partial_output_before_failure() {
    let output = run_command(&["10", "5000", "1"]);

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "X\n");
}
