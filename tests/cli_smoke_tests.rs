//! CLI smoke tests - verify the command-line contract of the compiled binary
//!
//! Only paths that never reach `wpctl` or the chooser are exercised here:
//! - Help flags print the fixed usage text and exit 0
//! - Anything else prints "Invalid flag" and exits 1

use std::process::Command;

/// Helper to get the path to the compiled soundwrap binary
fn soundwrap_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_soundwrap"))
}

fn assert_help(flag: &str) {
    let output = soundwrap_bin()
        .arg(flag)
        .output()
        .expect("Failed to run soundwrap");

    assert!(
        output.status.success(),
        "soundwrap {flag} should exit successfully"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "Help should be four lines: {stdout}");
    assert_eq!(lines[0], "Usage: soundwrap");
    assert!(stdout.contains("wpctl set-default"));
}

#[test]
fn cli_short_help_works() {
    assert_help("-h");
}

#[test]
fn cli_long_help_works() {
    assert_help("--help");
}

#[test]
fn cli_invalid_flag_exits_one() {
    let output = soundwrap_bin()
        .arg("--bogus")
        .output()
        .expect("Failed to run soundwrap with invalid flag");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Invalid flag");
}

#[test]
fn cli_version_is_not_a_flag() {
    let output = soundwrap_bin()
        .arg("--version")
        .output()
        .expect("Failed to run soundwrap --version");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_positional_argument_is_invalid() {
    let output = soundwrap_bin()
        .arg("set-default")
        .output()
        .expect("Failed to run soundwrap with positional argument");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Invalid flag"));
}

#[test]
fn cli_double_dash_is_invalid() {
    let output = soundwrap_bin()
        .arg("--")
        .output()
        .expect("Failed to run soundwrap --");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Invalid flag");
}

#[test]
fn cli_help_ignores_trailing_arguments() {
    let output = soundwrap_bin()
        .args(["-h", "extra"])
        .output()
        .expect("Failed to run soundwrap -h extra");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("Usage: soundwrap"));
}
