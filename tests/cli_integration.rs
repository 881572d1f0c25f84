//! Integration tests that run the CLI binary.
//!
//! Every test scrubs the service API keys so no network request can happen:
//! with no keys, the fallback chain is empty and evaluation is local-only.

use std::io::Write;
use std::process::Stdio;

fn bin() -> std::process::Command {
    let bin = env!("CARGO_BIN_EXE_ansr");
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("WOLFRAMALPHA_INSTANT_CALCULATOR_API_KEY");
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("WOLFRAMALPHA_LLM_API_KEY");
    cmd.env_remove("ANSR_ANGLE_MODE");
    cmd
}

/// Run from a temp dir so dotenv() won't load .env from the project root.
fn bin_in_temp(tmp: &tempfile::TempDir) -> std::process::Command {
    let mut cmd = bin();
    cmd.current_dir(tmp.path());
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn cli_help_succeeds_and_outputs_examples() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ansr"));
    assert!(stdout.contains("EXAMPLES"), "expected examples in help text");
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("ansr"));
}

#[test]
fn evaluates_simple_arithmetic() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["-e", "2+2"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "4");
}

#[test]
fn trig_defaults_to_degrees() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["-e", "sin(30)"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0.5");
}

#[test]
fn angle_mode_flag_switches_to_radians() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["--angle-mode", "rad", "-e", "sin(pi/2)"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1");
}

#[test]
fn angle_mode_env_is_respected() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .env("ANSR_ANGLE_MODE", "rad")
        .args(["-e", "sin(pi/2)"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1");
}

#[test]
fn invalid_angle_mode_flag_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["--angle-mode", "grad", "-e", "1"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("angle-mode"),
        "expected angle mode error message"
    );
}

#[test]
fn complex_results_render_with_i() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["-e", "(1/4-3/4*i)^4"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0.109375 + 0.375i");
}

#[test]
fn ans_without_history_reads_as_zero() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["-e", "Ans+5"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "5");
}

#[test]
fn unsolvable_expression_without_keys_reports_failure() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["-e", "what is six times seven"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when no service key is set"
    );
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Error: unable to compute."),
        "expected the failure message, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn blank_expression_is_a_quiet_no_op() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .args(["-e", "   "])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn dash_reads_expression_from_stdin() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin_in_temp(&tmp)
        .args(["-e", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(b"6*7\n")
        .expect("write to stdin");
    let output = child.wait_with_output().expect("wait for output");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "42");
}

#[test]
fn config_command_reports_key_status() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Angle mode:"));
    assert!(stdout.contains("not set"));
}

#[test]
fn config_command_sees_configured_key() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin_in_temp(&tmp)
        .env("GEMINI_API_KEY", "test-key")
        .arg("config")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("set ✓"));
}
