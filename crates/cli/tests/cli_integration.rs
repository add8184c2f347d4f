use std::process::{Command, Output};

fn shortopt() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shortopt"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    shortopt()
        .args(args)
        .output()
        .expect("failed to run shortopt")
}

fn assert_success(out: &Output) {
    assert!(
        out.status.success(),
        "shortopt failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
}

#[test]
fn help_works() {
    let out = run(&["--help"]);
    assert_success(&out);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("shortopt") && stdout.contains("--flags") && stdout.contains("--stop"),
        "unexpected help output:\n{stdout}"
    );
}

#[test]
fn reports_consumed_flags_and_rest() {
    let out = run(&["--flags", "ab", "--", "-a", "-b", "pos1"]);
    assert_success(&out);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "seen: a b\nrest: pos1\n"
    );
}

#[test]
fn stop_flag_is_not_consumed() {
    let out = run(&["-f", "a", "-s", "x", "--json", "--", "-a", "-x", "pos"]);
    assert_success(&out);
    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is not JSON");
    assert_eq!(report["seen"], serde_json::json!(["a", "x"]));
    assert_eq!(report["cursor"], 1);
    assert_eq!(report["rest"], serde_json::json!(["-x", "pos"]));
}

#[test]
fn empty_arguments_report_nothing() {
    let out = run(&["--flags", "a"]);
    assert_success(&out);
    assert_eq!(String::from_utf8_lossy(&out.stdout), "seen:\nrest:\n");
}

#[test]
fn invalid_option_fails() {
    let out = run(&["--flags", "a", "--", "-a", "-z"]);
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("invalid option '-z'"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn control_character_is_escaped() {
    let out = run(&["--", "-\x07"]);
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("invalid option '-\\x07'"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn bidi_override_is_escaped() {
    let out = run(&["--", "-\u{202e}"]);
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("invalid option '-\\xe2\\x80\\xae'") && !stderr.contains('\u{202e}'),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn duplicate_registration_fails() {
    let out = run(&["--flags", "ab", "--stop", "b"]);
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("duplicate option '-b'"),
        "unexpected stderr:\n{stderr}"
    );
}
