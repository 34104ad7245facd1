//! Binary smoke tests that never reach the external generators

use std::process::{Command, Output};

fn rn_starter(args: &[&str], cwd: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rn-starter"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RN_STARTER_CONFIG")
        .output()
        .expect("failed to run rn-starter")
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = rn_starter(&["--version"], dir.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_template_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = rn_starter(&["-n", "demo", "-t", "expo-classic"], dir.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_name_flag_fails_before_scaffolding() {
    let dir = tempfile::tempdir().unwrap();
    let output = rn_starter(
        &["-n", "bad name", "-t", "bare", "-l", "javascript", "--skip-checks"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid project name"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rn-starter.yaml"), "package_manager: pnpm\n").unwrap();
    let output = rn_starter(
        &["-n", "demo", "-t", "bare", "-l", "javascript", "--skip-checks"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
    assert!(!dir.path().join("demo").exists());
}
