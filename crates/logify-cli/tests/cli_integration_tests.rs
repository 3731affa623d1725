//! CLI integration tests
//!
//! Run the built binary against temporary base directories and check its
//! stdout, exit status and the files it leaves behind.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], cwd: &Path) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_logify-cli");
    Command::new(cli_bin)
        .current_dir(cwd)
        .env_remove("LOGIFY_LEVEL")
        .env_remove("LOGIFY_CONTEXT")
        .env_remove("LOGIFY_WITH_TIME")
        .env_remove("LOGIFY_LOG_DIR_NAME")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_emit_plain_line_without_time() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap();

    let output = run(
        &[
            "emit", "ready", "--level", "warn", "--context", "boot", "--no-time", "--plain",
            "--base-dir", base,
        ],
        temp_dir.path(),
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "[WARN] <ctx: boot>ready\n");
    assert!(!temp_dir.path().join("debug_logs").exists());
}

#[test]
fn test_emit_default_colour() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap();

    let output = run(&["emit", "hello", "--no-time", "--base-dir", base], temp_dir.path());

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{1b}[32m[INFO] hello\u{1b}[39m\n");
}

#[test]
fn test_emit_to_file_writes_level_directory() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap();

    let output = run(
        &[
            "emit", "disk full", "--level", "error", "--file", "--plain", "--base-dir", base,
            "--log-dir-name", "logs",
        ],
        temp_dir.path(),
    );
    assert!(output.status.success());

    let level_dir = temp_dir.path().join("logs").join("error");
    let entries: Vec<_> = fs::read_dir(&level_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let content = fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
    assert!(content.ends_with("[ERROR] disk full\n"));
    assert!(!content.contains('\u{1b}'));
}

#[test]
fn test_emit_below_threshold_is_silent() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap();

    let output = run(
        &[
            "emit", "noise", "--level", "debug", "--threshold", "warn", "--file", "--base-dir",
            base,
        ],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(!temp_dir.path().join("debug_logs").exists());
}

#[test]
fn test_emit_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logify.toml");
    fs::write(
        &config_path,
        "level = \"error\"\ncontext = \"cfg\"\nwith_time = false\n",
    )
    .unwrap();
    let base = temp_dir.path().to_str().unwrap();
    let config = config_path.to_str().unwrap();

    let quiet = run(
        &["emit", "skipped", "--plain", "--config", config, "--base-dir", base],
        temp_dir.path(),
    );
    let loud = run(
        &[
            "emit", "kept", "--level", "error", "--plain", "--config", config, "--base-dir", base,
        ],
        temp_dir.path(),
    );

    assert!(stdout(&quiet).is_empty());
    assert_eq!(stdout(&loud), "[ERROR] <ctx: cfg>kept\n");
}

#[test]
fn test_path_for_explicit_date() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap();

    let output = run(
        &["path", "--level", "warn", "--date", "2024-03-05", "--base-dir", base],
        temp_dir.path(),
    );

    assert!(output.status.success());
    let expected = temp_dir
        .path()
        .join("debug_logs")
        .join("warn")
        .join("20240305.log");
    assert_eq!(stdout(&output).trim_end(), expected.display().to_string());
}

#[test]
fn test_path_resolves_project_root() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Cargo.toml"), "[package]\n").unwrap();
    let nested = temp_dir.path().join("src").join("bin");
    fs::create_dir_all(&nested).unwrap();

    let output = run(&["path", "--date", "2024-12-31"], &nested);

    assert!(output.status.success());
    assert!(stdout(&output)
        .trim_end()
        .ends_with(&format!("debug_logs{0}info{0}20241231.log", std::path::MAIN_SEPARATOR)));
}

#[test]
fn test_invalid_level_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&["emit", "x", "--level", "loud"], temp_dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("loud"));
}

#[test]
fn test_unwritable_log_dir_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("debug_logs"), "not a directory").unwrap();
    let base = temp_dir.path().to_str().unwrap();

    let output = run(&["emit", "x", "--file", "--base-dir", base], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}
