// privacy-brush/tests/cli_integration_tests.rs
//! Runs the `privacy-brush` binary end to end: stdin streaming, file modes,
//! command-line overrides, custom patterns, the summary and error exits.
//!
//! `XDG_CONFIG_HOME` points at an empty temp dir so a config file on the
//! host machine never leaks into the tests.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

const FLUTTER_OUTPUT: &str = "Found 4 connected devices:
  Windows (desktop) • windows • windows-x64    • Microsoft Windows [版本 10.0.19045.6456]
  Chrome (web)      • chrome  • web-javascript • Google Chrome 144.0.7559.60
  Edge (web)        • edge    • web-javascript • Microsoft Edge 144.0.3719.82
";

fn brush_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("privacy-brush"));
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("HOME", config_home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn strip_ansi(s: &str) -> String {
    let cleaned = strip_ansi_escapes_fn(s);
    String::from_utf8_lossy(&cleaned).to_string()
}

#[test]
fn test_stdin_is_masked_to_stdout() -> Result<()> {
    let home = TempDir::new()?;
    let assert = brush_cmd(&home).write_stdin(FLUTTER_OUTPUT).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("Microsoft Windows [版本 10.█.█████.████]"));
    assert!(stdout.contains("Google Chrome 144.█.████.██"));
    assert!(stdout.contains("Microsoft Edge 144.█.████.██"));
    assert_eq!(stdout.lines().count(), FLUTTER_OUTPUT.lines().count());
    Ok(())
}

#[test]
fn test_mask_char_and_no_preserve_first() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .args(["-m", "X", "--no-preserve-first"])
        .write_stdin("Google Chrome 144.0.7559.60")
        .assert()
        .success()
        .stdout("Google Chrome XXX.X.XXXX.XX");
    Ok(())
}

#[test]
fn test_custom_pattern_from_command_line() -> Result<()> {
    let home = TempDir::new()?;
    let input = "key sk-af75149812524eb08eb302bf9604c8e8 end";
    let expected = format!("key sk-{} end", "*".repeat(32));
    brush_cmd(&home)
        .args(["-m", "*", "-r", "/sk-([a-z0-9]{20,})/"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
    Ok(())
}

#[test]
fn test_invalid_custom_pattern_exits_with_error() -> Result<()> {
    let home = TempDir::new()?;
    let assert = brush_cmd(&home)
        .args(["-r", "/(unclosed/"])
        .write_stdin("anything")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
    let stderr = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stderr));
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
    assert!(stderr.contains("custom_1"), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn test_invalid_mask_char_exits_with_error() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .args(["-m", "ab"])
        .write_stdin("10.0.0.1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exactly one character"));
    Ok(())
}

#[test]
fn test_digit_mask_char_exits_with_error() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .args(["-m", "1"])
        .write_stdin("[Version 10.0.1.2]")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_list_patterns() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .arg("--list-patterns")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("windows_version")
                .and(predicate::str::contains("browser_version"))
                .and(predicate::str::contains("ip_address"))
                .and(predicate::str::contains("user_name_in_path"))
                .and(predicate::str::contains("uuid"))
                .and(predicate::str::contains("mac_address")),
        );
    Ok(())
}

#[test]
fn test_input_file_to_output_file() -> Result<()> {
    let home = TempDir::new()?;
    let mut input = NamedTempFile::new()?;
    input.write_all(b"host 192.168.10.20 at /Users/alice/work/\n")?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("masked.txt");

    brush_cmd(&home)
        .args(["-q", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output)?,
        "host ███.███.██.██ at /Users/█████/work/\n"
    );
    Ok(())
}

#[test]
fn test_input_file_to_stdout() -> Result<()> {
    let home = TempDir::new()?;
    let mut input = NamedTempFile::new()?;
    input.write_all(b"id 44444444-4444-4444-8444-444444444444")?;

    brush_cmd(&home)
        .arg("--input-file")
        .arg(input.path())
        .assert()
        .success()
        .stdout("id 44444444-████-4███-████-████████████");
    Ok(())
}

#[test]
fn test_stdin_to_output_file() -> Result<()> {
    let home = TempDir::new()?;
    let out_dir = TempDir::new()?;
    let output = out_dir.path().join("out.log");

    brush_cmd(&home)
        .arg("--output-file")
        .arg(&output)
        .write_stdin("mac 00:1A:2B:3C:4D:5E\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output)?, "mac ██:██:██:██:██:██\n");
    Ok(())
}

#[test]
fn test_summary_is_printed_to_stderr() -> Result<()> {
    let home = TempDir::new()?;
    let mut input = NamedTempFile::new()?;
    input.write_all(b"10.0.0.1 10.0.0.2 Edge 144.0.3719.82")?;

    let assert = brush_cmd(&home)
        .arg("--summary")
        .arg("-i")
        .arg(input.path())
        .assert()
        .success();
    let stderr = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stderr));

    assert!(stderr.contains("--- Redaction Summary ---"), "stderr was: {stderr}");
    assert!(stderr.contains("browser_version (1 occurrences)"), "stderr was: {stderr}");
    assert!(stderr.contains("ip_address (2 occurrences)"), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn test_summary_without_matches() -> Result<()> {
    let home = TempDir::new()?;
    let mut input = NamedTempFile::new()?;
    input.write_all(b"nothing to hide")?;

    let assert = brush_cmd(&home)
        .arg("--summary")
        .arg("-i")
        .arg(input.path())
        .assert()
        .success()
        .stdout("nothing to hide");
    let stderr = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stderr));
    assert!(stderr.contains("No redactions applied."), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn test_enable_only_browser_version() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .args(["-e", "browser_version"])
        .write_stdin("[Version 10.0.12345.6785] 192.168.0.1 Chrome 144.0.1234.56")
        .assert()
        .success()
        .stdout("[Version 10.0.12345.6785] 192.168.0.1 Chrome 144.█.████.██");
    Ok(())
}

#[test]
fn test_disable_patterns() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .args(["-x", "ip_address,uuid"])
        .write_stdin("192.168.0.1 11111111-1111-1111-8111-111111111111")
        .assert()
        .success()
        .stdout("192.168.0.1 11111111-1111-1111-8111-111111111111");
    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let home = TempDir::new()?;
    let mut config = NamedTempFile::new()?;
    writeln!(
        config,
        "mask_char: \"#\"\npreserve_first_part: false\ncustom_patterns:\n  - \"/password=(\\\\S+)/\""
    )?;

    brush_cmd(&home)
        .arg("--config")
        .arg(config.path())
        .write_stdin("password=hunter2 10.0.0.1")
        .assert()
        .success()
        .stdout("password=####### ##.#.#.#");
    Ok(())
}

// `dirs` only honours XDG_CONFIG_HOME on Linux.
#[cfg(target_os = "linux")]
#[test]
fn test_config_in_default_location_is_discovered() -> Result<()> {
    let home = TempDir::new()?;
    let dir = home.path().join("privacy-brush");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.yaml"), "mask_char: \"*\"\n")?;

    brush_cmd(&home)
        .write_stdin("10.0.0.1")
        .assert()
        .success()
        .stdout("**.*.*.*");
    Ok(())
}

#[test]
fn test_version_flag() -> Result<()> {
    let home = TempDir::new()?;
    brush_cmd(&home)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn test_verbose_logs_go_to_stderr_only() -> Result<()> {
    let home = TempDir::new()?;
    let assert = brush_cmd(&home)
        .arg("--verbose")
        .write_stdin("10.0.0.1")
        .assert()
        .success()
        .stdout("██.█.█.█");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("ip_address"), "stderr was: {stderr}");
    assert!(!stderr.contains("10.0.0.1"), "stderr was: {stderr}");
    Ok(())
}
