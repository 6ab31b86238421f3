//! Integration tests for the lytc CLI

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PACKAGE_LIST: &str = "\
[gcc]
version = 9.2.0
repo = https://example.org/gcc/

[binutils]
version = 2.33
repo = https://example.org/binutils/

[newlib]
version = 3.1.0
repo = https://example.org/newlib/

[nasm]
version = 2.14
repo = https://example.org/nasm/

[coreutils]
version = 8.31
repo = https://example.org/coreutils/

[dash]
version = 0.5.10
repo = https://example.org/dash/
";

/// `lytc --root <root>` with no `LYTC_*` or `RUST_LOG` leaking in
fn base_command(root: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lytc"));
    command.arg("--root").arg(root).env_remove("RUST_LOG");
    for var in [
        "LYTC_OUTPUT",
        "LYTC_COLOR",
        "LYTC_PROFILE",
        "LYTC_TARGET",
        "LYTC_PACKAGE_LIST",
        "LYTC_ROOT",
    ] {
        command.env_remove(var);
    }
    command
}

/// Run with an explicit `--config` that does not exist
fn lytc_missing_settings(root: &Path, args: &[&str]) -> Output {
    base_command(root)
        .arg("--config")
        .arg(root.join("no-such-settings.toml").as_os_str())
        .args(args)
        .output()
        .expect("Failed to execute lytc")
}

/// Run against `root` with the user settings dir redirected into it
fn lytc(root: &Path, args: &[&str]) -> Output {
    lytc_with_env(root, args, &[])
}

fn lytc_with_env(root: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    base_command(root)
        .args(args)
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .env("HOME", root)
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to execute lytc")
}

fn toolchain_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("packages.list"), PACKAGE_LIST).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_lytc"))
        .arg("--version")
        .output()
        .expect("Failed to execute lytc");

    assert!(output.status.success());
    assert!(stdout(&output).contains("lytc"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_lytc"))
        .arg("--help")
        .output()
        .expect("Failed to execute lytc");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Resolve Lyos cross-toolchain paths"));
    assert!(out.contains("packages"));
    assert!(out.contains("env"));
}

#[test]
fn test_env_shell_exports() {
    let dir = toolchain_dir();
    let output = lytc(dir.path(), &["env"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("export TARGET='i686-pc-lyos'\n"));
    assert!(out.contains("export GCC_VERSION='gcc-9.2.0'\n"));
    assert!(out.contains(
        "export GCC_TARBALL_URL='https://example.org/gcc/gcc-9.2.0/gcc-9.2.0.tar.bz2'\n"
    ));
    assert!(out.contains(
        "export NASM_TARBALL_URL='https://example.org/nasm/2.14/nasm-2.14.tar.gz'\n"
    ));
    assert!(out.contains("export SYSROOT="));
}

#[test]
fn test_env_json_minimal_profile() {
    let dir = toolchain_dir();
    let output = lytc(dir.path(), &["--json", "--profile", "minimal", "env"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value["BINUTILS_TARBALL_URL"],
        "https://example.org/binutils/binutils-2.33.tar.bz2"
    );
    assert!(value.get("SYSROOT").is_none());
    assert!(value.get("DASH_VERSION").is_none());
}

#[test]
fn test_show_unknown_package_fails() {
    let dir = toolchain_dir();
    let output = lytc(dir.path(), &["show", "llvm"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown package: llvm"));
}

#[test]
fn test_show_package_json() {
    let dir = toolchain_dir();
    let output = lytc(dir.path(), &["--json", "show", "binutils"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["versioned_name"], "binutils-2.33");
    assert_eq!(value["tarball_name"], "binutils-2.33.tar.bz2");
}

#[test]
fn test_missing_package_list_fails_fast() {
    let dir = TempDir::new().unwrap();
    let output = lytc(dir.path(), &["env"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("file not found"));
}

#[test]
fn test_missing_field_fails_fast() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("packages.list"),
        "[binutils]\nversion = 2.33\nrepo = r/\n",
    )
    .unwrap();
    let output = lytc(dir.path(), &["check"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("missing required field: [gcc] version"));
}

#[test]
fn test_explicit_missing_settings_file_fails() {
    let dir = toolchain_dir();
    let output = lytc_missing_settings(dir.path(), &["check"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no-such-settings.toml"));
}

#[test]
fn test_init_then_check() {
    let dir = TempDir::new().unwrap();

    let output = lytc(dir.path(), &["init"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(dir.path().join("packages.list").exists());

    let output = lytc(dir.path(), &["init"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("refusing to overwrite"));

    let output = lytc(dir.path(), &["check"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("6 packages resolved for the full profile"));
}

#[test]
fn test_env_vars_below_flags() {
    let dir = toolchain_dir();

    let output = lytc_with_env(dir.path(), &["show", "nasm"], &[("LYTC_OUTPUT", "json")]);
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["versioned_name"], "nasm-2.14");

    let output = lytc_with_env(
        dir.path(),
        &["env", "--format", "make"],
        &[("LYTC_OUTPUT", "json"), ("LYTC_TARGET", "x86_64-pc-lyos")],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("TARGET := x86_64-pc-lyos\n"));
}

#[test]
fn test_json_mode_reports_error_once() {
    let dir = toolchain_dir();
    let output = lytc(dir.path(), &["--json", "show", "llvm"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert_eq!(err.matches("unknown package: llvm").count(), 1, "{err}");
    for line in err.lines().filter(|line| !line.is_empty()) {
        assert!(serde_json::from_str::<serde_json::Value>(line).is_ok(), "{line}");
    }
}

#[test]
fn test_paths_without_package_list() {
    let dir = TempDir::new().unwrap();
    let output = lytc(dir.path(), &["--json", "--profile", "minimal", "paths"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let prefix = dir.path().join("local");
    assert_eq!(value["prefix"], prefix.display().to_string());
    assert!(value["sysroot"].is_null());
}

#[test]
fn test_color_always_styles_piped_output() {
    let dir = toolchain_dir();

    let output = lytc(dir.path(), &["--color", "always", "check"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("\u{1b}["));

    let output = lytc(dir.path(), &["--color", "always", "packages"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("\u{1b}["));

    let output = lytc(dir.path(), &["--color", "never", "check"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!stdout(&output).contains("\u{1b}["));
}
