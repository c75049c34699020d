use std::{env, fs, path::Path, process::Command};

use tempfile::TempDir;

/// Команда без переменных окружения, влияющих на запуск.
fn skipdict() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skipdict"));
    cmd.env_remove("RUST_LOG");

    for (key, _) in env::vars_os() {
        if key.to_string_lossy().starts_with("SKIPDICT_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}

fn fixtures(
    dict: &str,
    text: &str,
) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dict.txt"), dict).unwrap();
    fs::write(dir.path().join("input.txt"), text).unwrap();
    dir
}

fn arg(
    dir: &Path,
    name: &str,
) -> String {
    dir.join(name).display().to_string()
}

#[test]
fn test_reports_unmatched_words() {
    let dir = fixtures("apple\nbanana\n", "Apple eats an Orange\n");

    let output = skipdict()
        .args([
            arg(dir.path(), "dict.txt"),
            arg(dir.path(), "input.txt"),
            "4".into(),
            "--seed".into(),
            "1".into(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Errors found:\n  - eats\n  - an\n  - Orange\n"
    );
}

#[test]
fn test_missing_arguments_fail() {
    let dir = fixtures("a\n", "a\n");

    let output = skipdict()
        .arg(arg(dir.path(), "dict.txt"))
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_zero_height_fails() {
    let dir = fixtures("a\n", "a\n");

    for height in ["0", "-3", "tall"] {
        let output = skipdict()
            .args([arg(dir.path(), "dict.txt"), arg(dir.path(), "input.txt")])
            .arg(height)
            .output()
            .unwrap();

        assert!(!output.status.success(), "height {height} accepted");
    }
}

#[test]
fn test_missing_dictionary_file_fails() {
    let dir = fixtures("a\n", "a\n");

    let output = skipdict()
        .args([
            arg(dir.path(), "nope.txt"),
            arg(dir.path(), "input.txt"),
            "3".into(),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unable to open the dictionary file"));
}

#[test]
fn test_strict_flag_rejects_empty_line() {
    let dir = fixtures("a\n\nb\n", "a b\n");

    let output = skipdict()
        .args([
            arg(dir.path(), "dict.txt"),
            arg(dir.path(), "input.txt"),
            "3".into(),
            "--strict".into(),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Dictionary line 2 is empty"));
}

#[test]
fn test_stats_printed_to_stderr() {
    let dir = fixtures("a\nb\nc\n", "a\n");

    let output = skipdict()
        .args([
            arg(dir.path(), "dict.txt"),
            arg(dir.path(), "input.txt"),
            "3".into(),
            "--stats".into(),
            "--quiet".into(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Errors found:\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Total nodes: 3"));
}

#[test]
fn test_ambient_settings_do_not_leak_into_run() {
    let dir = fixtures("a\n\nb\n", "a b\n");

    let mut cmd = skipdict();
    cmd.args([
        arg(dir.path(), "dict.txt"),
        arg(dir.path(), "input.txt"),
        "3".into(),
    ]);

    assert!(!cmd
        .get_envs()
        .any(|(key, value)| key.to_string_lossy().starts_with("SKIPDICT_") && value.is_some()));

    let output = cmd.env("SKIPDICT_STRICT_DICTIONARY", "true").output().unwrap();

    assert!(!output.status.success());

    let output = skipdict()
        .args([
            arg(dir.path(), "dict.txt"),
            arg(dir.path(), "input.txt"),
            "3".into(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
}

#[test]
fn test_non_utf8_text_reports_remaining_words() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dict.txt"), "good\nwords\n").unwrap();
    fs::write(dir.path().join("input.txt"), b"good caf\xE9 x\nbad words here\n").unwrap();

    let output = skipdict()
        .args([
            arg(dir.path(), "dict.txt"),
            arg(dir.path(), "input.txt"),
            "4".into(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Errors found:\n  - caf\n  - x\n  - bad\n  - here\n"
    );
}
