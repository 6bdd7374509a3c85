use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_luadoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Copy a fixture into a fresh directory so the default README.md lands there.
fn staged_fixture(name: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::copy(fixture_path(name), &path).unwrap();
    (dir, path)
}

// -- file mode --

#[test]
fn file_mode_writes_readme_next_to_source() {
    let (dir, source) = staged_fixture("utrix.lua");

    cmd().arg(&source).assert().success();

    let output = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("utrix.expected.md")).unwrap();
    pretty_assertions::assert_eq!(output, expected);
}

#[test]
fn file_mode_explicit_output() {
    let (dir, source) = staged_fixture("utrix.lua");
    let out = dir.path().join("docs.md");

    cmd()
        .arg(&source)
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Done!"));

    assert!(out.exists());
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn file_mode_overwrites_existing_output() {
    let (dir, source) = staged_fixture("utrix.lua");
    let out = dir.path().join("README.md");
    std::fs::write(&out, "stale content that is longer than nothing").unwrap();

    cmd().arg(&source).assert().success();

    let output = std::fs::read_to_string(out).unwrap();
    assert!(output.starts_with("# utrix\n"));
    assert!(!output.contains("stale"));
}

#[test]
fn unknown_tag_is_warned_not_fatal() {
    let (_dir, source) = staged_fixture("utrix.lua");

    cmd()
        .arg(&source)
        .assert()
        .success()
        .stderr(predicate::str::contains("line 27: unknown type comment @since"));
}

#[test]
fn quiet_suppresses_warnings() {
    let (_dir, source) = staged_fixture("utrix.lua");

    cmd()
        .arg(&source)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_input_fails() {
    cmd()
        .arg("/nonexistent/lib.lua")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/lib.lua"));
}

#[test]
fn unwritable_output_fails() {
    let (_dir, source) = staged_fixture("utrix.lua");

    cmd()
        .arg(&source)
        .args(["-o", "/nonexistent/dir/README.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"))
        .stderr(predicate::str::contains("Done!").not());
}

// -- preamble --

#[test]
fn custom_preamble_with_name_substitution() {
    let (dir, source) = staged_fixture("utrix.lua");
    let mut preamble = NamedTempFile::new().unwrap();
    preamble
        .write_all(b"# ${name} for functional Lua\n\n")
        .unwrap();

    cmd()
        .arg(&source)
        .args(["-p", preamble.path().to_str().unwrap()])
        .args(["-n", "Utrix"])
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(
        output.starts_with("# Utrix for functional Lua\n\n## utrix.map\n"),
        "Should start with substituted preamble, got: {}",
        output.chars().take(80).collect::<String>()
    );
}

#[test]
fn missing_preamble_fails() {
    let (_dir, source) = staged_fixture("utrix.lua");

    cmd()
        .arg(&source)
        .args(["-p", "/nonexistent/preamble.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read preamble file"));
}

// -- stdin mode --

#[test]
fn stdin_mode_prints_document() {
    let input = "--[==[\n@name X\n@sig Y\n@desc\n  Z\n]==]\n";

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "# API\n\n---\n\n## X\n\n###### *Y*\n\nZ");
}

#[test]
fn stdin_mode_custom_lang() {
    let input = "--[==[\n@name f\n@example\n  f()\n]==]\n";

    let assert = cmd()
        .args(["-l", "luau", "-n", "m"])
        .write_stdin(input)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "# m\n\n---\n\n## f\n\n```luau\nf()\n```");
}

#[test]
fn stdin_mode_bare_marker_warns() {
    let input = "--[==[\n@name f\n@\n]==]\n";

    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("## f"))
        .stderr(predicate::str::contains("line 3: segment has no tag identifier"));
}
