//! Integration tests for the linexml CLI.
//!
//! These tests run the compiled binary end to end.

use rstest::{fixture, rstest};
use tempfile::TempDir;

mod common;
use common::{PEOPLE_TXT, PEOPLE_XML, run_linexml_in_dir, write_input};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Provides a temporary directory containing `people.txt`
#[fixture]
fn input_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    write_input(temp.path(), "people.txt", PEOPLE_TXT);
    temp
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[rstest]
fn test_cli_help(temp_dir: TempDir) {
    let output = run_linexml_in_dir(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("linexml"));
    assert!(out.contains("Usage:"));
    assert!(out.contains("--format"));
}

#[rstest]
fn test_cli_version(temp_dir: TempDir) {
    let output = run_linexml_in_dir(temp_dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[rstest]
fn test_cli_requires_input(temp_dir: TempDir) {
    let output = run_linexml_in_dir(temp_dir.path(), &[]);
    assert!(!output.status.success());
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[rstest]
fn test_convert_to_stdout(input_dir: TempDir) {
    let output = run_linexml_in_dir(input_dir.path(), &["people.txt"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), format!("{}\n", PEOPLE_XML.trim_end()));
}

#[rstest]
fn test_convert_to_output_file(input_dir: TempDir) {
    let output = run_linexml_in_dir(input_dir.path(), &["people.txt", "people.xml"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(input_dir.path().join("people.xml")).unwrap();
    assert_eq!(written, format!("{}\n", PEOPLE_XML.trim_end()));
}

#[rstest]
fn test_convert_replaces_existing_output(input_dir: TempDir) {
    write_input(input_dir.path(), "people.xml", "stale contents");

    let output = run_linexml_in_dir(input_dir.path(), &["people.txt", "people.xml"]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(input_dir.path().join("people.xml")).unwrap();
    assert!(written.starts_with("<people>"));
    assert!(!written.contains("stale"));
}

#[rstest]
fn test_convert_empty_input(temp_dir: TempDir) {
    write_input(temp_dir.path(), "empty.txt", "");

    let output = run_linexml_in_dir(temp_dir.path(), &["empty.txt"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "<people/>\n");
}

#[rstest]
fn test_convert_compact(input_dir: TempDir) {
    let output = run_linexml_in_dir(input_dir.path(), &["people.txt", "--indent", "0"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("<people><person><firstname>Carl Gustaf</firstname>"));
}

#[rstest]
fn test_convert_json(input_dir: TempDir) {
    let output = run_linexml_in_dir(input_dir.path(), &["people.txt", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let persons = value["persons"].as_array().unwrap();
    assert_eq!(persons.len(), 2);
    assert_eq!(persons[1]["lastname"], "Obama");
    assert_eq!(persons[1]["children"][0]["address"]["zip"], "20500");
}

#[rstest]
fn test_convert_ascii_tree(input_dir: TempDir) {
    let output = run_linexml_in_dir(
        input_dir.path(),
        &["people.txt", "--format", "tree", "--ascii"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("people (2)\n"));
    assert!(out.contains("|-- Carl Gustaf Bernadotte"));
    assert!(out.contains("`-- Barack Obama"));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[rstest]
fn test_missing_input_file(temp_dir: TempDir) {
    let output = run_linexml_in_dir(temp_dir.path(), &["nope.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot find input file nope.txt"));
    assert!(stdout(&output).is_empty());
}

#[rstest]
fn test_input_directory_is_not_a_file(temp_dir: TempDir) {
    std::fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

    let output = run_linexml_in_dir(temp_dir.path(), &["dir.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot find input file"));
}

#[rstest]
#[case("P|Ada|Lovelace\nG|x|y\n", "line 2", "G|x|y")]
#[case("P|Ada\n", "line 1", "P|Ada")]
#[case("F|Byron|1815\n", "line 1", "F|Byron|1815")]
#[case("P|Ada|Lovelace\n\nT|1|2\n", "line 2", "empty")]
fn test_malformed_input_fails(
    temp_dir: TempDir,
    #[case] contents: &str,
    #[case] location: &str,
    #[case] detail: &str,
) {
    write_input(temp_dir.path(), "bad.txt", contents);

    let output = run_linexml_in_dir(temp_dir.path(), &["bad.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains(location), "stderr: {err}");
    assert!(err.contains(detail), "stderr: {err}");
    assert!(stdout(&output).is_empty());
}

#[rstest]
fn test_malformed_input_leaves_no_output_file(temp_dir: TempDir) {
    write_input(temp_dir.path(), "bad.txt", "T|1|2\n");

    let output = run_linexml_in_dir(temp_dir.path(), &["bad.txt", "out.xml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("out.xml").exists());
}
