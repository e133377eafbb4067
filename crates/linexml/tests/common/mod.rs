//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Sample input covering every record kind.
pub const PEOPLE_TXT: &str = include_str!("../../../linexml-records/tests/fixtures/people.txt");

/// Expected XML for [`PEOPLE_TXT`] with the default indent.
pub const PEOPLE_XML: &str = include_str!("../../../linexml-records/tests/fixtures/people.xml");

/// Path of the compiled `linexml` binary.
pub fn linexml_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_linexml"))
}

/// Run the linexml binary in `dir` with colors and env config disabled.
pub fn run_linexml_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(linexml_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("LINEXML_INDENT")
        .env_remove("LINEXML_ASCII")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute linexml")
}

/// Write `contents` to `name` inside `dir`.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}
