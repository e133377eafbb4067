//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use std::path::PathBuf;

use crate::config::MAX_INDENT;

/// Validate the indentation width.
///
/// Accepts `0` (single-line output) up to [`MAX_INDENT`].
pub fn validate_indent(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let width: usize = s
        .parse()
        .map_err(|_| format!("Indent must be a whole number, got '{s}'"))?;

    if width > MAX_INDENT {
        return Err(format!(
            "Indent cannot exceed {MAX_INDENT} spaces, got {width}"
        ));
    }
    Ok(width)
}

/// Validate an output path.
///
/// The path must be non-empty and must not name an existing directory.
/// Whether the parent directory exists is checked when writing.
pub fn validate_output_path(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("Output path cannot be empty".to_string());
    }

    let path = PathBuf::from(s);
    if path.is_dir() {
        return Err(format!(
            "Output path '{}' is a directory, expected a file path",
            path.display()
        ));
    }
    Ok(path)
}
