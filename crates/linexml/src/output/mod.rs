//! Output rendering for converted documents.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`tree`]: Text tree rendering with ASCII/Unicode connectors
//!
//! XML rendering lives in [`linexml_records::xml`]; JSON rendering serializes
//! the record model with `serde_json`.

pub mod color;
pub mod tree;

use std::fmt;

use linexml_records::{People, XmlOptions, to_xml_string};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::OutputConfig;
use crate::error::Result;

pub use color::error;
pub use tree::write_tree;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented XML with a `people` root.
    #[default]
    Xml,
    /// Pretty-printed JSON of the record model.
    Json,
    /// Human-readable connector tree.
    Tree,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "xml"),
            Self::Json => write!(f, "json"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

/// Render `people` in the requested format.
///
/// The returned text always ends with a newline.
///
/// # Errors
///
/// Returns an error if the serializer fails.
pub fn render(people: &People, format: OutputFormat, config: &OutputConfig) -> Result<String> {
    let mut text = match format {
        OutputFormat::Xml => to_xml_string(people, XmlOptions::with_indent(config.indent))?,
        OutputFormat::Json => render_json(people, config.indent)?,
        OutputFormat::Tree => {
            let mut out = Vec::new();
            write_tree(&mut out, people, config)?;
            String::from_utf8_lossy(&out).into_owned()
        }
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Serialize `people` as JSON, pretty-printed unless `indent` is 0.
fn render_json(people: &People, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(people)?);
    }

    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    serde::Serialize::serialize(people, &mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
