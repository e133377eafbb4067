//! CLI argument parsing and dispatch.
//!
//! `linexml` reads a line-oriented people file and writes it as an XML tree
//! (or JSON, or a human-readable tree) to stdout or to an output file.
//!
//! # Example
//!
//! ```bash
//! linexml people.txt
//! linexml people.txt people.xml --indent 4
//! linexml people.txt --format tree --ascii
//! ```

mod execute;
mod types;
mod validators;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::OutputConfig;

pub use types::OutputFormatArg;
pub use validators::{validate_indent, validate_output_path};

/// linexml - convert line-delimited people records to XML
///
/// Each input line is one record: `P|first|last`, `F|name|born`,
/// `A|street|city[|zip]` or `T|mobile|home`. Conversion stops at the first
/// malformed line.
#[derive(Parser, Debug)]
#[command(name = "linexml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file with one record per line
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(value_parser = validate_output_path)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Xml)]
    pub format: OutputFormatArg,

    /// Spaces per nesting level (0 for single-line output)
    #[arg(long, value_parser = validate_indent)]
    pub indent: Option<usize>,

    /// Use ASCII connectors in tree output
    #[arg(long)]
    pub ascii: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments from the environment
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve output settings from the environment and the command-line flags.
    #[must_use]
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_env().with_overrides(self.indent, self.ascii, self.no_color)
    }

    /// Run the conversion.
    ///
    /// # Errors
    ///
    /// Fails if the input is missing or malformed, or the output cannot be written.
    pub async fn execute(&self, config: &OutputConfig) -> Result<()> {
        execute::execute_convert(self, config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_input_only() {
        let cli = Cli::try_parse_from(["linexml", "people.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("people.txt"));
        assert!(cli.output.is_none());
        assert_eq!(cli.format, OutputFormatArg::Xml);
        assert!(cli.indent.is_none());
        assert!(!cli.ascii);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_parse_input_and_output() {
        let cli = Cli::try_parse_from(["linexml", "people.txt", "people.xml"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("people.xml")));
    }

    #[test]
    fn test_parse_missing_input_fails() {
        assert!(Cli::try_parse_from(["linexml"]).is_err());
    }

    #[test]
    fn test_parse_extra_positional_fails() {
        assert!(Cli::try_parse_from(["linexml", "a.txt", "b.xml", "c.xml"]).is_err());
    }

    #[rstest]
    #[case("xml", OutputFormatArg::Xml)]
    #[case("json", OutputFormatArg::Json)]
    #[case("tree", OutputFormatArg::Tree)]
    fn test_parse_format(#[case] value: &str, #[case] expected: OutputFormatArg) {
        let cli = Cli::try_parse_from(["linexml", "people.txt", "--format", value]).unwrap();
        assert_eq!(cli.format, expected);
    }

    #[test]
    fn test_parse_short_format() {
        let cli = Cli::try_parse_from(["linexml", "people.txt", "-f", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormatArg::Json);
    }

    #[test]
    fn test_parse_unknown_format_fails() {
        assert!(Cli::try_parse_from(["linexml", "people.txt", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_parse_indent() {
        let cli = Cli::try_parse_from(["linexml", "people.txt", "--indent", "4"]).unwrap();
        assert_eq!(cli.indent, Some(4));
    }

    #[test]
    fn test_parse_indent_out_of_range_fails() {
        assert!(Cli::try_parse_from(["linexml", "people.txt", "--indent", "20"]).is_err());
    }

    #[test]
    fn test_parse_flags() {
        let cli =
            Cli::try_parse_from(["linexml", "people.txt", "--ascii", "--no-color"]).unwrap();
        assert!(cli.ascii);
        assert!(cli.no_color);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "linexml",
            "people.txt",
            "--indent",
            "0",
            "--ascii",
            "--no-color",
        ])
        .unwrap();
        let config = OutputConfig::default().with_overrides(cli.indent, cli.ascii, cli.no_color);
        assert_eq!(config, OutputConfig::new(0, true, false));
    }
}
