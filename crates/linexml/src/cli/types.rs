//! CLI value enums and their conversions to output types.

use clap::ValueEnum;

use crate::output::OutputFormat;

/// Output format for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Indented XML (default)
    #[default]
    Xml,
    /// Pretty-printed JSON
    Json,
    /// Human-readable tree
    Tree,
}

impl std::fmt::Display for OutputFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Xml => OutputFormat::Xml,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Tree => OutputFormat::Tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_output_format() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Xml), OutputFormat::Xml);
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(OutputFormatArg::Tree), OutputFormat::Tree);
    }

    #[test]
    fn display_matches_value_name() {
        for arg in OutputFormatArg::value_variants() {
            let name = arg.to_possible_value().unwrap();
            assert_eq!(arg.to_string(), name.get_name());
        }
    }
}
