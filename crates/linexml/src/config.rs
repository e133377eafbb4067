//! Output configuration.
//!
//! Settings come from environment variables first and are then overridden by
//! command-line flags:
//!
//! - `LINEXML_INDENT`: indentation width for XML and JSON (default: 2)
//! - `LINEXML_ASCII`: `1`/`true` for ASCII tree connectors (default: false)
//! - `NO_COLOR`: any value disables colors
//! - `LINEXML_COLOR`: `0`/`false` disables colors (default: true)

use std::env;

use linexml_records::xml::DEFAULT_INDENT;

/// Largest indentation width accepted.
pub const MAX_INDENT: usize = 8;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Spaces per nesting level for XML and JSON.
    pub indent: usize,
    /// Whether to use ASCII-only tree connectors instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in terminal output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(indent: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            indent,
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create an `OutputConfig` from an arbitrary variable lookup.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let indent = match lookup("LINEXML_INDENT") {
            Some(s) if !s.is_empty() => match s.parse::<usize>() {
                Ok(width) if width <= MAX_INDENT => width,
                _ => {
                    tracing::warn!(
                        env_var = "LINEXML_INDENT",
                        value = %s,
                        default = DEFAULT_INDENT,
                        "Invalid value, using default"
                    );
                    DEFAULT_INDENT
                }
            },
            _ => DEFAULT_INDENT,
        };

        let use_ascii = match lookup("LINEXML_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "LINEXML_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // NO_COLOR (https://no-color.org/) wins over LINEXML_COLOR
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("LINEXML_COLOR")
                .is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            indent,
            use_ascii,
            use_colors,
        }
    }

    /// Applies command-line overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, indent: Option<usize>, ascii: bool, no_color: bool) -> Self {
        if let Some(indent) = indent {
            self.indent = indent;
        }
        self.use_ascii |= ascii;
        self.use_colors &= !no_color;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            use_ascii: false,
            use_colors: true,
        }
    }
}
