//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Error:     red     (parse and I/O failures)
//!   - Root:      cyan    (tree root)
//!   - Emphasis:  bold    (person names)
//!   - Muted:     dimmed  (node kinds, connectors)

use colored::Colorize;

use crate::config::OutputConfig;

/// Style an error message.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Style the tree root.
pub fn root(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().bold().to_string()
}

/// Style emphasized text.
pub fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Style muted text.
pub fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}
