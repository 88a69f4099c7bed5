//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;

/// Format a command result for output.
pub fn format_output(output: &CommandOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(output),
        OutputFormat::Pretty => pretty::format_command_output(output),
    }
}
