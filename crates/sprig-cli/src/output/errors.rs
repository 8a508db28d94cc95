//! Error message formatting with actionable suggestions.
//!
//! Renders a failed command as the error message, a numbered list of
//! remediation suggestions, and the error's non-sensitive context fields.

use std::error::Error;

use sprig_core::error::SprigError;

use super::colors::ColorSupport;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with suggestions and context
    pub fn format_error(&self, error: &SprigError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        let suggestions = error.suggestions();
        if !suggestions.is_empty() {
            output.push('\n');
            for (i, suggestion) in suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "  {} {}\n",
                    self.colors.dim(&format!("{}.", i + 1)),
                    suggestion
                ));
            }
        }

        let context = error.context();
        if !context.is_empty() {
            output.push('\n');
            for (key, value) in context {
                output.push_str(&format!("  {}: {}\n", self.colors.dim(key), value));
            }
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
