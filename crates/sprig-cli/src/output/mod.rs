//! Terminal output formatting and utilities.
//!
//! The handler is constructed once per command invocation and passed
//! explicitly to everything that reports progress, so there is no hidden
//! process-wide output state and tests can substitute a silent instance.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
    silent: bool,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
            silent: false,
        }
    }

    /// Handler that suppresses everything except errors
    pub fn silent() -> Self {
        Self {
            colors: colors::ColorSupport::disabled(),
            silent: true,
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.silent {
            println!("{}", self.colors.dim(message));
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.silent {
            println!("{} {}", self.colors.green("✓"), message);
        }
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        if !self.silent {
            println!("{} {}", self.colors.yellow("⚠"), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.colors.red("✗"), message);
    }

    /// Print a step message with emoji
    pub fn step(&self, emoji: &str, message: &str) {
        if !self.silent {
            println!("{} {}", emoji, message);
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
