//! Colored error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}` / `  × {detail}` / `  help: {suggestion}`

use std::io::{IsTerminal, Write};

use crate::error::CsvGuardError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable disables color
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a crate error with its detail and suggestion.
    pub fn print(&self, error: &CsvGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_csv_guard_error(&mut stderr, error);
    }

    pub fn write_csv_guard_error<W: Write>(&self, w: &mut W, error: &CsvGuardError) {
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            error.detail().as_deref(),
            error.suggestion(),
        );
    }

    /// Writes error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Failing to write to stderr while reporting an error is not recoverable.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error to stderr using auto-detected color mode.
pub fn print_error_full(error: &CsvGuardError) {
    ErrorOutput::stderr().print(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
