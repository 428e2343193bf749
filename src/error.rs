use std::path::PathBuf;

use thiserror::Error;

/// Fatal CSV structure error. Aborts a validation run; no result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("file could not be read as CSV: invalid UTF-8 at byte {offset}")]
    Utf8 { offset: usize },

    #[error("file could not be read as CSV: unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    #[error("file could not be read as CSV: no header row")]
    EmptyInput,
}

/// Template construction error. Raised while compiling a template, never mid-scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `index` is the 1-based position of the rule in the template file.
    #[error("template rule {index} is invalid ({column}): {reason}")]
    Rule {
        index: usize,
        column: String,
        reason: String,
    },

    #[error("template is invalid: {0}")]
    Settings(String),
}

#[derive(Error, Debug)]
pub enum CsvGuardError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CsvGuardError {
    /// Short category name used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse",
            Self::Template(_) => "Template",
            Self::Config(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
        }
    }

    /// Underlying cause, when the display message does not already include it.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint shown under the error, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Parse(ParseError::Utf8 { .. }) => Some("Re-save the file with UTF-8 encoding"),
            Self::Parse(ParseError::UnterminatedQuote { .. }) => {
                Some("Check that every opening quote in the file has a closing quote")
            }
            Self::Parse(ParseError::EmptyInput) => {
                Some("The first line of the file must be the header row")
            }
            Self::Template(_) | Self::TomlParse(_) => {
                Some("Run `csv-guard template check <TEMPLATE>` after fixing the template")
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
