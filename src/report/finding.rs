use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Machine name of the rule a finding was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    DataType,
    InvalidCharacters,
    Pattern,
    Unique,
    MissingColumn,
    ExtraColumn,
    DuplicateColumn,
}

impl RuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::DataType => "data_type",
            Self::InvalidCharacters => "invalid_characters",
            Self::Pattern => "pattern",
            Self::Unique => "unique",
            Self::MissingColumn => "missing_column",
            Self::ExtraColumn => "extra_column",
            Self::DuplicateColumn => "duplicate_column",
        }
    }

    /// Layout rules concern the header, not a data row.
    #[must_use]
    pub const fn is_layout(self) -> bool {
        matches!(
            self,
            Self::MissingColumn | Self::ExtraColumn | Self::DuplicateColumn
        )
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem, either with the file layout or with a single cell.
///
/// `row` is the 1-based data row for cell findings and `None` for layout
/// findings. `value` is the raw cell value, never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub row: Option<usize>,
    pub column: String,
    pub value: String,
    pub rule: RuleKind,
    pub message: String,
    pub severity: Severity,
    pub notes: Option<String>,
}

impl Finding {
    #[must_use]
    pub fn cell(
        row: usize,
        column: &str,
        value: &str,
        rule: RuleKind,
        message: String,
        notes: Option<&str>,
    ) -> Self {
        Self {
            row: Some(row),
            column: column.to_string(),
            value: value.to_string(),
            rule,
            message,
            severity: Severity::Error,
            notes: notes.map(ToString::to_string),
        }
    }

    #[must_use]
    pub fn layout(column: &str, rule: RuleKind, severity: Severity, message: String) -> Self {
        Self {
            row: None,
            column: column.to_string(),
            value: String::new(),
            rule,
            message,
            severity,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: Option<&str>) -> Self {
        self.notes = notes.map(ToString::to_string);
        self
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}
