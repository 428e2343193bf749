use serde::{Deserialize, Serialize};

/// Supported template file version.
pub const TEMPLATE_VERSION: &str = "1";

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted boolean tokens when a template does not declare its own.
pub const DEFAULT_BOOLEAN_TOKENS: &[&str] = &["true", "false", "yes", "no"];

// ============================================================================
// Template file types (what the configuration store hands us)
// ============================================================================

/// Declared type of a column's values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
}

impl DataType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template file as stored on disk (TOML or JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplateDefinition {
    /// Template format version. Only "1" is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub settings: TemplateSettings,

    /// Column rules [[columns]]. File order is the default display order.
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

/// Template-wide parsing settings [settings].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplateSettings {
    /// Field delimiter (default: ",").
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Case-insensitive tokens accepted by boolean columns.
    #[serde(default = "default_boolean_tokens")]
    pub boolean_tokens: Vec<String>,

    /// chrono `strftime` format accepted by date columns (default: "%Y-%m-%d").
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            boolean_tokens: default_boolean_tokens(),
            date_format: default_date_format(),
        }
    }
}

/// One column rule [[columns]].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColumnDefinition {
    /// Exact, case-sensitive header name.
    pub name: String,

    /// Display position. Defaults to the rule's position in the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Column must be present and its cells non-empty (unless `allow_blank`).
    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub allow_blank: bool,

    /// Only the first occurrence of each value is accepted.
    #[serde(default)]
    pub unique: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub data_type: DataType,

    /// Regular expression the whole cell must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Human explanation shown when `pattern` does not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_description: Option<String>,

    /// Characters that may not appear anywhere in a cell, e.g. "<>;".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_characters: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl ColumnDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn allow_blank(mut self) -> Self {
        self.allow_blank = true;
        self
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub const fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn invalid_characters(mut self, chars: impl Into<String>) -> Self {
        self.invalid_characters = Some(chars.into());
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl TemplateDefinition {
    #[must_use]
    pub fn with_columns(columns: Vec<ColumnDefinition>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }
}

const fn default_delimiter() -> char {
    ','
}

fn default_boolean_tokens() -> Vec<String> {
    DEFAULT_BOOLEAN_TOKENS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
