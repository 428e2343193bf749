use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use indexmap::IndexSet;
use regex::Regex;

use crate::error::TemplateError;

use super::model::{ColumnDefinition, DataType, TEMPLATE_VERSION, TemplateDefinition};

/// Compiled regular expression plus the explanation shown when it does not match.
#[derive(Debug, Clone)]
pub struct PatternRule {
    compiled_pattern: Regex,
    source: String,
    human_description: Option<String>,
}

impl PatternRule {
    /// Compile `pattern` with whole-cell match semantics.
    ///
    /// # Errors
    /// Returns the regex compilation error.
    pub fn new(pattern: &str, human_description: Option<String>) -> Result<Self, regex::Error> {
        let compiled_pattern = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            compiled_pattern,
            source: pattern.to_string(),
            human_description,
        })
    }

    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.compiled_pattern.is_match(value)
    }

    /// The pattern as written in the template.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn human_description(&self) -> Option<&str> {
        self.human_description.as_deref()
    }
}

/// The full, validated rule set for one named column.
#[derive(Debug, Clone)]
pub struct ColumnRule {
    pub name: String,
    /// Display position.
    pub index: usize,
    pub required: bool,
    pub allow_blank: bool,
    pub unique: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub data_type: DataType,
    pub pattern: Option<PatternRule>,
    /// Forbidden characters, in declaration order.
    pub invalid_characters: Option<IndexSet<char>>,
    pub notes: Option<String>,
    pub example: Option<String>,
}

impl ColumnRule {
    fn compile(position: usize, def: &ColumnDefinition) -> Result<Self, TemplateError> {
        let invalid = |reason: String| TemplateError::Rule {
            index: position + 1,
            column: def.name.clone(),
            reason,
        };

        if def.name.is_empty() {
            return Err(invalid("column name cannot be empty".to_string()));
        }

        if let (Some(min), Some(max)) = (def.min_length, def.max_length)
            && min > max
        {
            return Err(invalid(format!(
                "min_length ({min}) is greater than max_length ({max})"
            )));
        }

        let pattern = def
            .pattern
            .as_deref()
            .map(|p| {
                PatternRule::new(p, def.pattern_description.clone())
                    .map_err(|e| invalid(format!("pattern '{p}' does not compile: {e}")))
            })
            .transpose()?;

        let invalid_characters = def
            .invalid_characters
            .as_deref()
            .filter(|chars| !chars.is_empty())
            .map(|chars| chars.chars().collect::<IndexSet<char>>());

        Ok(Self {
            name: def.name.clone(),
            index: def.index.unwrap_or(position),
            required: def.required,
            allow_blank: def.allow_blank,
            unique: def.unique,
            min_length: def.min_length,
            max_length: def.max_length,
            data_type: def.data_type,
            pattern,
            invalid_characters,
            notes: def.notes.clone(),
            example: def.example.clone(),
        })
    }
}

/// Ordered, immutable set of column rules a file is checked against.
///
/// Only constructible through [`Template::from_definition`], so every pattern
/// is compiled and every bound is consistent before a scan starts.
#[derive(Debug, Clone)]
pub struct Template {
    name: Option<String>,
    columns: Vec<ColumnRule>,
    delimiter: char,
    boolean_tokens: Vec<String>,
    date_format: String,
}

impl Template {
    /// Validate and compile a template definition.
    ///
    /// # Errors
    /// Returns a [`TemplateError`] for an unsupported version, invalid settings, a
    /// duplicate column name, inconsistent length bounds, or an invalid pattern.
    pub fn from_definition(def: &TemplateDefinition) -> Result<Self, TemplateError> {
        validate_version(def.version.as_deref())?;
        validate_delimiter(def.settings.delimiter)?;
        validate_date_format(&def.settings.date_format)?;
        let boolean_tokens = normalize_boolean_tokens(&def.settings.boolean_tokens)?;

        if def.columns.is_empty() {
            return Err(TemplateError::Settings(
                "template defines no columns".to_string(),
            ));
        }

        let mut seen = IndexSet::with_capacity(def.columns.len());
        let mut columns = Vec::with_capacity(def.columns.len());
        for (position, column) in def.columns.iter().enumerate() {
            if !seen.insert(column.name.as_str()) {
                return Err(TemplateError::Rule {
                    index: position + 1,
                    column: column.name.clone(),
                    reason: "duplicate column name".to_string(),
                });
            }
            columns.push(ColumnRule::compile(position, column)?);
        }
        // Stable: equal indexes keep file order.
        columns.sort_by_key(|rule| rule.index);

        Ok(Self {
            name: def.name.clone(),
            columns,
            delimiter: def.settings.delimiter,
            boolean_tokens,
            date_format: def.settings.date_format.clone(),
        })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rules in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnRule] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnRule> {
        self.columns.iter().find(|rule| rule.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Accepted boolean tokens, lower-cased.
    #[must_use]
    pub fn boolean_tokens(&self) -> &[String] {
        &self.boolean_tokens
    }

    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

fn validate_version(version: Option<&str>) -> Result<(), TemplateError> {
    match version {
        None => Ok(()),
        Some(v) if v == TEMPLATE_VERSION => Ok(()),
        Some(v) => Err(TemplateError::Settings(format!(
            "unsupported template version '{v}', only version '{TEMPLATE_VERSION}' is supported"
        ))),
    }
}

fn validate_delimiter(delimiter: char) -> Result<(), TemplateError> {
    if !delimiter.is_ascii() {
        return Err(TemplateError::Settings(format!(
            "delimiter {delimiter:?} must be a single ASCII character"
        )));
    }
    if matches!(delimiter, '"' | '\r' | '\n') {
        return Err(TemplateError::Settings(format!(
            "delimiter {delimiter:?} is not allowed"
        )));
    }
    Ok(())
}

/// A usable date format renders a calendar date and parses it back unchanged.
fn validate_date_format(format: &str) -> Result<(), TemplateError> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TemplateError::Settings(format!(
            "date_format '{format}' is not a valid strftime format"
        )));
    }

    let Some(sample) = NaiveDate::from_ymd_opt(2001, 2, 3) else {
        return Ok(());
    };
    let mut rendered = String::new();
    let round_trips = write!(rendered, "{}", sample.format(format)).is_ok()
        && NaiveDate::parse_from_str(&rendered, format).ok() == Some(sample);
    if !round_trips {
        return Err(TemplateError::Settings(format!(
            "date_format '{format}' does not identify a full calendar date"
        )));
    }
    Ok(())
}

fn normalize_boolean_tokens(tokens: &[String]) -> Result<Vec<String>, TemplateError> {
    if tokens.is_empty() || tokens.iter().any(String::is_empty) {
        return Err(TemplateError::Settings(
            "boolean_tokens must be a non-empty list of non-empty tokens".to_string(),
        ));
    }
    Ok(tokens.iter().map(|t| t.to_lowercase()).collect())
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
