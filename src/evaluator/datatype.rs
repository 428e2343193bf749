use chrono::NaiveDate;

use crate::template::{DataType, Template};

/// A finite decimal number. `NaN` and infinities are rejected.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Case-insensitive match against the template's (lower-cased) token set.
#[must_use]
pub fn parse_boolean<'t>(value: &str, tokens: &'t [String]) -> Option<&'t str> {
    let lowered = value.to_lowercase();
    tokens
        .iter()
        .find(|token| **token == lowered)
        .map(String::as_str)
}

/// A calendar date in the template's `strftime` format.
#[must_use]
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, format).ok()
}

/// Whether `value` parses as `data_type` under the template's settings.
#[must_use]
pub fn conforms(data_type: DataType, value: &str, template: &Template) -> bool {
    match data_type {
        DataType::Text => true,
        DataType::Number => parse_number(value).is_some(),
        DataType::Boolean => parse_boolean(value, template.boolean_tokens()).is_some(),
        DataType::Date => parse_date(value, template.date_format()).is_some(),
    }
}

/// Human description of what a column of `data_type` accepts.
#[must_use]
pub fn expectation(data_type: DataType, template: &Template) -> String {
    match data_type {
        DataType::Text => "any text".to_string(),
        DataType::Number => "a finite decimal number".to_string(),
        DataType::Boolean => format!("one of: {}", template.boolean_tokens().join(", ")),
        DataType::Date => format!("a date in format {}", template.date_format()),
    }
}

#[cfg(test)]
#[path = "datatype_tests.rs"]
mod tests;
