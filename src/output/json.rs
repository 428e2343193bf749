use crate::error::Result;
use crate::report::ValidationResult;

use super::OutputFormatter;

/// Pretty JSON of the full [`ValidationResult`], field names as serialized.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ValidationResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
