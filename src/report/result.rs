use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::finding::Finding;
use super::summary::render_summary;

/// Outcome of one validation run.
///
/// Built once by [`ValidationResult::aggregate`] and read-only afterwards.
/// Serializes to JSON with exactly these field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    total_rows: usize,
    total_errors: usize,
    total_warnings: usize,
    missing_columns: IndexSet<String>,
    extra_columns: IndexSet<String>,
    findings: Vec<Finding>,
    summary: String,
}

/// Findings of one column, split by severity. A presentation view only.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ColumnFindings<'a> {
    pub errors: Vec<&'a Finding>,
    pub warnings: Vec<&'a Finding>,
}

impl ColumnFindings<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

impl ValidationResult {
    /// Count findings by severity and render the summary.
    #[must_use]
    pub fn aggregate(
        total_rows: usize,
        missing_columns: IndexSet<String>,
        extra_columns: IndexSet<String>,
        findings: Vec<Finding>,
    ) -> Self {
        let total_errors = findings.iter().filter(|f| f.is_error()).count();
        let total_warnings = findings.len() - total_errors;

        Self {
            is_valid: total_errors == 0,
            total_rows,
            total_errors,
            total_warnings,
            missing_columns,
            extra_columns,
            findings,
            summary: render_summary(total_rows, total_errors),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    #[must_use]
    pub const fn total_errors(&self) -> usize {
        self.total_errors
    }

    #[must_use]
    pub const fn total_warnings(&self) -> usize {
        self.total_warnings
    }

    #[must_use]
    pub const fn missing_columns(&self) -> &IndexSet<String> {
        &self.missing_columns
    }

    #[must_use]
    pub const fn extra_columns(&self) -> &IndexSet<String> {
        &self.extra_columns
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Findings grouped by column, columns in order of first appearance.
    #[must_use]
    pub fn group_by_column(&self) -> IndexMap<&str, ColumnFindings<'_>> {
        let mut groups: IndexMap<&str, ColumnFindings<'_>> = IndexMap::new();
        for finding in &self.findings {
            let group = groups.entry(finding.column.as_str()).or_default();
            if finding.is_error() {
                group.errors.push(finding);
            } else {
                group.warnings.push(finding);
            }
        }
        groups
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
