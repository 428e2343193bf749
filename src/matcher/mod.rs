//! Reconciles the tokenized header with the template.
//!
//! Matching is exact and case-sensitive: `"Zone "` and `"zone"` do not match
//! `"Zone"`, and such a column is reported as both missing and extra.

use indexmap::{IndexMap, IndexSet};

use crate::report::{Finding, RuleKind, Severity};
use crate::template::Template;

/// One data row restricted to the template columns present in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow<'a> {
    /// 1-based position among data rows (header excluded).
    pub row_number: usize,
    /// Column name to raw cell value, in template display order.
    pub cells: IndexMap<&'a str, String>,
}

/// Result of matching a header against a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Template column name to header index, template display order.
    positions: IndexMap<String, usize>,
    missing: IndexSet<String>,
    extra: IndexSet<String>,
    /// Repeated header names with the header index of each repeat.
    duplicates: Vec<(String, usize)>,
}

impl ColumnLayout {
    #[must_use]
    pub fn match_header(header: &[String], template: &Template) -> Self {
        let mut first_seen: IndexMap<&str, usize> = IndexMap::with_capacity(header.len());
        let mut duplicates = Vec::new();
        for (index, name) in header.iter().enumerate() {
            if first_seen.contains_key(name.as_str()) {
                duplicates.push((name.clone(), index));
            } else {
                first_seen.insert(name.as_str(), index);
            }
        }

        let mut positions = IndexMap::with_capacity(template.columns().len());
        let mut missing = IndexSet::new();
        for rule in template.columns() {
            match first_seen.get(rule.name.as_str()) {
                Some(&index) => {
                    positions.insert(rule.name.clone(), index);
                }
                None => {
                    missing.insert(rule.name.clone());
                }
            }
        }

        let extra = first_seen
            .keys()
            .filter(|name| !template.contains(name))
            .map(|name| (*name).to_string())
            .collect();

        Self {
            positions,
            missing,
            extra,
            duplicates,
        }
    }

    /// Header index of a matched template column.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Template columns absent from the header, in template order.
    #[must_use]
    pub const fn missing_columns(&self) -> &IndexSet<String> {
        &self.missing
    }

    /// Header columns absent from the template, in header order.
    #[must_use]
    pub const fn extra_columns(&self) -> &IndexSet<String> {
        &self.extra
    }

    #[must_use]
    pub fn into_column_sets(self) -> (IndexSet<String>, IndexSet<String>) {
        (self.missing, self.extra)
    }

    /// Findings about the header: missing, then extra, then repeated columns.
    #[must_use]
    pub fn layout_findings(&self, template: &Template) -> Vec<Finding> {
        let mut findings = Vec::with_capacity(self.missing.len() + self.extra.len());

        for name in &self.missing {
            let rule = template.column(name);
            let required = rule.is_some_and(|r| r.required);
            let (severity, kind) = if required {
                (Severity::Error, "required")
            } else {
                (Severity::Warning, "optional")
            };
            findings.push(
                Finding::layout(
                    name,
                    RuleKind::MissingColumn,
                    severity,
                    format!("{kind} column '{name}' is missing from the header"),
                )
                .with_notes(rule.and_then(|r| r.notes.as_deref())),
            );
        }

        for name in &self.extra {
            findings.push(Finding::layout(
                name,
                RuleKind::ExtraColumn,
                Severity::Warning,
                format!("column '{name}' is not defined in the template and will be ignored"),
            ));
        }

        for (name, index) in &self.duplicates {
            findings.push(Finding::layout(
                name,
                RuleKind::DuplicateColumn,
                Severity::Warning,
                format!(
                    "column '{name}' appears again at position {}; only the first occurrence is validated",
                    index + 1
                ),
            ));
        }

        findings
    }

    /// Map a record's fields onto matched columns. Short records are padded with
    /// empty cells; fields beyond the header are dropped.
    #[must_use]
    pub fn parse_row(&self, row_number: usize, mut fields: Vec<String>) -> ParsedRow<'_> {
        let cells = self
            .positions
            .iter()
            .map(|(name, &index)| {
                let value = fields.get_mut(index).map(std::mem::take).unwrap_or_default();
                (name.as_str(), value)
            })
            .collect();
        ParsedRow { row_number, cells }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
