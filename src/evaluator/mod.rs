mod datatype;
mod uniqueness;

pub use datatype::{conforms, expectation, parse_boolean, parse_date, parse_number};
pub use uniqueness::UniquenessTracker;

use crate::matcher::ParsedRow;
use crate::report::{Finding, RuleKind};
use crate::template::{ColumnRule, Template};

/// Applies column rules to parsed rows.
///
/// Per cell, checks run in a fixed order: required, length, data type, invalid
/// characters, pattern, uniqueness. Cells are visited in template display order.
/// Checks 1-5 are pure ([`RuleEvaluator::check_cell`]); uniqueness needs the
/// run's [`UniquenessTracker`] and must see rows in file order.
pub struct RuleEvaluator<'t> {
    template: &'t Template,
}

impl<'t> RuleEvaluator<'t> {
    #[must_use]
    pub const fn new(template: &'t Template) -> Self {
        Self { template }
    }

    /// Evaluate one row, appending its findings to `out`.
    pub fn evaluate_row(
        &self,
        row: &ParsedRow<'_>,
        seen: &mut UniquenessTracker,
        out: &mut Vec<Finding>,
    ) {
        let cell_findings = self.check_row_cells(row);
        self.merge_row(row, cell_findings, seen, out);
    }

    /// Checks 1-5 for every present cell of `row`, one entry per cell in
    /// display order. Independent of other rows.
    #[must_use]
    pub fn check_row_cells(&self, row: &ParsedRow<'_>) -> Vec<Vec<Finding>> {
        self.present_cells(row)
            .map(|(rule, value)| self.check_cell(rule, row.row_number, value))
            .collect()
    }

    /// Append precomputed cell findings for `row` and run the uniqueness check
    /// after each cell's own findings.
    pub fn merge_row(
        &self,
        row: &ParsedRow<'_>,
        cell_findings: Vec<Vec<Finding>>,
        seen: &mut UniquenessTracker,
        out: &mut Vec<Finding>,
    ) {
        for ((rule, value), findings) in self.present_cells(row).zip(cell_findings) {
            out.extend(findings);
            if let Some(finding) = Self::check_unique(rule, row.row_number, value, seen) {
                out.push(finding);
            }
        }
    }

    /// Checks 1-5 for a single cell.
    #[must_use]
    pub fn check_cell(&self, rule: &ColumnRule, row: usize, value: &str) -> Vec<Finding> {
        let notes = rule.notes.as_deref();
        let finding =
            |kind: RuleKind, message: String| Finding::cell(row, &rule.name, value, kind, message, notes);

        if value.is_empty() {
            // An empty cell is either a required violation or nothing at all.
            if rule.required && !rule.allow_blank {
                return vec![finding(RuleKind::Required, "value is required".to_string())];
            }
            return Vec::new();
        }

        let mut findings = Vec::new();

        let length = value.chars().count();
        if let Some(min) = rule.min_length
            && length < min
        {
            findings.push(finding(
                RuleKind::MinLength,
                format!("value has {length} characters, minimum is {min}"),
            ));
        }
        if let Some(max) = rule.max_length
            && length > max
        {
            findings.push(finding(
                RuleKind::MaxLength,
                format!("value has {length} characters, maximum is {max}"),
            ));
        }

        if !conforms(rule.data_type, value, self.template) {
            findings.push(finding(
                RuleKind::DataType,
                format!(
                    "value is not a valid {}; expected {}",
                    rule.data_type,
                    expectation(rule.data_type, self.template)
                ),
            ));
        }

        if let Some(invalid) = &rule.invalid_characters {
            let mut offending: Vec<char> = Vec::new();
            for ch in value.chars().filter(|ch| invalid.contains(ch)) {
                if !offending.contains(&ch) {
                    offending.push(ch);
                }
            }
            if !offending.is_empty() {
                let listed: Vec<String> = offending.iter().map(|ch| format!("'{ch}'")).collect();
                findings.push(finding(
                    RuleKind::InvalidCharacters,
                    format!("value contains invalid characters: {}", listed.join(", ")),
                ));
            }
        }

        if let Some(pattern) = &rule.pattern
            && !pattern.is_match(value)
        {
            let message = pattern
                .human_description()
                .or(notes)
                .map_or_else(
                    || format!("value does not match pattern '{}'", pattern.as_str()),
                    ToString::to_string,
                );
            findings.push(finding(RuleKind::Pattern, message));
        }

        findings
    }

    fn check_unique(
        rule: &ColumnRule,
        row: usize,
        value: &str,
        seen: &mut UniquenessTracker,
    ) -> Option<Finding> {
        if !rule.unique || value.is_empty() {
            return None;
        }
        let first_row = seen.observe(&rule.name, value, row)?;
        Some(Finding::cell(
            row,
            &rule.name,
            value,
            RuleKind::Unique,
            format!("duplicate value, first seen in row {first_row}"),
            rule.notes.as_deref(),
        ))
    }

    fn present_cells<'a>(
        &'a self,
        row: &'a ParsedRow<'_>,
    ) -> impl Iterator<Item = (&'a ColumnRule, &'a str)> {
        self.template.columns().iter().filter_map(move |rule| {
            row.cells
                .get(rule.name.as_str())
                .map(|value| (rule, value.as_str()))
        })
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
