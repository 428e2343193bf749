//! The `validate` entry point: tokenizer, matcher, evaluator, aggregator.

use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

use crate::error::ParseError;
use crate::evaluator::{RuleEvaluator, UniquenessTracker};
use crate::matcher::{ColumnLayout, ParsedRow};
use crate::report::{Finding, ValidationResult};
use crate::template::Template;
use crate::tokenizer::{self, Tokenized, Tokenizer};

/// Knobs for a validation run. The result never depends on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Buffer all rows and run the per-cell checks on the rayon pool. The
    /// uniqueness pass still runs sequentially in file order.
    pub parallel: bool,
}

/// Validate CSV bytes against a compiled template.
///
/// # Errors
/// Returns a [`ParseError`] if the input is not valid UTF-8, has no header, or
/// contains an unterminated quoted field. No partial result is produced.
pub fn validate(
    input: impl AsRef<[u8]>,
    template: &Template,
) -> Result<ValidationResult, ParseError> {
    validate_with(input, template, ValidateOptions::default())
}

/// [`validate`] with explicit options.
///
/// # Errors
/// Same as [`validate`].
pub fn validate_with(
    input: impl AsRef<[u8]>,
    template: &Template,
    options: ValidateOptions,
) -> Result<ValidationResult, ParseError> {
    let span = debug_span!(
        "validate",
        template = template.name().unwrap_or("<unnamed>"),
        parallel = options.parallel
    );
    let _guard = span.enter();

    let text = tokenizer::decode(input.as_ref())?;
    let Tokenized { header, rows } = tokenizer::tokenize(text, template.delimiter())?;

    let layout = ColumnLayout::match_header(&header, template);
    debug!(
        header_columns = header.len(),
        missing = layout.missing_columns().len(),
        extra = layout.extra_columns().len(),
        "matched header"
    );

    let mut findings = layout.layout_findings(template);
    let evaluator = RuleEvaluator::new(template);
    let total_rows = if options.parallel {
        evaluate_parallel(rows, &layout, &evaluator, &mut findings)?
    } else {
        evaluate_sequential(rows, &layout, &evaluator, &mut findings)?
    };

    let (missing, extra) = layout.into_column_sets();
    let result = ValidationResult::aggregate(total_rows, missing, extra, findings);
    debug!(
        rows = result.total_rows(),
        errors = result.total_errors(),
        warnings = result.total_warnings(),
        "validation finished"
    );
    Ok(result)
}

fn evaluate_sequential(
    rows: Tokenizer<'_>,
    layout: &ColumnLayout,
    evaluator: &RuleEvaluator<'_>,
    findings: &mut Vec<Finding>,
) -> Result<usize, ParseError> {
    let mut seen = UniquenessTracker::new();
    let mut total_rows = 0;
    for (index, record) in rows.enumerate() {
        let record = record?;
        let row_number = index + 1;
        let row = layout.parse_row(row_number, record.fields);
        let before = findings.len();
        evaluator.evaluate_row(&row, &mut seen, findings);
        trace!(
            row = row_number,
            line = record.line,
            findings = findings.len() - before,
            "row evaluated"
        );
        total_rows = row_number;
    }
    Ok(total_rows)
}

fn evaluate_parallel(
    rows: Tokenizer<'_>,
    layout: &ColumnLayout,
    evaluator: &RuleEvaluator<'_>,
    findings: &mut Vec<Finding>,
) -> Result<usize, ParseError> {
    let parsed = rows
        .enumerate()
        .map(|(index, record)| record.map(|r| layout.parse_row(index + 1, r.fields)))
        .collect::<Result<Vec<ParsedRow<'_>>, ParseError>>()?;
    debug!(rows = parsed.len(), "rows buffered for parallel evaluation");

    let cell_findings: Vec<Vec<Vec<Finding>>> = parsed
        .par_iter()
        .map(|row| evaluator.check_row_cells(row))
        .collect();

    let mut seen = UniquenessTracker::new();
    for (row, cells) in parsed.iter().zip(cell_findings) {
        evaluator.merge_row(row, cells, &mut seen, findings);
    }
    Ok(parsed.len())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
