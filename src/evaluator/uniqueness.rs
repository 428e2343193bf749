use std::collections::HashMap;

/// Values already seen per unique column during one validation run.
///
/// Created fresh for every run and threaded through the evaluator by `&mut`, so
/// concurrent runs never share state. Rows must be observed in file order: the
/// first occurrence of a value is canonical.
#[derive(Debug, Default)]
pub struct UniquenessTracker {
    seen: HashMap<String, HashMap<String, usize>>,
}

impl UniquenessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `column` at `row`.
    ///
    /// Returns the row of the first occurrence when the value is a repeat,
    /// `None` when it is new.
    pub fn observe(&mut self, column: &str, value: &str, row: usize) -> Option<usize> {
        let values = self.seen.entry(column.to_string()).or_default();
        if let Some(&first_row) = values.get(value) {
            return Some(first_row);
        }
        values.insert(value.to_string(), row);
        None
    }
}
