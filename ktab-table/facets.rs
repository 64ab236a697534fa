use std::collections::HashMap;

use super::{ColumnFilters, ColumnSpec};

/// Distinct values and occurrence counts for every filterable column, used to
/// populate filter dropdowns and their count badges.\
/// Each column is computed against the row set narrowed by all *other*
/// columns' filters but never by its own, so narrowing one column does not
/// hide options in the dropdown currently being chosen from.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Facets {
    values: HashMap<String, Vec<String>>,
    counts: HashMap<String, HashMap<String, usize>>,
}

impl Facets {
    /// Computes facet data for all filterable columns.
    pub(crate) fn compute<T>(rows: &[T], columns: &[ColumnSpec<T>], filters: &ColumnFilters) -> Self {
        let mut values = HashMap::new();
        let mut counts = HashMap::new();

        for column in columns.iter().filter(|c| c.is_filterable()) {
            let mut column_counts: HashMap<String, usize> = HashMap::new();
            for row in rows.iter().filter(|r| passes_siblings(*r, columns, filters, column.id())) {
                *column_counts.entry(column.text(row)).or_default() += 1;
            }

            let mut column_values = column_counts.keys().cloned().collect::<Vec<_>>();
            column_values.sort_unstable();

            values.insert(column.id().to_owned(), column_values);
            counts.insert(column.id().to_owned(), column_counts);
        }

        Self { values, counts }
    }

    /// Returns sorted distinct values observed for a column.
    pub fn values(&self, column_id: &str) -> Option<&[String]> {
        self.values.get(column_id).map(Vec::as_slice)
    }

    /// Returns the occurrence count of a single value in a column.
    pub fn count(&self, column_id: &str, value: &str) -> usize {
        self.counts
            .get(column_id)
            .and_then(|counts| counts.get(value))
            .copied()
            .unwrap_or_default()
    }
}

/// Checks the row against all active filters except the one owned by `column_id`.
fn passes_siblings<T>(row: &T, columns: &[ColumnSpec<T>], filters: &ColumnFilters, column_id: &str) -> bool {
    columns
        .iter()
        .filter(|c| c.is_filterable() && c.id() != column_id)
        .all(|c| filters.accepts(c.id(), &c.text(row)))
}
