use std::collections::{HashMap, HashSet};

#[cfg(test)]
#[path = "./filters.tests.rs"]
mod filters_tests;

/// Per-column sets of accepted values.\
/// A column absent from the map is unfiltered; a present column with an empty
/// set is unfiltered too, it must never exclude all rows.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ColumnFilters {
    accepted: HashMap<String, HashSet<String>>,
}

impl ColumnFilters {
    /// Sets or removes the accepted-value set for a column.
    pub fn set(&mut self, column_id: &str, values: Option<HashSet<String>>) {
        match values {
            Some(values) => {
                self.accepted.insert(column_id.to_owned(), values);
            },
            None => {
                self.accepted.remove(column_id);
            },
        }
    }

    /// Returns the accepted-value set for a column.
    pub fn get(&self, column_id: &str) -> Option<&HashSet<String>> {
        self.accepted.get(column_id)
    }

    /// Removes all column filters.
    pub fn clear(&mut self) {
        self.accepted.clear();
    }

    /// Returns `true` if any column has a non-empty accepted-value set.
    pub fn is_active(&self) -> bool {
        self.accepted.values().any(|values| !values.is_empty())
    }

    /// Checks a single stringified cell value against the column constraint.
    pub fn accepts(&self, column_id: &str, value: &str) -> bool {
        self.accepted
            .get(column_id)
            .is_none_or(|values| values.is_empty() || values.contains(value))
    }
}
