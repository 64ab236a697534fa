use std::collections::HashSet;

use super::ColumnSpec;

#[cfg(test)]
#[path = "./visibility.tests.rs"]
mod visibility_tests;

/// In-memory set of hidden columns, kept per page-view session.
#[derive(Default, Clone, Debug)]
pub struct ColumnVisibility {
    hidden: HashSet<String>,
}

impl ColumnVisibility {
    /// Creates new [`ColumnVisibility`] with the given columns hidden.
    pub fn from_hidden(hidden: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            hidden: hidden.into_iter().map(Into::into).collect(),
        }
    }

    /// Hides a column.
    pub fn hide(&mut self, column_id: &str) {
        self.hidden.insert(column_id.to_owned());
    }

    /// Shows a column again.
    pub fn show(&mut self, column_id: &str) {
        self.hidden.remove(column_id);
    }

    /// Toggles a column and returns its new visibility.
    pub fn toggle(&mut self, column_id: &str) -> bool {
        if self.hidden.remove(column_id) {
            true
        } else {
            self.hidden.insert(column_id.to_owned());
            false
        }
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        !self.hidden.contains(column_id)
    }

    /// Returns an iterator over the visible subset of column specs.
    pub fn visible<'a, T>(&'a self, columns: &'a [ColumnSpec<T>]) -> impl Iterator<Item = &'a ColumnSpec<T>> {
        columns.iter().filter(|c| self.is_visible(c.id()))
    }
}
