use std::collections::HashSet;

use super::{ColumnFilters, ColumnSpec, Facets, Pager, SortOrder, SortState};

#[cfg(test)]
#[path = "./view.tests.rs"]
mod view_tests;

/// Client-side table engine: filters, sorts and pages rows already mapped
/// from backend list responses.\
/// It remembers the unfiltered rows so the view can be recomputed anytime the
/// filter or sort state changes; the filtered view is kept as an index vector
/// into the owned rows.
pub struct TableView<T> {
    rows: Vec<T>,
    columns: Vec<ColumnSpec<T>>,
    filters: ColumnFilters,
    sort: SortState,
    view: Vec<usize>,
    facets: Facets,
}

impl<T> TableView<T> {
    /// Creates new [`TableView`] and computes the initial view with the
    /// default sort applied and no filters active.
    pub fn new(rows: Vec<T>, columns: Vec<ColumnSpec<T>>, sort: SortState) -> Self {
        let mut table = Self {
            rows,
            columns,
            filters: ColumnFilters::default(),
            sort,
            view: Vec::new(),
            facets: Facets::default(),
        };
        table.refresh();
        table
    }

    /// Replaces all rows with a fresh list from the data layer.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.refresh();
    }

    /// Appends a row to the table.\
    /// **Note** that it may be immediately filtered out by the currently
    /// applied filters.
    pub fn push(&mut self, row: T) {
        self.rows.push(row);
        self.refresh();
    }

    pub fn columns(&self) -> &[ColumnSpec<T>] {
        &self.columns
    }

    pub fn filters(&self) -> &ColumnFilters {
        &self.filters
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Returns facet metadata computed during the last refresh.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Sets (or removes, with `None`) the accepted-value set for a column.\
    /// An unknown or non-filterable column id is a no-op and returns `false`,
    /// a stale filter reference must never crash the page.
    pub fn set_column_filter(&mut self, column_id: &str, values: Option<HashSet<String>>) -> bool {
        if !self.columns.iter().any(|c| c.is_filterable() && c.id() == column_id) {
            return false;
        }

        self.filters.set(column_id, values);
        self.refresh();
        true
    }

    /// Removes all column filters, leaving the sort state and any upstream
    /// free-text search untouched.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh();
    }

    /// Returns `true` if any column filter is active.
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// Sorts the view by the given column and direction.\
    /// An unknown or non-sortable column is rejected and returns `false`.
    pub fn sort_by(&mut self, column_id: &str, order: SortOrder) -> bool {
        if !self.columns.iter().any(|c| c.is_sortable() && c.id() == column_id) {
            return false;
        }

        self.sort = SortState::new(column_id, order);
        self.refresh();
        true
    }

    /// Toggles sorting for the specified column.\
    /// **Note** that if the column is already the sort key, the direction is
    /// reversed; a new column always starts ascending.
    pub fn toggle_sort(&mut self, column_id: &str) -> bool {
        let order = if self.sort.key() == column_id {
            self.sort.order().reversed()
        } else {
            SortOrder::Ascending
        };

        self.sort_by(column_id, order)
    }

    /// Returns the number of rows in the filtered view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Returns `true` if the filtered view contains no rows.
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Returns the number of rows in the unfiltered table.
    pub fn full_len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at the given position within the filtered view.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.view.get(index).map(|&i| &self.rows[i])
    }

    /// Returns an iterator over the filtered and sorted rows.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.view.iter().map(|&i| &self.rows[i])
    }

    /// Returns rows for the pager's current page of the filtered view.\
    /// **Note** that the pager is clamped to the last valid page first.
    pub fn page(&self, pager: &mut Pager) -> impl Iterator<Item = &T> {
        let range = pager.clamp(self.view.len());
        self.view[range].iter().map(|&i| &self.rows[i])
    }

    /// Recomputes the filtered and sorted view plus facet metadata.\
    /// Runs synchronously on every state change; rows are never mutated.
    fn refresh(&mut self) {
        let rows = &self.rows;
        let mut view = (0..rows.len())
            .filter(|&i| Self::passes(&rows[i], &self.columns, &self.filters))
            .collect::<Vec<_>>();

        if let Some(column) = self.columns.iter().find(|c| c.is_sortable() && c.id() == self.sort.key()) {
            let order = self.sort.order();
            view.sort_by(|&a, &b| order.apply(column.compare(&rows[a], &rows[b])));
        }

        self.view = view;
        self.facets = Facets::compute(&self.rows, &self.columns, &self.filters);
    }

    /// Checks a row against all active column filters.
    fn passes(row: &T, columns: &[ColumnSpec<T>], filters: &ColumnFilters) -> bool {
        columns
            .iter()
            .filter(|c| c.is_filterable())
            .all(|c| filters.accepts(c.id(), &c.text(row)))
    }
}
