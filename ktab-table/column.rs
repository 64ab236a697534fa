use std::cmp::Ordering;
use std::fmt;

#[cfg(test)]
#[path = "./column.tests.rs"]
mod column_tests;

/// Single cell value produced by a column accessor.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

/// Declarative description of a single table column: value accessor plus
/// sortability / filterability flags.\
/// A list of specs replaces per-page bespoke filter and sort code.
pub struct ColumnSpec<T> {
    id: String,
    label: String,
    accessor: Box<dyn Fn(&T) -> Option<CellValue>>,
    compare: Option<Box<dyn Fn(&T, &T) -> Ordering>>,
    sortable: bool,
    filterable: bool,
    to_right: bool,
}

impl<T> ColumnSpec<T> {
    /// Creates new [`ColumnSpec`] that is sortable and filterable by default.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> Option<CellValue> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accessor: Box::new(accessor),
            compare: None,
            sortable: true,
            filterable: true,
            to_right: false,
        }
    }

    /// Marks the column as holding numeric-like data that should be aligned to the right.
    pub fn to_right(mut self) -> Self {
        self.to_right = true;
        self
    }

    /// Changes whether the column can be used as a sort key.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Changes whether the column offers value filters.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Sets a custom comparison function used instead of the accessor-based one.
    pub fn with_compare(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Box::new(compare));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn is_right_aligned(&self) -> bool {
        self.to_right
    }

    /// Returns the raw cell value for a row.
    pub fn value(&self, row: &T) -> Option<CellValue> {
        (self.accessor)(row)
    }

    /// Returns the stringified cell value for a row.\
    /// A missing value is treated as an empty string, it never panics.
    pub fn text(&self, row: &T) -> String {
        self.value(row).map(|value| value.to_string()).unwrap_or_default()
    }

    /// Compares two rows by this column.\
    /// The custom comparison function wins when present; otherwise numbers compare
    /// numerically and everything else falls back to byte-order string comparison,
    /// which keeps the ordering deterministic across environments.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        if let Some(compare) = &self.compare {
            return compare(a, b);
        }

        match (self.value(a), self.value(b)) {
            (Some(CellValue::Number(a)), Some(CellValue::Number(b))) => a.total_cmp(&b),
            (a, b) => {
                let a = a.map(|v| v.to_string()).unwrap_or_default();
                let b = b.map(|v| v.to_string()).unwrap_or_default();
                a.cmp(&b)
            },
        }
    }
}
