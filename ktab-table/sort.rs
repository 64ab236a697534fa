use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[cfg(test)]
#[path = "./sort.tests.rs"]
mod sort_tests;

/// Sort direction for a single table column.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the opposite sort direction.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Applies the direction to a comparator result.\
    /// Descending flips the comparator sign instead of reversing the sorted array,
    /// so ties keep their pre-sort relative order under a stable sort.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

/// Single-column sort state, there is exactly one active sort key at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    key: String,
    order: SortOrder,
}

impl SortState {
    /// Creates new [`SortState`] for the given column and direction.
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self { key: key.into(), order }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Moves the sort to another column.\
    /// **Note** that if the column is already the sort key, the direction is
    /// reversed; a new column always starts ascending.
    pub fn toggle(&mut self, column_id: &str) {
        if self.key == column_id {
            self.order = self.order.reversed();
        } else {
            self.key = column_id.to_owned();
            self.order = SortOrder::Ascending;
        }
    }
}
