use std::ops::Range;

#[cfg(test)]
#[path = "./pager.tests.rs"]
mod pager_tests;

/// Page window over the filtered and sorted view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    page_index: usize,
}

impl Pager {
    /// Creates new [`Pager`] starting at the first page.
    pub fn new(page_size: usize) -> Self {
        Self::with_index(page_size, 0)
    }

    /// Creates new [`Pager`] at the given zero-based page index.
    pub fn with_index(page_size: usize, page_index: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Returns the number of pages needed for `total` rows, always at least one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Clamps the page index to the last valid page for `total` rows and
    /// returns the row range of the clamped page.\
    /// **Note** that a non-empty row set never yields an empty page, even when
    /// the view shrank after a filter change.
    pub fn clamp(&mut self, total: usize) -> Range<usize> {
        let last_page = self.page_count(total) - 1;
        if self.page_index > last_page {
            self.page_index = last_page;
        }

        let start = (self.page_index * self.page_size).min(total);
        start..(start + self.page_size).min(total)
    }
}
