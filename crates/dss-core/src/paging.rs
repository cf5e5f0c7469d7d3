//! Page cursor for the app list.

use std::ops::Range;

use crate::errors::CoreError;

/// Index of the current page in a list of `len` items split into pages of
/// `page_size`. Moving past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
    page_size: usize,
    len: usize,
}

impl PageCursor {
    /// Cursor on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `page_size` is zero.
    pub fn new(len: usize, page_size: usize) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::Validation(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            index: 0,
            page_size,
            len,
        })
    }

    /// Move to page `index`, wrapped into range.
    #[must_use]
    pub const fn at(self, index: usize) -> Self {
        Self {
            index: index % self.total_pages(),
            ..self
        }
    }

    /// Number of pages. An empty list still has one (empty) page.
    #[must_use]
    pub const fn total_pages(self) -> usize {
        let pages = self.len.div_ceil(self.page_size);
        if pages == 0 { 1 } else { pages }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn page_size(self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.total_pages(),
            ..self
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        let total = self.total_pages();
        Self {
            index: (self.index + total - 1) % total,
            ..self
        }
    }

    /// Item indices on the current page.
    #[must_use]
    pub fn range(self) -> Range<usize> {
        let start = (self.index * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }
}
