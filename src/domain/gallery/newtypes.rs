// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.

/// Page size bounds.
pub mod page_size_bounds {
    /// Minimum records per page.
    pub const MIN: usize = 1;
    /// Default records per page.
    pub const DEFAULT: usize = 6;
}

/// Number of records shown per gallery page, guaranteed to be at least one.
///
/// Zero is raised to one rather than rejected, so page math never divides
/// by zero. There is no upper bound here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size of at least one record.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(page_size_bounds::MIN))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}
