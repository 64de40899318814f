// SPDX-License-Identifier: MPL-2.0
//! Pagination math.
//!
//! Pages are 1-based. An empty result still has one (empty) page so that the
//! current page always has a valid value.

use super::PageSize;
use std::ops::Range;

/// Number of pages needed for `count` records: `max(1, ceil(count / size))`.
#[must_use]
pub fn total_pages(count: usize, size: PageSize) -> usize {
    count.div_ceil(size.value()).max(1)
}

/// Clamps a requested page into `[1, total]`.
#[must_use]
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Index range of `page` within a list of `count` records.
///
/// The range is clipped to `count`, so an out-of-range page yields an empty
/// range instead of an error.
#[must_use]
pub fn page_bounds(page: usize, count: usize, size: PageSize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(size.value())
        .min(count);
    let end = start.saturating_add(size.value()).min(count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_one_page() {
        assert_eq!(total_pages(0, PageSize::new(6)), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let size = PageSize::new(6);
        assert_eq!(total_pages(6, size), 1);
        assert_eq!(total_pages(7, size), 2);
        assert_eq!(total_pages(10, size), 2);
        assert_eq!(total_pages(13, size), 3);
    }

    #[test]
    fn page_lengths_sum_to_count() {
        for size in 1..=8 {
            let size = PageSize::new(size);
            for count in 0..=25 {
                let pages = total_pages(count, size);
                let sum: usize = (1..=pages).map(|p| page_bounds(p, count, size).len()).sum();
                assert_eq!(sum, count, "size {} count {count}", size.value());
            }
        }
    }

    #[test]
    fn out_of_range_page_yields_empty_range() {
        let range = page_bounds(5, 10, PageSize::new(6));
        assert!(range.is_empty());
        assert!(page_bounds(0, 10, PageSize::new(6)).len() <= 6);
    }

    #[test]
    fn clamp_page_stays_in_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
