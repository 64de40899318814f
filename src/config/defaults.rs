// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configurable setting.
//!
//! # Categories
//!
//! - **Gallery**: records per page
//! - **Modal**: delays of the two timed modal transitions

use crate::domain::gallery::newtypes::page_size_bounds;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of project cards per page.
pub const DEFAULT_PAGE_SIZE: usize = page_size_bounds::DEFAULT;

/// Minimum number of project cards per page.
pub const MIN_PAGE_SIZE: usize = page_size_bounds::MIN;

/// Largest page size accepted from `settings.toml`.
pub const MAX_PAGE_SIZE: usize = 60;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Delay between mounting the modal and starting its fade-in (milliseconds).
pub const DEFAULT_MODAL_OPEN_DELAY_MS: u64 = 10;

/// Length of the fade-out before the modal unmounts (milliseconds).
pub const DEFAULT_MODAL_CLOSE_DELAY_MS: u64 = 200;

/// Upper bound for either modal delay (milliseconds).
pub const MAX_MODAL_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAGE_SIZE >= 1);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    assert!(DEFAULT_MODAL_OPEN_DELAY_MS <= MAX_MODAL_DELAY_MS);
    assert!(DEFAULT_MODAL_CLOSE_DELAY_MS <= MAX_MODAL_DELAY_MS);
};
