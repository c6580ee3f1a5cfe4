//! Most-significant-digit radix sort over a configurable radix.
//!
//! Elements are partitioned into one bucket per digit value at the current
//! place value, most significant digit first, and each non-empty bucket is
//! recursed into with the next-lower place value. Bucketing preserves arrival
//! order, so equal prefixes are never re-sorted prematurely.
//!
//! ## Characteristics
//!
//!  * out-of-place, returns a freshly allocated result
//!  * stable with respect to the digit partition
//!  * single-threaded, no shared state, safely re-entrant
//!
//! Negative values are handled by splitting the input into a negative and a
//! non-negative group: both groups are sorted by magnitude, the negative
//! group is then emitted in reverse (largest magnitude first, i.e. most
//! negative first) ahead of the non-negative group.

use thiserror::Error;

mod msd;

pub use msd::sort_with_radix;

/// Radix used by [`sort`].
pub const DEFAULT_RADIX: u32 = 10;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A radix below 2 cannot form digit buckets.
    #[error("radix must be at least 2, got {0}")]
    InvalidRadix(u32),
}

/// Sorts `values` in ascending order using base-10 digit partitioning.
///
/// Returns a new vector containing the same multiset of values; the input is
/// left untouched.
///
/// # Examples
/// ```rust
/// let sorted = msd_radix::radix::sort(&[170, 45, 75, 90, 802, 24, 2, 66]).unwrap();
///
/// assert_eq!(sorted, [2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn sort(values: &[i64]) -> Result<Vec<i64>, SortError> {
    sort_with_radix(values, DEFAULT_RADIX)
}
