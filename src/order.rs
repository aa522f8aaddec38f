//! Storage orders.
//!
//! A matrix stores its `M × N` elements in one flat buffer. Which logical
//! `(row, col)` cell lives at which position of that buffer is decided by
//! a type-level storage order:
//!
//! - [`ColMajor`]: consecutive elements walk down a column,
//!   `index = col * nrows + row`.
//! - [`RowMajor`]: consecutive elements walk along a row,
//!   `index = row * ncols + col`.
//!
//! Both orders share one mapping function, [`offset`]; the order only
//! supplies the flag it branches on.

use core::fmt::Debug;
use core::hash::Hash;

/// Linear storage offset of the cell `(row, col)` in an `nrows × ncols`
/// matrix.
///
/// No bounds checking is performed; callers guarantee `row < nrows` and
/// `col < ncols`.
///
/// ```
/// use cellwise::order::offset;
/// // 2×3 matrix
/// assert_eq!(offset(1, 2, 2, 3, true), 5);  // col 2 * 2 rows + row 1
/// assert_eq!(offset(1, 2, 2, 3, false), 5); // row 1 * 3 cols + col 2
/// assert_eq!(offset(1, 0, 2, 3, true), 1);
/// assert_eq!(offset(1, 0, 2, 3, false), 3);
/// ```
#[inline]
pub const fn offset(row: usize, col: usize, nrows: usize, ncols: usize, column_major: bool) -> usize {
    if column_major {
        col * nrows + row
    } else {
        row * ncols + col
    }
}

/// Type-level storage order of a [`Matrix`](crate::Matrix).
pub trait StorageOrder: Copy + Default + Debug + Eq + Hash + 'static {
    /// `true` for column-major storage.
    const IS_COLUMN_MAJOR: bool;

    /// Linear storage offset of `(row, col)` in an `nrows × ncols` matrix.
    #[inline]
    fn offset(row: usize, col: usize, nrows: usize, ncols: usize) -> usize {
        offset(row, col, nrows, ncols, Self::IS_COLUMN_MAJOR)
    }
}

/// Column-major storage (the default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColMajor;

/// Row-major storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl StorageOrder for ColMajor {
    const IS_COLUMN_MAJOR: bool = true;
}

impl StorageOrder for RowMajor {
    const IS_COLUMN_MAJOR: bool = false;
}
