use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

/// Rectangular sub-range of a matrix plus the offset applied when reading
/// operands.
///
/// The range is half-open on both axes: `rows.start ≤ row < rows.end` and
/// `cols.start ≤ col < cols.end`. A cell `(row, col)` inside the range is
/// written at `(row, col)` of the destination, but its operands are read
/// at `(row + row_offset, col + col_offset)`. Offsets never affect where
/// results are written.
///
/// All constructors are `const fn`. Building a descriptor in a `const`
/// item turns a malformed range into a compile error:
///
/// ```compile_fail
/// use cellwise::Bounds;
/// const BAD: Bounds = Bounds::new(2..1, 0..2);
/// ```
///
/// and [`Bounds::within`] does the same for a range that does not fit the
/// matrix it will be used with:
///
/// ```compile_fail
/// use cellwise::Bounds;
/// const TOO_WIDE: Bounds = Bounds::new(0..2, 0..5).within::<4, 4>();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    begin_row: usize,
    end_row: usize,
    begin_col: usize,
    end_col: usize,
    row_offset: isize,
    col_offset: isize,
}

impl Bounds {
    /// Range covering `rows × cols`, with zero argument offsets.
    ///
    /// Panics if either range has `start > end`.
    ///
    /// ```
    /// use cellwise::Bounds;
    /// let b = Bounds::new(0..2, 1..3);
    /// assert!(b.contains(1, 2));
    /// assert!(!b.contains(1, 0));
    /// ```
    pub const fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        assert!(rows.start <= rows.end, "row range start exceeds its end");
        assert!(cols.start <= cols.end, "column range start exceeds its end");
        Self {
            begin_row: rows.start,
            end_row: rows.end,
            begin_col: cols.start,
            end_col: cols.end,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Range covering a whole `nrows × ncols` matrix.
    pub const fn full(nrows: usize, ncols: usize) -> Self {
        Self::new(0..nrows, 0..ncols)
    }

    /// Same range, reading operands shifted by `(row_offset, col_offset)`.
    ///
    /// ```
    /// use cellwise::Bounds;
    /// // Write rows 0..2, read rows 1..3 of the operands.
    /// let b = Bounds::new(0..2, 0..2).with_offset(1, 0);
    /// assert_eq!(b.source(0, 1), (1, 1));
    /// ```
    pub const fn with_offset(self, row_offset: isize, col_offset: isize) -> Self {
        Self {
            row_offset,
            col_offset,
            ..self
        }
    }

    /// Check this range against an `M × N` destination, in const context.
    ///
    /// Evaluated in a `const` item, an out-of-bounds range fails to
    /// compile. At runtime it panics.
    pub const fn within<const M: usize, const N: usize>(self) -> Self {
        assert!(
            self.end_row <= M && self.end_col <= N,
            "range out of bounds for destination"
        );
        self
    }

    /// Destination rows of the range.
    #[inline]
    pub const fn rows(&self) -> Range<usize> {
        self.begin_row..self.end_row
    }

    /// Destination columns of the range.
    #[inline]
    pub const fn cols(&self) -> Range<usize> {
        self.begin_col..self.end_col
    }

    /// `(row_offset, col_offset)` applied to operand reads.
    #[inline]
    pub const fn offset(&self) -> (isize, isize) {
        (self.row_offset, self.col_offset)
    }

    /// Number of cells in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        (self.end_row - self.begin_row) * (self.end_col - self.begin_col)
    }

    /// `true` if the range contains no cells (on either axis).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.begin_row == self.end_row || self.begin_col == self.end_col
    }

    /// `true` if `(row, col)` lies inside the range.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        self.begin_row <= row && row < self.end_row && self.begin_col <= col && col < self.end_col
    }

    /// Operand position read for destination cell `(row, col)`.
    #[inline]
    pub const fn source(&self, row: usize, col: usize) -> (usize, usize) {
        (
            row.wrapping_add_signed(self.row_offset),
            col.wrapping_add_signed(self.col_offset),
        )
    }

    /// Iterate over every `(row, col)` in the range exactly once.
    #[inline]
    pub fn cells(&self) -> Cells {
        Cells::new(self)
    }

    /// The cells of an `nrows × ncols` matrix outside this range, as four
    /// strips (above, below, left, right) that carry the same argument
    /// offset. Strips may be empty.
    ///
    /// The range must fit the matrix, see [`Bounds::check`].
    ///
    /// ```
    /// use cellwise::Bounds;
    /// let [above, below, left, right] = Bounds::new(1..2, 1..3).outside(3, 4);
    /// assert_eq!((above.rows(), above.cols()), (0..1, 0..4));
    /// assert_eq!((below.rows(), below.cols()), (2..3, 0..4));
    /// assert_eq!((left.rows(), left.cols()), (1..2, 0..1));
    /// assert_eq!((right.rows(), right.cols()), (1..2, 3..4));
    /// ```
    pub const fn outside(&self, nrows: usize, ncols: usize) -> [Bounds; 4] {
        [
            self.strip(0..self.begin_row, 0..ncols),
            self.strip(self.end_row..nrows, 0..ncols),
            self.strip(self.begin_row..self.end_row, 0..self.begin_col),
            self.strip(self.begin_row..self.end_row, self.end_col..ncols),
        ]
    }

    const fn strip(&self, rows: Range<usize>, cols: Range<usize>) -> Bounds {
        Bounds {
            begin_row: rows.start,
            end_row: rows.end,
            begin_col: cols.start,
            end_col: cols.end,
            ..*self
        }
    }

    /// Check that the range fits an `nrows × ncols` destination.
    pub const fn check(&self, nrows: usize, ncols: usize) -> Result<(), BoundsError> {
        if self.end_row <= nrows && self.end_col <= ncols {
            Ok(())
        } else {
            Err(BoundsError::Range {
                rows: (self.begin_row, self.end_row),
                cols: (self.begin_col, self.end_col),
                nrows,
                ncols,
            })
        }
    }

    /// Check that every offset read of the range lands inside an
    /// `nrows × ncols` operand.
    ///
    /// An empty range reads nothing and always passes.
    pub const fn check_source(&self, nrows: usize, ncols: usize) -> Result<(), BoundsError> {
        if self.is_empty() {
            return Ok(());
        }
        let row_lo = self.begin_row as isize + self.row_offset;
        let row_hi = self.end_row as isize + self.row_offset;
        let col_lo = self.begin_col as isize + self.col_offset;
        let col_hi = self.end_col as isize + self.col_offset;
        if row_lo >= 0 && col_lo >= 0 && row_hi <= nrows as isize && col_hi <= ncols as isize {
            Ok(())
        } else {
            Err(BoundsError::Read {
                rows: (row_lo, row_hi),
                cols: (col_lo, col_hi),
                nrows,
                ncols,
            })
        }
    }
}

/// A range or read region that does not fit the matrix it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// The destination range extends beyond the destination matrix.
    Range {
        rows: (usize, usize),
        cols: (usize, usize),
        nrows: usize,
        ncols: usize,
    },
    /// The offset read region extends beyond a matrix operand or copy source.
    Read {
        rows: (isize, isize),
        cols: (isize, isize),
        nrows: usize,
        ncols: usize,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::Range {
                rows,
                cols,
                nrows,
                ncols,
            } => write!(
                f,
                "range rows {}..{} cols {}..{} out of bounds for {nrows}×{ncols} matrix",
                rows.0, rows.1, cols.0, cols.1
            ),
            BoundsError::Read {
                rows,
                cols,
                nrows,
                ncols,
            } => write!(
                f,
                "read rows {}..{} cols {}..{} out of bounds for {nrows}×{ncols} operand",
                rows.0, rows.1, cols.0, cols.1
            ),
        }
    }
}

impl core::error::Error for BoundsError {}

/// Iterator over the cells of a [`Bounds`] range.
///
/// Yields `(row, col)` pairs column by column. Callers must not rely on
/// the order.
#[derive(Debug, Clone)]
pub struct Cells {
    rows: Range<usize>,
    row: usize,
    col: usize,
    end_col: usize,
}

impl Cells {
    fn new(bounds: &Bounds) -> Self {
        let rows = bounds.rows();
        let cols = bounds.cols();
        // An empty row range would otherwise yield one phantom cell per column.
        let end_col = if rows.is_empty() { cols.start } else { cols.end };
        Self {
            row: rows.start,
            rows,
            col: cols.start,
            end_col,
        }
    }
}

impl Iterator for Cells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<(usize, usize)> {
        if self.col >= self.end_col {
            return None;
        }
        let cell = (self.row, self.col);
        self.row += 1;
        if self.row == self.rows.end {
            self.row = self.rows.start;
            self.col += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.col >= self.end_col {
            0
        } else {
            (self.end_col - self.col) * self.rows.len() - (self.row - self.rows.start)
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_each_cell_once() {
        let b = Bounds::new(1..3, 2..5);
        let mut seen = [[0u8; 6]; 4];
        for (row, col) in b.cells() {
            seen[row][col] += 1;
        }
        for row in 0..4 {
            for col in 0..6 {
                let expected = u8::from(b.contains(row, col));
                assert_eq!(seen[row][col], expected, "cell ({row}, {col})");
            }
        }
        assert_eq!(b.cells().count(), 6);
        assert_eq!(b.len(), 6);
    }

    #[test]
    fn empty_ranges_yield_nothing() {
        assert_eq!(Bounds::new(0..0, 0..3).cells().count(), 0);
        assert_eq!(Bounds::new(0..3, 2..2).cells().count(), 0);
        assert_eq!(Bounds::new(0..0, 0..0).cells().count(), 0);
        assert!(Bounds::new(2..2, 0..3).is_empty());
        assert_eq!(Bounds::new(2..2, 0..3).len(), 0);
    }

    #[test]
    fn exact_size() {
        let mut cells = Bounds::new(0..2, 0..3).cells();
        assert_eq!(cells.len(), 6);
        cells.next();
        cells.next();
        cells.next();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells.by_ref().count(), 3);
        assert_eq!(cells.len(), 0);
        assert_eq!(cells.next(), None);
    }

    #[test]
    fn full_covers_matrix() {
        let b = Bounds::full(3, 2);
        assert_eq!(b.rows(), 0..3);
        assert_eq!(b.cols(), 0..2);
        assert_eq!(b.offset(), (0, 0));
        assert!(b.check(3, 2).is_ok());
    }

    #[test]
    fn source_applies_offset() {
        let b = Bounds::new(1..3, 1..3).with_offset(-1, 2);
        assert_eq!(b.source(1, 1), (0, 3));
        assert_eq!(b.source(2, 2), (1, 4));
        // Writing position is unaffected
        assert!(b.contains(1, 1));
        assert!(!b.contains(0, 3));
    }

    #[test]
    fn check_rejects_oversized_range() {
        let b = Bounds::new(0..3, 0..2);
        assert!(b.check(3, 2).is_ok());
        assert!(b.check(4, 4).is_ok());
        assert_eq!(
            b.check(2, 2),
            Err(BoundsError::Range {
                rows: (0, 3),
                cols: (0, 2),
                nrows: 2,
                ncols: 2,
            })
        );
    }

    #[test]
    fn check_source_with_offsets() {
        // 3×3 block written at (0,0) reading a 4×4 operand from (1,1)
        let b = Bounds::new(0..3, 0..3).with_offset(1, 1);
        assert!(b.check_source(4, 4).is_ok());
        assert!(b.check_source(3, 3).is_err());

        let neg = Bounds::new(1..3, 0..2).with_offset(-1, 0);
        assert!(neg.check_source(2, 2).is_ok());
        let too_neg = Bounds::new(1..3, 0..2).with_offset(-2, 0);
        assert_eq!(
            too_neg.check_source(2, 2),
            Err(BoundsError::Read {
                rows: (-1, 1),
                cols: (0, 2),
                nrows: 2,
                ncols: 2,
            })
        );
    }

    #[test]
    fn outside_strips_cover_complement() {
        for bounds in [
            Bounds::new(1..3, 2..4),
            Bounds::new(0..4, 0..5),
            Bounds::new(2..2, 0..5),
            Bounds::new(0..4, 3..3),
            Bounds::new(0..1, 4..5).with_offset(2, -1),
        ] {
            let mut seen = [[0u8; 5]; 4];
            for strip in bounds.outside(4, 5) {
                assert_eq!(strip.offset(), bounds.offset());
                for (row, col) in strip.cells() {
                    seen[row][col] += 1;
                }
            }
            for row in 0..4 {
                for col in 0..5 {
                    let expected = u8::from(!bounds.contains(row, col));
                    assert_eq!(seen[row][col], expected, "({row}, {col}) for {bounds:?}");
                }
            }
        }
    }

    #[test]
    fn empty_range_reads_nothing() {
        let b = Bounds::new(0..0, 0..5).with_offset(100, 100);
        assert!(b.check_source(1, 1).is_ok());
    }

    #[test]
    fn const_construction() {
        const B: Bounds = Bounds::new(0..3, 0..3).with_offset(0, 1).within::<3, 4>();
        assert_eq!(B.offset(), (0, 1));
        assert_eq!(B.len(), 9);
    }

    #[test]
    #[should_panic(expected = "exceeds its end")]
    fn reversed_range_panics() {
        let (start, end) = (3, 1);
        let _ = Bounds::new(start..end, 0..1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn within_panics_at_runtime() {
        let _ = Bounds::full(5, 5).within::<4, 4>();
    }

    #[test]
    fn error_display() {
        let err = Bounds::new(0..3, 0..2).check(2, 2).unwrap_err();
        let s = format!("{err}");
        assert!(s.contains("out of bounds"));
        assert!(s.contains("2×2"));
    }
}
