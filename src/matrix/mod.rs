pub mod aliases;
mod block;
mod ops;
mod slice;
mod util;

use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use crate::order::{ColMajor, StorageOrder};
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Fixed-size matrix with `M` rows and `N` columns.
///
/// The `M × N` elements live in one stack-allocated buffer whose layout is
/// chosen by the storage order `O` ([`ColMajor`] by default, or
/// [`RowMajor`](crate::RowMajor)). Indexing is always logical `(row, col)`,
/// so two matrices holding the same values compare equal regardless of
/// their storage orders.
///
/// # Examples
///
/// ```
/// use cellwise::{Matrix, RowMajor};
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let r: Matrix<f64, 2, 2, RowMajor> = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(r, a);
/// assert_eq!(a.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
/// assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matrix<T, const M: usize, const N: usize, O = ColMajor> {
    // Flat buffer of M * N elements, laid out by `O`. The nesting is only a
    // way to get a fixed-size M * N array; it does not imply columns.
    pub(crate) data: [[T; M]; N],
    order: PhantomData<O>,
}

impl<T, const M: usize, const N: usize, O> Matrix<T, M, N, O> {
    #[inline]
    pub(crate) const fn from_storage(data: [[T; M]; N]) -> Self {
        Self {
            data,
            order: PhantomData,
        }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        M
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }
}

impl<T, const M: usize, const N: usize, O: StorageOrder> Matrix<T, M, N, O> {
    /// `true` if the elements are stored column by column.
    #[inline]
    pub const fn is_column_major(&self) -> bool {
        O::IS_COLUMN_MAJOR
    }

    /// Position of `(row, col)` in the flat buffer.
    #[inline]
    pub(crate) fn storage_index(row: usize, col: usize) -> usize {
        debug_assert!(row < M && col < N);
        O::offset(row, col, M, N)
    }

    /// Create a matrix from a row-major 2D array, in any storage order.
    ///
    /// The input is `[[row0], [row1], ...]` (M arrays of N elements each).
    ///
    /// ```
    /// use cellwise::{Matrix, RowMajor};
    /// let m: Matrix<i32, 2, 3, RowMajor> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(rows: [[T; N]; M]) -> Self
    where
        T: Copy + Default,
    {
        Self::from_fn(|i, j| rows[i][j])
    }

    /// Create a matrix with every element set to `value`.
    #[inline]
    pub fn filled(value: T) -> Self
    where
        T: Copy,
    {
        Self::from_storage([[value; M]; N])
    }
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a column-major matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (M arrays of N elements each).
    /// Use [`Matrix::from_rows`] to build other storage orders.
    #[inline]
    pub fn new(rows: [[T; N]; M]) -> Self
    where
        T: Copy + Default,
    {
        Self::from_rows(rows)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a column-major matrix filled with zeros.
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create a column-major identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T: Copy + Default, const M: usize, const N: usize, O: StorageOrder> Default
    for Matrix<T, M, N, O>
{
    fn default() -> Self {
        Self::filled(T::default())
    }
}

// Logical equality, across storage orders.
impl<T, U, const M: usize, const N: usize, O1, O2> PartialEq<Matrix<U, M, N, O2>>
    for Matrix<T, M, N, O1>
where
    T: PartialEq<U>,
    O1: StorageOrder,
    O2: StorageOrder,
{
    fn eq(&self, other: &Matrix<U, M, N, O2>) -> bool {
        for j in 0..N {
            for i in 0..M {
                if self[(i, j)] != other[(i, j)] {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Eq, const M: usize, const N: usize, O: StorageOrder> Eq for Matrix<T, M, N, O> {}

impl<T, const M: usize, const N: usize, O: StorageOrder> MatrixRef for Matrix<T, M, N, O> {
    type Elem = T;

    const SHAPE: Option<(usize, usize)> = Some((M, N));

    #[inline]
    fn nrows(&self) -> usize {
        M
    }

    #[inline]
    fn ncols(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data.as_flattened()[Self::storage_index(row, col)]
    }
}

impl<T, const M: usize, const N: usize, O: StorageOrder> MatrixMut for Matrix<T, M, N, O> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data.as_flattened_mut()[Self::storage_index(row, col)]
    }
}

// Index by (row, col) tuple
impl<T, const M: usize, const N: usize, O: StorageOrder> Index<(usize, usize)>
    for Matrix<T, M, N, O>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < M && col < N,
            "index ({row}, {col}) out of bounds for {M}×{N} matrix"
        );
        &self.data.as_flattened()[O::offset(row, col, M, N)]
    }
}

impl<T, const M: usize, const N: usize, O: StorageOrder> IndexMut<(usize, usize)>
    for Matrix<T, M, N, O>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < M && col < N,
            "index ({row}, {col}) out of bounds for {M}×{N} matrix"
        );
        &mut self.data.as_flattened_mut()[O::offset(row, col, M, N)]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::RowMajor;

    #[test]
    fn zeros_and_eye() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn new_and_index() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn row_major_index() {
        let m: Matrix<i32, 2, 3, RowMajor> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert!(!m.is_column_major());
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);

        let mut r: Matrix<f64, 2, 2, RowMajor> = Matrix::default();
        r[(0, 1)] = 5.0;
        assert_eq!(r.as_slice(), &[0.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds() {
        // (2, 0) of a 2×3 column-major matrix would alias (0, 1) without the check
        let m: Matrix<i32, 2, 3> = Matrix::zeros();
        let _ = m[(2, 0)];
    }

    #[test]
    fn non_square() {
        let m: Matrix<f64, 2, 3> = Matrix::zeros();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
    }

    #[test]
    fn equality_ignores_storage_order() {
        let c = Matrix::new([[1, 2], [3, 4]]);
        let r: Matrix<i32, 2, 2, RowMajor> = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(c, r);
        assert_eq!(r, c);

        let other: Matrix<i32, 2, 2, RowMajor> = Matrix::from_rows([[1, 2], [3, 5]]);
        assert_ne!(c, other);
    }

    #[test]
    fn default_is_type_default() {
        let m: Matrix<u8, 2, 3, RowMajor> = Matrix::default();
        assert!(m.iter().all(|&x| x == 0));
    }

    #[test]
    fn filled() {
        let m: Matrix<f32, 3, 2> = Matrix::filled(1.5);
        assert!(m.iter().all(|&x| x == 1.5));
    }

    #[test]
    fn matrix_ref_trait() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);

        // Use via trait, as a generic algorithm would
        fn trace_generic<A: MatrixRef<Elem = f64>>(m: &A) -> f64 {
            let mut sum = 0.0;
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                sum += *m.get(i, i);
            }
            sum
        }

        assert_eq!(trace_generic(&m), 5.0);
    }

    #[test]
    fn matrix_mut_trait() {
        let mut m: Matrix<f64, 2, 2, RowMajor> = Matrix::default();

        // Use via trait
        fn set_diag<A: MatrixMut<Elem = f64>>(m: &mut A, val: f64) {
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                *m.get_mut(i, i) = val;
            }
        }

        set_diag(&mut m, 7.0);
        assert_eq!(m[(0, 0)], 7.0);
        assert_eq!(m[(1, 1)], 7.0);
        assert_eq!(m[(0, 1)], 0.0);
    }

    #[test]
    fn integer_matrix() {
        let m: Matrix<i32, 2, 2> = Matrix::eye();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 0);
    }
}
