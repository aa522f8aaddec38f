use crate::order::StorageOrder;
use crate::Matrix;

// ── Slice access ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize, O: StorageOrder> Matrix<T, M, N, O> {
    /// View the entire matrix as a flat slice, in storage order.
    ///
    /// ```
    /// use cellwise::{Matrix, RowMajor};
    /// let c = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(c.as_slice(), &[1, 3, 2, 4]);
    /// let r: Matrix<i32, 2, 2, RowMajor> = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(r.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice, in storage order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Create a matrix from a flat slice laid out in storage order `O`.
    ///
    /// Panics if `slice.len() != M * N`.
    ///
    /// ```
    /// use cellwise::{Matrix, RowMajor};
    /// // Column-major: col0=[1,4], col1=[2,5], col2=[3,6]
    /// let m: Matrix<f64, 2, 3> = Matrix::from_slice(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// assert_eq!(m[(0, 2)], 3.0);
    ///
    /// let r: Matrix<f64, 2, 3, RowMajor> = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(r, m);
    /// ```
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Copy + Default,
    {
        assert_eq!(
            slice.len(),
            M * N,
            "slice length {} does not match {}x{} matrix",
            slice.len(),
            M,
            N
        );
        let mut m = Self::filled(T::default());
        m.as_mut_slice().copy_from_slice(slice);
        m
    }
}

// ── Iterators ───────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize, O: StorageOrder> Matrix<T, M, N, O> {
    /// Iterate over all elements in storage order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T, const M: usize, const N: usize, O: StorageOrder> IntoIterator
    for &'a Matrix<T, M, N, O>
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const M: usize, const N: usize, O: StorageOrder> IntoIterator
    for &'a mut Matrix<T, M, N, O>
{
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
