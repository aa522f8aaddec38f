use num_traits::AsPrimitive;

use crate::order::StorageOrder;
use crate::transform::{Bounds, Identity, Transform};
use crate::Matrix;

// ── General block extraction & insertion ────────────────────────────

impl<T, const M: usize, const N: usize, O> Matrix<T, M, N, O>
where
    T: AsPrimitive<T> + Default,
    O: StorageOrder,
{
    /// Extract a P×Q sub-matrix starting at position `(i, j)`.
    ///
    /// A block larger than the matrix fails to compile; a block that fits
    /// but starts too far in panics.
    ///
    /// ```
    /// use cellwise::Matrix;
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// let b: Matrix<f64, 2, 2> = m.block(1, 1);
    /// assert_eq!(b[(0, 0)], 5.0);
    /// assert_eq!(b[(1, 1)], 9.0);
    /// ```
    ///
    /// ```compile_fail
    /// use cellwise::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::zeros();
    /// let b: Matrix<f64, 2, 4> = m.block(0, 0);
    /// ```
    #[track_caller]
    pub fn block<const P: usize, const Q: usize>(&self, i: usize, j: usize) -> Matrix<T, P, Q, O> {
        const { assert!(P <= M && Q <= N, "block larger than matrix") }
        let bounds = Bounds::full(P, Q).with_offset(i as isize, j as isize);
        Transform::<_, T>::over(Identity, bounds).default_elsewhere((self,))
    }

    /// Write a P×Q sub-matrix into self starting at position `(i, j)`.
    ///
    /// `src` may use any storage order. A block larger than the matrix
    /// fails to compile; one that starts too far in panics.
    ///
    /// ```
    /// use cellwise::Matrix;
    /// let mut m: Matrix<f64, 3, 3> = Matrix::zeros();
    /// let patch = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// m.set_block(1, 1, &patch);
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(2, 2)], 4.0);
    /// ```
    #[track_caller]
    pub fn set_block<const P: usize, const Q: usize, O2: StorageOrder>(
        &mut self,
        i: usize,
        j: usize,
        src: &Matrix<T, P, Q, O2>,
    ) {
        const { assert!(P <= M && Q <= N, "block larger than matrix") }
        let bounds = Bounds::new(i..i + P, j..j + Q).with_offset(-(i as isize), -(j as isize));
        Transform::<_, T>::over(Identity, bounds).assign((src,), self);
    }
}

// ── Corner blocks ───────────────────────────────────────────────────

// Corner positions are known from the types, so an oversized corner is a
// compile error rather than an underflowing start index.
impl<T, const M: usize, const N: usize, O> Matrix<T, M, N, O>
where
    T: AsPrimitive<T> + Default,
    O: StorageOrder,
{
    /// Extract the top-left P×Q corner.
    #[track_caller]
    pub fn top_left<const P: usize, const Q: usize>(&self) -> Matrix<T, P, Q, O> {
        const { assert!(P <= M && Q <= N, "corner larger than matrix") }
        self.block(0, 0)
    }

    /// Extract the top-right P×Q corner.
    ///
    /// ```compile_fail
    /// use cellwise::Matrix;
    /// let m: Matrix<i32, 3, 3> = Matrix::zeros();
    /// let c: Matrix<i32, 2, 4> = m.top_right();
    /// ```
    #[track_caller]
    pub fn top_right<const P: usize, const Q: usize>(&self) -> Matrix<T, P, Q, O> {
        const { assert!(P <= M && Q <= N, "corner larger than matrix") }
        self.block(0, N - Q)
    }

    /// Extract the bottom-left P×Q corner.
    #[track_caller]
    pub fn bottom_left<const P: usize, const Q: usize>(&self) -> Matrix<T, P, Q, O> {
        const { assert!(P <= M && Q <= N, "corner larger than matrix") }
        self.block(M - P, 0)
    }

    /// Extract the bottom-right P×Q corner.
    #[track_caller]
    pub fn bottom_right<const P: usize, const Q: usize>(&self) -> Matrix<T, P, Q, O> {
        const { assert!(P <= M && Q <= N, "corner larger than matrix") }
        self.block(M - P, N - Q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::RowMajor;

    fn mat4x5() -> Matrix<i32, 4, 5> {
        Matrix::from_fn(|i, j| (i * 5 + j) as i32)
    }

    // ── block / set_block ───────────────────────────────────────

    #[test]
    fn block_extract() {
        let m = mat4x5();
        let b: Matrix<i32, 2, 3> = m.block(1, 1);
        // Row 1 cols 1..4: [6, 7, 8]
        // Row 2 cols 1..4: [11, 12, 13]
        assert_eq!(b, Matrix::new([[6, 7, 8], [11, 12, 13]]));
    }

    #[test]
    fn block_full_matrix() {
        let m = mat4x5();
        let full: Matrix<i32, 4, 5> = m.block(0, 0);
        assert_eq!(full, m);
    }

    #[test]
    fn block_single_element() {
        let m = mat4x5();
        let s: Matrix<i32, 1, 1> = m.block(2, 3);
        assert_eq!(s[(0, 0)], 13);
    }

    #[test]
    fn block_keeps_storage_order() {
        let m: Matrix<i32, 4, 5, RowMajor> = mat4x5().reorder();
        let b: Matrix<i32, 2, 2, RowMajor> = m.block(2, 3);
        assert_eq!(b.as_slice(), &[13, 14, 18, 19]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn block_out_of_bounds() {
        let m = mat4x5();
        let _: Matrix<i32, 2, 3> = m.block(3, 3);
    }

    #[test]
    fn set_block_basic() {
        let mut m: Matrix<i32, 4, 4> = Matrix::zeros();
        let patch = Matrix::new([[1, 2], [3, 4]]);
        m.set_block(1, 1, &patch);
        assert_eq!(
            m,
            Matrix::new([[0, 0, 0, 0], [0, 1, 2, 0], [0, 3, 4, 0], [0, 0, 0, 0]])
        );
    }

    #[test]
    fn set_block_across_storage_orders() {
        let mut m: Matrix<i32, 3, 3, RowMajor> = Matrix::default();
        let patch = Matrix::new([[1, 2, 3]]);
        m.set_block(2, 0, &patch);
        assert_eq!(m.as_slice(), &[0, 0, 0, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_block_out_of_bounds() {
        let mut m: Matrix<i32, 3, 3> = Matrix::zeros();
        let patch = Matrix::new([[1, 2], [3, 4]]);
        m.set_block(2, 2, &patch);
    }

    #[test]
    fn block_roundtrip() {
        let m = mat4x5();
        let b: Matrix<i32, 2, 3> = m.block(1, 2);
        let mut m2: Matrix<i32, 4, 5> = Matrix::zeros();
        m2.set_block(1, 2, &b);
        let b2: Matrix<i32, 2, 3> = m2.block(1, 2);
        assert_eq!(b, b2);
    }

    // ── Corner blocks ───────────────────────────────────────────

    #[test]
    fn top_left() {
        let m = mat4x5();
        let tl: Matrix<i32, 2, 2> = m.top_left();
        assert_eq!(tl, Matrix::new([[0, 1], [5, 6]]));
    }

    #[test]
    fn top_right() {
        let m = mat4x5();
        let tr: Matrix<i32, 2, 2> = m.top_right();
        assert_eq!(tr, Matrix::new([[3, 4], [8, 9]]));
    }

    #[test]
    fn bottom_left() {
        let m = mat4x5();
        let bl: Matrix<i32, 2, 3> = m.bottom_left();
        assert_eq!(bl[(0, 0)], 10);
        assert_eq!(bl[(1, 2)], 17);
    }

    #[test]
    fn bottom_right() {
        let m = mat4x5();
        let br: Matrix<i32, 2, 2> = m.bottom_right();
        assert_eq!(br[(0, 0)], 13);
        assert_eq!(br[(1, 1)], 19);
    }

    #[test]
    fn corner_equal_to_matrix() {
        let m = mat4x5();
        let all: Matrix<i32, 4, 5> = m.bottom_right();
        assert_eq!(all, m);
        let empty: Matrix<i32, 0, 5> = m.top_right();
        assert_eq!(empty.nrows(), 0);
    }

    #[test]
    fn set_block_identity_corner() {
        let mut m: Matrix<f64, 4, 4> = Matrix::zeros();
        let eye2: Matrix<f64, 2, 2> = Matrix::eye();
        m.set_block(0, 0, &eye2);
        m.set_block(2, 2, &eye2);
        assert_eq!(m, Matrix::<f64, 4, 4>::eye());
    }
}
