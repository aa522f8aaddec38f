//! Pre-defined type aliases for common matrix sizes.

use crate::order::RowMajor;
use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ── Rectangular matrix aliases ─────────────────────────────────────

/// 1×2 matrix.
pub type Matrix1x2<T> = Matrix<T, 1, 2>;
/// 1×3 matrix.
pub type Matrix1x3<T> = Matrix<T, 1, 3>;
/// 1×4 matrix.
pub type Matrix1x4<T> = Matrix<T, 1, 4>;

/// 2×1 matrix.
pub type Matrix2x1<T> = Matrix<T, 2, 1>;
/// 2×3 matrix.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2×4 matrix.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;

/// 3×1 matrix.
pub type Matrix3x1<T> = Matrix<T, 3, 1>;
/// 3×2 matrix.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3×4 matrix.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;

/// 4×1 matrix.
pub type Matrix4x1<T> = Matrix<T, 4, 1>;
/// 4×2 matrix.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4×3 matrix.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;

// ── Row-major aliases ──────────────────────────────────────────────

/// 2×2 matrix stored row by row.
pub type RowMatrix2<T> = Matrix<T, 2, 2, RowMajor>;
/// 3×3 matrix stored row by row.
pub type RowMatrix3<T> = Matrix<T, 3, 3, RowMajor>;
/// 4×4 matrix stored row by row.
pub type RowMatrix4<T> = Matrix<T, 4, 4, RowMajor>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_have_expected_shapes() {
        let a: Matrix2x3<f64> = Matrix::zeros();
        assert_eq!((a.nrows(), a.ncols()), (2, 3));
        let b: Matrix4<i32> = Matrix::eye();
        assert_eq!(b[(3, 3)], 1);
    }

    #[test]
    fn row_major_alias() {
        let r: RowMatrix2<i32> = Matrix::from_rows([[1, 2], [3, 4]]);
        assert!(!r.is_column_major());
        assert_eq!(r, Matrix2::new([[1, 2], [3, 4]]));
    }
}
