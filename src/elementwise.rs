//! Named element-wise operations.
//!
//! Each operation comes in five forms, all thin calls into
//! [`Transform`](crate::transform::Transform):
//!
//! | Form | Range | Output | Cells outside the range |
//! |------|-------|--------|-------------------------|
//! | `op` | whole matrix | new, same type as the first operand | n/a |
//! | `op_as` | whole matrix | new, element type and storage order of the result | n/a |
//! | `op_range` | `bounds` | new, same type as the first operand | copied from the first operand |
//! | `op_range_no_copy` | `bounds` | new, same type as the first operand | `Default::default()` |
//! | `op_into` | `bounds` | an existing destination | left untouched |
//!
//! Every argument after the first may be a matrix reference or a
//! broadcast scalar. Arithmetic `_as` and `_into` forms compute in the
//! output element type; rounding forms compute in the input type and
//! convert the rounded result.
//!
//! ```
//! use cellwise::{elementwise, Bounds, Matrix, RowMajor};
//!
//! let a = Matrix::new([[1, 2], [3, 4]]);
//! assert_eq!(elementwise::add(&a, 10), Matrix::new([[11, 12], [13, 14]]));
//!
//! // First column only
//! let first_col = Bounds::new(0..2, 0..1);
//! assert_eq!(
//!     elementwise::add_range(&a, 10, first_col),
//!     Matrix::new([[11, 2], [13, 4]])
//! );
//! assert_eq!(
//!     elementwise::add_range_no_copy(&a, 10, first_col),
//!     Matrix::new([[11, 0], [13, 0]])
//! );
//!
//! // Integer inputs, computed and stored as row-major f64
//! let h: Matrix<f64, 2, 2, RowMajor> = elementwise::div_as(&a, 2);
//! assert_eq!(h.as_slice(), &[0.5, 1.0, 1.5, 2.0]);
//!
//! // Overwrite the bottom row of an existing matrix
//! let mut dest = Matrix::new([[0, 0], [0, 0]]);
//! elementwise::max_into(&a, 3, Bounds::new(1..2, 0..2), &mut dest);
//! assert_eq!(dest, Matrix::new([[0, 0], [3, 4]]));
//! ```
//!
//! The whole-matrix forms know the output dimensions from the types, so a
//! matrix operand too small to cover them is a compile error:
//!
//! ```compile_fail
//! use cellwise::{elementwise, Matrix};
//!
//! let a: Matrix<i32, 3, 3> = Matrix::zeros();
//! let b: Matrix<i32, 2, 2> = Matrix::zeros();
//! let _ = elementwise::add(&a, &b);
//! ```
//!
//! Ranged forms take their [`Bounds`] at runtime and check operands when
//! called; an operand only has to cover the cells the range reads.

use num_traits::AsPrimitive;

use crate::order::StorageOrder;
use crate::traits::{FloatScalar, MatrixMut, Scalar};
use crate::transform::{
    covers, Abs, AbsScalar, Add, Bounds, Ceil, Clamp, ClampMax, ClampMin, Div, Floor, Lerp, Max,
    Min, Mul, MulAdd, MulAddScalar, MulSub, Neg, Operand, OrdScalar, Rem, Round, SignedScalar,
    Sub, Transform, Trunc,
};
use crate::Matrix;

// Whole-range forms fix the output dimensions at compile time, so a matrix
// operand whose type is too small fails to compile.
macro_rules! assert_covers {
    ($u:ty, $m:ident, $n:ident; $($op:ty),+) => {
        const {
            $(assert!(
                covers::<$u, $op, $m, $n>(),
                "operand dimensions do not cover the output"
            );)+
        }
    };
}

// ── Unary arithmetic ────────────────────────────────────────────────

macro_rules! unary_ops {
    ($(
        $(#[$doc:meta])*
        $name:ident, $as_name:ident, $range:ident, $no_copy:ident, $into:ident
            => $functor:ident: $bound:ident;
    )*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name<T, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                O: StorageOrder,
            {
                Transform::<_, T>::new($functor).default_elsewhere((a,))
            }

            #[doc = concat!("[`", stringify!($name), "`] computed in, and stored as, the element type `E` and storage order `O` of the result.")]
            #[track_caller]
            pub fn $as_name<E, A, const M: usize, const N: usize, O>(a: A) -> Matrix<E, M, N, O>
            where
                E: $bound,
                A: Operand<E>,
                O: StorageOrder,
            {
                assert_covers!(E, M, N; A);
                Transform::<_, E>::new($functor).default_elsewhere((a,))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells are copied from `a`.")]
            #[track_caller]
            pub fn $range<T, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).copy_elsewhere((a,), a)
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells hold the default value.")]
            #[track_caller]
            pub fn $no_copy<T, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).default_elsewhere((a,))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`, written into `dest`; other cells of `dest` are untouched.")]
            #[track_caller]
            pub fn $into<A, D>(a: A, bounds: Bounds, dest: &mut D)
            where
                D: MatrixMut,
                D::Elem: $bound,
                A: Operand<D::Elem>,
            {
                Transform::<_, D::Elem>::over($functor, bounds).assign((a,), dest)
            }
        )*
    };
}

unary_ops! {
    /// Element-wise negation, `-a`.
    ///
    /// ```
    /// use cellwise::{elementwise, Matrix};
    /// let a = Matrix::new([[1, -2], [0, 4]]);
    /// assert_eq!(elementwise::neg(&a), Matrix::new([[-1, 2], [0, -4]]));
    /// ```
    neg, neg_as, neg_range, neg_range_no_copy, neg_into => Neg: SignedScalar;
    /// Element-wise absolute value.
    abs, abs_as, abs_range, abs_range_no_copy, abs_into => Abs: AbsScalar;
}

// ── Rounding ────────────────────────────────────────────────────────

macro_rules! rounding_ops {
    ($(
        $(#[$doc:meta])*
        $name:ident, $as_name:ident, $range:ident, $no_copy:ident, $into:ident
            => $functor:ident;
    )*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name<T, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
            ) -> Matrix<T, M, N, O>
            where
                T: FloatScalar,
                O: StorageOrder,
            {
                Transform::<_, T>::new($functor).default_elsewhere((a,))
            }

            #[doc = concat!("[`", stringify!($name), "`] stored as the element type `E` and storage order `O2` of the result.")]
            ///
            /// Rounding happens in the input type; the rounded value is then
            /// converted with `as` semantics.
            #[track_caller]
            pub fn $as_name<E, T, const M: usize, const N: usize, O, O2>(
                a: &Matrix<T, M, N, O>,
            ) -> Matrix<E, M, N, O2>
            where
                T: FloatScalar + AsPrimitive<E>,
                E: 'static + Copy + Default,
                O: StorageOrder,
                O2: StorageOrder,
            {
                Transform::<_, T>::new($functor).default_elsewhere((a,))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells are copied from `a`.")]
            #[track_caller]
            pub fn $range<T, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: FloatScalar,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).copy_elsewhere((a,), a)
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells hold the default value.")]
            #[track_caller]
            pub fn $no_copy<T, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: FloatScalar,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).default_elsewhere((a,))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`, written into `dest`; other cells of `dest` are untouched.")]
            #[track_caller]
            pub fn $into<T, const M: usize, const N: usize, O, D>(
                a: &Matrix<T, M, N, O>,
                bounds: Bounds,
                dest: &mut D,
            ) where
                T: FloatScalar + AsPrimitive<D::Elem>,
                O: StorageOrder,
                D: MatrixMut,
                D::Elem: 'static + Copy,
            {
                Transform::<_, T>::over($functor, bounds).assign((a,), dest)
            }
        )*
    };
}

rounding_ops! {
    /// Element-wise floor.
    ///
    /// ```
    /// use cellwise::{elementwise, Matrix};
    /// let a = Matrix::new([[1.5, -1.5], [2.0, -0.2]]);
    /// assert_eq!(elementwise::floor(&a), Matrix::new([[1.0, -2.0], [2.0, -1.0]]));
    ///
    /// let i: Matrix<i32, 2, 2> = elementwise::floor_as(&a);
    /// assert_eq!(i, Matrix::new([[1, -2], [2, -1]]));
    /// ```
    floor, floor_as, floor_range, floor_range_no_copy, floor_into => Floor;
    /// Element-wise ceiling.
    ceil, ceil_as, ceil_range, ceil_range_no_copy, ceil_into => Ceil;
    /// Element-wise truncation toward zero.
    trunc, trunc_as, trunc_range, trunc_range_no_copy, trunc_into => Trunc;
    /// Element-wise rounding to the nearest integer, halfway cases away
    /// from zero.
    round, round_as, round_range, round_range_no_copy, round_into => Round;
}

// ── Binary ──────────────────────────────────────────────────────────

macro_rules! binary_ops {
    ($(
        $(#[$doc:meta])*
        $name:ident, $as_name:ident, $range:ident, $no_copy:ident, $into:ident
            => $functor:ident: $bound:ident;
    )*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name<T, B, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                b: B,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                B: Operand<T>,
                O: StorageOrder,
            {
                assert_covers!(T, M, N; B);
                Transform::<_, T>::new($functor).default_elsewhere((a, b))
            }

            #[doc = concat!("[`", stringify!($name), "`] computed in, and stored as, the element type `E` and storage order `O` of the result.")]
            #[track_caller]
            pub fn $as_name<E, A, B, const M: usize, const N: usize, O>(
                a: A,
                b: B,
            ) -> Matrix<E, M, N, O>
            where
                E: $bound,
                A: Operand<E>,
                B: Operand<E>,
                O: StorageOrder,
            {
                assert_covers!(E, M, N; A, B);
                Transform::<_, E>::new($functor).default_elsewhere((a, b))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells are copied from `a`.")]
            #[track_caller]
            pub fn $range<T, B, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                b: B,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                B: Operand<T>,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).copy_elsewhere((a, b), a)
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells hold the default value.")]
            #[track_caller]
            pub fn $no_copy<T, B, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                b: B,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                B: Operand<T>,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).default_elsewhere((a, b))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`, written into `dest`; other cells of `dest` are untouched.")]
            #[track_caller]
            pub fn $into<A, B, D>(a: A, b: B, bounds: Bounds, dest: &mut D)
            where
                D: MatrixMut,
                D::Elem: $bound,
                A: Operand<D::Elem>,
                B: Operand<D::Elem>,
            {
                Transform::<_, D::Elem>::over($functor, bounds).assign((a, b), dest)
            }
        )*
    };
}

binary_ops! {
    /// Element-wise sum, `a + b`.
    ///
    /// ```
    /// use cellwise::{elementwise, Matrix};
    /// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[0.5, 0.5], [0.5, 0.5]]);
    /// assert_eq!(elementwise::add(&a, &b), Matrix::new([[1.5, 2.5], [3.5, 4.5]]));
    /// ```
    add, add_as, add_range, add_range_no_copy, add_into => Add: Scalar;
    /// Element-wise difference, `a - b`.
    sub, sub_as, sub_range, sub_range_no_copy, sub_into => Sub: Scalar;
    /// Element-wise (Hadamard) product, `a * b`.
    mul, mul_as, mul_range, mul_range_no_copy, mul_into => Mul: Scalar;
    /// Element-wise quotient, `a / b`.
    div, div_as, div_range, div_range_no_copy, div_into => Div: Scalar;
    /// Element-wise remainder, `a % b`.
    rem, rem_as, rem_range, rem_range_no_copy, rem_into => Rem: Scalar;
    /// Element-wise minimum.
    min, min_as, min_range, min_range_no_copy, min_into => Min: OrdScalar;
    /// Element-wise maximum.
    max, max_as, max_range, max_range_no_copy, max_into => Max: OrdScalar;
    /// Raise every element to at least `lo`.
    ///
    /// ```
    /// use cellwise::{elementwise, Matrix};
    /// let a = Matrix::new([[-1.0, 0.5], [2.0, -3.0]]);
    /// assert_eq!(elementwise::clamp_min(&a, 0.0), Matrix::new([[0.0, 0.5], [2.0, 0.0]]));
    /// ```
    clamp_min, clamp_min_as, clamp_min_range, clamp_min_range_no_copy, clamp_min_into
        => ClampMin: OrdScalar;
    /// Lower every element to at most `hi`.
    clamp_max, clamp_max_as, clamp_max_range, clamp_max_range_no_copy, clamp_max_into
        => ClampMax: OrdScalar;
}

// ── Ternary ─────────────────────────────────────────────────────────

macro_rules! ternary_ops {
    ($(
        $(#[$doc:meta])*
        $name:ident, $as_name:ident, $range:ident, $no_copy:ident, $into:ident
            => $functor:ident: $bound:ident;
    )*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name<T, B, C, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                b: B,
                c: C,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                B: Operand<T>,
                C: Operand<T>,
                O: StorageOrder,
            {
                assert_covers!(T, M, N; B, C);
                Transform::<_, T>::new($functor).default_elsewhere((a, b, c))
            }

            #[doc = concat!("[`", stringify!($name), "`] computed in, and stored as, the element type `E` and storage order `O` of the result.")]
            #[track_caller]
            pub fn $as_name<E, A, B, C, const M: usize, const N: usize, O>(
                a: A,
                b: B,
                c: C,
            ) -> Matrix<E, M, N, O>
            where
                E: $bound,
                A: Operand<E>,
                B: Operand<E>,
                C: Operand<E>,
                O: StorageOrder,
            {
                assert_covers!(E, M, N; A, B, C);
                Transform::<_, E>::new($functor).default_elsewhere((a, b, c))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells are copied from `a`.")]
            #[track_caller]
            pub fn $range<T, B, C, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                b: B,
                c: C,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                B: Operand<T>,
                C: Operand<T>,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).copy_elsewhere((a, b, c), a)
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`; other cells hold the default value.")]
            #[track_caller]
            pub fn $no_copy<T, B, C, const M: usize, const N: usize, O>(
                a: &Matrix<T, M, N, O>,
                b: B,
                c: C,
                bounds: Bounds,
            ) -> Matrix<T, M, N, O>
            where
                T: $bound,
                B: Operand<T>,
                C: Operand<T>,
                O: StorageOrder,
            {
                Transform::<_, T>::over($functor, bounds).default_elsewhere((a, b, c))
            }

            #[doc = concat!("[`", stringify!($name), "`] over `bounds`, written into `dest`; other cells of `dest` are untouched.")]
            #[track_caller]
            pub fn $into<A, B, C, D>(a: A, b: B, c: C, bounds: Bounds, dest: &mut D)
            where
                D: MatrixMut,
                D::Elem: $bound,
                A: Operand<D::Elem>,
                B: Operand<D::Elem>,
                C: Operand<D::Elem>,
            {
                Transform::<_, D::Elem>::over($functor, bounds).assign((a, b, c), dest)
            }
        )*
    };
}

ternary_ops! {
    /// Element-wise multiply-add, `a * b + c`, fused for float types.
    ///
    /// `b` and `c` may each be a matrix or a scalar.
    ///
    /// ```
    /// use cellwise::{elementwise, Matrix};
    /// let x = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let z = Matrix::new([[1.0, 1.0], [2.0, 2.0]]);
    /// assert_eq!(elementwise::fmadd(&x, 2.0, &z), Matrix::new([[3.0, 5.0], [8.0, 10.0]]));
    /// ```
    fmadd, fmadd_as, fmadd_range, fmadd_range_no_copy, fmadd_into => MulAdd: MulAddScalar;
    /// Element-wise multiply-subtract, `a * b - c`.
    fmsub, fmsub_as, fmsub_range, fmsub_range_no_copy, fmsub_into => MulSub: Scalar;
    /// Element-wise linear interpolation from `a` to `b` by weight `t`.
    ///
    /// ```
    /// use cellwise::{elementwise, Matrix};
    /// let a = Matrix::new([[0.0, 10.0]]);
    /// let b = Matrix::new([[4.0, 20.0]]);
    /// assert_eq!(elementwise::lerp(&a, &b, 0.25), Matrix::new([[1.0, 12.5]]));
    /// ```
    lerp, lerp_as, lerp_range, lerp_range_no_copy, lerp_into => Lerp: Scalar;
    /// Limit every element to `[lo, hi]`.
    clamp, clamp_as, clamp_range, clamp_range_no_copy, clamp_into => Clamp: OrdScalar;
}

// ── Scaling ─────────────────────────────────────────────────────────

/// Multiply every element by `factor`.
///
/// ```
/// use cellwise::{elementwise, Matrix};
/// let a = Matrix::new([[1, 2], [3, 4]]);
/// assert_eq!(elementwise::scale(&a, 3), Matrix::new([[3, 6], [9, 12]]));
/// ```
#[track_caller]
pub fn scale<T, const M: usize, const N: usize, O>(
    a: &Matrix<T, M, N, O>,
    factor: T,
) -> Matrix<T, M, N, O>
where
    T: Scalar + Operand<T>,
    O: StorageOrder,
{
    mul(a, factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{ColMajor, RowMajor};

    fn m3() -> Matrix<i32, 3, 3> {
        Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]])
    }

    #[test]
    fn unary() {
        let a = Matrix::new([[1, -2], [-3, 4]]);
        assert_eq!(neg(&a), Matrix::new([[-1, 2], [3, -4]]));
        assert_eq!(abs(&a), Matrix::new([[1, 2], [3, 4]]));
    }

    #[test]
    fn unary_as_widens_before_negating() {
        let a = Matrix::new([[200_u8, 1], [0, 255]]);
        let n: Matrix<i16, 2, 2> = neg_as(&a);
        assert_eq!(n, Matrix::new([[-200_i16, -1], [0, -255]]));
    }

    #[test]
    fn unary_range_variants() {
        let a = m3();
        let b = Bounds::new(0..1, 0..3);
        assert_eq!(neg_range(&a, b), Matrix::new([[-1, -2, -3], [4, 5, 6], [7, 8, 9]]));
        assert_eq!(
            neg_range_no_copy(&a, b),
            Matrix::new([[-1, -2, -3], [0, 0, 0], [0, 0, 0]])
        );
        let mut dest: Matrix<i32, 3, 3> = Matrix::zeros();
        abs_into(&neg(&a), Bounds::new(2..3, 1..3), &mut dest);
        assert_eq!(dest, Matrix::new([[0, 0, 0], [0, 0, 0], [0, 8, 9]]));
    }

    #[test]
    fn rounding() {
        let a = Matrix::new([[1.5, -1.5], [2.5, -0.4]]);
        assert_eq!(floor(&a), Matrix::new([[1.0, -2.0], [2.0, -1.0]]));
        assert_eq!(ceil(&a), Matrix::new([[2.0, -1.0], [3.0, -0.0]]));
        assert_eq!(trunc(&a), Matrix::new([[1.0, -1.0], [2.0, 0.0]]));
        assert_eq!(round(&a), Matrix::new([[2.0, -2.0], [3.0, 0.0]]));
    }

    #[test]
    fn rounding_as_integer_row_major() {
        let a = Matrix::new([[1.7_f32, -1.7], [2.2, -2.2]]);
        let r: Matrix<i64, 2, 2, RowMajor> = round_as(&a);
        assert_eq!(r.as_slice(), &[2, -2, 2, -2]);
        let t: Matrix<u8, 2, 2> = trunc_as(&Matrix::new([[1.9_f64, 2.9], [3.9, 300.0]]));
        // `as` saturates out-of-range floats
        assert_eq!(t, Matrix::new([[1_u8, 2], [3, 255]]));
    }

    #[test]
    fn rounding_range_variants() {
        let a = Matrix::new([[0.5, 1.5], [2.5, 3.5]]);
        let b = Bounds::new(0..2, 1..2);
        assert_eq!(floor_range(&a, b), Matrix::new([[0.5, 1.0], [2.5, 3.0]]));
        assert_eq!(ceil_range_no_copy(&a, b), Matrix::new([[0.0, 2.0], [0.0, 4.0]]));

        let mut dest: Matrix<i32, 2, 2> = Matrix::filled(-1);
        floor_into(&a, b, &mut dest);
        assert_eq!(dest, Matrix::new([[-1, 1], [-1, 3]]));
    }

    #[test]
    fn binary_with_matrix_and_scalar() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let b = Matrix::new([[4, 3], [2, 1]]);
        assert_eq!(add(&a, &b), Matrix::new([[5, 5], [5, 5]]));
        assert_eq!(sub(&a, 1), Matrix::new([[0, 1], [2, 3]]));
        assert_eq!(mul(&a, &b), Matrix::new([[4, 6], [6, 4]]));
        assert_eq!(div(&a, 2), Matrix::new([[0, 1], [1, 2]]));
        assert_eq!(rem(&a, 3), Matrix::new([[1, 2], [0, 1]]));
        assert_eq!(min(&a, &b), Matrix::new([[1, 2], [2, 1]]));
        assert_eq!(max(&a, &b), Matrix::new([[4, 3], [3, 4]]));
        assert_eq!(clamp_min(&a, 2), Matrix::new([[2, 2], [3, 4]]));
        assert_eq!(clamp_max(&a, 2), Matrix::new([[1, 2], [2, 2]]));
    }

    #[test]
    fn binary_as_scalar_first() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let r: Matrix<f64, 2, 2> = sub_as(10.0, &a);
        assert_eq!(r, Matrix::new([[9.0, 8.0], [7.0, 6.0]]));
    }

    #[test]
    fn binary_as_computes_in_output_type() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let f: Matrix<f32, 2, 2> = div_as(&a, 4);
        assert_eq!(f, Matrix::new([[0.25_f32, 0.5], [0.75, 1.0]]));
        let i: Matrix<i32, 2, 2> = div_as(&a, 4);
        assert_eq!(i, Matrix::new([[0, 0], [0, 1]]));
    }

    #[test]
    fn binary_mixed_storage_orders() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let b: Matrix<i32, 2, 3, RowMajor> = Matrix::from_rows([[1, 1, 1], [2, 2, 2]]);
        let c = mul(&a, &b);
        assert!(c.is_column_major());
        assert_eq!(c, Matrix::new([[1, 2, 3], [8, 10, 12]]));
        let d: Matrix<i32, 2, 3, RowMajor> = mul_as(&a, &b);
        assert_eq!(d.as_slice(), &[1, 2, 3, 8, 10, 12]);
    }

    #[test]
    fn binary_range_variants() {
        let a = m3();
        let b = Bounds::new(1..3, 1..3);
        assert_eq!(
            mul_range(&a, 10, b),
            Matrix::new([[1, 2, 3], [4, 50, 60], [7, 80, 90]])
        );
        assert_eq!(
            mul_range_no_copy(&a, 10, b),
            Matrix::new([[0, 0, 0], [0, 50, 60], [0, 80, 90]])
        );

        let mut dest = a;
        min_into(&a, 5, b, &mut dest);
        assert_eq!(dest, Matrix::new([[1, 2, 3], [4, 5, 5], [7, 5, 5]]));
    }

    #[test]
    fn binary_into_with_offset() {
        // Top-left 2×2 of `src` written into the bottom-right of `dest`
        let src = m3();
        let mut dest: Matrix<i32, 3, 3> = Matrix::zeros();
        let b = Bounds::new(1..3, 1..3).with_offset(-1, -1);
        add_into(&src, 100, b, &mut dest);
        assert_eq!(dest, Matrix::new([[0, 0, 0], [0, 101, 102], [0, 104, 105]]));
    }

    #[test]
    fn binary_into_converts_to_destination() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let mut dest: Matrix<f64, 2, 2, ColMajor> = Matrix::zeros();
        div_into(&a, 2, Bounds::full(2, 2), &mut dest);
        assert_eq!(dest, Matrix::new([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn ternary() {
        let x = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let y = Matrix::new([[2.0, 2.0], [3.0, 3.0]]);
        assert_eq!(fmadd(&x, &y, 1.0), Matrix::new([[3.0, 5.0], [10.0, 13.0]]));
        assert_eq!(fmsub(&x, 2.0, &y), Matrix::new([[0.0, 2.0], [3.0, 5.0]]));
        assert_eq!(lerp(&x, &y, 0.5), Matrix::new([[1.5, 2.0], [3.0, 3.5]]));
        assert_eq!(clamp(&x, 1.5, 3.5), Matrix::new([[1.5, 2.0], [3.0, 3.5]]));
    }

    #[test]
    fn ternary_range_variants() {
        let a = m3();
        let b = Bounds::new(0..3, 0..1);
        assert_eq!(
            clamp_range(&a, 2, 5, b),
            Matrix::new([[2, 2, 3], [4, 5, 6], [5, 8, 9]])
        );
        assert_eq!(
            fmadd_range_no_copy(&a, 2, 1, b),
            Matrix::new([[3, 0, 0], [9, 0, 0], [15, 0, 0]])
        );
        let mut dest: Matrix<i32, 3, 3> = Matrix::zeros();
        fmsub_into(&a, &a, 1, Bounds::new(1..2, 1..2), &mut dest);
        assert_eq!(dest, Matrix::new([[0, 0, 0], [0, 24, 0], [0, 0, 0]]));
    }

    #[test]
    fn ternary_as() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let r: Matrix<f64, 2, 2> = lerp_as(&a, 0, 0.5);
        assert_eq!(r, Matrix::new([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn scale_matches_add_self() {
        let a = Matrix::new([[1.5, -2.0], [0.0, 8.25]]);
        assert_eq!(add(&a, &a), scale(&a, 2.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn range_past_matrix_panics() {
        let a = m3();
        let _ = add_range(&a, 1, Bounds::new(0..4, 0..1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn undersized_operand_in_range_panics() {
        // Rows 0..2 fit the 2×2 operand, row 2 does not
        let a = m3();
        let small = Matrix::new([[1, 2], [3, 4]]);
        let _ = add_range(&a, &small, Bounds::new(0..3, 0..1));
    }

    #[test]
    fn undersized_operand_outside_range_is_fine() {
        let a = m3();
        let small = Matrix::new([[1, 2], [3, 4]]);
        let r = add_range(&a, &small, Bounds::new(0..2, 0..2));
        assert_eq!(r, Matrix::new([[2, 4, 3], [7, 9, 6], [7, 8, 9]]));
    }

    #[test]
    fn larger_operand_reads_top_left() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let r = add(&a, &m3());
        assert_eq!(r, Matrix::new([[2, 4], [7, 9]]));
    }
}
