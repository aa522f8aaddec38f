use num_traits::AsPrimitive;

use crate::order::StorageOrder;
use crate::traits::MatrixRef;
use crate::Matrix;

use super::bounds::{Bounds, BoundsError};

/// One argument of an element-wise operation.
///
/// An operand is either a matrix, which supplies a different value for
/// every cell, or a broadcast value, which supplies the same value to
/// every cell. Which one is decided by the operand's type.
///
/// Values are converted to `U`, the type the operation computes in, as
/// they are read.
pub trait Operand<U> {
    /// Dimensions of a matrix operand whose type fixes them; `None` for a
    /// broadcast value or a matrix sized at runtime.
    const SHAPE: Option<(usize, usize)>;

    /// `(nrows, ncols)` of a matrix operand, `None` for a broadcast value.
    fn extent(&self) -> Option<(usize, usize)>;

    /// Value supplied at `(row, col)`, where the position already includes
    /// the argument offset.
    fn resolve(&self, row: usize, col: usize) -> U;

    /// Check that every cell `bounds` reads lies inside this operand.
    fn check(&self, bounds: &Bounds) -> Result<(), BoundsError> {
        match self.extent() {
            Some((nrows, ncols)) => bounds.check_source(nrows, ncols),
            None => Ok(()),
        }
    }
}

impl<A, U> Operand<U> for &A
where
    A: MatrixRef,
    A::Elem: AsPrimitive<U>,
    U: 'static + Copy,
{
    const SHAPE: Option<(usize, usize)> = A::SHAPE;

    #[inline]
    fn extent(&self) -> Option<(usize, usize)> {
        Some((self.nrows(), self.ncols()))
    }

    #[inline]
    fn resolve(&self, row: usize, col: usize) -> U {
        (*self.get(row, col)).as_()
    }
}

impl<T, U, const M: usize, const N: usize, O> Operand<U> for Matrix<T, M, N, O>
where
    T: AsPrimitive<U>,
    U: 'static + Copy,
    O: StorageOrder,
{
    const SHAPE: Option<(usize, usize)> = Some((M, N));

    #[inline]
    fn extent(&self) -> Option<(usize, usize)> {
        Some((M, N))
    }

    #[inline]
    fn resolve(&self, row: usize, col: usize) -> U {
        (*self.get(row, col)).as_()
    }
}

// Concrete impls for primitive scalars; a blanket impl would overlap with
// the `&A` impl above.
macro_rules! impl_broadcast_operand {
    ($($t:ty),*) => {
        $(
            impl<U: 'static + Copy> Operand<U> for $t
            where
                $t: AsPrimitive<U>,
            {
                const SHAPE: Option<(usize, usize)> = None;

                #[inline]
                fn extent(&self) -> Option<(usize, usize)> {
                    None
                }

                #[inline]
                fn resolve(&self, _row: usize, _col: usize) -> U {
                    self.as_()
                }
            }
        )*
    };
}

impl_broadcast_operand!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

/// `false` if `A` is a matrix type too small, by its type alone, for a
/// whole-range read of an `M × N` output.
///
/// Usable in `const` blocks, which turns a mismatched operand into a
/// compile error instead of a runtime panic.
pub const fn covers<U, A: Operand<U>, const M: usize, const N: usize>() -> bool {
    match A::SHAPE {
        Some((nrows, ncols)) => nrows >= M && ncols >= N,
        None => true,
    }
}

/// The full argument list of an element-wise operation: a tuple of one,
/// two, or three [`Operand`]s.
///
/// `Values` is the matching tuple of resolved values handed to the
/// functor, so the arity of an operation is carried by types alone.
pub trait Operands<U> {
    type Values;

    /// Resolve every operand at `(row, col)` (argument offset included).
    fn resolve(&self, row: usize, col: usize) -> Self::Values;

    /// Check every matrix operand against the reads `bounds` performs.
    fn check(&self, bounds: &Bounds) -> Result<(), BoundsError>;
}

macro_rules! impl_operands {
    ($(($($name:ident : $idx:tt),+) => ($($value:ty),+);)*) => {
        $(
            impl<U, $($name),+> Operands<U> for ($($name,)+)
            where
                $($name: Operand<U>,)+
            {
                type Values = ($($value,)+);

                #[inline]
                fn resolve(&self, row: usize, col: usize) -> Self::Values {
                    ($(self.$idx.resolve(row, col),)+)
                }

                fn check(&self, bounds: &Bounds) -> Result<(), BoundsError> {
                    $(
                        if let Err(err) = self.$idx.check(bounds) {
                            return Err(err);
                        }
                    )+
                    Ok(())
                }
            }
        )*
    };
}

impl_operands! {
    (A: 0) => (U);
    (A: 0, B: 1) => (U, U);
    (A: 0, B: 1, C: 2) => (U, U, U);
}
