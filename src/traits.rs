use core::fmt::Debug;
use num_traits::{AsPrimitive, Float, Num};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all primitive integer types.
///
/// `AsPrimitive<Self>` lets a matrix of this type act as an operand of
/// an operation computed in the same type; `Default` supplies the value
/// of cells outside a transformed range.
pub trait Scalar: Copy + PartialEq + Debug + Default + Num + AsPrimitive<Self> {}

impl<T: Copy + PartialEq + Debug + Default + Num + AsPrimitive<T>> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by the rounding operations (`floor`, `ceil`, `trunc`, `round`).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// The element-wise engine reads matrix operands and copy sources
/// through this trait, so it never needs to know the storage order
/// of what it is reading.
pub trait MatrixRef {
    type Elem;

    /// `(nrows, ncols)` when the type fixes them at compile time.
    const SHAPE: Option<(usize, usize)> = None;

    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &Self::Elem;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access. Destinations of
/// in-place transforms are written through this trait.
pub trait MatrixMut: MatrixRef {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem;
}
