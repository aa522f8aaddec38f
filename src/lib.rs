//! # cellwise
//!
//! Fixed-size, stack-allocated matrices with a single generic engine for
//! element-wise operations, no-std compatible.
//!
//! Every element-wise operation in the crate (arithmetic, rounding,
//! clamping, interpolation, the operator overloads, block copies and
//! storage-order conversion) is one call into [`Transform`], which handles:
//!
//! - any rectangular sub-range of cells, with an optional read offset;
//! - row-major or column-major storage, chosen independently for every
//!   operand and for the output;
//! - unary, binary and ternary operations, where each operand is either a
//!   matrix or a broadcast scalar;
//! - three policies for cells outside the range: copy them from a source
//!   matrix, leave them at `Default::default()`, or leave an existing
//!   destination untouched.
//!
//! ## Quick start
//!
//! ```
//! use cellwise::{elementwise, Bounds, Matrix, RowMajor};
//!
//! let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! let b: Matrix<f64, 2, 2, RowMajor> = Matrix::from_rows([[0.5, 0.5], [1.0, 1.0]]);
//!
//! // Operators and named operations accept mixed storage orders
//! assert_eq!(a + b, Matrix::new([[1.5, 2.5], [4.0, 5.0]]));
//! assert_eq!(elementwise::fmadd(&a, &b, 1.0), Matrix::new([[1.5, 2.0], [4.0, 5.0]]));
//!
//! // Restrict an operation to the second row; the first row is copied from `a`
//! let r = elementwise::clamp_max_range(&a, 3.5, Bounds::new(1..2, 0..2));
//! assert_eq!(r, Matrix::new([[1.0, 2.0], [3.0, 3.5]]));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T, M, N, O>` with const-generic dimensions and a
//!   storage-order type parameter. Indexing, slices and iteration, operator
//!   overloads, block extraction and insertion, transpose, and type aliases.
//!
//! - [`order`] — The [`StorageOrder`] trait and its [`ColMajor`] /
//!   [`RowMajor`] markers, plus the index mapping they share.
//!
//! - [`transform`] — The element-wise engine: [`Bounds`] ranges, operands,
//!   functors, population policies, and [`Transform`] itself.
//!
//! - [`elementwise`] — Named wrappers (`add`, `floor`, `clamp`, `lerp`, ...)
//!   in five forms each: full range, explicit output type, range with copy,
//!   range without copy, and assign into an existing matrix.
//!
//! - [`traits`] — Element and access traits:
//!   - [`Scalar`] — all numeric matrix elements
//!   - [`FloatScalar`] — real floats, used by rounding operations
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access, used by
//!     the engine to read operands and write destinations
//!
//! ## Errors
//!
//! Dimensions known from the types are checked when the call is compiled:
//! a whole-matrix operation with a matrix operand too small for the output,
//! or a block larger than its matrix, fails to build. [`Bounds`]
//! constructors are `const fn`, so a malformed range built in a `const`
//! item fails to compile too.
//!
//! Everything chosen at runtime (ranges, offsets, block positions) is
//! validated before any cell is written. An operation that would read or
//! write outside a matrix panics; ranges are never clamped.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod elementwise;
pub mod matrix;
pub mod order;
pub mod traits;
pub mod transform;

pub use matrix::aliases::{
    Matrix1, Matrix1x2, Matrix1x3, Matrix1x4, Matrix2, Matrix2x1, Matrix2x3, Matrix2x4, Matrix3,
    Matrix3x1, Matrix3x2, Matrix3x4, Matrix4, Matrix4x1, Matrix4x2, Matrix4x3, RowMatrix2,
    RowMatrix3, RowMatrix4,
};
pub use matrix::Matrix;
pub use order::{ColMajor, RowMajor, StorageOrder};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
pub use transform::{Bounds, BoundsError, Transform};
