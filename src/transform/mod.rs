//! The element-wise transformation engine.
//!
//! Every element-wise operation in this crate is one call into
//! [`Transform`]. A call is described by:
//!
//! - a [`Functor`]: the per-cell operation, of any arity;
//! - [`Operands`]: a tuple of matrices and/or broadcast scalars, one per
//!   functor argument, each resolved independently per cell;
//! - a [`Bounds`] range: the cells to compute, plus an argument offset
//!   applied when reading operands;
//! - the output: its element type, dimensions and storage order come from
//!   the result type (or the destination), not from the operands;
//! - a population policy for cells outside the range:
//!   - [`Transform::copy_elsewhere`] copies them from a source matrix,
//!   - [`Transform::default_elsewhere`] leaves them at `Default::default()`,
//!   - [`Transform::assign`] writes into an existing destination and leaves
//!     them untouched.
//!
//! Operands are converted to the intermediate type `I` as they are read,
//! the functor computes in `I`, and the result is converted to the output
//! element type as it is written.
//!
//! ```
//! use cellwise::{Bounds, Matrix};
//! use cellwise::transform::{Add, Transform};
//!
//! let a = Matrix::new([[1, 2], [3, 4]]);
//!
//! // Full range, scalar broadcast
//! let add = Transform::<_, i32>::new(Add);
//! let full: Matrix<i32, 2, 2> = add.default_elsewhere((&a, 10));
//! assert_eq!(full, Matrix::new([[11, 12], [13, 14]]));
//!
//! // First column only, everything else copied from `a`
//! let first_col = Transform::<_, i32>::over(Add, Bounds::new(0..2, 0..1));
//! let part: Matrix<i32, 2, 2> = first_col.copy_elsewhere((&a, 10), &a);
//! assert_eq!(part, Matrix::new([[11, 2], [13, 4]]));
//!
//! // Same range, written into an existing matrix
//! let mut dest = Matrix::new([[0, 0], [0, 0]]);
//! first_col.assign((&a, 10), &mut dest);
//! assert_eq!(dest, Matrix::new([[11, 0], [13, 0]]));
//! ```
//!
//! All ranges and operand reads are checked against the actual matrix
//! extents before any cell is written. A call that would read or write
//! out of bounds panics; bounds are never clamped.

mod bounds;
mod functor;
mod operand;
mod population;

use core::marker::PhantomData;

use num_traits::AsPrimitive;

use crate::order::StorageOrder;
use crate::traits::{MatrixMut, MatrixRef};
use crate::Matrix;

pub use bounds::{Bounds, BoundsError, Cells};
pub use functor::{
    Abs, AbsScalar, Add, Ceil, Clamp, ClampMax, ClampMin, Div, Floor, FromFn, Functor, Identity,
    Lerp, Max, Min, Mul, MulAdd, MulAddScalar, MulSub, Neg, OrdScalar, Rem, Round, SignedScalar,
    Sub, Trunc,
};
pub use operand::{covers, Operand, Operands};
pub use population::{CopyElsewhere, DefaultElsewhere, Population};

/// A configured element-wise operation: a functor, the range it applies
/// to, and the intermediate type `I` it computes in.
///
/// A `Transform` is cheap to build and holds no state between calls; the
/// same value can be applied to any number of operand sets.
#[derive(Debug, Clone, Copy)]
pub struct Transform<F, I> {
    functor: F,
    bounds: Option<Bounds>,
    intermediate: PhantomData<fn() -> I>,
}

impl<F, I> Transform<F, I> {
    /// Apply `functor` to every cell of the output.
    pub const fn new(functor: F) -> Self {
        Self {
            functor,
            bounds: None,
            intermediate: PhantomData,
        }
    }

    /// Apply `functor` to the cells of `bounds` only.
    pub const fn over(functor: F, bounds: Bounds) -> Self {
        Self {
            functor,
            bounds: Some(bounds),
            intermediate: PhantomData,
        }
    }

    /// The per-cell operation.
    #[inline]
    pub fn functor(&self) -> &F {
        &self.functor
    }

    /// The configured range; `None` means the whole output.
    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    #[inline]
    fn range(&self, nrows: usize, ncols: usize) -> Bounds {
        match self.bounds {
            Some(bounds) => bounds,
            None => Bounds::full(nrows, ncols),
        }
    }
}

impl<F, I: 'static + Copy> Transform<F, I> {
    /// Build a new matrix: the functor result inside the range, the
    /// offset-applied cell of `source` outside it.
    ///
    /// Panics if the range does not fit the output, if an operand is too
    /// small for the offset reads, or if `source` does not cover every
    /// cell outside the range at the argument offset. Cells inside the
    /// range never read `source`.
    ///
    /// ```
    /// use cellwise::{Bounds, Matrix};
    /// use cellwise::transform::{Mul, Transform};
    ///
    /// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
    /// // Multiply the bottom row only
    /// let t = Transform::<_, f64>::over(Mul, Bounds::new(1..2, 0..2));
    /// let c: Matrix<f64, 2, 2> = t.copy_elsewhere((&a, &b), &a);
    /// assert_eq!(c, Matrix::new([[1.0, 2.0], [21.0, 32.0]]));
    /// ```
    #[track_caller]
    pub fn copy_elsewhere<Ops, C, E, const M: usize, const N: usize, O>(
        &self,
        operands: Ops,
        source: &C,
    ) -> Matrix<E, M, N, O>
    where
        Ops: Operands<I>,
        F: Functor<Ops::Values>,
        F::Output: AsPrimitive<E>,
        C: MatrixRef,
        C::Elem: AsPrimitive<E>,
        E: 'static + Copy + Default,
        O: StorageOrder,
    {
        let bounds = self.range(M, N);
        expect_in_bounds(bounds.check(M, N));
        for strip in bounds.outside(M, N) {
            expect_in_bounds(strip.check_source(source.nrows(), source.ncols()));
        }
        self.populate(operands, &CopyElsewhere::new(source, bounds))
    }

    /// Build a new matrix: the functor result inside the range,
    /// `E::default()` outside it.
    ///
    /// ```
    /// use cellwise::{Bounds, Matrix};
    /// use cellwise::transform::{Add, Transform};
    ///
    /// let a = Matrix::new([[1, 2], [3, 4]]);
    /// let t = Transform::<_, i32>::over(Add, Bounds::new(0..1, 0..2));
    /// let c: Matrix<i32, 2, 2> = t.default_elsewhere((&a, 100));
    /// assert_eq!(c, Matrix::new([[101, 102], [0, 0]]));
    /// ```
    #[track_caller]
    pub fn default_elsewhere<Ops, E, const M: usize, const N: usize, O>(
        &self,
        operands: Ops,
    ) -> Matrix<E, M, N, O>
    where
        Ops: Operands<I>,
        F: Functor<Ops::Values>,
        F::Output: AsPrimitive<E>,
        E: 'static + Copy + Default,
        O: StorageOrder,
    {
        self.populate(operands, &DefaultElsewhere)
    }

    /// Build a new matrix, filling cells outside the range from `policy`.
    #[track_caller]
    pub fn populate<Ops, P, E, const M: usize, const N: usize, O>(
        &self,
        operands: Ops,
        policy: &P,
    ) -> Matrix<E, M, N, O>
    where
        Ops: Operands<I>,
        F: Functor<Ops::Values>,
        F::Output: AsPrimitive<E>,
        P: Population<E>,
        E: 'static + Copy + Default,
        O: StorageOrder,
    {
        let bounds = self.range(M, N);
        validate::<I, _>(&operands, &bounds, M, N);
        let mut out = Matrix::from_fn(|row, col| {
            if bounds.contains(row, col) {
                E::default()
            } else {
                policy.outside(row, col)
            }
        });
        self.apply(&operands, &bounds, &mut out);
        out
    }

    /// Overwrite the cells of the range in `dest`; every other cell of
    /// `dest` keeps its current value.
    ///
    /// `dest` cannot also be an operand: the borrow checker rejects reading
    /// a matrix while it is being written. Copy it first if needed.
    ///
    /// ```
    /// use cellwise::{Bounds, Matrix};
    /// use cellwise::transform::{ClampMax, Transform};
    ///
    /// let mut m = Matrix::new([[1.0, 9.0], [9.0, 1.0]]);
    /// let src = m;
    /// Transform::<_, f64>::over(ClampMax, Bounds::new(0..1, 0..2)).assign((&src, 5.0), &mut m);
    /// assert_eq!(m, Matrix::new([[1.0, 5.0], [9.0, 1.0]]));
    /// ```
    #[track_caller]
    pub fn assign<Ops, D>(&self, operands: Ops, dest: &mut D)
    where
        Ops: Operands<I>,
        F: Functor<Ops::Values>,
        D: MatrixMut,
        D::Elem: 'static + Copy,
        F::Output: AsPrimitive<D::Elem>,
    {
        let (nrows, ncols) = (dest.nrows(), dest.ncols());
        let bounds = self.range(nrows, ncols);
        validate::<I, _>(&operands, &bounds, nrows, ncols);
        self.apply(&operands, &bounds, dest);
    }

    /// Write the functor result for every cell of `bounds` into `dest`.
    #[inline]
    fn apply<Ops, D>(&self, operands: &Ops, bounds: &Bounds, dest: &mut D)
    where
        Ops: Operands<I>,
        F: Functor<Ops::Values>,
        D: MatrixMut,
        D::Elem: 'static + Copy,
        F::Output: AsPrimitive<D::Elem>,
    {
        for (row, col) in bounds.cells() {
            let (r, c) = bounds.source(row, col);
            *dest.get_mut(row, col) = self.functor.call(operands.resolve(r, c)).as_();
        }
    }
}

#[track_caller]
fn validate<I, Ops: Operands<I>>(operands: &Ops, bounds: &Bounds, nrows: usize, ncols: usize) {
    expect_in_bounds(bounds.check(nrows, ncols));
    expect_in_bounds(operands.check(bounds));
}

#[track_caller]
fn expect_in_bounds(result: Result<(), BoundsError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}
