use num_traits::AsPrimitive;

use crate::traits::MatrixRef;

use super::bounds::Bounds;

/// What a newly built output holds outside the transformed range.
///
/// The third policy, assign-in-place, has no implementation here: it
/// writes into an existing destination and never touches cells outside
/// the range. See [`Transform::assign`](super::Transform::assign).
pub trait Population<E> {
    /// Value of the output cell `(row, col)`, which lies outside the range.
    fn outside(&self, row: usize, col: usize) -> E;
}

/// Cells outside the range are copied from a source matrix, read with the
/// range's argument offset applied.
#[derive(Debug)]
pub struct CopyElsewhere<'a, C> {
    source: &'a C,
    bounds: Bounds,
}

impl<'a, C> CopyElsewhere<'a, C> {
    /// Copy from `source`, shifted by the argument offset of `bounds`.
    pub fn new(source: &'a C, bounds: Bounds) -> Self {
        Self { source, bounds }
    }
}

impl<'a, C, E> Population<E> for CopyElsewhere<'a, C>
where
    C: MatrixRef,
    C::Elem: AsPrimitive<E>,
    E: 'static + Copy,
{
    #[inline]
    fn outside(&self, row: usize, col: usize) -> E {
        let (r, c) = self.bounds.source(row, col);
        (*self.source.get(r, c)).as_()
    }
}

/// Cells outside the range hold `E::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultElsewhere;

impl<E: Default> Population<E> for DefaultElsewhere {
    #[inline]
    fn outside(&self, _row: usize, _col: usize) -> E {
        E::default()
    }
}
