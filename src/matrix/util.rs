use core::fmt::{self, Write as _};

use num_traits::AsPrimitive;

use crate::order::StorageOrder;
use crate::traits::Scalar;
use crate::transform::{FromFn, Identity, Transform};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize, O: StorageOrder> Matrix<T, M, N, O> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use cellwise::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::<f64, 3, 3>::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut m = Self::filled(T::default());
        for j in 0..N {
            for i in 0..M {
                m[(i, j)] = f(i, j);
            }
        }
        m
    }

    /// Apply a function to every element, producing a new matrix in the
    /// same storage order.
    ///
    /// ```
    /// use cellwise::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, M, N, O>
    where
        T: AsPrimitive<T>,
        U: AsPrimitive<U> + Default,
    {
        Transform::<_, T>::new(FromFn(f)).default_elsewhere((self,))
    }

    /// Copy into another storage order. The logical contents are unchanged.
    ///
    /// ```
    /// use cellwise::{Matrix, RowMajor};
    /// let c = Matrix::new([[1, 2], [3, 4]]);
    /// let r = c.reorder::<RowMajor>();
    /// assert_eq!(r, c);
    /// assert_eq!(r.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(c.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn reorder<O2: StorageOrder>(&self) -> Matrix<T, M, N, O2>
    where
        T: AsPrimitive<T> + Default,
    {
        Transform::<_, T>::new(Identity).default_elsewhere((self,))
    }

    /// Transpose: (M×N) → (N×M), in the same storage order.
    pub fn transpose(&self) -> Matrix<T, N, M, O>
    where
        T: Copy + Default,
    {
        Matrix::from_fn(|i, j| self[(j, i)])
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder> Matrix<T, M, N, O> {
    /// Sum of all elements.
    ///
    /// ```
    /// use cellwise::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |s, &x| s + x)
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One bracketed row per line, each column right-aligned to its widest
/// cell. A precision such as `{:.3}` applies to every element.
impl<T: fmt::Display, const M: usize, const N: usize, O: StorageOrder> fmt::Display
    for Matrix<T, M, N, O>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let mut widths = [0usize; N];
        for (j, width) in widths.iter_mut().enumerate() {
            for i in 0..M {
                let mut tally = Tally(0);
                write_cell(&mut tally, &self[(i, j)], precision, 0)?;
                *width = (*width).max(tally.0);
            }
        }

        for i in 0..M {
            if i > 0 {
                f.write_char('\n')?;
            }
            f.write_char('[')?;
            for (j, &width) in widths.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write_cell(f, &self[(i, j)], precision, width)?;
            }
            f.write_char(']')?;
        }
        Ok(())
    }
}

fn write_cell<W: fmt::Write>(
    w: &mut W,
    value: &impl fmt::Display,
    precision: Option<usize>,
    width: usize,
) -> fmt::Result {
    match precision {
        Some(p) => write!(w, "{value:>width$.p$}"),
        None => write!(w, "{value:>width$}"),
    }
}

// Character count of everything written to it.
struct Tally(usize);

impl fmt::Write for Tally {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}
