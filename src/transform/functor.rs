//! Element-wise operations.
//!
//! Each functor is a stateless unit struct implementing [`Functor`] for the
//! argument tuple it accepts: `(T,)` for unary, `(T, T)` for binary and
//! `(T, T, T)` for ternary operations. The engine never inspects arity; it
//! hands the functor whatever tuple the operands resolved to.

use core::ops::Neg as NegOp;

use num_traits::{MulAdd as MulAddOp, Signed};

use crate::traits::{FloatScalar, Scalar};

/// A single element-wise operation.
///
/// Implementations must be pure: the result may depend only on `args`,
/// never on the cell being computed or on earlier calls.
pub trait Functor<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! unary_functor {
    ($($(#[$doc:meta])* $name:ident<$t:ident: $bound:path>($a:ident) => $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<$t: $bound> Functor<($t,)> for $name {
                type Output = $t;

                #[inline]
                fn call(&self, ($a,): ($t,)) -> $t {
                    $body
                }
            }
        )*
    };
}

macro_rules! binary_functor {
    ($($(#[$doc:meta])* $name:ident<$t:ident: $bound:path>($a:ident, $b:ident) => $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<$t: $bound> Functor<($t, $t)> for $name {
                type Output = $t;

                #[inline]
                fn call(&self, ($a, $b): ($t, $t)) -> $t {
                    $body
                }
            }
        )*
    };
}

macro_rules! ternary_functor {
    ($($(#[$doc:meta])* $name:ident<$t:ident: $bound:path>($a:ident, $b:ident, $c:ident) => $body:expr;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl<$t: $bound> Functor<($t, $t, $t)> for $name {
                type Output = $t;

                #[inline]
                fn call(&self, ($a, $b, $c): ($t, $t, $t)) -> $t {
                    $body
                }
            }
        )*
    };
}

/// Scalars with a negation.
pub trait SignedScalar: Scalar + NegOp<Output = Self> {}

impl<T: Scalar + NegOp<Output = T>> SignedScalar for T {}

/// Scalars with an ordering.
pub trait OrdScalar: Scalar + PartialOrd {}

impl<T: Scalar + PartialOrd> OrdScalar for T {}

/// Scalars with an absolute value.
pub trait AbsScalar: Scalar + Signed {}

impl<T: Scalar + Signed> AbsScalar for T {}

/// Scalars with a multiply-add.
pub trait MulAddScalar: Scalar + MulAddOp<Output = Self> {}

impl<T: Scalar + MulAddOp<Output = T>> MulAddScalar for T {}

#[inline]
fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

unary_functor! {
    /// `a`, unchanged. Used to copy or convert cells.
    Identity<T: Copy>(a) => a;
    /// `-a`
    Neg<T: SignedScalar>(a) => -a;
    /// `|a|`
    Abs<T: AbsScalar>(a) => a.abs();
    /// Largest integer value `≤ a`.
    Floor<T: FloatScalar>(a) => a.floor();
    /// Smallest integer value `≥ a`.
    Ceil<T: FloatScalar>(a) => a.ceil();
    /// Integer part of `a`, rounding toward zero.
    Trunc<T: FloatScalar>(a) => a.trunc();
    /// Nearest integer value, halfway cases away from zero.
    Round<T: FloatScalar>(a) => a.round();
}

binary_functor! {
    /// `a + b`
    Add<T: Scalar>(a, b) => a + b;
    /// `a - b`
    Sub<T: Scalar>(a, b) => a - b;
    /// `a * b`
    Mul<T: Scalar>(a, b) => a * b;
    /// `a / b`
    Div<T: Scalar>(a, b) => a / b;
    /// `a % b`, with the sign of `a`.
    Rem<T: Scalar>(a, b) => a % b;
    /// Smaller of `a` and `b`; `a` when they compare equal or unordered.
    Min<T: OrdScalar>(a, b) => min_of(a, b);
    /// Larger of `a` and `b`; `a` when they compare equal or unordered.
    Max<T: OrdScalar>(a, b) => max_of(a, b);
    /// `a` raised to at least `lo`.
    ClampMin<T: OrdScalar>(a, lo) => max_of(a, lo);
    /// `a` lowered to at most `hi`.
    ClampMax<T: OrdScalar>(a, hi) => min_of(a, hi);
}

ternary_functor! {
    /// `a * b + c`, fused where the element type supports it.
    MulAdd<T: MulAddScalar>(a, b, c) => a.mul_add(b, c);
    /// `a * b - c`
    MulSub<T: Scalar>(a, b, c) => a * b - c;
    /// Linear interpolation from `a` to `b` by weight `t`: `a + (b - a) * t`.
    Lerp<T: Scalar>(a, b, t) => a + (b - a) * t;
    /// `a` limited to `[lo, hi]`. The upper bound wins if `lo > hi`.
    Clamp<T: OrdScalar>(a, lo, hi) => min_of(max_of(a, lo), hi);
}

/// Adapts a closure into a [`Functor`] of matching arity.
///
/// ```
/// use cellwise::transform::{Functor, FromFn};
/// let hypot = FromFn(|a: f64, b: f64| (a * a + b * b).sqrt());
/// assert_eq!(hypot.call((3.0, 4.0)), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<F, A, R> Functor<(A,)> for FromFn<F>
where
    F: Fn(A) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, (a,): (A,)) -> R {
        (self.0)(a)
    }
}

impl<F, A, B, R> Functor<(A, B)> for FromFn<F>
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, (a, b): (A, B)) -> R {
        (self.0)(a, b)
    }
}

impl<F, A, B, C, R> Functor<(A, B, C)> for FromFn<F>
where
    F: Fn(A, B, C) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, (a, b, c): (A, B, C)) -> R {
        (self.0)(a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary() {
        assert_eq!(Identity.call((3,)), 3);
        assert_eq!(Neg.call((2.5,)), -2.5);
        assert_eq!(Abs.call((-4_i32,)), 4);
        assert_eq!(Floor.call((-1.5_f64,)), -2.0);
        assert_eq!(Ceil.call((-1.5_f64,)), -1.0);
        assert_eq!(Trunc.call((-1.5_f64,)), -1.0);
        assert_eq!(Round.call((2.5_f32,)), 3.0);
        assert_eq!(Round.call((-2.5_f32,)), -3.0);
    }

    #[test]
    fn binary() {
        assert_eq!(Add.call((2, 3)), 5);
        assert_eq!(Sub.call((2, 3)), -1);
        assert_eq!(Mul.call((2.0, 3.5)), 7.0);
        assert_eq!(Div.call((7, 2)), 3);
        assert_eq!(Div.call((7.0, 2.0)), 3.5);
        assert_eq!(Rem.call((-7, 3)), -1);
        assert_eq!(Rem.call((7.5, 2.0)), 1.5);
        assert_eq!(Min.call((2, -3)), -3);
        assert_eq!(Max.call((2, -3)), 2);
        assert_eq!(ClampMin.call((1.0, 2.0)), 2.0);
        assert_eq!(ClampMin.call((3.0, 2.0)), 3.0);
        assert_eq!(ClampMax.call((1.0, 2.0)), 1.0);
        assert_eq!(ClampMax.call((3.0, 2.0)), 2.0);
    }

    #[test]
    fn min_max_nan_keeps_first() {
        let r: f64 = Min.call((1.0, f64::NAN));
        assert_eq!(r, 1.0);
        let r: f64 = Max.call((f64::NAN, 1.0));
        assert!(r.is_nan());
    }

    #[test]
    fn ternary() {
        assert_eq!(MulAdd.call((2.0, 3.0, 1.0)), 7.0);
        assert_eq!(MulAdd.call((2_i64, 3, 1)), 7);
        assert_eq!(MulSub.call((2.0, 3.0, 1.0)), 5.0);
        assert_eq!(Lerp.call((10.0, 20.0, 0.25)), 12.5);
        assert_eq!(Lerp.call((10.0, 20.0, 0.0)), 10.0);
        assert_eq!(Lerp.call((10.0, 20.0, 1.0)), 20.0);
        assert_eq!(Clamp.call((5, 0, 3)), 3);
        assert_eq!(Clamp.call((-5, 0, 3)), 0);
        assert_eq!(Clamp.call((2, 0, 3)), 2);
        // Inverted bounds: upper wins
        assert_eq!(Clamp.call((2, 5, 1)), 1);
    }

    #[test]
    fn closures() {
        let neg = FromFn(|a: i32| -a);
        assert_eq!(neg.call((4,)), -4);

        let to_float = FromFn(|a: i32| a as f32 * 0.5);
        assert_eq!(to_float.call((3,)), 1.5);

        let fma = FromFn(|a: f64, b: f64, c: f64| a * b + c);
        assert_eq!(fma.call((2.0, 3.0, 4.0)), 10.0);
    }
}
