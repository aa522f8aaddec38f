use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::order::StorageOrder;
use crate::traits::Scalar;
use crate::transform::{self, Operand, SignedScalar, Transform};
use crate::Matrix;

// Every operator here is a single engine call over the full range. Results
// keep the storage order of the left-hand matrix; the right-hand matrix may
// use either order.

// ── Element-wise addition / subtraction ─────────────────────────────

macro_rules! impl_matrix_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $functor:ident) => {
        impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder, O2: StorageOrder>
            $Op<Matrix<T, M, N, O2>> for Matrix<T, M, N, O>
        {
            type Output = Self;

            fn $method(self, rhs: Matrix<T, M, N, O2>) -> Self {
                Transform::<_, T>::new(transform::$functor).default_elsewhere((&self, &rhs))
            }
        }

        impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder, O2: StorageOrder>
            $OpAssign<Matrix<T, M, N, O2>> for Matrix<T, M, N, O>
        {
            fn $assign(&mut self, rhs: Matrix<T, M, N, O2>) {
                let lhs = *self;
                Transform::<_, T>::new(transform::$functor).assign((&lhs, &rhs), self);
            }
        }

        impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder, O2: StorageOrder>
            $OpAssign<&Matrix<T, M, N, O2>> for Matrix<T, M, N, O>
        {
            fn $assign(&mut self, rhs: &Matrix<T, M, N, O2>) {
                self.$assign(*rhs);
            }
        }
    };
}

// Matrix is Copy, so &Matrix ops just deref and delegate.
macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder, O2: StorageOrder>
            $Op<Matrix<T, M, N, O2>> for &Matrix<T, M, N, O>
        {
            type Output = Matrix<T, M, N, O>;

            fn $method(self, rhs: Matrix<T, M, N, O2>) -> Matrix<T, M, N, O> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder, O2: StorageOrder>
            $Op<&Matrix<T, M, N, O2>> for Matrix<T, M, N, O>
        {
            type Output = Matrix<T, M, N, O>;

            fn $method(self, rhs: &Matrix<T, M, N, O2>) -> Matrix<T, M, N, O> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize, O: StorageOrder, O2: StorageOrder>
            $Op<&Matrix<T, M, N, O2>> for &Matrix<T, M, N, O>
        {
            type Output = Matrix<T, M, N, O>;

            fn $method(self, rhs: &Matrix<T, M, N, O2>) -> Matrix<T, M, N, O> {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_matrix_binop!(Add, add, AddAssign, add_assign, Add);
impl_matrix_binop!(Sub, sub, SubAssign, sub_assign, Sub);
forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Negation ────────────────────────────────────────────────────────

impl<T: SignedScalar, const M: usize, const N: usize, O: StorageOrder> Neg for Matrix<T, M, N, O> {
    type Output = Self;

    fn neg(self) -> Self {
        Transform::<_, T>::new(transform::Neg).default_elsewhere((&self,))
    }
}

impl<T: SignedScalar, const M: usize, const N: usize, O: StorageOrder> Neg
    for &Matrix<T, M, N, O>
{
    type Output = Matrix<T, M, N, O>;

    fn neg(self) -> Matrix<T, M, N, O> {
        (*self).neg()
    }
}

// ── Scalar operations: matrix ∘ scalar ──────────────────────────────

macro_rules! impl_scalar_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $functor:ident) => {
        impl<T, const M: usize, const N: usize, O> $Op<T> for Matrix<T, M, N, O>
        where
            T: Scalar + Operand<T>,
            O: StorageOrder,
        {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                Transform::<_, T>::new(transform::$functor).default_elsewhere((&self, rhs))
            }
        }

        impl<T, const M: usize, const N: usize, O> $Op<T> for &Matrix<T, M, N, O>
        where
            T: Scalar + Operand<T>,
            O: StorageOrder,
        {
            type Output = Matrix<T, M, N, O>;

            fn $method(self, rhs: T) -> Matrix<T, M, N, O> {
                (*self).$method(rhs)
            }
        }

        impl<T, const M: usize, const N: usize, O> $OpAssign<T> for Matrix<T, M, N, O>
        where
            T: Scalar + Operand<T>,
            O: StorageOrder,
        {
            fn $assign(&mut self, rhs: T) {
                let lhs = *self;
                Transform::<_, T>::new(transform::$functor).assign((&lhs, rhs), self);
            }
        }
    };
}

impl_scalar_binop!(Mul, mul, MulAssign, mul_assign, Mul);
impl_scalar_binop!(Div, div, DivAssign, div_assign, Div);
impl_scalar_binop!(Rem, rem, RemAssign, rem_assign, Rem);

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize, O: StorageOrder> Mul<Matrix<$t, M, N, O>> for $t {
                type Output = Matrix<$t, M, N, O>;

                fn mul(self, rhs: Matrix<$t, M, N, O>) -> Matrix<$t, M, N, O> {
                    rhs * self
                }
            }

            impl<const M: usize, const N: usize, O: StorageOrder> Mul<&Matrix<$t, M, N, O>> for $t {
                type Output = Matrix<$t, M, N, O>;

                fn mul(self, rhs: &Matrix<$t, M, N, O>) -> Matrix<$t, M, N, O> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
