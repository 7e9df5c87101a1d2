//! Composition entry points
//!
//! The `+`, `-` and `*` operators and the functions below only classify
//! operands, check shapes and build a node. Nothing is evaluated and no
//! result storage is allocated.

use core::ops::Mul;

use num_traits::Zero;

use crate::{Difference, MatrixExpr, MatrixProduct, Result, Scalar, ScaledLeft, ScaledRight, Sum};

/// Build `lhs + rhs`, failing on a shape mismatch
pub fn try_add<L: MatrixExpr, R: MatrixExpr>(lhs: L, rhs: R) -> Result<Sum<L, R>> {
    Sum::try_new(lhs, rhs)
}

/// Build `lhs - rhs`, failing on a shape mismatch
pub fn try_sub<L: MatrixExpr, R: MatrixExpr>(lhs: L, rhs: R) -> Result<Difference<L, R>> {
    Difference::try_new(lhs, rhs)
}

/// Build the matrix product `lhs * rhs`, failing when the shared dimension disagrees
pub fn try_matmul<L, R>(
    lhs: L,
    rhs: R,
) -> Result<MatrixProduct<L, R, <L::Element as Mul<R::Element>>::Output>>
where
    L: MatrixExpr,
    R: MatrixExpr,
    L::Element: Mul<R::Element>,
    <L::Element as Mul<R::Element>>::Output: Zero,
{
    MatrixProduct::try_new(lhs, rhs)
}

/// Build `scalar * expr`
pub fn scale_left<S: Scalar, E: MatrixExpr>(scalar: S, expr: E) -> ScaledLeft<S, E> {
    ScaledLeft::new(scalar, expr)
}

/// Build `expr * scalar`
pub fn scale_right<E: MatrixExpr, S: Scalar>(expr: E, scalar: S) -> ScaledRight<E, S> {
    ScaledRight::new(expr, scalar)
}

/// Implement `+`, `-` and `*` for an expression type
///
/// Takes the impl generics in brackets, each followed by a comma, and the
/// type. `*` dispatches on the right operand through
/// [`MulOperand`](crate::MulOperand); a primitive scalar on the left builds a
/// [`ScaledLeft`]. Scalar literals on either side need a type suffix when
/// the product is used before inference settles, see
/// [`MulOperand`](crate::MulOperand).
///
/// ```ignore
/// impl_expr_ops!(['a, T,] &'a MyMatrix<T>);
/// ```
#[macro_export]
macro_rules! impl_expr_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* Rhs> ::core::ops::Add<Rhs> for $ty
        where
            $ty: $crate::MatrixExpr,
            Rhs: $crate::MatrixExpr,
        {
            type Output = $crate::Sum<$ty, Rhs>;

            #[track_caller]
            fn add(self, rhs: Rhs) -> Self::Output {
                $crate::Sum::new(self, rhs)
            }
        }

        impl<$($gen)* Rhs> ::core::ops::Sub<Rhs> for $ty
        where
            $ty: $crate::MatrixExpr,
            Rhs: $crate::MatrixExpr,
        {
            type Output = $crate::Difference<$ty, Rhs>;

            #[track_caller]
            fn sub(self, rhs: Rhs) -> Self::Output {
                $crate::Difference::new(self, rhs)
            }
        }

        impl<$($gen)* Rhs> ::core::ops::Mul<Rhs> for $ty
        where
            $ty: $crate::MatrixExpr,
            Rhs: $crate::MulOperand<$ty>,
        {
            type Output = <Rhs as $crate::MulOperand<$ty>>::Output;

            #[track_caller]
            fn mul(self, rhs: Rhs) -> Self::Output {
                $crate::MulOperand::mul_onto(rhs, self)
            }
        }

        $crate::impl_scalar_lhs_mul!(
            [$($gen)*] $ty;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
        );
        $crate::impl_complex_lhs_mul!([$($gen)*] $ty);
    };
}

/// Implement `Complex * expr` when the `num-complex` feature is enabled
#[cfg(feature = "num-complex")]
#[doc(hidden)]
#[macro_export]
macro_rules! impl_complex_lhs_mul {
    ($gen:tt $ty:ty) => {
        $crate::impl_scalar_lhs_mul!(
            $gen $ty;
            $crate::num_complex::Complex<f32>, $crate::num_complex::Complex<f64>
        );
    };
}

#[cfg(not(feature = "num-complex"))]
#[doc(hidden)]
#[macro_export]
macro_rules! impl_complex_lhs_mul {
    ($gen:tt $ty:ty) => {};
}

/// Implement `scalar * expr` for each listed primitive scalar
#[doc(hidden)]
#[macro_export]
macro_rules! impl_scalar_lhs_mul {
    (@one [$($gen:tt)*] $ty:ty; $s:ty) => {
        impl<$($gen)*> ::core::ops::Mul<$ty> for $s
        where
            $ty: $crate::MatrixExpr,
            $s: ::core::ops::Mul<<$ty as $crate::MatrixExpr>::Element>,
        {
            type Output = $crate::ScaledLeft<$s, $ty>;

            fn mul(self, rhs: $ty) -> Self::Output {
                $crate::ScaledLeft::new(self, rhs)
            }
        }
    };
    ($gen:tt $ty:ty; $($s:ty),+ $(,)?) => {
        $(
            $crate::impl_scalar_lhs_mul!(@one $gen $ty; $s);
        )+
    };
}
