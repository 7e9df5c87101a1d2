//! Operand kinds for multiplication
//!
//! A scalar is a distinct kind from a 1x1 matrix. Which product node `*`
//! builds is decided by the right operand's type through [`MulOperand`],
//! never by inspecting dimensions at evaluation time.

use core::ops::Mul;

use num_traits::Zero;

use crate::{MatrixExpr, MatrixProduct, ScaledRight};

/// Marker for single values that scale every element of an expression
///
/// Implemented for the primitive integer and float types, and for
/// `Complex<f32>` and `Complex<f64>` with the `num-complex` feature. Custom
/// element types can implement it to build [`ScaledLeft`](crate::ScaledLeft)
/// and [`ScaledRight`] nodes explicitly.
pub trait Scalar: Copy {}

/// Right-hand operand of `*` with a left operand of type `L`
///
/// Shaped operands produce a [`MatrixProduct`]; scalars produce a
/// [`ScaledRight`].
///
/// Each scalar type has its own impl, so an unsuffixed literal in
/// `expr * 2` is not resolved before a method is called on the product.
/// Write `2i32` or `0.5f64`, or bind the scalar to a typed variable.
pub trait MulOperand<L> {
    /// Node built for `lhs * self`
    type Output;

    /// Build the product node with `lhs` on the left
    fn mul_onto(self, lhs: L) -> Self::Output;
}

impl<L, R> MulOperand<L> for R
where
    L: MatrixExpr,
    R: MatrixExpr,
    L::Element: Mul<R::Element>,
    <L::Element as Mul<R::Element>>::Output: Zero,
{
    type Output = MatrixProduct<L, R, <L::Element as Mul<R::Element>>::Output>;

    #[track_caller]
    fn mul_onto(self, lhs: L) -> Self::Output {
        MatrixProduct::new(lhs, self)
    }
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {}

            impl<L> MulOperand<L> for $t
            where
                L: MatrixExpr,
                L::Element: Mul<$t>,
            {
                type Output = ScaledRight<L, $t>;

                fn mul_onto(self, lhs: L) -> Self::Output {
                    ScaledRight::new(lhs, self)
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(feature = "num-complex")]
impl_scalar!(num_complex::Complex<f32>, num_complex::Complex<f64>);
