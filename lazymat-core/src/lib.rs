#![no_std]

//! lazymat core - deferred matrix expression definitions
//!
//! This crate provides the shape-and-lookup contract, the composite
//! expression nodes and the shape validation they rely on. It owns no
//! element storage; dense matrices live in the `lazymat` crate.
//!
//! Operators on expressions build nodes without evaluating anything:
//!
//! | Expression | Node |
//! |---|---|
//! | `lhs + rhs` | [`Sum`] |
//! | `lhs - rhs` | [`Difference`] |
//! | `lhs * rhs` | [`MatrixProduct`] |
//! | `scalar * expr` | [`ScaledLeft`] |
//! | `expr * scalar` | [`ScaledRight`] |

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "num-complex")]
#[doc(hidden)]
pub use num_complex;

pub mod error;
pub mod expr;
pub mod ops;
pub mod render;
pub mod shape;
pub mod traits;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use error::*;
pub use expr::{Difference, MatrixProduct, ScaledLeft, ScaledRight, Sum};
pub use render::{RenderConfig, Rendered};
pub use shape::Shape;
pub use traits::{MatrixExpr, MulOperand, Scalar};
