//! Abstract interfaces shared by storage and expression nodes

pub mod expr;
pub mod scalar;

pub use expr::MatrixExpr;
pub use scalar::{MulOperand, Scalar};
