//! lazymat - lazily evaluated dense matrix arithmetic
//!
//! Arithmetic on matrices builds deferred expression trees instead of
//! temporary matrices. A chain such as `&a + &b - &c` is evaluated once,
//! element by element, when it is stored into a [`Matrix`].
//!
//! ## Architecture
//!
//! lazymat follows a contract/implementation separation:
//!
//! - **lazymat-core**: the [`MatrixExpr`] contract, expression nodes, shape
//!   validation and rendering (`no_std`, no storage)
//! - **lazymat**: dense storage and the materialization path
//!
//! ## Quick Start
//!
//! ```rust
//! use lazymat::{Materialize, Matrix, MatrixExpr, Shape};
//!
//! let a = Matrix::from([[1, 2], [3, 4]]);
//! let b = Matrix::from([[5, 6], [7, 8]]);
//!
//! // Nothing is computed yet
//! let expr = (&a + &b) * &a;
//! assert_eq!(expr.shape(), Shape::new(2, 2));
//!
//! let c = expr.materialize();
//! assert_eq!(c, Matrix::from([[30, 44], [46, 68]]));
//! assert_eq!(c.to_string(), "30 44 \n46 68 \n");
//! ```
//!
//! ## Scalars
//!
//! Every primitive type is its own scalar kind, so a bare literal can leave
//! the product type ambiguous. Suffix scalar literals:
//!
//! ```rust
//! use lazymat::{Materialize, Matrix, MatrixExpr, Shape};
//!
//! let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!((&a * 0.5f64).shape(), Shape::new(2, 2));
//! assert_eq!((2.0f64 * &a).materialize(), Matrix::from([[2.0, 4.0], [6.0, 8.0]]));
//! ```
//!
//! ## Errors
//!
//! Shape and dimension checks run when an expression is built. Operators
//! panic on a mismatch; the functions in [`ops`] return [`LazyMatError`]
//! instead.

// Re-export the contract, nodes and error handling
pub use lazymat_core::{
    // Contract and operand kinds
    MatrixExpr, MulOperand, Scalar,
    // Expression nodes
    Difference, MatrixProduct, ScaledLeft, ScaledRight, Sum,
    // Shapes and rendering
    RenderConfig, Rendered, Shape,
    // Error handling
    LazyMatError, Result,
    // Composition entry points and validation utilities
    ops, validation,
    // Operator and display impls for custom conformers
    impl_expr_display, impl_expr_ops,
};

pub mod materialize;
pub mod matrix;

pub use materialize::Materialize;
pub use matrix::Matrix;
