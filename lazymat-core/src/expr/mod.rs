//! Deferred expression nodes
//!
//! Nodes hold two operands and their derived shape. They allocate nothing
//! and evaluate nothing until an element is requested, at which point each
//! lookup recurses into the operands afresh.

pub mod elementwise;
pub mod product;

pub use elementwise::{Difference, Sum};
pub use product::{MatrixProduct, ScaledLeft, ScaledRight};

use crate::{impl_expr_display, impl_expr_ops};

impl_expr_ops!([L, R,] Sum<L, R>);
impl_expr_ops!(['a, L, R,] &'a Sum<L, R>);
impl_expr_ops!([L, R,] Difference<L, R>);
impl_expr_ops!(['a, L, R,] &'a Difference<L, R>);
impl_expr_ops!([L, R, O,] MatrixProduct<L, R, O>);
impl_expr_ops!(['a, L, R, O,] &'a MatrixProduct<L, R, O>);
impl_expr_ops!([S, E,] ScaledLeft<S, E>);
impl_expr_ops!(['a, S, E,] &'a ScaledLeft<S, E>);
impl_expr_ops!([E, S,] ScaledRight<E, S>);
impl_expr_ops!(['a, E, S,] &'a ScaledRight<E, S>);

impl_expr_display!([L, R,] Sum<L, R>);
impl_expr_display!([L, R,] Difference<L, R>);
impl_expr_display!([L, R, O,] MatrixProduct<L, R, O>);
impl_expr_display!([S, E,] ScaledLeft<S, E>);
impl_expr_display!([E, S,] ScaledRight<E, S>);
