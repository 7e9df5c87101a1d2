//! Textual rendering for any [`MatrixExpr`]

use core::fmt;

use crate::MatrixExpr;

/// Separators used when rendering an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Written after every value, including the last one in a row
    pub column_separator: &'static str,
    /// Written after every row
    pub row_terminator: &'static str,
}

impl RenderConfig {
    /// Set the separator written after each value
    pub fn with_column_separator(mut self, separator: &'static str) -> Self {
        self.column_separator = separator;
        self
    }

    /// Set the terminator written after each row
    pub fn with_row_terminator(mut self, terminator: &'static str) -> Self {
        self.row_terminator = terminator;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            column_separator: " ",
            row_terminator: "\n",
        }
    }
}

/// Display adapter produced by [`MatrixExpr::render`]
///
/// Formatting evaluates every coordinate of the expression once, in
/// row-major order. Width and precision flags apply to each value.
pub struct Rendered<'a, E: ?Sized> {
    expr: &'a E,
    config: RenderConfig,
}

impl<'a, E: ?Sized> Rendered<'a, E> {
    pub(crate) fn new(expr: &'a E, config: RenderConfig) -> Self {
        Self { expr, config }
    }
}

impl<E> fmt::Display for Rendered<'_, E>
where
    E: MatrixExpr + ?Sized,
    E::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.expr.nrows() {
            for col in 0..self.expr.ncols() {
                fmt::Display::fmt(&self.expr.value_at(row, col), f)?;
                f.write_str(self.config.column_separator)?;
            }
            f.write_str(self.config.row_terminator)?;
        }
        Ok(())
    }
}

/// Implement `Display` for an expression type through [`MatrixExpr::render`]
#[macro_export]
macro_rules! impl_expr_display {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::fmt::Display for $ty
        where
            $ty: $crate::MatrixExpr,
            <$ty as $crate::MatrixExpr>::Element: ::core::fmt::Display,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$crate::MatrixExpr::render(self), f)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use super::*;
    use crate::test_support::Grid;
    use crate::Sum;

    #[test]
    fn test_render_empty() {
        let empty = Grid::<0, 0>([]);
        assert_eq!(format!("{}", empty.render()), "");
    }

    #[test]
    fn test_render_single_value() {
        assert_eq!(format!("{}", Grid([[5]]).render()), "5 \n");
    }

    #[test]
    fn test_render_rows() {
        let grid = Grid([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(format!("{}", grid.render()), "1 2 3 \n4 5 6 \n");
    }

    #[test]
    fn test_render_with_config() {
        let grid = Grid([[1, 2], [3, 4]]);
        let config = RenderConfig::default()
            .with_column_separator(",")
            .with_row_terminator(";");
        assert_eq!(format!("{}", grid.render_with(config)), "1,2,;3,4,;");
    }

    #[test]
    fn test_render_applies_width_to_each_value() {
        let grid = Grid([[1, 22], [333, 4]]);
        assert_eq!(format!("{:>3}", grid.render()), "  1  22 \n333   4 \n");
    }

    #[test]
    fn test_nodes_display_through_render() {
        let a = Grid([[1, 2], [3, 4]]);
        let b = Grid([[5, 6], [7, 8]]);
        assert_eq!(format!("{}", Sum::new(&a, &b)), "6 8 \n10 12 \n");
    }
}
