//! Precondition checks for expression construction and lookup
//!
//! Pure functions with no evaluation side effects. Node constructors call
//! these before binding their operands.

pub mod bounds;
pub mod shape;

pub use bounds::{validate_buffer_len, validate_coordinate, validate_element_count, validate_row_len};
pub use shape::{validate_same_shape, validate_shared_dim};
