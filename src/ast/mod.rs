//! Query AST: values, operators and predicate trees.

pub mod builders;
pub mod operators;
pub mod predicate;
pub mod values;

pub use operators::{LogicalOp, Operator, SortOrder};
pub use predicate::{Condition, Operand, Predicate};
pub use values::Value;

/// Rendering format for timestamp literals.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
