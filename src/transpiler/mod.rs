//! SQL Transpiler.
//!
//! Converts query descriptors into dialect-correct SQL strings.

pub mod conditions;
pub mod dialect;
pub mod dml;
pub mod sql;
pub mod traits;

#[cfg(test)]
mod tests;

use crate::ast::Value;

pub use conditions::{ParamContext, WhereCompiler, compile_where};
pub use dialect::{
    BooleanStyle, CaseInsensitiveLike, Dialect, DialectDescriptor, PaginationStyle,
    PlaceholderStyle,
};
pub use traits::{SqlGenerator, escape_identifier};

/// Compiled SQL together with its bind parameters.
///
/// `params` is empty when values were rendered inline.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql)
    }
}
