//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: SELECT assembly (projection, FROM, ORDER BY, pagination)
//! - `dialects`: quoting, literals and pagination per dialect
//! - `predicates`: WHERE trees, nesting and parameter binding

mod dialects;
mod predicates;

use crate::model::{ColumnType, ModelDescriptor};
use crate::query::QueryBuilder;
use crate::transpiler::Dialect;

/// `User` over table `users`, primary key `id`.
pub(super) fn users(dialect: Dialect) -> QueryBuilder {
    let model = ModelDescriptor::builder("User", "users")
        .column("id", ColumnType::Integer)
        .column("email", ColumnType::String)
        .column("name", ColumnType::String)
        .column("age", ColumnType::Integer)
        .column("active", ColumnType::Boolean)
        .column("created_at", ColumnType::DateTime)
        .column("deleted_at", ColumnType::DateTime)
        .build()
        .unwrap();
    QueryBuilder::new(model, dialect)
}
