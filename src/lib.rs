//! # sqlweave: dialect-aware SELECT compiler
//!
//! Describe a table once, build queries as values, render them for any SQL
//! dialect.
//!
//! ## Quick Example
//!
//! ```
//! use sqlweave::prelude::*;
//!
//! let model = ModelDescriptor::builder("User", "users")
//!     .column("id", ColumnType::Integer)
//!     .column("active", ColumnType::Boolean)
//!     .column("age", ColumnType::Integer)
//!     .build()?;
//!
//! let users = QueryBuilder::new(model, Dialect::Sqlite);
//! let sql = users
//!     .select()
//!     .filter(and([eq("active", true), eq("age", 25)]))
//!     .get_query()?;
//! assert_eq!(
//!     sql,
//!     r#"SELECT * FROM "users" AS "User" WHERE "User"."active" = 1 AND "User"."age" = 25;"#
//! );
//! # Ok::<(), sqlweave::SqlweaveError>(())
//! ```
//!
//! ## Dialects
//!
//! | Name        | Quotes | Booleans | Pagination          | Placeholders |
//! |-------------|--------|----------|---------------------|--------------|
//! | `postgres`  | `"x"`  | native   | `LIMIT/OFFSET`      | `$1`         |
//! | `mysql`     | `` `x` `` | `1`/`0` | `LIMIT/OFFSET`   | `?`          |
//! | `mariadb`   | `` `x` `` | `1`/`0` | `LIMIT/OFFSET`   | `?`          |
//! | `sqlite`    | `"x"`  | `1`/`0`  | `LIMIT/OFFSET`      | `?`          |
//! | `mssql`     | `[x]`  | `1`/`0`  | `OFFSET/FETCH`      | `@p1`        |
//! | `oracle`    | `"x"`  | `1`/`0`  | `OFFSET/FETCH`      | `:1`         |
//! | `snowflake` | `"x"`  | native   | `LIMIT/OFFSET`      | `?`          |

pub mod ast;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod transpiler;

pub use error::{SqlweaveError, SqlweaveResult};
pub use model::ModelDescriptor;
pub use query::QueryBuilder;
pub use transpiler::{Dialect, DialectDescriptor, Statement};

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::{Condition, LogicalOp, Operand, Operator, Predicate, SortOrder, Value};
    pub use crate::config::Config;
    pub use crate::engine::{Executor, QueryOutput, SqlxExecutor};
    pub use crate::error::*;
    pub use crate::filter::parse_filter;
    pub use crate::model::{ColumnDef, ColumnType, ModelDescriptor};
    pub use crate::query::{Attribute, QueryBuilder, QuerySpec};
    pub use crate::transpiler::{Dialect, DialectDescriptor, SqlGenerator, Statement};
}
