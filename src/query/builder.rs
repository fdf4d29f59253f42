use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::ast::{Predicate, SortOrder};
use crate::engine::Executor;
use crate::error::SqlweaveResult;
use crate::filter::parse_filter;
use crate::model::ModelDescriptor;
use crate::query::{Attribute, OrderItem, QueryDescriptor};
use crate::transpiler::dml::select::{build_select, build_select_parameterized};
use crate::transpiler::{DialectDescriptor, Statement};

/// Persistent query builder.
///
/// Every chainable method borrows `self` and returns a new builder; the
/// receiver keeps rendering exactly what it rendered before. Model and
/// dialect descriptors are shared, never copied.
///
/// ```
/// use sqlweave::prelude::*;
///
/// let model = ModelDescriptor::builder("User", "users")
///     .column("id", ColumnType::Integer)
///     .column("active", ColumnType::Boolean)
///     .build()?;
/// let users = QueryBuilder::new(model, Dialect::Postgres);
///
/// let sql = users.select().filter(eq("active", true)).limit(10).get_query()?;
/// assert_eq!(
///     sql,
///     r#"SELECT * FROM "users" AS "User" WHERE "User"."active" = true ORDER BY "User"."id" LIMIT 10;"#
/// );
/// # Ok::<(), sqlweave::SqlweaveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    model: Arc<ModelDescriptor>,
    dialect: Arc<DialectDescriptor>,
    query: QueryDescriptor,
}

impl QueryBuilder {
    /// A builder with no state. Rendering fails until [`select`](Self::select) is called.
    pub fn new(
        model: impl Into<Arc<ModelDescriptor>>,
        dialect: impl Into<Arc<DialectDescriptor>>,
    ) -> Self {
        Self {
            model: model.into(),
            dialect: dialect.into(),
            query: QueryDescriptor::default(),
        }
    }

    fn with_query(&self, query: QueryDescriptor) -> Self {
        Self {
            model: Arc::clone(&self.model),
            dialect: Arc::clone(&self.dialect),
            query,
        }
    }

    /// Start a clean SELECT. Attributes, filter, order, limit and offset of
    /// the receiver are not inherited.
    pub fn select(&self) -> Self {
        self.with_query(QueryDescriptor::select())
    }

    /// Set the projected columns. An empty list fails at render time.
    pub fn attributes<I, A>(&self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        let attrs = attributes.into_iter().map(Into::into).collect();
        self.with_query(self.query.with_attributes(attrs))
    }

    /// Set the WHERE predicate, replacing any previous one.
    pub fn filter(&self, predicate: impl Into<Predicate>) -> Self {
        self.with_query(self.query.with_predicate(Some(predicate.into())))
    }

    /// Set the WHERE predicate from a declarative filter description.
    ///
    /// `{}` clears the filter; `null` is rejected.
    pub fn filter_json(&self, filter: &JsonValue) -> SqlweaveResult<Self> {
        let predicate = parse_filter(filter)?;
        Ok(self.with_query(self.query.with_predicate(predicate)))
    }

    /// Append an ORDER BY item.
    pub fn order_by(&self, column: impl Into<String>, order: SortOrder) -> Self {
        self.with_query(self.query.with_order(OrderItem {
            column: column.into(),
            order,
        }))
    }

    pub fn limit(&self, limit: u64) -> Self {
        self.with_query(self.query.with_limit(limit))
    }

    pub fn offset(&self, offset: u64) -> Self {
        self.with_query(self.query.with_offset(offset))
    }

    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    pub fn dialect(&self) -> &DialectDescriptor {
        &self.dialect
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.query
    }

    /// Render the SQL text with values inlined.
    pub fn get_query(&self) -> SqlweaveResult<String> {
        build_select(&self.query, &self.model, self.dialect.as_ref())
    }

    /// Render the SQL text with bind placeholders and the values to bind.
    pub fn get_query_with_params(&self) -> SqlweaveResult<Statement> {
        build_select_parameterized(&self.query, &self.model, self.dialect.as_ref())
    }

    /// Render and hand the SQL text to `executor`, returning its result unchanged.
    pub async fn execute<E: Executor>(&self, executor: &E) -> Result<E::Output, E::Error> {
        let statement = Statement::new(self.get_query()?);
        executor.execute(&statement).await
    }

    /// Like [`execute`](Self::execute), but sends placeholders plus bind values.
    pub async fn execute_bound<E: Executor>(&self, executor: &E) -> Result<E::Output, E::Error> {
        let statement = self.get_query_with_params()?;
        executor.execute(&statement).await
    }
}
