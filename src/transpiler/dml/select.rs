//! SELECT SQL generation.

use crate::error::{SqlweaveError, SqlweaveResult};
use crate::model::ModelDescriptor;
use crate::query::{Attribute, Mode, QueryDescriptor};
use crate::transpiler::Statement;
use crate::transpiler::conditions::WhereCompiler;
use crate::transpiler::traits::SqlGenerator;

/// Render a SELECT with values inlined as literals.
pub fn build_select(
    query: &QueryDescriptor,
    model: &ModelDescriptor,
    generator: &dyn SqlGenerator,
) -> SqlweaveResult<String> {
    let mut compiler = WhereCompiler::new(generator, model.alias());
    assemble(query, model, generator, &mut compiler)
}

/// Render a SELECT with values replaced by bind placeholders.
pub fn build_select_parameterized(
    query: &QueryDescriptor,
    model: &ModelDescriptor,
    generator: &dyn SqlGenerator,
) -> SqlweaveResult<Statement> {
    let mut compiler = WhereCompiler::parameterized(generator, model.alias());
    let sql = assemble(query, model, generator, &mut compiler)?;
    Ok(Statement {
        sql,
        params: compiler.into_params(),
    })
}

/// Clause order is fixed:
/// `SELECT .. FROM .. [AS] .. [WHERE ..] [ORDER BY ..] [pagination];`
fn assemble(
    query: &QueryDescriptor,
    model: &ModelDescriptor,
    generator: &dyn SqlGenerator,
    compiler: &mut WhereCompiler<'_>,
) -> SqlweaveResult<String> {
    if query.mode != Mode::Select {
        return Err(SqlweaveError::NotInSelectMode {
            model: model.name().to_string(),
        });
    }

    let mut sql = String::from("SELECT ");

    // Columns
    match query.attributes.as_deref() {
        None => sql.push('*'),
        Some([]) => {
            return Err(SqlweaveError::EmptyProjection {
                model: model.name().to_string(),
                alias: model.alias().to_string(),
            });
        }
        Some(attrs) => {
            let cols = attrs
                .iter()
                .map(|a| render_attribute(a, generator))
                .collect::<SqlweaveResult<Vec<_>>>()?;
            sql.push_str(&cols.join(", "));
        }
    }

    // FROM
    sql.push_str(" FROM ");
    sql.push_str(&generator.table_reference(model.table_name(), model.alias()));

    // WHERE
    if let Some(fragment) = compiler.compile(query.predicate.as_deref())? {
        sql.push_str(" WHERE ");
        sql.push_str(&fragment);
    }

    // ORDER BY: explicit items win; pagination without them falls back to the primary key
    match query.order.as_deref() {
        Some(items) if !items.is_empty() => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| {
                    format!(
                        "{} {}",
                        generator.quote_column(model.alias(), &item.column),
                        item.order.keyword()
                    )
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&parts.join(", "));
        }
        _ if query.is_paginated() => {
            sql.push_str(" ORDER BY ");
            sql.push_str(&generator.quote_column(model.alias(), model.primary_key()));
        }
        _ => {}
    }

    sql.push_str(&generator.limit_offset(query.limit, query.offset));
    sql.push(';');

    tracing::debug!(
        "compiled SELECT for {} ({}): {}",
        model.name(),
        generator.dialect_name(),
        sql
    );
    Ok(sql)
}

fn render_attribute(attr: &Attribute, generator: &dyn SqlGenerator) -> SqlweaveResult<String> {
    if attr.column.split('.').any(str::is_empty) {
        return Err(SqlweaveError::InvalidQuery(format!(
            "attribute '{}' has an empty name",
            attr.column
        )));
    }
    let (col, wildcard) = match attr.column.strip_suffix("*") {
        Some("") => ("*".to_string(), true),
        Some(prefix) if prefix.ends_with('.') => (
            format!("{}.*", generator.quote_path(&prefix[..prefix.len() - 1])),
            true,
        ),
        _ => (generator.quote_path(&attr.column), false),
    };
    match &attr.alias {
        Some(_) if wildcard => Err(SqlweaveError::InvalidQuery(format!(
            "wildcard attribute '{}' cannot be aliased",
            attr.column
        ))),
        Some(alias) => Ok(format!("{} AS {}", col, generator.quote_identifier(alias))),
        None => Ok(col),
    }
}
