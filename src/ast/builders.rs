//! Condition builders for WHERE clauses.
//!
//! ```
//! use sqlweave::ast::builders::*;
//!
//! let p = or([and([eq("active", true), gte("age", 18)]), eq("role", "admin")]);
//! ```

use super::{Condition, LogicalOp, Operand, Operator, Predicate, Value};

fn make_condition(column: &str, op: Operator, operand: Operand) -> Predicate {
    Predicate::Condition(Condition::new(column, op, operand))
}

fn scalar(column: &str, op: Operator, value: impl Into<Value>) -> Predicate {
    make_condition(column, op, Operand::Scalar(value.into()))
}

/// Create an equality condition (column = value). NULL becomes IS NULL.
pub fn eq(column: &str, value: impl Into<Value>) -> Predicate {
    scalar(column, Operator::Eq, value)
}

/// NULL becomes IS NOT NULL.
pub fn ne(column: &str, value: impl Into<Value>) -> Predicate {
    scalar(column, Operator::Ne, value)
}

pub fn lt(column: &str, value: impl Into<Value>) -> Predicate {
    scalar(column, Operator::Lt, value)
}

pub fn lte(column: &str, value: impl Into<Value>) -> Predicate {
    scalar(column, Operator::Lte, value)
}

pub fn gt(column: &str, value: impl Into<Value>) -> Predicate {
    scalar(column, Operator::Gt, value)
}

pub fn gte(column: &str, value: impl Into<Value>) -> Predicate {
    scalar(column, Operator::Gte, value)
}

pub fn like(column: &str, pattern: &str) -> Predicate {
    scalar(column, Operator::Like, pattern)
}

pub fn not_like(column: &str, pattern: &str) -> Predicate {
    scalar(column, Operator::NotLike, pattern)
}

/// Case-insensitive pattern match.
pub fn ilike(column: &str, pattern: &str) -> Predicate {
    scalar(column, Operator::ILike, pattern)
}

pub fn not_ilike(column: &str, pattern: &str) -> Predicate {
    scalar(column, Operator::NotILike, pattern)
}

pub fn is_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Predicate {
    let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
    make_condition(column, Operator::In, Operand::Set(vals))
}

pub fn not_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Predicate {
    let vals: Vec<Value> = values.into_iter().map(|v| v.into()).collect();
    make_condition(column, Operator::NotIn, Operand::Set(vals))
}

pub fn between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Predicate {
    make_condition(
        column,
        Operator::Between,
        Operand::Range(low.into(), high.into()),
    )
}

pub fn not_between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Predicate {
    make_condition(
        column,
        Operator::NotBetween,
        Operand::Range(low.into(), high.into()),
    )
}

pub fn is_null(column: &str) -> Predicate {
    make_condition(column, Operator::IsNull, Operand::None)
}

pub fn is_not_null(column: &str) -> Predicate {
    make_condition(column, Operator::IsNotNull, Operand::None)
}

/// AND over the given predicates.
pub fn and(children: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::group(LogicalOp::And, children)
}

/// OR over the given predicates.
pub fn or(children: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::group(LogicalOp::Or, children)
}

pub fn not(inner: Predicate) -> Predicate {
    Predicate::Not(Box::new(inner))
}
