//! Declarative filter descriptions.
//!
//! A filter is a JSON object whose entries are ANDed together:
//!
//! ```text
//! { "active": true, "age": { "gte": 18 }, "or": [{ "role": "admin" }, { "role": "mod" }] }
//! ```
//!
//! | Entry                            | Meaning                     |
//! |----------------------------------|-----------------------------|
//! | `"col": scalar`                  | `col = scalar`              |
//! | `"col": null`                    | `col IS NULL`               |
//! | `"col": [a, b]`                  | `col IN (a, b)`             |
//! | `"col": { "<op>": operand, .. }` | one condition per operator  |
//! | `"and"` / `"or"`: `[filter, ..]` | combinator over sub-filters |
//! | `"not"`: filter                  | `NOT (filter)`              |
//!
//! Operator keys: `eq ne lt lte gt gte like notLike iLike notILike in notIn
//! between notBetween is not`. `is` and `not` only accept `null`.

use serde_json::{Map, Value as JsonValue};

use crate::ast::builders::not;
use crate::ast::{Condition, LogicalOp, Operand, Operator, Predicate, Value};
use crate::error::{SqlweaveError, SqlweaveResult};

/// Parse a filter description into a predicate tree.
///
/// An empty object yields `None` (no WHERE clause). `null` is rejected: an
/// absent filter must be omitted, not passed as null.
pub fn parse_filter(filter: &JsonValue) -> SqlweaveResult<Option<Predicate>> {
    match filter {
        JsonValue::Null => Err(SqlweaveError::predicate(
            "filter is null; omit it to select without a WHERE clause",
        )),
        JsonValue::Object(map) => parse_object(map),
        other => Err(SqlweaveError::predicate(format!(
            "filter must be an object, got {}",
            json_kind(other)
        ))),
    }
}

fn parse_object(map: &Map<String, JsonValue>) -> SqlweaveResult<Option<Predicate>> {
    let mut parts = Vec::with_capacity(map.len());
    for (key, value) in map {
        let part = match key.as_str() {
            "and" => parse_group(LogicalOp::And, value)?,
            "or" => parse_group(LogicalOp::Or, value)?,
            "not" => match parse_filter(value)? {
                Some(inner) => not(inner),
                None => return Err(SqlweaveError::predicate("'not' needs a non-empty filter")),
            },
            column => parse_column(column, value)?,
        };
        parts.push(part);
    }
    Ok(fold(LogicalOp::And, parts))
}

fn fold(op: LogicalOp, mut parts: Vec<Predicate>) -> Option<Predicate> {
    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => Some(Predicate::group(op, parts)),
    }
}

/// `and` / `or` take an array of sub-filters, or an object whose entries each
/// become one child.
fn parse_group(op: LogicalOp, value: &JsonValue) -> SqlweaveResult<Predicate> {
    let mut children = Vec::new();
    match value {
        JsonValue::Array(items) => {
            for item in items {
                if let Some(p) = parse_filter(item)? {
                    children.push(p);
                }
            }
        }
        JsonValue::Object(map) => {
            for (key, v) in map {
                let mut single = Map::new();
                single.insert(key.clone(), v.clone());
                if let Some(p) = parse_object(&single)? {
                    children.push(p);
                }
            }
        }
        other => {
            return Err(SqlweaveError::predicate(format!(
                "'{}' expects an array or object, got {}",
                op.keyword().to_lowercase(),
                json_kind(other)
            )));
        }
    }
    if children.is_empty() {
        return Err(SqlweaveError::predicate(format!(
            "'{}' needs at least one condition",
            op.keyword().to_lowercase()
        )));
    }
    Ok(Predicate::group(op, children))
}

fn parse_column(column: &str, value: &JsonValue) -> SqlweaveResult<Predicate> {
    match value {
        JsonValue::Array(items) => {
            let set = scalars(column, items)?;
            Ok(condition(column, Operator::In, Operand::Set(set)))
        }
        JsonValue::Object(ops) => {
            if ops.is_empty() {
                return Err(SqlweaveError::predicate(format!(
                    "column '{}' has an empty operator object",
                    column
                )));
            }
            let parts = ops
                .iter()
                .map(|(key, operand)| parse_operator(column, key, operand))
                .collect::<SqlweaveResult<Vec<_>>>()?;
            // Non-empty, so fold always yields a predicate.
            fold(LogicalOp::And, parts).ok_or_else(|| {
                SqlweaveError::predicate(format!("column '{}' has no conditions", column))
            })
        }
        scalar => {
            let v = to_scalar(column, scalar)?;
            Ok(condition(column, Operator::Eq, Operand::Scalar(v)))
        }
    }
}

fn parse_operator(column: &str, key: &str, operand: &JsonValue) -> SqlweaveResult<Predicate> {
    match key {
        "is" | "not" => {
            if !operand.is_null() {
                return Err(SqlweaveError::predicate(format!(
                    "'{}' on column '{}' only accepts null",
                    key, column
                )));
            }
            let op = if key == "is" { Operator::IsNull } else { Operator::IsNotNull };
            return Ok(condition(column, op, Operand::None));
        }
        _ => {}
    }

    let op = Operator::from_key(key).ok_or_else(|| {
        SqlweaveError::predicate(format!("unknown operator '{}' on column '{}'", key, column))
    })?;

    let operand = match op {
        Operator::In | Operator::NotIn => match operand {
            JsonValue::Array(items) => Operand::Set(scalars(column, items)?),
            other => return Err(expects(column, op, "an array", other)),
        },
        Operator::Between | Operator::NotBetween => match operand {
            JsonValue::Array(items) if items.len() == 2 => Operand::Range(
                to_scalar(column, &items[0])?,
                to_scalar(column, &items[1])?,
            ),
            other => return Err(expects(column, op, "a [low, high] pair", other)),
        },
        _ => Operand::Scalar(to_scalar(column, operand)?),
    };
    Ok(condition(column, op, operand))
}

fn condition(column: &str, op: Operator, operand: Operand) -> Predicate {
    Predicate::Condition(Condition::new(column, op, operand))
}

fn scalars(column: &str, items: &[JsonValue]) -> SqlweaveResult<Vec<Value>> {
    items.iter().map(|item| to_scalar(column, item)).collect()
}

fn to_scalar(column: &str, value: &JsonValue) -> SqlweaveResult<Value> {
    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Value::Int(i));
            }
            match n.as_f64() {
                Some(f) if n.is_f64() => Ok(Value::Float(f)),
                // Integers past i64 would only survive as a rounded float.
                _ => Err(SqlweaveError::predicate(format!(
                    "number {} on column '{}' is out of range",
                    n, column
                ))),
            }
        }
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        other => Err(SqlweaveError::predicate(format!(
            "column '{}' expects a scalar value, got {}",
            column,
            json_kind(other)
        ))),
    }
}

fn expects(column: &str, op: Operator, what: &str, got: &JsonValue) -> SqlweaveError {
    SqlweaveError::predicate(format!(
        "'{}' on column '{}' expects {}, got {}",
        op,
        column,
        what,
        json_kind(got)
    ))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;
    use serde_json::json;

    fn parse(v: JsonValue) -> Option<Predicate> {
        parse_filter(&v).unwrap()
    }

    #[test]
    fn test_entries_are_anded_in_order() {
        assert_eq!(
            parse(json!({"active": true, "age": 25})),
            Some(and([eq("active", true), eq("age", 25)]))
        );
        // insertion order, not alphabetical
        assert_eq!(
            parse(json!({"zeta": 1, "alpha": 2})),
            Some(and([eq("zeta", 1), eq("alpha", 2)]))
        );
    }

    #[test]
    fn test_integer_beyond_i64_rejected() {
        let err = parse_filter(&json!({"id": 18446744073709551615u64})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid predicate: number 18446744073709551615 on column 'id' is out of range"
        );
        assert_eq!(parse(json!({"id": i64::MAX})), Some(eq("id", i64::MAX)));
        assert_eq!(parse(json!({"ratio": 0.5})), Some(eq("ratio", 0.5)));
    }

    #[test]
    fn test_single_entry_is_bare_condition() {
        assert_eq!(parse(json!({"age": 25})), Some(eq("age", 25)));
    }

    #[test]
    fn test_empty_object_means_no_filter() {
        assert_eq!(parse(json!({})), None);
    }

    #[test]
    fn test_null_filter_fails_fast() {
        let err = parse_filter(&JsonValue::Null).unwrap_err();
        assert!(matches!(err, SqlweaveError::InvalidPredicate(_)));
    }

    #[test]
    fn test_null_values() {
        assert_eq!(parse(json!({"deleted_at": null})), Some(is_null("deleted_at")));
        assert_eq!(parse(json!({"deleted_at": {"ne": null}})), Some(is_not_null("deleted_at")));
        assert_eq!(parse(json!({"deleted_at": {"is": null}})), Some(is_null("deleted_at")));
        assert_eq!(parse(json!({"deleted_at": {"not": null}})), Some(is_not_null("deleted_at")));
    }

    #[test]
    fn test_operator_objects() {
        assert_eq!(
            parse(json!({"age": {"gte": 18, "lt": 65}})),
            Some(and([gte("age", 18), lt("age", 65)]))
        );
        assert_eq!(parse(json!({"id": [1, 2]})), Some(is_in("id", [1, 2])));
        assert_eq!(parse(json!({"id": {"notIn": [3]}})), Some(not_in("id", [3])));
        assert_eq!(
            parse(json!({"score": {"between": [1.5, 9]}})),
            Some(between("score", 1.5, 9))
        );
        assert_eq!(parse(json!({"name": {"iLike": "j%"}})), Some(ilike("name", "j%")));
    }

    #[test]
    fn test_combinators() {
        assert_eq!(
            parse(json!({"or": [{"role": "admin"}, {"role": "mod", "active": true}]})),
            Some(or([
                eq("role", "admin"),
                and([eq("role", "mod"), eq("active", true)])
            ]))
        );
        assert_eq!(
            parse(json!({"or": {"a": 1, "b": 2}})),
            Some(or([eq("a", 1), eq("b", 2)]))
        );
        assert_eq!(parse(json!({"not": {"a": 1}})), Some(not(eq("a", 1))));
    }

    #[test]
    fn test_rejections() {
        for bad in [
            json!({"age": {"approximately": 3}}),
            json!({"id": {"in": 3}}),
            json!({"age": {"between": [1]}}),
            json!({"age": {"is": true}}),
            json!({"or": []}),
            json!({"or": 1}),
            json!({"age": {}}),
            json!({"age": {"eq": {"nested": 1}}}),
            json!([1, 2]),
        ] {
            let err = parse_filter(&bad).unwrap_err();
            assert!(
                matches!(err, SqlweaveError::InvalidPredicate(_)),
                "expected InvalidPredicate for {}",
                bad
            );
        }
    }
}
