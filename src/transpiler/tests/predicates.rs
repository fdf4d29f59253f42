//! WHERE tree tests: nesting, precedence and parameter binding.

use pretty_assertions::assert_eq;

use super::users;
use crate::ast::builders::*;
use crate::ast::{Predicate, Value};
use crate::error::SqlweaveError;
use crate::transpiler::Dialect;

fn where_clause(p: Predicate) -> String {
    let sql = users(Dialect::Postgres).select().filter(p).get_query().unwrap();
    let start = sql.find(" WHERE ").map(|i| i + 7).unwrap_or(sql.len());
    sql[start..sql.len() - 1].to_string()
}

#[test]
fn test_or_inside_and_is_parenthesized() {
    let p = and([
        eq("active", true),
        or([eq("name", "a"), eq("name", "b")]),
    ]);
    assert_eq!(
        where_clause(p),
        r#""User"."active" = true AND ("User"."name" = 'a' OR "User"."name" = 'b')"#
    );
}

#[test]
fn test_top_level_or_is_bare() {
    let p = or([eq("age", 1), eq("age", 2)]);
    assert_eq!(where_clause(p), r#""User"."age" = 1 OR "User"."age" = 2"#);
}

#[test]
fn test_three_level_nesting() {
    let p = or([
        and([
            eq("active", true),
            or([lt("age", 18), gt("age", 65)]),
        ]),
        and([is_null("deleted_at"), like("email", "%@corp.test")]),
    ]);
    assert_eq!(
        where_clause(p),
        r#"("User"."active" = true AND ("User"."age" < 18 OR "User"."age" > 65)) OR ("User"."deleted_at" IS NULL AND "User"."email" LIKE '%@corp.test')"#
    );
}

#[test]
fn test_same_operator_nesting_stays_flat() {
    let p = and([and([eq("age", 1), eq("age", 2)]), eq("age", 3)]);
    assert_eq!(
        where_clause(p),
        r#""User"."age" = 1 AND "User"."age" = 2 AND "User"."age" = 3"#
    );
}

#[test]
fn test_single_child_group_is_transparent() {
    let p = and([or([eq("age", 1)])]);
    assert_eq!(where_clause(p), r#""User"."age" = 1"#);
}

#[test]
fn test_not_wraps_subtree() {
    let p = and([
        eq("active", true),
        not(or([eq("name", "a"), eq("name", "b")])),
    ]);
    assert_eq!(
        where_clause(p),
        r#""User"."active" = true AND NOT ("User"."name" = 'a' OR "User"."name" = 'b')"#
    );
}

#[test]
fn test_chained_combinators() {
    let p = eq("age", 1).and(eq("active", true)).or(is_not_null("email"));
    assert_eq!(
        where_clause(p),
        r#"("User"."age" = 1 AND "User"."active" = true) OR "User"."email" IS NOT NULL"#
    );
}

#[test]
fn test_qualified_column_is_not_requalified() {
    let p = eq("Other.id", 3);
    assert_eq!(where_clause(p), r#""Other"."id" = 3"#);
}

#[test]
fn test_empty_group_fails() {
    let err = users(Dialect::Postgres)
        .select()
        .filter(and([eq("age", 1), or(Vec::<Predicate>::new())]))
        .get_query()
        .unwrap_err();
    assert!(matches!(err, SqlweaveError::InvalidPredicate(_)));
}

#[test]
fn test_like_requires_string_pattern() {
    let p = Predicate::Condition(crate::ast::Condition::new(
        "name",
        crate::ast::Operator::Like,
        crate::ast::Operand::Scalar(Value::Int(3)),
    ));
    let err = users(Dialect::Postgres).select().filter(p).get_query().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid predicate: operator 'like' on column 'name' expects a string pattern, got integer"
    );
}

#[test]
fn test_parameterized_numbering_spans_the_tree() {
    let stmt = users(Dialect::Postgres)
        .select()
        .filter(or([
            and([eq("name", "a"), between("age", 18, 30)]),
            and([is_in("id", [7, 8]), eq("deleted_at", Value::Null)]),
        ]))
        .limit(5)
        .get_query_with_params()
        .unwrap();
    assert_eq!(
        stmt.sql,
        r#"SELECT * FROM "users" AS "User" WHERE ("User"."name" = $1 AND ("User"."age" BETWEEN $2 AND $3)) OR ("User"."id" IN ($4, $5) AND "User"."deleted_at" IS NULL) ORDER BY "User"."id" LIMIT 5;"#
    );
    assert_eq!(
        stmt.params,
        vec![
            Value::from("a"),
            Value::Int(18),
            Value::Int(30),
            Value::Int(7),
            Value::Int(8),
        ]
    );
}
