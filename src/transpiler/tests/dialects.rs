//! SQL dialect tests (MySQL, SQLite, SQL Server, Oracle, etc.)

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::users;
use crate::ast::Value;
use crate::ast::builders::*;
use crate::error::SqlweaveError;
use crate::transpiler::{CaseInsensitiveLike, Dialect, DialectDescriptor};

#[test]
fn test_sqlite_integer_booleans() {
    let sql = users(Dialect::Sqlite)
        .select()
        .filter(and([eq("active", true), eq("age", 25)]))
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" AS "User" WHERE "User"."active" = 1 AND "User"."age" = 25;"#
    );
}

#[test]
fn test_mysql_dialect() {
    let sql = users(Dialect::MySql)
        .select()
        .attributes(["id", "name"])
        .filter(and([eq("active", false), ilike("name", "jo%")]))
        .limit(10)
        .offset(5)
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT `id`, `name` FROM `users` AS `User` WHERE `User`.`active` = 0 AND LOWER(`User`.`name`) LIKE LOWER('jo%') ORDER BY `User`.`id` LIMIT 10 OFFSET 5;"
    );
}

#[test]
fn test_mysql_backslash_escaping() {
    let sql = users(Dialect::MySql)
        .select()
        .filter(eq("name", r"O'Brien\"))
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        r"SELECT * FROM `users` AS `User` WHERE `User`.`name` = 'O''Brien\\';"
    );
}

#[test]
fn test_postgres_keeps_backslashes() {
    let sql = users(Dialect::Postgres)
        .select()
        .filter(eq("name", r"C:\tmp"))
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" AS "User" WHERE "User"."name" = 'C:\tmp';"#
    );
}

#[test]
fn test_mariadb_matches_mysql_rendering() {
    let q = |d| {
        users(d)
            .select()
            .filter(ne("name", "x"))
            .limit(1)
            .get_query()
            .unwrap()
    };
    assert_eq!(q(Dialect::MariaDb), q(Dialect::MySql));
}

#[test]
fn test_sqlserver_dialect() {
    let sql = users(Dialect::SqlServer).select().limit(10).get_query().unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM [users] AS [User] ORDER BY [User].[id] OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY;"
    );

    let sql = users(Dialect::SqlServer)
        .select()
        .attributes(["id"])
        .filter(and([ne("name", "Zoë"), eq("active", true)]))
        .offset(5)
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT [id] FROM [users] AS [User] WHERE [User].[name] <> N'Zoë' AND [User].[active] = 1 ORDER BY [User].[id] OFFSET 5 ROWS;"
    );
}

#[test]
fn test_sqlserver_bracket_escaping() {
    let sql = users(Dialect::SqlServer)
        .select()
        .attributes(["odd]name"])
        .get_query()
        .unwrap();
    assert_eq!(sql, "SELECT [odd]]name] FROM [users] AS [User];");
}

#[test]
fn test_oracle_dialect() {
    let sql = users(Dialect::Oracle)
        .select()
        .filter(ne("age", 30))
        .limit(10)
        .offset(20)
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" "User" WHERE "User"."age" <> 30 ORDER BY "User"."id" OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY;"#
    );
}

#[test]
fn test_offset_without_limit() {
    let q = |d| users(d).select().offset(5).get_query().unwrap();
    assert_eq!(
        q(Dialect::Sqlite),
        r#"SELECT * FROM "users" AS "User" ORDER BY "User"."id" LIMIT -1 OFFSET 5;"#
    );
    assert_eq!(
        q(Dialect::MySql),
        "SELECT * FROM `users` AS `User` ORDER BY `User`.`id` LIMIT 18446744073709551615 OFFSET 5;"
    );
    assert_eq!(
        q(Dialect::MariaDb),
        "SELECT * FROM `users` AS `User` ORDER BY `User`.`id` LIMIT 18446744073709551615 OFFSET 5;"
    );
    assert_eq!(
        q(Dialect::Postgres),
        r#"SELECT * FROM "users" AS "User" ORDER BY "User"."id" OFFSET 5;"#
    );
    assert_eq!(
        q(Dialect::Oracle),
        r#"SELECT * FROM "users" "User" ORDER BY "User"."id" OFFSET 5 ROWS;"#
    );
}

#[test]
fn test_snowflake_native_ilike() {
    let sql = users(Dialect::Snowflake)
        .select()
        .filter(not_ilike("email", "%@spam.test"))
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" AS "User" WHERE "User"."email" NOT ILIKE '%@spam.test';"#
    );
}

#[test]
fn test_timestamp_and_float_literals() {
    let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_milli_opt(3, 4, 5, 60)
        .unwrap();
    let sql = users(Dialect::Postgres)
        .select()
        .filter(and([gt("created_at", ts), lt("age", 1.5)]))
        .get_query()
        .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" AS "User" WHERE "User"."created_at" > '2024-01-02 03:04:05.060' AND "User"."age" < 1.5;"#
    );
}

#[test]
fn test_non_finite_float_fails() {
    let err = users(Dialect::Postgres)
        .select()
        .filter(eq("age", f64::NAN))
        .get_query()
        .unwrap_err();
    assert!(matches!(err, SqlweaveError::InvalidPredicate(_)));
}

#[test]
fn test_custom_dialect_without_ilike() {
    let legacy = DialectDescriptor {
        name: "legacy".to_string(),
        case_insensitive_like: CaseInsensitiveLike::Unsupported,
        ..Dialect::SqlServer.descriptor()
    };
    let model = users(Dialect::Postgres).model().clone();
    let q = crate::query::QueryBuilder::new(model, legacy);

    let err = q.select().filter(ilike("name", "a%")).get_query().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operator 'iLike' is not supported by the legacy dialect"
    );

    // Everything else still renders.
    let sql = q.select().filter(is_not_null("deleted_at")).get_query().unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM [users] AS [User] WHERE [User].[deleted_at] IS NOT NULL;"
    );
}

#[test]
fn test_placeholders_per_dialect() {
    let render = |d| {
        users(d)
            .select()
            .filter(and([eq("name", "a"), eq("age", 2)]))
            .get_query_with_params()
            .unwrap()
    };

    assert_eq!(
        render(Dialect::Postgres).sql,
        r#"SELECT * FROM "users" AS "User" WHERE "User"."name" = $1 AND "User"."age" = $2;"#
    );
    assert_eq!(
        render(Dialect::MySql).sql,
        "SELECT * FROM `users` AS `User` WHERE `User`.`name` = ? AND `User`.`age` = ?;"
    );
    assert_eq!(
        render(Dialect::SqlServer).sql,
        "SELECT * FROM [users] AS [User] WHERE [User].[name] = @p1 AND [User].[age] = @p2;"
    );
    assert_eq!(
        render(Dialect::Oracle).sql,
        r#"SELECT * FROM "users" "User" WHERE "User"."name" = :1 AND "User"."age" = :2;"#
    );
    assert_eq!(
        render(Dialect::Oracle).params,
        vec![Value::String("a".into()), Value::Int(2)]
    );
}
