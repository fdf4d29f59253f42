use serde::{Deserialize, Serialize};

use crate::error::SqlweaveError;
use crate::transpiler::sql::{mariadb, mysql, oracle, postgres, snowflake, sqlite, sqlserver};

/// How boolean literals are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanStyle {
    /// `true` / `false`
    Native,
    /// `1` / `0`
    Integer,
}

/// Shape of the pagination clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
    /// `LIMIT n OFFSET m`
    LimitOffset,
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`
    OffsetFetch,
}

/// How a case-insensitive pattern match is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseInsensitiveLike {
    /// Native `ILIKE`.
    Native,
    /// `LOWER(col) LIKE LOWER(pattern)`.
    LowerFold,
    /// No rendering; compilation fails.
    Unsupported,
}

/// Bind parameter placeholder syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `$1`, `$2`
    Dollar,
    /// `?`
    Question,
    /// `@p1`, `@p2`
    AtSign,
    /// `:1`, `:2`
    Colon,
}

fn default_not_equal() -> String {
    "!=".to_string()
}

fn default_true() -> bool {
    true
}

/// Data-only description of one database family's SQL surface.
///
/// Everything that varies between dialects lives here; the predicate compiler
/// and statement assembler only consult these fields through
/// [`SqlGenerator`](crate::transpiler::SqlGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectDescriptor {
    pub name: String,
    /// Opening and closing identifier quote characters.
    pub identifier_quote: (char, char),
    pub boolean_style: BooleanStyle,
    /// Prefix placed before every string literal (e.g. `N` on SQL Server).
    #[serde(default)]
    pub string_prefix: Option<String>,
    /// Whether backslash is an escape character inside string literals.
    #[serde(default)]
    pub backslash_escapes: bool,
    pub pagination: PaginationStyle,
    /// LIMIT emitted when only an offset is requested, for dialects without a
    /// bare `OFFSET` clause (`-1` on SQLite, `18446744073709551615` on MySQL).
    #[serde(default)]
    pub offset_only_limit: Option<String>,
    /// Whether `AS` is written between a table and its alias (Oracle rejects it).
    #[serde(default = "default_true")]
    pub table_alias_as: bool,
    #[serde(default = "default_not_equal")]
    pub not_equal: String,
    pub case_insensitive_like: CaseInsensitiveLike,
    pub placeholder: PlaceholderStyle,
}

/// Built-in SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Postgres,
    MySql,
    MariaDb,
    Sqlite,
    SqlServer,
    Oracle,
    Snowflake,
}

impl Dialect {
    pub const ALL: [Dialect; 7] = [
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Sqlite,
        Dialect::SqlServer,
        Dialect::Oracle,
        Dialect::Snowflake,
    ];

    pub fn descriptor(&self) -> DialectDescriptor {
        match self {
            Dialect::Postgres => postgres::descriptor(),
            Dialect::MySql => mysql::descriptor(),
            Dialect::MariaDb => mariadb::descriptor(),
            Dialect::Sqlite => sqlite::descriptor(),
            Dialect::SqlServer => sqlserver::descriptor(),
            Dialect::Oracle => oracle::descriptor(),
            Dialect::Snowflake => snowflake::descriptor(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::MariaDb => "mariadb",
            Dialect::Sqlite => "sqlite",
            Dialect::SqlServer => "mssql",
            Dialect::Oracle => "oracle",
            Dialect::Snowflake => "snowflake",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Dialect {
    type Err = SqlweaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "mariadb" => Ok(Dialect::MariaDb),
            "sqlite" => Ok(Dialect::Sqlite),
            "mssql" | "sqlserver" => Ok(Dialect::SqlServer),
            "oracle" => Ok(Dialect::Oracle),
            "snowflake" => Ok(Dialect::Snowflake),
            other => Err(SqlweaveError::Config(format!("unknown dialect '{}'", other))),
        }
    }
}

impl From<Dialect> for DialectDescriptor {
    fn from(d: Dialect) -> Self {
        d.descriptor()
    }
}

impl From<Dialect> for std::sync::Arc<DialectDescriptor> {
    fn from(d: Dialect) -> Self {
        std::sync::Arc::new(d.descriptor())
    }
}
