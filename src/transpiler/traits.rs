//! Literal and identifier encoding.

use crate::ast::{TIMESTAMP_FORMAT, Value};
use crate::error::{SqlweaveError, SqlweaveResult};
use crate::transpiler::dialect::{
    BooleanStyle, CaseInsensitiveLike, DialectDescriptor, PaginationStyle, PlaceholderStyle,
};

/// Wrap an identifier in the given quote pair, doubling any embedded closing quote.
pub fn escape_identifier(name: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(open);
    for c in name.chars() {
        if c == close {
            out.push(close);
        }
        out.push(c);
    }
    out.push(close);
    out
}

/// Trait for dialect-specific SQL encoding.
///
/// Every piece of dialect variance the compiler needs is reachable through
/// this trait. Implementations must be pure: the same input always encodes
/// to the same text.
pub trait SqlGenerator {
    /// Dialect name used in error messages.
    fn dialect_name(&self) -> &str;
    /// Quote a single identifier part (table, alias or column name).
    fn quote_identifier(&self, name: &str) -> String;
    /// Quote and escape a string literal.
    fn string_literal(&self, value: &str) -> String;
    /// Get the boolean literal (true/false vs 1/0).
    fn bool_literal(&self, val: bool) -> String;
    /// Inequality operator (`!=` or `<>`).
    fn not_equal_operator(&self) -> &str;
    fn case_insensitive_like(&self) -> CaseInsensitiveLike;
    /// Generate the parameter placeholder (e.g., $1, ?, @p1) for a 1-based index.
    fn placeholder(&self, index: usize) -> String;
    fn pagination_style(&self) -> PaginationStyle;
    /// LIMIT value required before a lone OFFSET, if the dialect needs one.
    fn offset_only_limit(&self) -> Option<&str>;
    /// Whether `AS` separates a table from its alias.
    fn table_alias_as(&self) -> bool;

    /// `<table> [AS] <alias>`, both quoted.
    fn table_reference(&self, table: &str, alias: &str) -> String {
        let keyword = if self.table_alias_as() { " AS " } else { " " };
        format!(
            "{}{}{}",
            self.quote_identifier(table),
            keyword,
            self.quote_identifier(alias)
        )
    }

    /// Quote a dotted path (`schema.table`, `alias.column`) part by part.
    fn quote_path(&self, path: &str) -> String {
        path.split('.')
            .map(|part| self.quote_identifier(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quote a column reference, qualifying it with `alias` unless it already
    /// names its own qualifier.
    fn quote_column(&self, alias: &str, column: &str) -> String {
        if column.contains('.') {
            self.quote_path(column)
        } else {
            format!(
                "{}.{}",
                self.quote_identifier(alias),
                self.quote_identifier(column)
            )
        }
    }

    /// Encode a scalar value as a SQL literal.
    fn literal(&self, value: &Value) -> SqlweaveResult<String> {
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(b) => Ok(self.bool_literal(*b)),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(n) if n.is_finite() => Ok(n.to_string()),
            Value::Float(n) => Err(SqlweaveError::predicate(format!(
                "{} has no SQL literal form",
                n
            ))),
            Value::String(s) => Ok(self.string_literal(s)),
            Value::Timestamp(ts) => {
                Ok(self.string_literal(&ts.format(TIMESTAMP_FORMAT).to_string()))
            }
        }
    }

    /// Encode a value set as `(v1, v2, ...)`.
    fn literal_list(&self, values: &[Value]) -> SqlweaveResult<String> {
        if values.is_empty() {
            return Err(SqlweaveError::predicate("value list is empty"));
        }
        let encoded = values
            .iter()
            .map(|v| self.literal(v))
            .collect::<SqlweaveResult<Vec<_>>>()?;
        Ok(format!("({})", encoded.join(", ")))
    }

    /// Pagination clause with a leading space, or an empty string.
    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        match self.pagination_style() {
            PaginationStyle::LimitOffset => {
                match (limit, offset, self.offset_only_limit()) {
                    (Some(n), _, _) => sql.push_str(&format!(" LIMIT {}", n)),
                    (None, Some(_), Some(all)) => sql.push_str(&format!(" LIMIT {}", all)),
                    _ => {}
                }
                if let Some(n) = offset {
                    sql.push_str(&format!(" OFFSET {}", n));
                }
            }
            PaginationStyle::OffsetFetch => {
                // No limit-only form exists, so the offset defaults to zero.
                if limit.is_some() || offset.is_some() {
                    sql.push_str(&format!(" OFFSET {} ROWS", offset.unwrap_or(0)));
                    if let Some(n) = limit {
                        sql.push_str(&format!(" FETCH NEXT {} ROWS ONLY", n));
                    }
                }
            }
        }
        sql
    }
}

impl SqlGenerator for DialectDescriptor {
    fn dialect_name(&self) -> &str {
        &self.name
    }

    fn quote_identifier(&self, name: &str) -> String {
        let (open, close) = self.identifier_quote;
        escape_identifier(name, open, close)
    }

    fn string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 3);
        if let Some(prefix) = &self.string_prefix {
            out.push_str(prefix);
        }
        out.push('\'');
        for c in value.chars() {
            match c {
                '\'' => out.push_str("''"),
                '\\' if self.backslash_escapes => out.push_str("\\\\"),
                c => out.push(c),
            }
        }
        out.push('\'');
        out
    }

    fn bool_literal(&self, val: bool) -> String {
        match (self.boolean_style, val) {
            (BooleanStyle::Native, true) => "true".to_string(),
            (BooleanStyle::Native, false) => "false".to_string(),
            (BooleanStyle::Integer, true) => "1".to_string(),
            (BooleanStyle::Integer, false) => "0".to_string(),
        }
    }

    fn not_equal_operator(&self) -> &str {
        &self.not_equal
    }

    fn case_insensitive_like(&self) -> CaseInsensitiveLike {
        self.case_insensitive_like
    }

    fn placeholder(&self, index: usize) -> String {
        match self.placeholder {
            PlaceholderStyle::Dollar => format!("${}", index),
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::AtSign => format!("@p{}", index),
            PlaceholderStyle::Colon => format!(":{}", index),
        }
    }

    fn pagination_style(&self) -> PaginationStyle {
        self.pagination
    }

    fn offset_only_limit(&self) -> Option<&str> {
        self.offset_only_limit.as_deref()
    }

    fn table_alias_as(&self) -> bool {
        self.table_alias_as
    }
}
