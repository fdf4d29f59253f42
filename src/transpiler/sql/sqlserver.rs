use crate::transpiler::dialect::*;

/// SQL Server (T-SQL).
///
/// String literals carry the `N` prefix so comparisons against NVARCHAR
/// columns keep Unicode semantics. Pagination is `OFFSET .. FETCH`, which
/// requires an ORDER BY; the assembler always provides one.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor {
        name: "mssql".to_string(),
        identifier_quote: ('[', ']'),
        boolean_style: BooleanStyle::Integer,
        string_prefix: Some("N".to_string()),
        backslash_escapes: false,
        pagination: PaginationStyle::OffsetFetch,
        offset_only_limit: None,
        table_alias_as: true,
        not_equal: "<>".to_string(),
        case_insensitive_like: CaseInsensitiveLike::LowerFold,
        placeholder: PlaceholderStyle::AtSign,
    }
}
