use crate::transpiler::dialect::*;

/// MySQL.
///
/// Backslash is an escape character in string literals unless
/// `NO_BACKSLASH_ESCAPES` is set, so it is doubled.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor {
        name: "mysql".to_string(),
        identifier_quote: ('`', '`'),
        boolean_style: BooleanStyle::Integer,
        string_prefix: None,
        backslash_escapes: true,
        pagination: PaginationStyle::LimitOffset,
        offset_only_limit: Some("18446744073709551615".to_string()),
        table_alias_as: true,
        not_equal: "!=".to_string(),
        case_insensitive_like: CaseInsensitiveLike::LowerFold,
        placeholder: PlaceholderStyle::Question,
    }
}
