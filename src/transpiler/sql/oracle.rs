use crate::transpiler::dialect::*;

/// Oracle 12c+ (`OFFSET .. FETCH` row limiting, no `AS` before table aliases).
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor {
        name: "oracle".to_string(),
        identifier_quote: ('"', '"'),
        boolean_style: BooleanStyle::Integer,
        string_prefix: None,
        backslash_escapes: false,
        pagination: PaginationStyle::OffsetFetch,
        offset_only_limit: None,
        table_alias_as: false,
        not_equal: "<>".to_string(),
        case_insensitive_like: CaseInsensitiveLike::LowerFold,
        placeholder: PlaceholderStyle::Colon,
    }
}
