use crate::transpiler::dialect::*;

pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor {
        name: "sqlite".to_string(),
        identifier_quote: ('"', '"'),
        boolean_style: BooleanStyle::Integer,
        string_prefix: None,
        backslash_escapes: false,
        pagination: PaginationStyle::LimitOffset,
        offset_only_limit: Some("-1".to_string()),
        table_alias_as: true,
        not_equal: "!=".to_string(),
        case_insensitive_like: CaseInsensitiveLike::LowerFold,
        placeholder: PlaceholderStyle::Question,
    }
}
