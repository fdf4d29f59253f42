use crate::transpiler::dialect::*;

pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor {
        name: "snowflake".to_string(),
        identifier_quote: ('"', '"'),
        boolean_style: BooleanStyle::Native,
        string_prefix: None,
        backslash_escapes: false,
        pagination: PaginationStyle::LimitOffset,
        offset_only_limit: None,
        table_alias_as: true,
        not_equal: "!=".to_string(),
        case_insensitive_like: CaseInsensitiveLike::Native,
        placeholder: PlaceholderStyle::Question,
    }
}
