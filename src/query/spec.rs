use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::ast::SortOrder;
use crate::error::{SqlweaveError, SqlweaveResult};
use crate::query::QueryBuilder;

/// Keeps an explicit `null` distinguishable from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

/// Typed option bag for a SELECT, as read from JSON.
///
/// ```json
/// { "attributes": ["id", "email"], "where": { "active": true },
///   "order": [["created_at", "DESC"]], "limit": 10, "offset": 20 }
/// ```
///
/// Unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySpec {
    #[serde(default)]
    pub attributes: Option<Vec<String>>,
    #[serde(rename = "where", default, deserialize_with = "present")]
    pub filter: Option<JsonValue>,
    #[serde(default)]
    pub order: Option<Vec<(String, SortOrder)>>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl QuerySpec {
    pub fn from_json(text: &str) -> SqlweaveResult<Self> {
        serde_json::from_str(text).map_err(|e| SqlweaveError::InvalidQuery(e.to_string()))
    }

    /// Apply to a fresh `select()` of `builder`.
    pub fn apply(&self, builder: &QueryBuilder) -> SqlweaveResult<QueryBuilder> {
        let mut q = builder.select();
        if let Some(attrs) = &self.attributes {
            q = q.attributes(attrs.iter().map(String::as_str));
        }
        if let Some(filter) = &self.filter {
            q = q.filter_json(filter)?;
        }
        for (column, order) in self.order.iter().flatten() {
            q = q.order_by(column.as_str(), *order);
        }
        if let Some(n) = self.limit {
            q = q.limit(n);
        }
        if let Some(n) = self.offset {
            q = q.offset(n);
        }
        Ok(q)
    }
}
