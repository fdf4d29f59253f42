//! Model metadata consumed by the compiler.

use serde::{Deserialize, Serialize};

use crate::error::{SqlweaveError, SqlweaveResult};

/// Logical column type as declared by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    BigInt,
    Float,
    Decimal,
    String,
    Text,
    Boolean,
    Date,
    DateTime,
    Json,
    Uuid,
    Blob,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "bigint",
            ColumnType::Float => "float",
            ColumnType::Decimal => "decimal",
            ColumnType::String => "string",
            ColumnType::Text => "text",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Json => "json",
            ColumnType::Uuid => "uuid",
            ColumnType::Blob => "blob",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

/// Table metadata for one model.
///
/// Construct through [`ModelDescriptor::builder`], which enforces that the
/// column list is non-empty and contains the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    name: String,
    table_name: String,
    alias: String,
    columns: Vec<ColumnDef>,
    primary_key: String,
}

impl ModelDescriptor {
    pub fn builder(name: impl Into<String>, table_name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Alias used in `FROM <table> AS <alias>`; defaults to the model name.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Default ORDER BY key for paginated queries.
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Builder for [`ModelDescriptor`].
#[derive(Debug, Default)]
pub struct ModelBuilder {
    name: String,
    table_name: String,
    alias: Option<String>,
    columns: Vec<ColumnDef>,
    primary_key: Option<String>,
}

impl ModelBuilder {
    /// Set the alias (defaults to the model name)
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Append a column
    pub fn column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.push(ColumnDef {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Set the primary key column (defaults to `id`)
    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    /// Validate and build the descriptor
    pub fn build(self) -> SqlweaveResult<ModelDescriptor> {
        let name = self.name;
        if name.is_empty() {
            return Err(SqlweaveError::model("", "model name is empty"));
        }
        if self.table_name.is_empty() {
            return Err(SqlweaveError::model(name, "table name is empty"));
        }
        if self.columns.is_empty() {
            return Err(SqlweaveError::model(name, "at least one column is required"));
        }
        for (i, col) in self.columns.iter().enumerate() {
            if col.name.is_empty() {
                return Err(SqlweaveError::model(name, format!("column #{} has no name", i + 1)));
            }
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(SqlweaveError::model(
                    name,
                    format!("column '{}' is declared twice", col.name),
                ));
            }
        }
        let primary_key = self.primary_key.unwrap_or_else(|| "id".to_string());
        if !self.columns.iter().any(|c| c.name == primary_key) {
            return Err(SqlweaveError::model(
                name,
                format!("primary key '{}' is not a declared column", primary_key),
            ));
        }
        let alias = match self.alias {
            Some(a) if !a.is_empty() => a,
            _ => name.clone(),
        };

        Ok(ModelDescriptor {
            name,
            table_name: self.table_name,
            alias,
            columns: self.columns,
            primary_key,
        })
    }
}
