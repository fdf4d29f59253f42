//! Model and dialect configuration.
//!
//! ```toml
//! default_dialect = "mssql"
//!
//! [[models]]
//! name = "User"
//! table = "users"
//! primary_key = "id"
//! columns = [
//!     { name = "id", type = "integer" },
//!     { name = "email", type = "string" },
//! ]
//!
//! [[dialects]]
//! name = "legacy"
//! identifier_quote = ["[", "]"]
//! boolean_style = "integer"
//! pagination = "offset_fetch"
//! case_insensitive_like = "unsupported"
//! placeholder = "question"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SqlweaveError, SqlweaveResult};
use crate::model::{ColumnDef, ModelDescriptor};
use crate::transpiler::{Dialect, DialectDescriptor};

/// One `[[models]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub name: String,
    pub table: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub primary_key: Option<String>,
    pub columns: Vec<ColumnDef>,
}

impl ModelConfig {
    pub fn build(&self) -> SqlweaveResult<ModelDescriptor> {
        let mut builder = ModelDescriptor::builder(&self.name, &self.table)
            .columns(self.columns.iter().cloned());
        if let Some(alias) = &self.alias {
            builder = builder.alias(alias);
        }
        if let Some(pk) = &self.primary_key {
            builder = builder.primary_key(pk);
        }
        builder.build()
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dialect used when none is requested (defaults to postgres)
    #[serde(default)]
    pub default_dialect: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelConfig>,
    /// Custom dialects, addressable by name next to the built-in ones
    #[serde(default)]
    pub dialects: Vec<DialectDescriptor>,
}

impl Config {
    /// `<config dir>/sqlweave/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sqlweave").join("config.toml"))
    }

    pub fn from_toml_str(text: &str) -> SqlweaveResult<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| SqlweaveError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SqlweaveResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| SqlweaveError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `path` if given, otherwise the default file if it exists,
    /// otherwise an empty configuration.
    pub fn load_or_default(path: Option<&Path>) -> SqlweaveResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => {
                tracing::debug!("loading config from {}", default.display());
                Self::load(&default)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> SqlweaveResult<()> {
        for (i, d) in self.dialects.iter().enumerate() {
            if d.name.parse::<Dialect>().is_ok() {
                return Err(SqlweaveError::Config(format!(
                    "dialect '{}' shadows a built-in dialect",
                    d.name
                )));
            }
            if self.dialects[..i].iter().any(|other| other.name == d.name) {
                return Err(SqlweaveError::Config(format!(
                    "dialect '{}' is defined twice",
                    d.name
                )));
            }
        }
        for (i, m) in self.models.iter().enumerate() {
            if self.models[..i].iter().any(|other| other.name == m.name) {
                return Err(SqlweaveError::Config(format!(
                    "model '{}' is defined twice",
                    m.name
                )));
            }
            m.build()?;
        }
        if let Some(name) = &self.default_dialect {
            self.dialect(Some(name))?;
        }
        Ok(())
    }

    /// Resolve a dialect by name: built-ins first, then custom entries.
    /// `None` falls back to `default_dialect`, then postgres.
    pub fn dialect(&self, name: Option<&str>) -> SqlweaveResult<DialectDescriptor> {
        let Some(name) = name.or(self.default_dialect.as_deref()) else {
            return Ok(Dialect::default().descriptor());
        };
        if let Ok(builtin) = name.parse::<Dialect>() {
            return Ok(builtin.descriptor());
        }
        self.dialects
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| SqlweaveError::Config(format!("unknown dialect '{}'", name)))
    }

    pub fn model(&self, name: &str) -> SqlweaveResult<ModelDescriptor> {
        self.models
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| SqlweaveError::Config(format!("unknown model '{}'", name)))?
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::{CaseInsensitiveLike, PaginationStyle};

    const SAMPLE: &str = r#"
default_dialect = "legacy"

[[models]]
name = "User"
table = "users"
columns = [
    { name = "id", type = "integer" },
    { name = "active", type = "boolean" },
]

[[dialects]]
name = "legacy"
identifier_quote = ["[", "]"]
boolean_style = "integer"
not_equal = "<>"
pagination = "offset_fetch"
case_insensitive_like = "unsupported"
placeholder = "question"
"#;

    #[test]
    fn test_load_sample() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let model = config.model("User").unwrap();
        assert_eq!(model.table_name(), "users");
        assert_eq!(model.alias(), "User");

        let legacy = config.dialect(None).unwrap();
        assert_eq!(legacy.name, "legacy");
        assert_eq!(legacy.pagination, PaginationStyle::OffsetFetch);
        assert_eq!(legacy.case_insensitive_like, CaseInsensitiveLike::Unsupported);

        assert_eq!(config.dialect(Some("mysql")).unwrap().name, "mysql");
    }

    #[test]
    fn test_empty_config_defaults_to_postgres() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.dialect(None).unwrap().name, "postgres");
        assert!(config.model("User").is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = Config::from_toml_str("defualt_dialect = \"pg\"").unwrap_err();
        assert!(matches!(err, SqlweaveError::Config(_)));
    }

    #[test]
    fn test_shadowing_builtin_rejected() {
        let text = SAMPLE.replace("name = \"legacy\"", "name = \"postgres\"");
        let err = Config::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("shadows a built-in"));
    }

    #[test]
    fn test_invalid_model_rejected() {
        let text = r#"
[[models]]
name = "Empty"
table = "empty"
columns = []
"#;
        let err = Config::from_toml_str(text).unwrap_err();
        assert!(matches!(err, SqlweaveError::InvalidModel { .. }));
    }
}
