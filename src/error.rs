//! Error types for sqlweave.

use thiserror::Error;

use crate::ast::Operator;

/// The main error type for sqlweave operations.
///
/// Compilation errors are caller mistakes: they are reported synchronously
/// and a failed compilation never yields partial SQL.
#[derive(Debug, Error)]
pub enum SqlweaveError {
    /// Rendering was requested before `select()` was called.
    #[error("Query for model '{model}' is not in select mode; call select() before rendering")]
    NotInSelectMode { model: String },

    /// Attributes were explicitly set to an empty list.
    #[error("Empty projection for model '{model}' (alias '{alias}'): at least one attribute is required")]
    EmptyProjection { model: String, alias: String },

    /// The predicate is structurally invalid.
    #[error("Invalid predicate: {0}")]
    InvalidPredicate(String),

    /// The active dialect has no rendering rule for an operator.
    #[error("Operator '{operator}' is not supported by the {dialect} dialect")]
    UnsupportedOperatorForDialect { operator: Operator, dialect: String },

    /// The model descriptor violates its invariants.
    #[error("Invalid model '{model}': {message}")]
    InvalidModel { model: String, message: String },

    /// A query spec could not be decoded.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlweaveError {
    /// Create an invalid predicate error.
    pub fn predicate(message: impl Into<String>) -> Self {
        Self::InvalidPredicate(message.into())
    }

    /// Create an invalid model error.
    pub fn model(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidModel {
            model: model.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for sqlweave operations.
pub type SqlweaveResult<T> = Result<T, SqlweaveError>;
