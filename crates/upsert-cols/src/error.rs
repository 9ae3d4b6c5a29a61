//! Error types for upsert-cols

use thiserror::Error;

/// Result type alias for upsert-cols operations
pub type UpsertResult<T> = Result<T, UpsertError>;

/// Error types for table definitions and column selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpsertError {
    /// A column handle or name does not belong to the table
    #[error("Column not found: '{column}' is not a column of table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// A table definition declares the same column twice
    #[error("Duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// The dialect infers the conflict target itself
    #[error("{dialect} does not accept an explicit conflict target")]
    TargetNotSupported { dialect: &'static str },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl UpsertError {
    /// Create a column-not-found error
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a column-not-found error
    pub fn is_column_not_found(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. })
    }
}
