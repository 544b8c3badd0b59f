//! Error types for port operations.

/// Failures reading from the remote data source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The identifier has no corresponding remote resource.
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// Transport failure or non-2xx status unrelated to identity.
    #[error("Transient source failure: {0}")]
    Transient(String),

    /// The resource arrived but could not be decoded.
    #[error("Malformed {resource}: {message}")]
    Malformed {
        resource: &'static str,
        message: String,
    },
}

impl SourceError {
    pub fn not_found(resource: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    pub fn transient(message: impl ToString) -> Self {
        Self::Transient(message.to_string())
    }

    pub fn malformed(resource: &'static str, message: impl ToString) -> Self {
        Self::Malformed {
            resource,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Durable store operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored row could not be read back.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}
