//! Error types for directory operations.
//!
//! Authentication and delegated deletion are the only fallible
//! operations; everything else on the directory is total over its
//! input domain.

/// Main error type for directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// A credential required for authentication was not supplied.
    #[error("missing credential: {field} is required")]
    MissingCredential { field: &'static str },

    /// The directory was constructed without a record store, so
    /// deletion cannot be delegated anywhere.
    #[error("no record store configured, deletion is unavailable")]
    StoreUnavailable,
}

impl DirectoryError {
    /// Create a missing credential error for the named field.
    pub fn missing_credential(field: &'static str) -> Self {
        Self::MissingCredential { field }
    }
}

/// Result type alias for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
