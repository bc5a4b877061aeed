//! Error types for cart operations.
//!
//! Reads never fail: a missing or corrupt cart degrades to an empty one. Only
//! writes surface errors, and only when the storage medium itself fails.

use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::Storage(StorageError::Poisoned);
        assert_eq!(err.to_string(), "Storage error: storage lock poisoned");
    }

    #[test]
    fn test_storage_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: CartError = StorageError::from(io).into();
        assert!(matches!(err, CartError::Storage(StorageError::Io(_))));
    }
}
