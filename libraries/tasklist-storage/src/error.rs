/// Storage-specific errors
use std::path::PathBuf;
use tasklist_core::CoreError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document exists but is not a valid task list document
    #[error("Document {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Refused to overwrite an existing document
    #[error("Document {} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Domain-level failure (not found, invalid patch)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Core(inner) => inner,
            other => CoreError::storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: CoreError = StorageError::Core(CoreError::not_found("Task", 1)).into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_errors_become_storage() {
        let err: CoreError = StorageError::AlreadyExists(PathBuf::from("db.json")).into();
        assert!(matches!(err, CoreError::Storage(msg) if msg.contains("db.json")));
    }
}
