use thiserror::Error;

/// Failures surfaced by repository implementations. Constraint violations
/// are permanent and are never retried.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unique constraint violated: {0}")]
    UniquenessViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ReferenceViolation(String),
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
