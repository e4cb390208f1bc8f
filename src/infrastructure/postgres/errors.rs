use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::repositories::errors::StorageError;

impl From<DieselError> for StorageError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => StorageError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                StorageError::UniquenessViolation(constraint_name(info.constraint_name()))
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                StorageError::ReferenceViolation(constraint_name(info.constraint_name()))
            }
            other => StorageError::Internal(other.into()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for StorageError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        StorageError::Internal(anyhow::Error::new(err).context("checking out a pooled connection"))
    }
}

fn constraint_name(name: Option<&str>) -> String {
    name.unwrap_or("unknown").to_string()
}
