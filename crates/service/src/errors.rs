use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Which part of a request failed validation. `code()` is the stable
/// identifier sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    UnknownResource,
    InvalidPage,
    InvalidPageSize,
    InvalidQuery,
    InvalidBody,
}

impl ValidationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationKind::UnknownResource => "unknown_resource",
            ValidationKind::InvalidPage => "invalid_page",
            ValidationKind::InvalidPageSize => "invalid_page_size",
            ValidationKind::InvalidQuery => "invalid_query",
            ValidationKind::InvalidBody => "invalid_body",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Record store failures. Listing is read-only, so callers may retry any of these.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store timed out after {0:?}")]
    Timeout(Duration),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("record store query failed: {0}")]
    Query(String),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        use sea_orm::DbErr;
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unavailable(e.to_string()),
            _ => StoreError::Query(e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{kind}: {message}")]
    Validation { kind: ValidationKind, message: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn validation(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self::Validation { kind, message: message.into() }
    }

    pub fn unknown_resource(name: &str) -> Self {
        Self::validation(ValidationKind::UnknownResource, format!("unknown resource '{name}'"))
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::validation(ValidationKind::InvalidBody, msg),
            models::errors::ModelError::Db(db) => Self::Store(db.into()),
        }
    }
}
