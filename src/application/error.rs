//! Service-boundary failure surface.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Every failure a service operation can report to its caller.
///
/// Storage detail never crosses this boundary: anything other than a
/// not-found or a unique-key clash is logged and collapsed into
/// [`ServiceError::Internal`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("data not found: {0}")]
    DataNotFound(String),

    #[error("conflicting data: {0}")]
    ConflictingData(String),

    #[error("no data to update")]
    NoUpdatedData,

    #[error("internal error")]
    Internal,
}

impl ServiceError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ServiceError::InvalidInput(message.into())
    }

    pub fn not_found(entity: &str, id: i64) -> Self {
        ServiceError::DataNotFound(format!("{} not found: {}", entity, id))
    }

    /// Stable machine-readable code for the transport.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidInput(_) => "INVALID_INPUT",
            ServiceError::DataNotFound(_) => "DATA_NOT_FOUND",
            ServiceError::ConflictingData(_) => "CONFLICTING_DATA",
            ServiceError::NoUpdatedData => "NO_UPDATED_DATA",
            ServiceError::Internal => "INTERNAL",
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => ServiceError::DataNotFound(err.message),
            ErrorCode::Conflict => ServiceError::ConflictingData(err.message),
            _ => {
                tracing::error!(code = %err.code, error = %err.message, "storage failure");
                ServiceError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_passes_through() {
        let err: ServiceError = DomainError::not_found("person", 7).into();
        assert_eq!(err, ServiceError::DataNotFound("person not found: 7".to_string()));
    }

    #[test]
    fn conflict_passes_through() {
        let err: ServiceError = DomainError::conflict("email already in use").into();
        assert!(matches!(err, ServiceError::ConflictingData(_)));
        assert_eq!(err.code(), "CONFLICTING_DATA");
    }

    #[test]
    fn database_errors_are_flattened() {
        let err: ServiceError = DomainError::database("connection reset by peer").into();
        assert_eq!(err, ServiceError::Internal);
        assert!(!err.to_string().contains("connection"));
    }

    #[test]
    fn validation_errors_become_invalid_input() {
        let err: ServiceError = ValidationError::empty_field("name").into();
        assert!(matches!(err, ServiceError::InvalidInput(ref m) if m.contains("name")));
    }
}
