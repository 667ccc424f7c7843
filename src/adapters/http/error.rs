//! Error bodies and status mapping shared by every resource.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ServiceError;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("INVALID_INPUT", message)
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let message = match err {
            ServiceError::InvalidInput(msg)
            | ServiceError::DataNotFound(msg)
            | ServiceError::ConflictingData(msg) => msg.clone(),
            ServiceError::NoUpdatedData => "no data to update".to_string(),
            ServiceError::Internal => "internal server error".to_string(),
        };
        Self::new(err.code(), message)
    }
}

/// Status code a service failure is reported with.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidInput(_) | ServiceError::NoUpdatedData => StatusCode::BAD_REQUEST,
        ServiceError::DataNotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::ConflictingData(_) => StatusCode::CONFLICT,
        ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn service_error_response(err: ServiceError) -> Response {
    (status_for(&err), Json(ErrorResponse::from(&err))).into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

/// Parses the `:id` path segment. Range checks happen in the services.
pub fn parse_path_id(raw: &str) -> Result<i64, Response> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| bad_request(format!("invalid id: {}", raw)))
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    bad_request(rejection.body_text())
}

pub fn query_rejection(rejection: QueryRejection) -> Response {
    bad_request(rejection.body_text())
}
