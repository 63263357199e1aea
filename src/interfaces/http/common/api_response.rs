//! Standard API response envelope

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Wrapper for every REST response.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler's `Result`.
pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::MissingField(_)
        | DomainError::UnknownInterchange(_)
        | DomainError::InvalidGateInterchange { .. }
        | DomainError::InvalidNumberPlate(_)
        | DomainError::InvalidTimestamp(_)
        | DomainError::InvalidTimeOrdering
        | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::DuplicateEntry(_) | DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::NoOpenEntry(_) => StatusCode::NOT_FOUND,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain error onto its status code and envelope.
pub fn error_response<T>(err: DomainError) -> ApiError<T> {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }
    (status, Json(ApiResponse::error(err.to_string())))
}
