//! Shared HTTP building blocks: response envelope, error mapping, extractors

mod api_response;
mod validated_json;

pub use api_response::{error_response, status_for, ApiError, ApiResponse};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
