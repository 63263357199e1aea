//! Entry/exit gate handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{EntryResponse, ExitResponse, GateRequest};
use crate::application::TollService;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct TollHandlerState {
    pub tolls: Arc<TollService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/entry",
    tag = "Tolls",
    security(("bearer_auth" = [])),
    request_body = GateRequest,
    responses(
        (status = 201, description = "Vehicle entry recorded", body = ApiResponse<EntryResponse>),
        (status = 400, description = "Missing field, unknown interchange, bad plate or date"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Vehicle already entered")
    )
)]
pub async fn record_entry(
    State(state): State<TollHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<GateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EntryResponse>>), ApiError<EntryResponse>> {
    let entry = state
        .tolls
        .record_entry(request.into(), Some(&user.interchange))
        .await
        .map_err(error_response)?;

    let response = EntryResponse {
        message: "Vehicle entry recorded successfully.".to_string(),
        entry: entry.into(),
    };
    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))))
}

#[utoipa::path(
    post,
    path = "/api/v1/exit",
    tag = "Tolls",
    security(("bearer_auth" = [])),
    request_body = GateRequest,
    responses(
        (status = 200, description = "Toll calculated, trip closed", body = ApiResponse<ExitResponse>),
        (status = 400, description = "Invalid request or exit before entry"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No open entry for the plate")
    )
)]
pub async fn record_exit(
    State(state): State<TollHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<GateRequest>,
) -> Result<Json<ApiResponse<ExitResponse>>, ApiError<ExitResponse>> {
    let receipt = state
        .tolls
        .record_exit(request.into(), Some(&user.interchange))
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(receipt.into())))
}
