use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::TollService;
use crate::interfaces::http::common::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct InterchangeDto {
    pub name: String,
    /// Kilometres from "Zero point"
    pub distance: f64,
}

#[utoipa::path(
    get,
    path = "/api/v1/interchanges",
    tag = "Interchanges",
    responses(
        (status = 200, description = "All stations in motorway order", body = ApiResponse<Vec<InterchangeDto>>)
    )
)]
pub async fn list_interchanges(
    State(tolls): State<Arc<TollService>>,
) -> Json<ApiResponse<Vec<InterchangeDto>>> {
    let list = tolls
        .interchanges()
        .iter()
        .map(|i| InterchangeDto {
            name: i.name.to_string(),
            distance: i.distance_km,
        })
        .collect();

    Json(ApiResponse::success(list))
}
