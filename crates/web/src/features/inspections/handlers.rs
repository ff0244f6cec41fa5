use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{Database, dto::inspection::InspectionSubmission};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/inspections",
    request_body = InspectionSubmission,
    responses(
        (status = 201, description = "Inspection scored and stored"),
        (status = 400, description = "Invalid checklist"),
        (status = 404, description = "Cadet not found")
    ),
    tag = "inspections"
)]
pub async fn submit_inspection(
    State(db): State<Database>,
    Json(payload): Json<InspectionSubmission>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let inspection_id = services::submit_inspection(&db, &payload).await?;
    Ok((StatusCode::CREATED, Json(json!({ "inspection_id": inspection_id }))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/inspections/{cap_id}",
    responses(
        (status = 200, description = "Inspections listed", body = [storage::models::Inspection]),
        (status = 404, description = "Cadet not found")
    ),
    tag = "inspections"
)]
pub async fn list_cadet_inspections(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    let inspections = services::list_cadet_inspections(&db, cap_id).await?;
    Ok(Json(inspections).into_response())
}

#[utoipa::path(
    get,
    path = "/api/inspections/{cap_id}/{date}",
    responses(
        (status = 200, description = "Inspection found", body = storage::dto::inspection::InspectionDetailResponse),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No inspection for that cadet and date")
    ),
    tag = "inspections"
)]
pub async fn get_inspection(
    State(db): State<Database>,
    Path((cap_id, date)): Path<(i64, String)>,
) -> Result<Response, WebError> {
    let detail = services::get_inspection(&db, cap_id, &date).await?;
    Ok(Json(detail).into_response())
}
