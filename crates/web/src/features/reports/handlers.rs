use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::report::{CreateReportRequest, UpdateReportRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Reports listed", body = [storage::models::Report])
    ),
    tag = "reports"
)]
pub async fn list_reports(State(db): State<Database>) -> Result<Response, WebError> {
    let reports = services::list_reports(db.pool()).await?;
    Ok(Json(reports).into_response())
}

#[utoipa::path(
    get,
    path = "/api/reports/cadet/{cap_id}",
    responses(
        (status = 200, description = "Reports for the cadet", body = [storage::models::Report]),
        (status = 404, description = "Cadet not found")
    ),
    tag = "reports"
)]
pub async fn list_cadet_reports(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    let reports = services::list_cadet_reports(db.pool(), cap_id).await?;
    Ok(Json(reports).into_response())
}

#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report filed", body = storage::models::Report),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Cadet not found")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(db): State<Database>,
    Json(payload): Json<CreateReportRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let report = services::create_report(db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(report)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/reports/{report_id}",
    request_body = UpdateReportRequest,
    responses(
        (status = 200, description = "Report updated", body = storage::models::Report),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn update_report(
    State(db): State<Database>,
    Path(report_id): Path<Uuid>,
    Json(payload): Json<UpdateReportRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let report = services::update_report(db.pool(), report_id, &payload).await?;
    Ok(Json(report).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/reports/{report_id}",
    responses(
        (status = 204, description = "Report deleted"),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn delete_report(
    State(db): State<Database>,
    Path(report_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_report(db.pool(), report_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
