use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::position::{AssignPositionRequest, CreatePositionRequest, UpdatePositionRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/positions",
    responses(
        (status = 200, description = "Positions listed", body = [storage::models::Position])
    ),
    tag = "positions"
)]
pub async fn list_positions(State(db): State<Database>) -> Result<Response, WebError> {
    let positions = services::list_positions(db.pool()).await?;
    Ok(Json(positions).into_response())
}

#[utoipa::path(
    post,
    path = "/api/positions",
    request_body = CreatePositionRequest,
    responses(
        (status = 201, description = "Position created", body = storage::models::Position),
        (status = 400, description = "Invalid payload")
    ),
    tag = "positions"
)]
pub async fn create_position(
    State(db): State<Database>,
    Json(payload): Json<CreatePositionRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let position = services::create_position(db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(position)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/positions/{position_id}",
    request_body = UpdatePositionRequest,
    responses(
        (status = 200, description = "Position updated", body = storage::models::Position),
        (status = 404, description = "Position not found")
    ),
    tag = "positions"
)]
pub async fn update_position(
    State(db): State<Database>,
    Path(position_id): Path<Uuid>,
    Json(payload): Json<UpdatePositionRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let position = services::update_position(db.pool(), position_id, &payload).await?;
    Ok(Json(position).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/positions/{position_id}",
    responses(
        (status = 204, description = "Position deleted"),
        (status = 404, description = "Position not found")
    ),
    tag = "positions"
)]
pub async fn delete_position(
    State(db): State<Database>,
    Path(position_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_position(db.pool(), position_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/positions/{position_id}/assign",
    request_body = AssignPositionRequest,
    responses(
        (status = 204, description = "Cadet assigned"),
        (status = 404, description = "Position or cadet not found")
    ),
    tag = "positions"
)]
pub async fn assign_position(
    State(db): State<Database>,
    Path(position_id): Path<Uuid>,
    Json(payload): Json<AssignPositionRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    services::assign_position(db.pool(), position_id, &payload).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/positions/{position_id}/assign/{cap_id}",
    responses(
        (status = 204, description = "Cadet unassigned"),
        (status = 404, description = "Cadet not found")
    ),
    tag = "positions"
)]
pub async fn unassign_position(
    State(db): State<Database>,
    Path((position_id, cap_id)): Path<(Uuid, i64)>,
) -> Result<Response, WebError> {
    services::unassign_position(db.pool(), position_id, cap_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/positions/cadet/{cap_id}",
    responses(
        (status = 200, description = "Positions held by the cadet", body = [storage::models::Position]),
        (status = 404, description = "Cadet not found")
    ),
    tag = "positions"
)]
pub async fn list_cadet_positions(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    let positions = services::list_cadet_positions(db.pool(), cap_id).await?;
    Ok(Json(positions).into_response())
}
