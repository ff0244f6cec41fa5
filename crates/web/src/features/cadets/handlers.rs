use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::cadet::{CadetSearchParams, CreateCadetRequest, UpdateCadetRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/cadets",
    responses(
        (status = 200, description = "Cadets listed successfully", body = [storage::models::Cadet])
    ),
    tag = "cadets"
)]
pub async fn list_cadets(State(db): State<Database>) -> Result<Response, WebError> {
    let cadets = services::list_cadets(db.pool()).await?;
    Ok(Json(cadets).into_response())
}

#[utoipa::path(
    get,
    path = "/api/cadets/search",
    params(CadetSearchParams),
    responses(
        (status = 200, description = "Matching cadets", body = [storage::models::Cadet])
    ),
    tag = "cadets"
)]
pub async fn search_cadets(
    State(db): State<Database>,
    Query(params): Query<CadetSearchParams>,
) -> Result<Response, WebError> {
    let cadets = services::search_cadets(db.pool(), &params.q).await?;
    Ok(Json(cadets).into_response())
}

#[utoipa::path(
    get,
    path = "/api/cadets/{cap_id}",
    responses(
        (status = 200, description = "Cadet found", body = storage::models::Cadet),
        (status = 404, description = "Cadet not found")
    ),
    tag = "cadets"
)]
pub async fn get_cadet(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    let cadet = services::get_cadet(db.pool(), cap_id).await?;
    Ok(Json(cadet).into_response())
}

#[utoipa::path(
    get,
    path = "/api/cadets/{cap_id}/detail",
    responses(
        (status = 200, description = "Cadet profile", body = storage::dto::cadet::CadetDetailResponse),
        (status = 404, description = "Cadet not found")
    ),
    tag = "cadets"
)]
pub async fn get_cadet_detailed(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    let detail = services::get_cadet_detailed(db.pool(), cap_id).await?;
    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/api/cadets",
    request_body = CreateCadetRequest,
    responses(
        (status = 201, description = "Cadet created", body = storage::models::Cadet),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "CAP id already registered")
    ),
    tag = "cadets"
)]
pub async fn create_cadet(
    State(db): State<Database>,
    Json(payload): Json<CreateCadetRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let cadet = services::create_cadet(db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(cadet)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/cadets/{cap_id}",
    request_body = UpdateCadetRequest,
    responses(
        (status = 200, description = "Cadet updated", body = storage::models::Cadet),
        (status = 404, description = "Cadet not found")
    ),
    tag = "cadets"
)]
pub async fn update_cadet(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
    Json(payload): Json<UpdateCadetRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let cadet = services::update_cadet(db.pool(), cap_id, &payload).await?;
    Ok(Json(cadet).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/cadets/{cap_id}",
    responses(
        (status = 204, description = "Cadet deleted"),
        (status = 404, description = "Cadet not found")
    ),
    tag = "cadets"
)]
pub async fn delete_cadet(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_cadet(db.pool(), cap_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
