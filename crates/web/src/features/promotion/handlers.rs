use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::promotion::{SetRankRequest, ToggleRequirementRequest},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/promotion/ranks",
    responses(
        (status = 200, description = "Rank catalog, ascending by order", body = [storage::models::Rank])
    ),
    tag = "promotion"
)]
pub async fn list_ranks(State(db): State<Database>) -> Result<Response, WebError> {
    let ranks = services::list_ranks(db.pool()).await?;
    Ok(Json(ranks).into_response())
}

#[utoipa::path(
    get,
    path = "/api/promotion/{cap_id}",
    responses(
        (status = 200, description = "Promotion outlook", body = storage::dto::promotion::PromotionOutlook),
        (status = 404, description = "Cadet not found")
    ),
    tag = "promotion"
)]
pub async fn get_promotion_outlook(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
) -> Result<Response, WebError> {
    let outlook = services::get_promotion_outlook(&db, cap_id).await?;
    Ok(Json(outlook).into_response())
}

#[utoipa::path(
    post,
    path = "/api/promotion/{cap_id}/requirements/{requirement_id}",
    request_body = ToggleRequirementRequest,
    responses(
        (status = 204, description = "Requirement toggled"),
        (status = 404, description = "Cadet or requirement not found")
    ),
    tag = "promotion"
)]
pub async fn toggle_requirement(
    State(db): State<Database>,
    Path((cap_id, requirement_id)): Path<(i64, Uuid)>,
    Json(payload): Json<ToggleRequirementRequest>,
) -> Result<Response, WebError> {
    services::toggle_requirement(&db, cap_id, requirement_id, payload.completed).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    put,
    path = "/api/promotion/{cap_id}/rank",
    request_body = SetRankRequest,
    responses(
        (status = 204, description = "Rank set"),
        (status = 404, description = "Cadet or rank not found")
    ),
    tag = "promotion"
)]
pub async fn set_cadet_rank(
    State(db): State<Database>,
    Path(cap_id): Path<i64>,
    Json(payload): Json<SetRankRequest>,
) -> Result<Response, WebError> {
    services::set_cadet_rank(&db, cap_id, payload.rank_id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
