use sqlx::PgPool;
use storage::{
    dto::position::{AssignPositionRequest, CreatePositionRequest, UpdatePositionRequest},
    error::Result,
    models::Position,
    repository::{cadet::CadetRepository, position::PositionRepository},
};
use uuid::Uuid;

/// List all duty positions
pub async fn list_positions(pool: &PgPool) -> Result<Vec<Position>> {
    let repo = PositionRepository::new(pool);
    repo.list().await
}

/// Create a new position
pub async fn create_position(pool: &PgPool, request: &CreatePositionRequest) -> Result<Position> {
    let repo = PositionRepository::new(pool);
    repo.create(request).await
}

/// Update a position
pub async fn update_position(
    pool: &PgPool,
    position_id: Uuid,
    request: &UpdatePositionRequest,
) -> Result<Position> {
    let repo = PositionRepository::new(pool);
    repo.update(position_id, request).await
}

/// Delete a position
pub async fn delete_position(pool: &PgPool, position_id: Uuid) -> Result<()> {
    let repo = PositionRepository::new(pool);
    repo.delete(position_id).await
}

/// Assign a cadet (by CAP id) to a position
pub async fn assign_position(
    pool: &PgPool,
    position_id: Uuid,
    request: &AssignPositionRequest,
) -> Result<()> {
    let cadet = CadetRepository::new(pool)
        .find_by_cap_id(request.cap_id)
        .await?;

    let repo = PositionRepository::new(pool);
    repo.assign(position_id, cadet.cadet_id, request.notes.as_deref())
        .await
}

/// Remove a cadet from a position
pub async fn unassign_position(pool: &PgPool, position_id: Uuid, cap_id: i64) -> Result<()> {
    let cadet = CadetRepository::new(pool).find_by_cap_id(cap_id).await?;

    let repo = PositionRepository::new(pool);
    repo.unassign(position_id, cadet.cadet_id).await
}

/// Positions currently held by a cadet
pub async fn list_cadet_positions(pool: &PgPool, cap_id: i64) -> Result<Vec<Position>> {
    let cadet = CadetRepository::new(pool).find_by_cap_id(cap_id).await?;

    let repo = PositionRepository::new(pool);
    repo.for_cadet(cadet.cadet_id).await
}
