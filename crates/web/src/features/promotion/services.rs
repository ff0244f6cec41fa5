use sqlx::PgPool;
use storage::{
    Database,
    dto::promotion::PromotionOutlook,
    error::Result,
    models::Rank,
    repository::rank::RankRepository,
    services::promotion,
};
use uuid::Uuid;

/// The full rank catalog, ascending by order
pub async fn list_ranks(pool: &PgPool) -> Result<Vec<Rank>> {
    let repo = RankRepository::new(pool);
    repo.list_ordered().await
}

/// A cadet's promotion outlook: current rank, next rank, requirement statuses
pub async fn get_promotion_outlook(db: &Database, cap_id: i64) -> Result<PromotionOutlook> {
    promotion::promotion_outlook(db, cap_id).await
}

/// Mark or unmark a promotion requirement for a cadet
pub async fn toggle_requirement(
    db: &Database,
    cap_id: i64,
    requirement_id: Uuid,
    completed: bool,
) -> Result<()> {
    promotion::toggle_requirement(db, cap_id, requirement_id, completed).await
}

/// Set a cadet's rank, replacing any prior award
pub async fn set_cadet_rank(db: &Database, cap_id: i64, rank_id: Uuid) -> Result<()> {
    promotion::set_rank(db, cap_id, rank_id).await
}
