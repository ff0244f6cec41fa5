use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An ordered standing; a higher `rank_order` is more senior.
///
/// `rank_order` values are unique across the catalog. Promotion walks this
/// ordering: a cadet's current rank is their awarded rank with the highest
/// order, and the next rank is the smallest order strictly above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rank {
    pub rank_id: Uuid,
    pub name: String,
    pub rank_order: i32,
}
