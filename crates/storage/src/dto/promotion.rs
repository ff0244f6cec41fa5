use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Rank;

/// A cadet's standing toward their next promotion: where they are, what rank
/// comes next, and which of its requirements are already satisfied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromotionOutlook {
    pub cap_id: i64,
    /// None for a cadet with no awarded rank yet
    pub current_rank: Option<Rank>,
    /// None when the cadet holds the top rank (or the catalog is empty)
    pub next_rank: Option<Rank>,
    /// Requirements of `next_rank`, ascending by requirement id; empty when
    /// no next rank exists or none are defined for it
    pub requirements: Vec<RequirementStatus>,
}

/// One requirement of the promotion target, flagged complete when a
/// completion record exists for the cadet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RequirementStatus {
    pub requirement_id: Uuid,
    pub name: String,
    pub description: String,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleRequirementRequest {
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetRankRequest {
    pub rank_id: Uuid,
}
