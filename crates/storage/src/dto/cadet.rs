use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Position;

/// Request payload for registering a new cadet
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCadetRequest {
    #[validate(range(min = 1, message = "CAP id must be a positive number"))]
    pub cap_id: i64,

    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    pub date_of_birth: Option<NaiveDate>,
}

/// Request payload for updating an existing cadet
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCadetRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CadetSearchParams {
    /// Matched against name and CAP id
    pub q: String,
}

/// Detailed cadet view: profile plus rank history, current positions, recent
/// inspections and the open report count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CadetDetailResponse {
    pub cadet_id: Uuid,
    pub cap_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub ranks: Vec<RankAwardSummary>,
    pub positions: Vec<Position>,
    pub recent_inspections: Vec<InspectionSummary>,
    pub report_count: i64,
}

/// One rank award in a cadet's history
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct RankAwardSummary {
    pub rank_id: Uuid,
    pub rank_name: String,
    pub rank_order: i32,
    pub awarded_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct InspectionSummary {
    pub inspection_id: Uuid,
    pub inspection_date: NaiveDate,
    pub total_score: i32,
    pub rating: String,
}
