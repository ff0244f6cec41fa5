use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::InspectionItemScore;

/// One scored checklist line as submitted by a form. Identity is the
/// `(section, name)` pair, matched case-sensitively against the engine's
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChecklistItemInput {
    #[validate(length(min = 1, message = "Section is required"))]
    pub section: String,

    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,

    #[validate(range(min = 0, max = 3, message = "Score must be between 0 and 3"))]
    pub score: i32,

    #[serde(default)]
    pub comment: String,
}

/// A full checklist submission for one cadet on one date
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InspectionSubmission {
    #[validate(range(min = 1, message = "CAP id must be a positive number"))]
    pub cap_id: i64,

    pub inspector_cap_id: Option<i64>,

    pub inspection_date: NaiveDate,

    #[validate(nested)]
    pub items: Vec<ChecklistItemInput>,

    #[serde(default)]
    pub overall_comment: String,
}

/// A stored inspection together with its per-item rows (empty on schemas
/// without the breakdown table)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InspectionDetailResponse {
    pub inspection_id: Uuid,
    pub cap_id: i64,
    pub inspector_cap_id: Option<i64>,
    pub inspection_date: NaiveDate,
    pub total_score: i32,
    pub rating: String,
    pub comments: String,
    pub items: Vec<InspectionItemScore>,
}
