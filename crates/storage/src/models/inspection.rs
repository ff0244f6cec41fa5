use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted uniform inspection: the aggregate score, the derived rating,
/// and the combined comment blob. At most one inspection exists per cadet per
/// date; resubmitting the same day overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Inspection {
    pub inspection_id: Uuid,
    pub cadet_id: Uuid,
    pub inspector_cap_id: Option<i64>,
    pub inspection_date: NaiveDate,
    pub total_score: i32,
    pub rating: String,
    pub comments: String,
    pub created_at: NaiveDateTime,
}

/// One scored checklist line of an inspection. Only present when the schema
/// carries the per-item breakdown table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InspectionItemScore {
    pub inspection_id: Uuid,
    pub section: String,
    pub item_name: String,
    pub score: i32,
    pub comment: String,
}
