use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An incident report filed against a cadet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Report {
    pub report_id: Uuid,
    pub cadet_id: Uuid,
    pub report_type: String,
    pub description: String,
    pub incident_date: NaiveDate,
    pub resolved: bool,
    pub resolved_by: Option<String>,
}
