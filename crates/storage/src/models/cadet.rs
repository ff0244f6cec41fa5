use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A tracked member of the unit. `cap_id` is the member's organization-wide
/// identifier and is what callers use to address a cadet; `cadet_id` is the
/// internal key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cadet {
    pub cadet_id: Uuid,
    pub cap_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}
