use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A duty position. `is_line` distinguishes line positions from staff ones.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Position {
    pub position_id: Uuid,
    pub name: String,
    pub is_line: bool,
    pub level: i32,
}
