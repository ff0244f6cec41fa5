use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A named task or criterion gating promotion to a rank. Requirements are
/// linked to ranks many-to-many; completion is tracked per cadet as a binary
/// record in `requirement_completions`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Requirement {
    pub requirement_id: Uuid,
    pub name: String,
    pub description: String,
}
