use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePositionRequest {
    #[validate(length(min = 1, max = 255, message = "Position name is required"))]
    pub name: String,

    #[serde(default = "default_is_line")]
    pub is_line: bool,

    #[serde(default)]
    pub level: i32,
}

fn default_is_line() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePositionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub is_line: Option<bool>,

    pub level: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignPositionRequest {
    #[validate(range(min = 1, message = "CAP id must be a positive number"))]
    pub cap_id: i64,

    pub notes: Option<String>,
}
