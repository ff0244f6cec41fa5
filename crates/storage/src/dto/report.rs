use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportRequest {
    #[validate(range(min = 1, message = "CAP id must be a positive number"))]
    pub cap_id: i64,

    #[validate(length(min = 1, max = 255, message = "Report type is required"))]
    pub report_type: String,

    #[serde(default)]
    pub description: String,

    pub incident_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReportRequest {
    #[validate(length(min = 1, max = 255))]
    pub report_type: Option<String>,

    pub description: Option<String>,

    pub incident_date: Option<NaiveDate>,

    pub resolved: Option<bool>,

    #[validate(length(max = 255))]
    pub resolved_by: Option<String>,
}
