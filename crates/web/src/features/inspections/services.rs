use storage::{
    Database,
    dto::inspection::{InspectionDetailResponse, InspectionSubmission},
    error::Result,
    models::Inspection,
    services::scoring::{self, ScoreEngine},
};
use uuid::Uuid;

/// Score a submitted checklist and persist the result
pub async fn submit_inspection(db: &Database, submission: &InspectionSubmission) -> Result<Uuid> {
    let engine = ScoreEngine::standard();
    scoring::submit_inspection(db, &engine, submission).await
}

/// All inspections for a cadet, newest first
pub async fn list_cadet_inspections(db: &Database, cap_id: i64) -> Result<Vec<Inspection>> {
    scoring::list_inspections(db, cap_id).await
}

/// One stored inspection with its per-item breakdown
pub async fn get_inspection(
    db: &Database,
    cap_id: i64,
    date: &str,
) -> Result<InspectionDetailResponse> {
    scoring::load_inspection(db, cap_id, date).await
}
