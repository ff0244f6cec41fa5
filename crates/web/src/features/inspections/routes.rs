use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_inspection, list_cadet_inspections, submit_inspection};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(submit_inspection))
        .route("/:cap_id", get(list_cadet_inspections))
        .route("/:cap_id/:date", get(get_inspection))
}
