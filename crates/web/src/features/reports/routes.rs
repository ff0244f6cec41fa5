use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{
    create_report, delete_report, list_cadet_reports, list_reports, update_report,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_reports).post(create_report))
        .route("/:report_id", put(update_report).delete(delete_report))
        .route("/cadet/:cap_id", get(list_cadet_reports))
}
