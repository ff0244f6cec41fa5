use axum::{
    Router,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{get_promotion_outlook, list_ranks, set_cadet_rank, toggle_requirement};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/ranks", get(list_ranks))
        .route("/:cap_id", get(get_promotion_outlook))
        .route("/:cap_id/rank", put(set_cadet_rank))
        .route(
            "/:cap_id/requirements/:requirement_id",
            post(toggle_requirement),
        )
}
