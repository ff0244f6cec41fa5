use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    assign_position, create_position, delete_position, list_cadet_positions, list_positions,
    unassign_position, update_position,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_positions).post(create_position))
        .route("/:position_id", put(update_position).delete(delete_position))
        .route("/:position_id/assign", post(assign_position))
        .route("/:position_id/assign/:cap_id", delete(unassign_position))
        .route("/cadet/:cap_id", get(list_cadet_positions))
}
