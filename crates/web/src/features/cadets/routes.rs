use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_cadet, delete_cadet, get_cadet, get_cadet_detailed, list_cadets, search_cadets,
    update_cadet,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_cadets).post(create_cadet))
        .route("/search", get(search_cadets))
        .route(
            "/:cap_id",
            get(get_cadet).put(update_cadet).delete(delete_cadet),
        )
        .route("/:cap_id/detail", get(get_cadet_detailed))
}
