//! Item routes (e.g., /api/v1/items/*)

use axum::{routing::get, Router};

use crate::api::controller::item::ItemController;
use crate::app_state::AppState;

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ItemController::list_items))
        .route("/{id}", get(ItemController::get_item))
}
