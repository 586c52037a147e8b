use crate::server::router::AppState;
use axum::{Router, routing::get};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        // Collection, with and without the trailing slash.
        .route(
            "/items/",
            get(handlers::read_all_items).post(handlers::create_item),
        )
        .route(
            "/items",
            get(handlers::read_all_items).post(handlers::create_item),
        )
        .route(
            "/items/{item_id}",
            get(handlers::read_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
}
