use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{create_dog, get_dog_by_id, list_dogs, ping};

pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/dogs", get(list_dogs).post(create_dog))
        .route("/dogs/{id}", get(get_dog_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
