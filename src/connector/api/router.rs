use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::container::Container;
use super::controller::{health, rerank};

pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/v1/rerank", post(rerank))
        .route("/health", get(health))
        .with_state(container)
}
