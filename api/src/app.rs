use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handler::{analyze, health_check};

pub fn create_router() -> Router {
    return Router::new()
        .route("/", get(health_check))
        .route("/analyze", post(analyze))
        .layer(TraceLayer::new_for_http());
}
