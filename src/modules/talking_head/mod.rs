use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::post;
use tower_http::limit::RequestBodyLimitLayer;

use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod service;

pub fn router(state: AppState) -> Router<AppState> {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/talking-head", post(handler::generate_talking_head))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware,
        ))
}
