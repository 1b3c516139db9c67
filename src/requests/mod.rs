mod dto;
mod handlers;
mod repo;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            post(handlers::create_request).get(handlers::list_requests),
        )
        .route("/requests/:id/accept", post(handlers::accept_request))
        .route("/requests/:id/cancel", post(handlers::cancel_request))
}
