mod dto;
mod handlers;
mod repo;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route("/volunteers/:id/skills", post(handlers::offer_skill))
}
