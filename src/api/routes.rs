use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{games::{get_games, search_games}, revenue::{get_current_report, post_revenue}, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/games", get(get_games))
        .route("/api/games/search", get(search_games))
        .route("/api/games/:id/revenue", post(post_revenue))
        .route("/api/report", get(get_current_report))
        .with_state(state)
}
