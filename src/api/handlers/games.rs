use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::error;
use std::sync::Arc;

use super::{AppState, SearchParams};
use crate::api::models::GameListResponse;

pub async fn get_games(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.catalog().list_games().await {
        Ok(games) => Json(GameListResponse::from(games)).into_response(),
        Err(e) => {
            error!("Failed to list games: {:?}", e);
            (StatusCode::BAD_GATEWAY, format!("Catalog Error: {}", e)).into_response()
        }
    }
}

pub async fn search_games(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.query.unwrap_or_default();
    let query = query.trim();

    // A blank search shows the full listing
    let result = if query.is_empty() {
        state.service.catalog().list_games().await
    } else {
        state.service.catalog().search_games(query).await
    };

    match result {
        Ok(games) => Json(GameListResponse::from(games)).into_response(),
        Err(e) => {
            error!("Failed to search games for '{}': {:?}", query, e);
            (StatusCode::BAD_GATEWAY, format!("Catalog Error: {}", e)).into_response()
        }
    }
}
