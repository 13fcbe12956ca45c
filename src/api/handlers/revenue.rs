use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, RevenueParams};
use crate::api::models::RevenueResponse;
use crate::domain::DeveloperRef;
use crate::services::revenue::RevenueRequest;

/// Select a game and compute its report. A newer selection made while this
/// one was in flight wins, and this request answers 409.
pub async fn post_revenue(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<i64>,
    Query(params): Query<RevenueParams>,
) -> impl IntoResponse {
    let ticket = state.session.select().await;

    let developers = params
        .developer
        .filter(|slug| !slug.trim().is_empty())
        .map(|slug| DeveloperRef {
            slug: slug.trim().to_string(),
            name: String::new(),
        })
        .into_iter()
        .collect();

    let request = RevenueRequest {
        game_id,
        title: params.title.unwrap_or_default(),
        developers,
    };
    let report = state.service.estimate(&request).await;

    if !state.session.publish(ticket, report.clone()).await {
        return (StatusCode::CONFLICT, "Superseded by a newer selection").into_response();
    }

    Json(RevenueResponse::from(report)).into_response()
}

pub async fn get_current_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.session.current_report().await {
        Some(report) => Json(RevenueResponse::from(report)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
