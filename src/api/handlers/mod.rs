use serde::Deserialize;

use crate::services::revenue::RevenueService;
use crate::services::session::RevenueSession;

pub mod games;
pub mod revenue;

pub struct AppState {
    pub service: RevenueService,
    pub session: RevenueSession,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Listing fields the caller already holds, used if the detail fetch fails
#[derive(Deserialize)]
pub struct RevenueParams {
    pub title: Option<String>,
    pub developer: Option<String>,
}
