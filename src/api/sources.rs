use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DeveloperScale, GameRecord, GameSummary};

/// Game catalog service
#[async_trait]
pub trait GameCatalog: Send + Sync {
    async fn list_games(&self) -> Result<Vec<GameSummary>>;

    async fn search_games(&self, query: &str) -> Result<Vec<GameSummary>>;

    async fn fetch_game(&self, game_id: i64) -> Result<GameRecord>;
}

/// Developer registry; `Ok(None)` means the registry has no usable headcount
#[async_trait]
pub trait DeveloperRegistry: Send + Sync {
    async fn fetch_developer_scale(&self, slug: &str) -> Result<Option<DeveloperScale>>;
}

/// Historical player-count provider, returning the raw payload untouched
#[async_trait]
pub trait PlayerCountProvider: Send + Sync {
    async fn fetch_player_counts(&self, series_id: &str) -> Result<Option<Value>>;
}
