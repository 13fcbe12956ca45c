#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

use game_revenue_estimator::api::{DeveloperRegistry, GameCatalog, PlayerCountProvider};
use game_revenue_estimator::config::settings::ModelSettings;
use game_revenue_estimator::domain::{DeveloperRef, DeveloperScale, GameRecord, GameSummary, Genre};
use game_revenue_estimator::services::RevenueService;

pub struct StubCatalog {
    pub game: Option<GameRecord>,
    pub listing_available: bool,
    /// Applied to detail fetches of the stub's own game only
    pub detail_delay: Duration,
}

#[async_trait]
impl GameCatalog for StubCatalog {
    async fn list_games(&self) -> Result<Vec<GameSummary>> {
        if !self.listing_available {
            return Err(anyhow!("catalog unavailable"));
        }
        Ok(self
            .game
            .iter()
            .map(|g| GameSummary {
                id: g.id,
                title: g.title.clone(),
                developers: g.developers.clone(),
            })
            .collect())
    }

    async fn search_games(&self, query: &str) -> Result<Vec<GameSummary>> {
        let games = self.list_games().await?;
        let query = query.to_lowercase();
        Ok(games
            .into_iter()
            .filter(|g| g.title.to_lowercase().contains(&query))
            .collect())
    }

    async fn fetch_game(&self, game_id: i64) -> Result<GameRecord> {
        let game = self
            .game
            .clone()
            .filter(|g| g.id == game_id)
            .ok_or_else(|| anyhow!("game {} unavailable", game_id))?;
        tokio::time::sleep(self.detail_delay).await;
        Ok(game)
    }
}

pub struct StubRegistry {
    pub scale: Option<DeveloperScale>,
    pub fails: bool,
    pub delay: Duration,
}

#[async_trait]
impl DeveloperRegistry for StubRegistry {
    async fn fetch_developer_scale(&self, _slug: &str) -> Result<Option<DeveloperScale>> {
        tokio::time::sleep(self.delay).await;
        if self.fails {
            return Err(anyhow!("registry timed out"));
        }
        Ok(self.scale)
    }
}

pub struct StubPlayerCounts {
    pub payload: Option<Value>,
    pub fails: bool,
    pub delay: Duration,
}

#[async_trait]
impl PlayerCountProvider for StubPlayerCounts {
    async fn fetch_player_counts(&self, _series_id: &str) -> Result<Option<Value>> {
        tokio::time::sleep(self.delay).await;
        if self.fails {
            return Err(anyhow!("player history unavailable"));
        }
        Ok(self.payload.clone())
    }
}

pub fn game(id: i64, title: &str, genres: Vec<Genre>, mau: f64) -> GameRecord {
    GameRecord {
        genres,
        developers: vec![DeveloperRef {
            slug: "studio".to_string(),
            name: "Studio".to_string(),
        }],
        avg_monthly_active_users: mau,
        ..GameRecord::bare(id, title)
    }
}

pub fn registry(scale: Option<DeveloperScale>) -> StubRegistry {
    StubRegistry {
        scale,
        fails: false,
        delay: Duration::ZERO,
    }
}

pub fn player_counts(payload: Option<Value>) -> StubPlayerCounts {
    StubPlayerCounts {
        payload,
        fails: false,
        delay: Duration::ZERO,
    }
}

pub fn service(
    game: Option<GameRecord>,
    registry: StubRegistry,
    player_counts: StubPlayerCounts,
) -> RevenueService {
    let catalog = StubCatalog {
        game,
        listing_available: true,
        detail_delay: Duration::ZERO,
    };
    RevenueService::with_sources(
        Arc::new(catalog),
        Arc::new(registry),
        Arc::new(player_counts),
        ModelSettings::default(),
    )
    .with_seed(17)
}

/// Steam Charts style payload with one sample per (year, month, day, count)
pub fn chart_payload(samples: &[(i32, u32, u32, u64)]) -> Value {
    let pairs: Vec<Value> = samples
        .iter()
        .map(|&(year, month, day, count)| {
            let millis = Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .unwrap()
                .timestamp_millis();
            json!([millis, count])
        })
        .collect();
    Value::Array(pairs)
}
