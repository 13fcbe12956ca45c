use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};

use super::sources::{DeveloperRegistry, GameCatalog};
use crate::config::settings::CatalogSettings;
use crate::domain::responses::{
    DeveloperListResponse, GameListResponse, GameResponse, GameSearchResponse,
};
use crate::domain::{DeveloperScale, GameRecord, GameSummary};
use crate::http::RateLimitedClient;

/// Client for the game catalog service, which also hosts the developer registry
pub struct CatalogClient {
    client: RateLimitedClient,
    base_url: String,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    // --- Helper Methods ---

    fn build_list_url(&self) -> String {
        format!("{}/games/", self.base_url)
    }

    fn build_search_url(&self, query: &str) -> String {
        format!("{}/search/?query={}", self.base_url, urlencoding::encode(query))
    }

    fn build_game_url(&self, game_id: i64) -> String {
        format!("{}/games/{}/", self.base_url, game_id)
    }

    fn build_developer_url(&self, slug: &str) -> String {
        format!(
            "{}/companies/developers/?slug={}",
            self.base_url,
            urlencoding::encode(slug)
        )
    }

    fn into_summaries(games: Vec<GameResponse>) -> Vec<GameSummary> {
        games.into_iter().map(GameResponse::into_summary).collect()
    }
}

#[async_trait]
impl GameCatalog for CatalogClient {
    async fn list_games(&self) -> Result<Vec<GameSummary>> {
        let url = self.build_list_url();
        let body: GameListResponse = self.client.get_json(&url).await?;
        info!("Fetched {} games from catalog", body.results.len());
        Ok(Self::into_summaries(body.results))
    }

    async fn search_games(&self, query: &str) -> Result<Vec<GameSummary>> {
        let url = self.build_search_url(query);
        let body: GameSearchResponse = self.client.get_json(&url).await?;
        let results = body.into_results();
        info!("Search '{}' matched {} games", query, results.len());
        Ok(Self::into_summaries(results))
    }

    async fn fetch_game(&self, game_id: i64) -> Result<GameRecord> {
        let url = self.build_game_url(game_id);
        info!("Fetching game {} from {}", game_id, url);
        let body: GameResponse = self.client.get_json(&url).await?;
        Ok(body.into_record())
    }
}

#[async_trait]
impl DeveloperRegistry for CatalogClient {
    async fn fetch_developer_scale(&self, slug: &str) -> Result<Option<DeveloperScale>> {
        let url = self.build_developer_url(slug);
        let body: DeveloperListResponse = self.client.get_json(&url).await?;

        let scale = body.first_scale();
        if scale.is_none() {
            warn!("No recognised headcount for developer '{}'", slug);
        }
        Ok(scale)
    }
}
