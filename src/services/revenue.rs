use anyhow::Result;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use crate::api::catalog_client::CatalogClient;
use crate::api::player_count_client::SteamChartsClient;
use crate::api::sources::{DeveloperRegistry, GameCatalog, PlayerCountProvider};
use crate::config::settings::{AppConfig, ModelSettings};
use crate::domain::{DeveloperRef, DeveloperScale, GameRecord, GameSummary, PlayerSeries};
use crate::estimation::{self, RevenueReport};

/// A "get revenue" request for a game picked from a listing
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRequest {
    pub game_id: i64,
    pub title: String,
    pub developers: Vec<DeveloperRef>,
}

impl RevenueRequest {
    pub fn for_id(game_id: i64) -> Self {
        Self {
            game_id,
            title: String::new(),
            developers: Vec::new(),
        }
    }
}

impl From<&GameSummary> for RevenueRequest {
    fn from(summary: &GameSummary) -> Self {
        Self {
            game_id: summary.id,
            title: summary.title.clone(),
            developers: summary.developers.clone(),
        }
    }
}

/// Runs the estimation engine against the external collaborators.
///
/// Every collaborator failure degrades the result instead of failing it:
/// a missing game detail falls back to the request's own fields, a missing
/// developer scale to the neutral multiplier, a missing series to the synthetic model.
pub struct RevenueService {
    catalog: Arc<dyn GameCatalog>,
    developers: Arc<dyn DeveloperRegistry>,
    player_counts: Arc<dyn PlayerCountProvider>,
    settings: ModelSettings,
    seed: Option<u64>,
}

impl RevenueService {
    /// Service backed by the HTTP clients described in `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        let catalog = Arc::new(CatalogClient::new(&config.catalog)?);
        let player_counts = Arc::new(SteamChartsClient::new(&config.player_counts)?);

        Ok(Self::with_sources(
            catalog.clone(),
            catalog,
            player_counts,
            config.model.clone(),
        ))
    }

    pub fn with_sources(
        catalog: Arc<dyn GameCatalog>,
        developers: Arc<dyn DeveloperRegistry>,
        player_counts: Arc<dyn PlayerCountProvider>,
        settings: ModelSettings,
    ) -> Self {
        Self {
            catalog,
            developers,
            player_counts,
            settings,
            seed: None,
        }
    }

    /// Make the synthetic month-to-month variation reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn catalog(&self) -> &dyn GameCatalog {
        self.catalog.as_ref()
    }

    pub async fn estimate(&self, request: &RevenueRequest) -> RevenueReport {
        info!("Estimating revenue for game {}", request.game_id);

        let game = self.load_game(request).await;

        let (developer_scale, series) = tokio::join!(
            self.lookup_developer_scale(&game),
            self.lookup_player_series(&game)
        );

        let metrics = estimation::compute_metrics(&game, developer_scale.as_ref());
        let mut rng = self.rng();
        let report =
            estimation::synthesize(&game, &metrics, series.as_ref(), &self.settings, &mut rng);

        info!(
            "Game {} ({}): {} mode, estimated {:.0}/month",
            report.game_id,
            report.game_type,
            report.projection_mode,
            report.estimated_monthly_revenue
        );
        report
    }

    async fn load_game(&self, request: &RevenueRequest) -> GameRecord {
        match self.catalog.fetch_game(request.game_id).await {
            Ok(game) => game,
            Err(e) => {
                warn!(
                    "Failed to fetch game {}, continuing with listing data: {:?}",
                    request.game_id, e
                );
                GameRecord {
                    developers: request.developers.clone(),
                    ..GameRecord::bare(request.game_id, &request.title)
                }
            }
        }
    }

    async fn lookup_developer_scale(&self, game: &GameRecord) -> Option<DeveloperScale> {
        let developer = game.primary_developer()?;
        if developer.slug.is_empty() {
            return None;
        }

        match self.developers.fetch_developer_scale(&developer.slug).await {
            Ok(scale) => scale,
            Err(e) => {
                warn!(
                    "Developer lookup for '{}' failed, using neutral studio scale: {:?}",
                    developer.slug, e
                );
                None
            }
        }
    }

    async fn lookup_player_series(&self, game: &GameRecord) -> Option<PlayerSeries> {
        let series_id = game.external_series_id.as_deref()?;

        let raw = match self.player_counts.fetch_player_counts(series_id).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Player history for {} unavailable, using synthetic projection: {:?}",
                    series_id, e
                );
                return None;
            }
        };

        let series = estimation::normalize(raw.as_ref());
        if raw.is_some() && series.is_none() {
            warn!("Player history for {} is malformed, ignoring it", series_id);
        }
        series
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
