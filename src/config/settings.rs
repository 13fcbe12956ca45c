use crate::estimation::VariationBounds;

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub variation: VariationBounds,
    pub synthetic_months: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            variation: VariationBounds::default(),
            synthetic_months: 12,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub rate_limit_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 100, // 10 req/sec
            user_agent: "GameRevenueEstimator/1.0".to_string(),
            timeout_secs: 30,
            base_url: "https://grm.gameops.tech/games".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerCountSettings {
    pub rate_limit_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl Default for PlayerCountSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 1000,
            user_agent: "GameRevenueEstimator/1.0".to_string(),
            timeout_secs: 15,
            base_url: "https://steamcharts.com".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelSettings,
    pub catalog: CatalogSettings,
    pub player_counts: PlayerCountSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Defaults, with service URLs taken from `GAME_CATALOG_URL` / `PLAYER_COUNT_URL` when set
    pub fn new() -> Self {
        let mut config = Self {
            model: ModelSettings::default(),
            catalog: CatalogSettings::default(),
            player_counts: PlayerCountSettings::default(),
        };

        if let Some(url) = env_url("GAME_CATALOG_URL") {
            config.catalog.base_url = url;
        }
        if let Some(url) = env_url("PLAYER_COUNT_URL") {
            config.player_counts.base_url = url;
        }

        config
    }
}

fn env_url(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}
