use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::StatusCode;
use serde_json::Value;

use super::sources::PlayerCountProvider;
use crate::config::settings::PlayerCountSettings;
use crate::errors::{fetch_context, with_parse_context};
use crate::http::RateLimitedClient;

/// Steam Charts player history client
pub struct SteamChartsClient {
    client: RateLimitedClient,
    base_url: String,
}

impl SteamChartsClient {
    pub fn new(settings: &PlayerCountSettings) -> Result<Self> {
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

    fn build_chart_url(&self, app_id: &str) -> String {
        format!(
            "{}/app/{}/chart-data.json",
            self.base_url,
            urlencoding::encode(app_id)
        )
    }
}

#[async_trait]
impl PlayerCountProvider for SteamChartsClient {
    async fn fetch_player_counts(&self, series_id: &str) -> Result<Option<Value>> {
        let url = self.build_chart_url(series_id);
        info!("Fetching player history for app {} from {}", series_id, url);

        let response = self.client.get(&url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!("No player history for app {}", series_id);
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("{}: API returned status {}", fetch_context(&url), status);
        }

        let text = response.text().await?;
        let value: Value = with_parse_context(serde_json::from_str(&text), "player history")?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_url() {
        let client = SteamChartsClient::new(&PlayerCountSettings::default()).unwrap();
        assert_eq!(
            client.build_chart_url("578080"),
            "https://steamcharts.com/app/578080/chart-data.json"
        );
    }
}
