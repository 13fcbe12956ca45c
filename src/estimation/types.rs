use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::PlayerSeries;

pub type Usd = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    BattleRoyale,
    PremiumDlc,
    Moba,
    FreeToPlay,
}

impl GameType {
    pub fn as_str(&self) -> &str {
        match self {
            GameType::BattleRoyale => "battle_royale",
            GameType::PremiumDlc => "premium_dlc",
            GameType::Moba => "moba",
            GameType::FreeToPlay => "free_to_play",
        }
    }

    /// Upper-case label with spaces, e.g. "BATTLE ROYALE"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueMetrics {
    pub conversion_rate: f64,
    pub arppu: Usd,
    pub game_type: GameType,
}

/// Range of the uniform month-to-month multiplier used by the synthetic projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariationBounds {
    pub low: f64,
    pub high: f64,
}

impl Default for VariationBounds {
    fn default() -> Self {
        Self {
            low: 0.8,
            high: 1.2,
        }
    }
}

impl VariationBounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A bound that always yields `factor`
    pub fn fixed(factor: f64) -> Self {
        Self::new(factor, factor)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.high <= self.low {
            return self.low;
        }
        rng.gen_range(self.low..=self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    RealSeries,
    Synthetic,
}

impl ProjectionMode {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectionMode::RealSeries => "real_series",
            ProjectionMode::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the presentation layer shows for one "get revenue" request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub game_id: i64,
    pub title: String,
    pub game_type: GameType,
    pub conversion_rate: f64,
    pub arppu: Usd,
    pub avg_monthly_active_users: f64,
    pub paying_users: u64,
    pub estimated_monthly_revenue: Usd,
    pub total_revenue: Usd,
    pub total_units_sold: u64,
    pub monthly_revenue: Vec<Usd>,
    pub monthly_units_sold: Vec<f64>,
    pub monthly_labels: Vec<String>,
    pub projection_mode: ProjectionMode,
    pub external_series_id: Option<String>,
    pub player_series: Option<PlayerSeries>,
}

impl RevenueReport {
    pub fn metrics(&self) -> RevenueMetrics {
        RevenueMetrics {
            conversion_rate: self.conversion_rate,
            arppu: self.arppu,
            game_type: self.game_type,
        }
    }
}
