use serde::Serialize;

use crate::domain::GameSummary;
use crate::estimation::RevenueReport;
use crate::report::ChartData;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListResponse {
    pub items: Vec<GameSummary>,
    pub total: usize,
}

impl From<Vec<GameSummary>> for GameListResponse {
    fn from(items: Vec<GameSummary>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub report: RevenueReport,
    pub chart: Option<ChartData>,
    pub chart_message: Option<String>,
}

impl From<RevenueReport> for RevenueResponse {
    fn from(report: RevenueReport) -> Self {
        let chart = crate::report::build_chart(&report);
        let chart_message = match chart {
            Some(_) => None,
            None => Some(crate::report::missing_chart_reason(&report)),
        };
        Self {
            report,
            chart,
            chart_message,
        }
    }
}
