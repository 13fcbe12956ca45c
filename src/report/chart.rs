use serde::Serialize;

use crate::estimation::RevenueReport;
use crate::estimation::projection::revenue_from_player_counts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartAxis {
    Revenue,
    PlayerCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub axis: ChartAxis,
}

/// Two-axis line chart: estimated revenue over time and the player counts behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Chart for reports backed by real player history; `None` otherwise
pub fn build_chart(report: &RevenueReport) -> Option<ChartData> {
    let series = report.player_series.as_ref().filter(|s| !s.is_empty())?;

    let revenue = revenue_from_player_counts(series, &report.metrics());
    let players: Vec<f64> = series.points.iter().map(|p| p.player_count as f64).collect();

    let datasets = vec![
        ChartDataset {
            label: "Estimated Revenue (Based on Player Count)".to_string(),
            data: revenue,
            axis: ChartAxis::Revenue,
        },
        ChartDataset {
            label: "Steam Player Count".to_string(),
            data: players,
            axis: ChartAxis::PlayerCount,
        },
    ];

    let longest = datasets.iter().map(|d| d.data.len()).max().unwrap_or(0);

    Some(ChartData {
        title: format!("{} - Revenue Analysis", report.title),
        labels: align_labels(&series.labels, longest),
        datasets,
    })
}

/// Why there is nothing to plot
pub fn missing_chart_reason(report: &RevenueReport) -> String {
    match &report.external_series_id {
        Some(id) => format!("No Steam Charts data available for Steam ID: {}", id),
        None => "No Steam ID found for this game".to_string(),
    }
}

/// Pad with `Period N` or truncate so there is exactly one label per data point
pub fn align_labels(labels: &[String], len: usize) -> Vec<String> {
    let mut aligned: Vec<String> = labels.iter().take(len).cloned().collect();
    for i in aligned.len()..len {
        aligned.push(format!("Period {}", i + 1));
    }
    aligned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ModelSettings;
    use crate::domain::{GameRecord, PlayerSeriesPoint};
    use crate::estimation::{compute_metrics, normalize_points, synthesize};
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_align_labels_pads_and_truncates() {
        assert_eq!(
            align_labels(&labels(&["Jan"]), 3),
            labels(&["Jan", "Period 2", "Period 3"])
        );
        assert_eq!(align_labels(&labels(&["a", "b", "c"]), 2), labels(&["a", "b"]));
    }

    #[test]
    fn test_chart_from_player_series() {
        let mut game = GameRecord::bare(5, "Warframe");
        game.external_series_id = Some("230410".to_string());
        let series = normalize_points(vec![
            PlayerSeriesPoint {
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                player_count: 1_000,
            },
            PlayerSeriesPoint {
                timestamp: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
                player_count: 2_000,
            },
        ]);
        let metrics = compute_metrics(&game, None);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let report = synthesize(&game, &metrics, Some(&series), &ModelSettings::default(), &mut rng);

        let chart = build_chart(&report).unwrap();

        assert_eq!(chart.labels, labels(&["2024-01", "2024-02"]));
        assert_eq!(chart.datasets[0].axis, ChartAxis::Revenue);
        assert_eq!(chart.datasets[0].data, report.monthly_revenue);
        assert_eq!(chart.datasets[1].data, vec![1_000.0, 2_000.0]);
    }

    #[test]
    fn test_synthetic_report_has_no_chart() {
        let game = GameRecord::bare(5, "Offline Game");
        let metrics = compute_metrics(&game, None);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let report = synthesize(&game, &metrics, None, &ModelSettings::default(), &mut rng);

        assert!(build_chart(&report).is_none());
        assert_eq!(missing_chart_reason(&report), "No Steam ID found for this game");
    }
}
