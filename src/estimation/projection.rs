use log::debug;
use rand::Rng;

use super::types::{ProjectionMode, RevenueMetrics, RevenueReport, Usd, VariationBounds};
use crate::config::settings::ModelSettings;
use crate::domain::{GameRecord, PlayerSeries};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Build the revenue report for a game.
///
/// A non-empty player series drives the monthly revenue directly and its sum
/// replaces the reported revenue. Without one, a flat baseline
/// (`mau × conversion × arppu`) is jittered month by month within `settings.variation`.
pub fn synthesize<R: Rng + ?Sized>(
    game: &GameRecord,
    metrics: &RevenueMetrics,
    series: Option<&PlayerSeries>,
    settings: &ModelSettings,
    rng: &mut R,
) -> RevenueReport {
    let mau = game.avg_monthly_active_users.max(0.0);
    let estimated_monthly_revenue = mau * metrics.conversion_rate * metrics.arppu;
    let paying_users = (mau * metrics.conversion_rate).round() as u64;
    let monthly_units_sold = vary_baseline(
        game.units_sold as f64 / 12.0,
        settings.synthetic_months,
        &settings.variation,
        rng,
    );

    let real_series = series.filter(|s| !s.is_empty());

    let (projection_mode, monthly_revenue, monthly_labels, total_revenue) = match real_series {
        Some(series) => {
            let revenue = revenue_from_player_counts(series, metrics);
            let total: Usd = revenue.iter().sum();
            debug!(
                "Game {}: projected {} months from player series, total {:.2}",
                game.id,
                revenue.len(),
                total
            );
            (ProjectionMode::RealSeries, revenue, series.labels.clone(), total)
        }
        None => {
            let revenue = vary_baseline(
                estimated_monthly_revenue,
                settings.synthetic_months,
                &settings.variation,
                rng,
            );
            let labels = synthetic_labels(settings.synthetic_months);
            let total = game.reported_revenue.unwrap_or(0.0);
            (ProjectionMode::Synthetic, revenue, labels, total)
        }
    };

    RevenueReport {
        game_id: game.id,
        title: game.title.clone(),
        game_type: metrics.game_type,
        conversion_rate: metrics.conversion_rate,
        arppu: metrics.arppu,
        avg_monthly_active_users: mau,
        paying_users,
        estimated_monthly_revenue,
        total_revenue,
        total_units_sold: game.units_sold,
        monthly_revenue,
        monthly_units_sold,
        monthly_labels,
        projection_mode,
        external_series_id: game.external_series_id.clone(),
        player_series: real_series.cloned(),
    }
}

/// `count × conversion × arppu` for every monthly sample, in that order
pub fn revenue_from_player_counts(series: &PlayerSeries, metrics: &RevenueMetrics) -> Vec<Usd> {
    series
        .points
        .iter()
        .map(|point| {
            let paying_users = point.player_count as f64 * metrics.conversion_rate;
            paying_users * metrics.arppu
        })
        .collect()
}

fn vary_baseline<R: Rng + ?Sized>(
    baseline: f64,
    months: usize,
    variation: &VariationBounds,
    rng: &mut R,
) -> Vec<f64> {
    (0..months).map(|_| baseline * variation.sample(rng)).collect()
}

fn synthetic_labels(months: usize) -> Vec<String> {
    (0..months)
        .map(|i| match MONTH_LABELS.get(i) {
            Some(name) => name.to_string(),
            None => format!("Month {}", i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Genre, PlayerSeriesPoint};
    use crate::estimation::metrics::compute_metrics;
    use crate::estimation::series::normalize_points;
    use crate::estimation::types::GameType;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game(title: &str, genres: Vec<Genre>, mau: f64) -> GameRecord {
        GameRecord {
            genres,
            avg_monthly_active_users: mau,
            ..GameRecord::bare(9, title)
        }
    }

    fn series(counts: &[u64]) -> PlayerSeries {
        let points = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| PlayerSeriesPoint {
                timestamp: Utc.with_ymd_and_hms(2023, i as u32 + 1, 1, 0, 0, 0).unwrap(),
                player_count: count,
            })
            .collect();
        normalize_points(points)
    }

    fn fixed_settings() -> ModelSettings {
        ModelSettings {
            variation: VariationBounds::fixed(1.0),
            ..ModelSettings::default()
        }
    }

    #[test]
    fn test_synthetic_rpg_estimate() {
        let game = game("Lost Ark", vec![Genre::Rpg], 100_000.0);
        let metrics = compute_metrics(&game, None);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let report = synthesize(&game, &metrics, None, &fixed_settings(), &mut rng);

        assert_eq!(report.projection_mode, ProjectionMode::Synthetic);
        assert!((report.estimated_monthly_revenue - 337_500.0).abs() < 1e-6);
        assert_eq!(report.monthly_revenue.len(), 12);
        assert!(report
            .monthly_revenue
            .iter()
            .all(|m| (m - 337_500.0).abs() < 1e-6));
        assert_eq!(report.paying_users, 4_500);
        assert_eq!(report.monthly_labels.first().map(String::as_str), Some("Jan"));
        assert_eq!(report.total_revenue, 0.0);
    }

    #[test]
    fn test_synthetic_battle_royale_estimate() {
        let game = game("PUBG: Battlegrounds", vec![], 1_000_000.0);
        let metrics = compute_metrics(&game, None);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let report = synthesize(&game, &metrics, None, &ModelSettings::default(), &mut rng);

        assert_eq!(report.game_type, GameType::BattleRoyale);
        assert!((report.estimated_monthly_revenue - 14_400_000.0).abs() < 1e-3);
    }

    #[test]
    fn test_synthetic_months_vary_within_bounds() {
        let mut game = game("Lost Ark", vec![Genre::Rpg], 100_000.0);
        game.units_sold = 1_200;
        game.reported_revenue = Some(5_000_000.0);
        let metrics = compute_metrics(&game, None);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let report = synthesize(&game, &metrics, None, &ModelSettings::default(), &mut rng);

        let base = report.estimated_monthly_revenue;
        assert!(report
            .monthly_revenue
            .iter()
            .all(|m| *m >= base * 0.8 - 1e-6 && *m <= base * 1.2 + 1e-6));
        assert_eq!(report.monthly_units_sold.len(), 12);
        assert!(report
            .monthly_units_sold
            .iter()
            .all(|u| *u >= 80.0 - 1e-9 && *u <= 120.0 + 1e-9));
        assert_eq!(report.total_revenue, 5_000_000.0);
    }

    #[test]
    fn test_same_seed_reproduces_projection() {
        let game = game("Lost Ark", vec![Genre::Rpg], 100_000.0);
        let metrics = compute_metrics(&game, None);
        let settings = ModelSettings::default();

        let first = synthesize(&game, &metrics, None, &settings, &mut ChaCha8Rng::seed_from_u64(11));
        let second = synthesize(&game, &metrics, None, &settings, &mut ChaCha8Rng::seed_from_u64(11));

        assert_eq!(first, second);
    }

    #[test]
    fn test_real_series_overrides_reported_revenue() {
        let mut game = game("Lost Ark", vec![Genre::Rpg], 100_000.0);
        game.reported_revenue = Some(1.0);
        let metrics = compute_metrics(&game, None);
        let series = series(&[1_000, 2_000, 1_500]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let report = synthesize(&game, &metrics, Some(&series), &ModelSettings::default(), &mut rng);

        let expected: f64 = [1_000u64, 2_000, 1_500]
            .iter()
            .map(|&p| p as f64 * metrics.conversion_rate * metrics.arppu)
            .sum();
        assert_eq!(report.projection_mode, ProjectionMode::RealSeries);
        assert_eq!(report.monthly_revenue.len(), 3);
        assert!((report.total_revenue - expected).abs() < 1e-9);
        assert_eq!(report.monthly_labels, vec!["2023-01", "2023-02", "2023-03"]);
        // paying users still come from current MAU
        assert_eq!(report.paying_users, 4_500);
        assert!(report.player_series.is_some());
    }

    #[test]
    fn test_empty_series_falls_back_to_synthetic() {
        let game = game("Lost Ark", vec![Genre::Rpg], 100_000.0);
        let metrics = compute_metrics(&game, None);
        let empty = PlayerSeries::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let report = synthesize(&game, &metrics, Some(&empty), &ModelSettings::default(), &mut rng);

        assert_eq!(report.projection_mode, ProjectionMode::Synthetic);
        assert!(report.player_series.is_none());
    }

    #[test]
    fn test_zero_mau_and_units_give_zero_figures() {
        let game = game("Quiet Game", vec![Genre::Puzzle], 0.0);
        let metrics = compute_metrics(&game, None);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let report = synthesize(&game, &metrics, None, &ModelSettings::default(), &mut rng);

        assert_eq!(report.estimated_monthly_revenue, 0.0);
        assert_eq!(report.paying_users, 0);
        assert!(report.monthly_revenue.iter().all(|m| *m == 0.0));
        assert!(report.monthly_units_sold.iter().all(|u| *u == 0.0));
        assert_eq!(report.conversion_rate, 0.020);
        assert_eq!(report.arppu, 15.0);
    }
}
