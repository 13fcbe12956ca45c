use colored::Colorize;

use crate::domain::GameSummary;
use crate::estimation::{ProjectionMode, RevenueReport};

/// Whole US dollars with thousands separators, e.g. `$1,234,568`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u128))
}

/// Rounded count with thousands separators
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(rounded.abs() as u128))
}

/// Fraction as a percentage with two decimals, e.g. `0.045` -> `4.50%`
pub fn format_percentage(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Terminal rendering of a report
pub fn render_report(report: &RevenueReport) -> String {
    let mut lines = vec![
        report.title.bold().to_string(),
        stat("Game ID", report.game_id.to_string()),
        stat("Game Type", report.game_type.label().cyan().to_string()),
    ];

    if let Some(series_id) = &report.external_series_id {
        lines.push(stat("Steam ID", series_id.clone()));
    }

    lines.extend([
        stat(
            "Estimated Monthly Revenue",
            format_currency(report.estimated_monthly_revenue)
                .green()
                .bold()
                .to_string(),
        ),
        stat(
            "Avg Monthly Active Users (MAU)",
            format_number(report.avg_monthly_active_users),
        ),
        stat("Conversion Rate", format_percentage(report.conversion_rate)),
        stat("Paying Users", format_number(report.paying_users as f64)),
        stat("ARPPU (per month)", format_currency(report.arppu)),
        stat(total_label(report.projection_mode), format_currency(report.total_revenue)),
        stat("Units Sold", format_number(report.total_units_sold as f64)),
        String::new(),
        "Monthly projection".bold().to_string(),
    ]);

    for (label, revenue) in report.monthly_labels.iter().zip(&report.monthly_revenue) {
        lines.push(format!("  {:<10} {:>16}", label, format_currency(*revenue)));
    }

    lines.join("\n")
}

/// One line per game: id, title, developers
pub fn render_game_list(games: &[GameSummary]) -> String {
    if games.is_empty() {
        return "No games found".yellow().to_string();
    }

    games
        .iter()
        .map(|game| {
            format!(
                "{:>8}  {}  {}",
                game.id.to_string().dimmed(),
                game.title.bold(),
                game.developer_names()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn total_label(mode: ProjectionMode) -> &'static str {
    match mode {
        ProjectionMode::RealSeries => "Total Revenue (player history)",
        ProjectionMode::Synthetic => "Total Revenue (API)",
    }
}

fn stat(label: &str, value: String) -> String {
    format!("  {:<32} {}", format!("{}:", label), value)
}
