pub mod chart;
pub mod display;

pub use chart::{ChartData, build_chart, missing_chart_reason};
pub use display::{format_currency, format_number, format_percentage, render_game_list, render_report};
