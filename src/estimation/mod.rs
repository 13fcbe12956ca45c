pub mod classifier;
pub mod metrics;
pub mod projection;
pub mod series;
pub mod types;

pub use classifier::classify;
pub use metrics::compute_metrics;
pub use projection::synthesize;
pub use series::{normalize, normalize_points};
pub use types::{GameType, ProjectionMode, RevenueMetrics, RevenueReport, VariationBounds};
