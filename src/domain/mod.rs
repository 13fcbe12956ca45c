pub mod models;
pub mod responses;

pub use models::{
    DeveloperRef, DeveloperScale, EmployeesBucket, GameRecord, GameSummary, Genre, PlayerSeries,
    PlayerSeriesPoint,
};
