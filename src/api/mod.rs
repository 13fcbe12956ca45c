pub mod catalog_client;
pub mod handlers;
pub mod models;
pub mod player_count_client;
pub mod routes;
pub mod sources;

pub use catalog_client::CatalogClient;
pub use player_count_client::SteamChartsClient;
pub use sources::{DeveloperRegistry, GameCatalog, PlayerCountProvider};
