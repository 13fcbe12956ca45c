pub mod genres;
pub mod settings;
pub mod studios;

pub use settings::AppConfig;
