use log::debug;

use super::classifier::classify;
use super::types::{GameType, RevenueMetrics};
use crate::config::genres::{DEFAULT_PROFILE, GenreProfile, profile_or_default};
use crate::config::studios::scale_multiplier;
use crate::domain::{DeveloperScale, GameRecord, Genre};

/// Conversion rate and ARPPU for a game.
///
/// Archetypes get fixed pairs. Free-to-play games average the genre table
/// over all their tags and scale ARPPU (never the conversion rate) by studio size.
/// A missing developer scale counts as neutral.
pub fn compute_metrics(game: &GameRecord, developer_scale: Option<&DeveloperScale>) -> RevenueMetrics {
    let game_type = classify(&game.title, &game.genres);

    if let Some(profile) = archetype_profile(game_type) {
        debug!("Game {} priced as archetype {}", game.id, game_type);
        return build_metrics(profile, game_type);
    }

    let average = average_genre_profile(&game.genres);
    let multiplier = scale_multiplier(developer_scale);
    debug!(
        "Game {}: {} genres, conversion {:.4}, base ARPPU {:.2}, studio x{:.2}",
        game.id,
        game.genres.len(),
        average.conversion_rate,
        average.arppu,
        multiplier
    );

    RevenueMetrics {
        conversion_rate: average.conversion_rate,
        arppu: average.arppu * multiplier,
        game_type: GameType::FreeToPlay,
    }
}

/// Fixed (conversion rate, ARPPU) of the monetization archetypes
pub fn archetype_profile(game_type: GameType) -> Option<GenreProfile> {
    match game_type {
        GameType::BattleRoyale => Some(GenreProfile::new(0.20, 72.0)),
        GameType::PremiumDlc => Some(GenreProfile::new(0.30, 60.0)),
        GameType::Moba => Some(GenreProfile::new(0.12, 60.0)),
        GameType::FreeToPlay => None,
    }
}

/// Arithmetic mean of both tables across the tags; defaults when there are none
pub fn average_genre_profile(genres: &[Genre]) -> GenreProfile {
    if genres.is_empty() {
        return DEFAULT_PROFILE;
    }

    let (conversion_sum, arppu_sum) = genres
        .iter()
        .map(|g| profile_or_default(*g))
        .fold((0.0, 0.0), |(c, a), p| (c + p.conversion_rate, a + p.arppu));

    let count = genres.len() as f64;
    GenreProfile::new(conversion_sum / count, arppu_sum / count)
}

fn build_metrics(profile: GenreProfile, game_type: GameType) -> RevenueMetrics {
    RevenueMetrics {
        conversion_rate: profile.conversion_rate,
        arppu: profile.arppu,
        game_type,
    }
}
