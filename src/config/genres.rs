use crate::domain::Genre;

/// Monetization profile of a free-to-play genre
///
/// Conversion rate is the share of monthly active users that pay at all;
/// ARPPU is what one of those paying users spends per month (USD).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreProfile {
    pub conversion_rate: f64,
    pub arppu: f64,
}

impl GenreProfile {
    pub const fn new(conversion_rate: f64, arppu: f64) -> Self {
        Self {
            conversion_rate,
            arppu,
        }
    }
}

/// Used for any genre missing from the table, and for games without genres
pub const DEFAULT_PROFILE: GenreProfile = GenreProfile::new(0.030, 40.0);

/// Genre lookup for the free-to-play model. `Moba` is absent: MOBA games are
/// priced as an archetype and never reach this table.
pub fn genre_profile(genre: Genre) -> Option<GenreProfile> {
    let profile = match genre {
        Genre::Indie => GenreProfile::new(0.025, 20.0),
        Genre::Action => GenreProfile::new(0.035, 45.0),
        Genre::Adventure => GenreProfile::new(0.030, 35.0),
        Genre::Rpg => GenreProfile::new(0.045, 75.0),
        Genre::Sports => GenreProfile::new(0.040, 60.0),
        Genre::Racing => GenreProfile::new(0.035, 45.0),
        Genre::Puzzle => GenreProfile::new(0.020, 15.0),
        Genre::QuizAndTrivia => GenreProfile::new(0.015, 10.0),
        Genre::Strategy => GenreProfile::new(0.050, 70.0),
        Genre::HorrorAndSurvival => GenreProfile::new(0.030, 35.0),
        Genre::Platformer => GenreProfile::new(0.020, 20.0),
        Genre::Fighting => GenreProfile::new(0.040, 50.0),
        Genre::BeatEmUp => GenreProfile::new(0.025, 25.0),
        Genre::Music => GenreProfile::new(0.020, 20.0),
        Genre::Shooter => GenreProfile::new(0.040, 55.0),
        Genre::Pinball => GenreProfile::new(0.015, 10.0),
        Genre::Arcade => GenreProfile::new(0.020, 15.0),
        Genre::CardAndBoardGame => GenreProfile::new(0.060, 65.0),
        Genre::PointAndClick => GenreProfile::new(0.020, 20.0),
        Genre::Tactical => GenreProfile::new(0.045, 60.0),
        Genre::VisualNovel => GenreProfile::new(0.025, 30.0),
        Genre::Moba | Genre::Unknown => return None,
    };
    Some(profile)
}

/// Table entry, falling back to [`DEFAULT_PROFILE`]
pub fn profile_or_default(genre: Genre) -> GenreProfile {
    genre_profile(genre).unwrap_or(DEFAULT_PROFILE)
}
