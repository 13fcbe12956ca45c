use super::types::GameType;
use crate::domain::Genre;

const BATTLE_ROYALE_KEYWORDS: &[&str] = &[
    "pubg",
    "battlegrounds",
    "fortnite",
    "apex legends",
    "warzone",
    "battle royale",
    "fall guys",
    "naraka",
    "super people",
];

const PREMIUM_DLC_KEYWORDS: &[&str] = &[
    "the sims",
    "cities: skylines",
    "crusader kings",
    "europa universalis",
    "hearts of iron",
    "stellaris",
    "civilization",
    "euro truck simulator",
    "american truck simulator",
    "elder scrolls online",
];

const MOBA_KEYWORDS: &[&str] = &[
    "dota",
    "league of legends",
    "smite",
    "heroes of the storm",
    "deadlock",
    "predecessor",
];

/// Map a game onto its monetization archetype.
///
/// Categories are tested in priority order (battle royale, premium DLC, MOBA)
/// and the first hit wins; anything else is free-to-play.
pub fn classify(title: &str, genres: &[Genre]) -> GameType {
    let title = title.to_lowercase();

    if contains_any(&title, BATTLE_ROYALE_KEYWORDS) {
        GameType::BattleRoyale
    } else if contains_any(&title, PREMIUM_DLC_KEYWORDS) {
        GameType::PremiumDlc
    } else if is_moba(&title, genres) {
        GameType::Moba
    } else {
        GameType::FreeToPlay
    }
}

fn is_moba(title: &str, genres: &[Genre]) -> bool {
    genres.contains(&Genre::Moba) || contains_any(title, MOBA_KEYWORDS)
}

fn contains_any(title: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword))
}
