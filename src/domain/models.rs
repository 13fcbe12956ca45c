use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genre tag as published by the game catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Indie,
    Action,
    Adventure,
    Rpg,
    Sports,
    Racing,
    Puzzle,
    QuizAndTrivia,
    Strategy,
    HorrorAndSurvival,
    Platformer,
    Fighting,
    BeatEmUp,
    Music,
    Shooter,
    Pinball,
    Arcade,
    CardAndBoardGame,
    PointAndClick,
    Tactical,
    VisualNovel,
    Moba,
    #[serde(other)]
    Unknown,
}

impl Genre {
    /// Parse a catalog tag, case-insensitively. Tags the catalog adds later map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_uppercase().as_str() {
            "INDIE" => Genre::Indie,
            "ACTION" => Genre::Action,
            "ADVENTURE" => Genre::Adventure,
            "RPG" => Genre::Rpg,
            "SPORTS" => Genre::Sports,
            "RACING" => Genre::Racing,
            "PUZZLE" => Genre::Puzzle,
            "QUIZ_AND_TRIVIA" => Genre::QuizAndTrivia,
            "STRATEGY" => Genre::Strategy,
            "HORROR_AND_SURVIVAL" => Genre::HorrorAndSurvival,
            "PLATFORMER" => Genre::Platformer,
            "FIGHTING" => Genre::Fighting,
            "BEAT_EM_UP" => Genre::BeatEmUp,
            "MUSIC" => Genre::Music,
            "SHOOTER" => Genre::Shooter,
            "PINBALL" => Genre::Pinball,
            "ARCADE" => Genre::Arcade,
            "CARD_AND_BOARD_GAME" => Genre::CardAndBoardGame,
            "POINT_AND_CLICK" => Genre::PointAndClick,
            "TACTICAL" => Genre::Tactical,
            "VISUAL_NOVEL" => Genre::VisualNovel,
            "MOBA" => Genre::Moba,
            _ => Genre::Unknown,
        }
    }
}

/// Developer reference attached to a game; the first one is the primary studio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperRef {
    pub slug: String,
    pub name: String,
}

/// Game data as seen by the estimation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: i64,
    pub title: String,
    pub genres: Vec<Genre>,
    pub developers: Vec<DeveloperRef>,
    pub avg_monthly_active_users: f64,
    pub reported_revenue: Option<f64>,
    pub units_sold: u64,
    pub external_series_id: Option<String>,
}

impl GameRecord {
    /// A record carrying only identity; every other field is unknown
    pub fn bare(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            genres: Vec::new(),
            developers: Vec::new(),
            avg_monthly_active_users: 0.0,
            reported_revenue: None,
            units_sold: 0,
            external_series_id: None,
        }
    }

    pub fn primary_developer(&self) -> Option<&DeveloperRef> {
        self.developers.first()
    }
}

/// Light listing entry, enough to select a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: i64,
    pub title: String,
    pub developers: Vec<DeveloperRef>,
}

impl GameSummary {
    pub fn developer_names(&self) -> String {
        self.developers
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Studio headcount range, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeesBucket {
    UpTo10,
    UpTo50,
    UpTo100,
    UpTo250,
    UpTo500,
    UpTo1000,
    UpTo5000,
    UpTo10000,
    Over10000,
}

impl EmployeesBucket {
    pub const ALL: [EmployeesBucket; 9] = [
        EmployeesBucket::UpTo10,
        EmployeesBucket::UpTo50,
        EmployeesBucket::UpTo100,
        EmployeesBucket::UpTo250,
        EmployeesBucket::UpTo500,
        EmployeesBucket::UpTo1000,
        EmployeesBucket::UpTo5000,
        EmployeesBucket::UpTo10000,
        EmployeesBucket::Over10000,
    ];

    /// Parse the registry's range text. Accepts both "1 - 10" and "1-10".
    pub fn parse(text: &str) -> Option<Self> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL.into_iter().find(|bucket| bucket.as_str() == compact)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeesBucket::UpTo10 => "1-10",
            EmployeesBucket::UpTo50 => "11-50",
            EmployeesBucket::UpTo100 => "51-100",
            EmployeesBucket::UpTo250 => "101-250",
            EmployeesBucket::UpTo500 => "251-500",
            EmployeesBucket::UpTo1000 => "501-1000",
            EmployeesBucket::UpTo5000 => "1001-5000",
            EmployeesBucket::UpTo10000 => "5001-10000",
            EmployeesBucket::Over10000 => "10001+",
        }
    }
}

impl fmt::Display for EmployeesBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Developer size as reported by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperScale {
    pub employees_bucket: EmployeesBucket,
}

impl DeveloperScale {
    pub fn new(employees_bucket: EmployeesBucket) -> Self {
        Self { employees_bucket }
    }
}

/// One player-count sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub player_count: u64,
}

/// Player counts reduced to one sample per calendar month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeries {
    pub points: Vec<PlayerSeriesPoint>,
    pub labels: Vec<String>,
}

impl PlayerSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn player_counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.player_count).collect()
    }
}
