use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::models::{DeveloperRef, DeveloperScale, EmployeesBucket, GameRecord, GameSummary, Genre};

// --- Game catalog API response structures ---

#[derive(Debug, Deserialize, Serialize)]
pub struct GenreInfo {
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeveloperInfo {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

/// Raw game payload, shared by list, search and detail endpoints
#[derive(Debug, Deserialize, Serialize)]
pub struct GameResponse {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genres: Option<Vec<GenreInfo>>,
    #[serde(default)]
    pub developers: Option<Vec<DeveloperInfo>>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_monthly_active_user: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub units_sold: Option<f64>,
    #[serde(default, alias = "steamId")]
    pub steam_id: Value,
}

impl GameResponse {
    pub fn into_record(self) -> GameRecord {
        let genres = Self::collect_genres(self.genres.as_deref());
        let external_series_id = Self::series_id(&self.steam_id);

        GameRecord {
            id: self.id,
            title: self.title,
            genres,
            developers: Self::collect_developers(self.developers),
            avg_monthly_active_users: non_negative(self.avg_monthly_active_user),
            reported_revenue: self.revenue.filter(|r| *r > 0.0),
            units_sold: non_negative(self.units_sold).round() as u64,
            external_series_id,
        }
    }

    pub fn into_summary(self) -> GameSummary {
        GameSummary {
            id: self.id,
            title: self.title,
            developers: Self::collect_developers(self.developers),
        }
    }

    fn collect_genres(genres: Option<&[GenreInfo]>) -> Vec<Genre> {
        let mut collected: Vec<Genre> = Vec::new();
        for info in genres.unwrap_or_default() {
            let genre = Genre::from_tag(&info.value);
            // Unknown tags stay distinct entries so each one counts toward the average
            if genre == Genre::Unknown || !collected.contains(&genre) {
                collected.push(genre);
            }
        }
        collected
    }

    fn collect_developers(developers: Option<Vec<DeveloperInfo>>) -> Vec<DeveloperRef> {
        developers
            .unwrap_or_default()
            .into_iter()
            .map(|d| DeveloperRef {
                slug: d.slug,
                name: d.name,
            })
            .collect()
    }

    fn series_id(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// `GET /games/` body
#[derive(Debug, Deserialize, Serialize)]
pub struct GameListResponse {
    #[serde(default)]
    pub results: Vec<GameResponse>,
}

/// `GET /search/` body; results are nested under `game`
#[derive(Debug, Deserialize, Serialize)]
pub struct GameSearchResponse {
    #[serde(default)]
    pub game: Option<GameListResponse>,
}

impl GameSearchResponse {
    pub fn into_results(self) -> Vec<GameResponse> {
        self.game.map(|g| g.results).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeveloperResponse {
    #[serde(default)]
    pub employees_number: Option<String>,
}

/// `GET /companies/developers/?slug=` body
#[derive(Debug, Deserialize, Serialize)]
pub struct DeveloperListResponse {
    #[serde(default)]
    pub results: Vec<DeveloperResponse>,
}

impl DeveloperListResponse {
    /// Scale of the first matching developer, if its headcount range is recognised
    pub fn first_scale(&self) -> Option<DeveloperScale> {
        self.results
            .first()
            .and_then(|d| d.employees_number.as_deref())
            .and_then(EmployeesBucket::parse)
            .map(DeveloperScale::new)
    }
}

/// Accepts a JSON number or a numeric string; anything else is unknown
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_detail_maps_to_record() {
        let json = r#"{
            "id": 42,
            "title": "Path of Exile",
            "genres": [{"value": "RPG"}, {"value": "action"}, {"value": "RPG"}],
            "developers": [{"slug": "grinding-gear-games", "name": "Grinding Gear Games"}],
            "avg_monthly_active_user": 150000,
            "revenue": 0,
            "units_sold": 1200,
            "steam_id": 238960
        }"#;

        let response: GameResponse = serde_json::from_str(json).unwrap();
        let record = response.into_record();

        assert_eq!(record.genres, vec![Genre::Rpg, Genre::Action]);
        assert_eq!(record.primary_developer().unwrap().slug, "grinding-gear-games");
        assert_eq!(record.avg_monthly_active_users, 150000.0);
        assert_eq!(record.reported_revenue, None);
        assert_eq!(record.units_sold, 1200);
        assert_eq!(record.external_series_id.as_deref(), Some("238960"));
    }

    #[test]
    fn test_sparse_game_detail_uses_unknowns() {
        let response: GameResponse = serde_json::from_str(r#"{"id": 7, "title": "Mystery"}"#).unwrap();
        let record = response.into_record();

        assert!(record.genres.is_empty());
        assert!(record.developers.is_empty());
        assert_eq!(record.avg_monthly_active_users, 0.0);
        assert_eq!(record.units_sold, 0);
        assert_eq!(record.external_series_id, None);
    }

    #[test]
    fn test_numeric_strings_and_junk_do_not_lose_the_record() {
        let json = r#"{
            "id": 1,
            "title": "Lost Ark",
            "genres": [{"value": "RPG"}],
            "avg_monthly_active_user": 100000,
            "revenue": "1234.50",
            "units_sold": {"approx": 10},
            "steam_id": "1599340"
        }"#;

        let record = serde_json::from_str::<GameResponse>(json).unwrap().into_record();

        assert_eq!(record.avg_monthly_active_users, 100000.0);
        assert_eq!(record.genres, vec![Genre::Rpg]);
        assert_eq!(record.reported_revenue, Some(1234.5));
        assert_eq!(record.units_sold, 0);
        assert_eq!(record.external_series_id.as_deref(), Some("1599340"));
    }

    #[test]
    fn test_string_audience_and_null_fields() {
        let json = r#"{"id": 2, "title": "X", "avg_monthly_active_user": " 2500 ", "revenue": null, "units_sold": "n/a"}"#;

        let record = serde_json::from_str::<GameResponse>(json).unwrap().into_record();

        assert_eq!(record.avg_monthly_active_users, 2500.0);
        assert_eq!(record.reported_revenue, None);
        assert_eq!(record.units_sold, 0);
    }

    #[test]
    fn test_search_results_are_nested_under_game() {
        let json = r#"{"game": {"results": [{"id": 1, "title": "Dota 2"}]}}"#;
        let response: GameSearchResponse = serde_json::from_str(json).unwrap();
        let results = response.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dota 2");

        let empty: GameSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_results().is_empty());
    }

    #[test]
    fn test_developer_scale_from_registry() {
        let json = r#"{"results": [{"employees_number": "1001 - 5000"}]}"#;
        let response: DeveloperListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.first_scale(),
            Some(DeveloperScale::new(EmployeesBucket::UpTo5000))
        );

        let unknown: DeveloperListResponse =
            serde_json::from_str(r#"{"results": [{"employees_number": null}]}"#).unwrap();
        assert_eq!(unknown.first_scale(), None);
    }
}
