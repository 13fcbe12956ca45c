use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::debug;
use serde_json::Value;

use crate::domain::{PlayerSeries, PlayerSeriesPoint};

/// Normalize a raw provider payload of `[timestamp, count]` pairs.
///
/// Returns `None` when the payload is missing or any element is not such a pair.
/// Timestamps may be epoch milliseconds or RFC 3339 / `YYYY-MM-DD` strings.
pub fn normalize(raw: Option<&Value>) -> Option<PlayerSeries> {
    let entries = raw?.as_array()?;

    let mut points = Vec::with_capacity(entries.len());
    for entry in entries {
        match parse_pair(entry) {
            Some(point) => points.push(point),
            None => {
                debug!("Rejecting player series: malformed entry {}", entry);
                return None;
            }
        }
    }

    Some(normalize_points(points))
}

/// Sort chronologically and keep the earliest sample of every calendar month
pub fn normalize_points(mut points: Vec<PlayerSeriesPoint>) -> PlayerSeries {
    points.sort_by_key(|p| p.timestamp);

    let mut series = PlayerSeries::default();
    let mut last_month: Option<(i32, u32)> = None;

    for point in points {
        let key = month_key(&point.timestamp);
        if last_month == Some(key) {
            continue;
        }
        last_month = Some(key);
        series.labels.push(month_label(key));
        series.points.push(point);
    }

    series
}

fn month_key(timestamp: &DateTime<Utc>) -> (i32, u32) {
    (timestamp.year(), timestamp.month())
}

fn month_label((year, month): (i32, u32)) -> String {
    format!("{:04}-{:02}", year, month)
}

fn parse_pair(entry: &Value) -> Option<PlayerSeriesPoint> {
    match entry.as_array()?.as_slice() {
        [timestamp, count] => Some(PlayerSeriesPoint {
            timestamp: parse_timestamp(timestamp)?,
            player_count: parse_count(count)?,
        }),
        _ => None,
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis)
        }
        Value::String(s) => parse_timestamp_text(s),
        _ => None,
    }
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn parse_count(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.round() as u64)
}
