//! Lenient field deserializers for backend payloads.
//!
//! The upstream API hands out records accumulated over years of manual data
//! entry: prices arrive as numbers or numeric strings, thresholds are
//! sometimes absent, timestamps come in more than one format. The engine's
//! contract is to default rather than fail, so each helper maps every
//! malformed shape to a neutral value (`0`, `0.0`, `None`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional timestamp, accepting several formats.
///
/// Missing, null, or unparsable input becomes `None`, which downstream
/// filters treat as "matches no month or window".
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_datetime))
}

/// Parse a timestamp string: RFC 3339, then `%Y-%m-%dT%H:%M:%S`, then
/// `%Y-%m-%d %H:%M:%S`, then a bare date (midnight UTC).
pub fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Deserialize a money/number field: JSON number, numeric string, or
/// missing/null/garbage → `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, f64_of))
}

/// Deserialize a count field: JSON integer, float (truncated), numeric
/// string, or missing/null/garbage → `0`.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0, i64_of))
}

fn f64_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn i64_of(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .unwrap_or_else(|_| s.parse::<f64>().unwrap_or(0.0) as i64)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339_and_legacy_formats() {
        let rfc = parse_datetime("2026-03-14T09:30:00Z").unwrap();
        assert_eq!(rfc.hour(), 9);

        let legacy = parse_datetime("2026-03-14 09:30:00").unwrap();
        assert_eq!(legacy, parse_datetime("2026-03-14T09:30:00").unwrap());

        let date_only = parse_datetime("2026-03-14").unwrap();
        assert_eq!(date_only.hour(), 0);
    }

    #[test]
    fn garbage_timestamp_is_none() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("  "), None);
        assert_eq!(parse_datetime("14/03/2026"), None);
        assert_eq!(parse_datetime("soon"), None);
    }

    #[test]
    fn numbers_survive_string_encoding() {
        assert_eq!(f64_of(&serde_json::json!(1500.5)), 1500.5);
        assert_eq!(f64_of(&serde_json::json!("1500.5")), 1500.5);
        assert_eq!(f64_of(&serde_json::json!("n/a")), 0.0);
        assert_eq!(f64_of(&serde_json::json!(null)), 0.0);

        assert_eq!(i64_of(&serde_json::json!(7)), 7);
        assert_eq!(i64_of(&serde_json::json!("7")), 7);
        assert_eq!(i64_of(&serde_json::json!("7.9")), 7);
        assert_eq!(i64_of(&serde_json::json!([])), 0);
    }
}
