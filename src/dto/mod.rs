pub mod items;
pub mod wishlists;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub const MAX_NAME_LEN: usize = 64;

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date '{raw}', expected YYYY-MM-DD"))
        }),
    }
}

/// Integers may arrive as JSON numbers or as numeric strings (HTML form values).
pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, got {value}")))
}

pub(crate) fn decode<T: DeserializeOwned>(kind: &str, body: Value) -> AppResult<T> {
    serde_json::from_value(body)
        .map_err(|err| AppError::BadRequest(format!("Invalid {kind}: {err}")))
}

pub(crate) fn require_name(kind: &str, field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Invalid {kind}: {field} must not be empty"
        )));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Invalid {kind}: {field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let expected = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        assert_eq!(parse_date("2023-10-15"), Some(expected));
        assert_eq!(parse_date("2023-10-15T08:30:00.000Z"), Some(expected));
        assert_eq!(parse_date(" 2023-10-15 "), Some(expected));
        assert_eq!(parse_date("15/10/2023"), None);
    }

    #[test]
    fn rejects_blank_and_overlong_names() {
        assert_eq!(require_name("Wishlist", "name", "  home ").unwrap(), "home");
        assert!(require_name("Wishlist", "name", "   ").is_err());
        assert!(require_name("Wishlist", "name", &"x".repeat(65)).is_err());
    }
}
