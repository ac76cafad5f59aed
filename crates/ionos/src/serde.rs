//! Serde and formatting helpers shared by the node configs.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, mapping empty input to `None` so that
/// optional query parameters and body fields are omitted instead of sent as
/// empty strings.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Formats a host-supplied timestamp for the cloud API's
/// `yyyy-MM-dd HH:mm:ss` filter convention. ISO-8601 input is reformatted;
/// anything else passes through verbatim.
pub fn provider_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Formats a host-supplied date for `yyyy-MM-dd` query parameters. Full
/// ISO-8601 timestamps are truncated to the date; anything else passes
/// through verbatim.
pub fn provider_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "empty_as_none")]
        value: Option<String>,
    }

    #[test]
    fn test_empty_as_none() {
        let holder: Holder = serde_json::from_value(json!({"value": ""})).unwrap();
        assert_eq!(holder.value, None);

        let holder: Holder = serde_json::from_value(json!({"value": "x"})).unwrap();
        assert_eq!(holder.value, Some("x".to_string()));

        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(holder.value, None);
    }

    #[test]
    fn test_provider_datetime_from_iso() {
        assert_eq!(
            provider_datetime("2024-03-01T08:15:30Z"),
            "2024-03-01 08:15:30"
        );
        assert_eq!(
            provider_datetime("2024-03-01T08:15:30+02:00"),
            "2024-03-01 08:15:30"
        );
    }

    #[test]
    fn test_provider_datetime_passthrough() {
        assert_eq!(
            provider_datetime("2024-03-01 08:15:30"),
            "2024-03-01 08:15:30"
        );
    }

    #[test]
    fn test_provider_date() {
        assert_eq!(provider_date("2024-03-01T08:15:30Z"), "2024-03-01");
        assert_eq!(provider_date("2024-03-01"), "2024-03-01");
        assert_eq!(provider_date("yesterday"), "yesterday");
    }
}
