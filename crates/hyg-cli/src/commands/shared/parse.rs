use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::DeserializeOwned;

use hyg_core::enums::Collection;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_collection(raw: &str) -> anyhow::Result<Collection> {
    raw.parse::<Collection>().map_err(anyhow::Error::from)
}

/// Which end of a day a bare date stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// Parse `YYYY-MM-DD` (expanded to the start or end of that UTC day) or a full
/// RFC 3339 timestamp.
pub fn parse_date_bound(raw: &str, bound: DayBound) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {error}"))?;
    let time = match bound {
        DayBound::Start => NaiveTime::MIN,
        DayBound::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| anyhow::anyhow!("invalid end-of-day time"))?,
    };
    Ok(date.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use hyg_core::enums::{Collection, Role};

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let role: Role = parse_enum("admin", "role").expect("role should parse");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Role>("chef", "role").expect_err("should fail");
        assert!(err.to_string().contains("invalid role 'chef'"));
    }

    #[test]
    fn parses_collections() {
        assert_eq!(parse_collection("journal").unwrap(), Collection::Journal);
        assert!(parse_collection("users").is_err());
    }

    #[test]
    fn bare_dates_cover_the_whole_day() {
        let start = parse_date_bound("2026-03-01", DayBound::Start).unwrap();
        let end = parse_date_bound("2026-03-01", DayBound::End).unwrap();
        assert_eq!(start.to_rfc3339(), "2026-03-01T00:00:00+00:00");
        assert_eq!((end - start).num_milliseconds(), 86_399_999);
    }

    #[test]
    fn rfc3339_is_converted_to_utc() {
        let dt = parse_date_bound("2026-03-01T10:00:00+02:00", DayBound::Start).unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-01T08:00:00+00:00");
    }
}
