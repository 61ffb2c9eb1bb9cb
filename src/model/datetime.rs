use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const DATE_INPUT_FMT: &str = "%Y-%m-%d";
pub const TIME_INPUT_FMT: &str = "%H:%M";

/// Serde support for the API's timestamp format: RFC 3339 with exactly
/// millisecond precision and a `Z` suffix, e.g. `2025-06-01T18:30:00.000Z`.
/// Incoming values may carry any RFC 3339 offset and are normalized to UTC.
pub mod rfc3339_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        time: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        time.to_rfc3339_opts(SecondsFormat::Millis, true)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&raw).map_err(D::Error::custom)?;
        Ok(time.with_timezone(&Utc))
    }
}

/// Combines the form's separate date and time inputs into the single UTC
/// timestamp the events API expects.
pub fn compose_event_date(date: &str, time: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_INPUT_FMT)?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_INPUT_FMT)?;
    Ok(date.and_time(time).and_utc())
}
