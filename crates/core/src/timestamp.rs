//! Canonical instant normalization.
//!
//! Upstream documents carry creation timestamps in one of three wire shapes:
//! an ISO-8601 string, a numeric epoch in milliseconds, or a
//! `{seconds, nanos}` object. Everything is normalized to a single
//! `DateTime<Utc>` here, at the decode boundary, so no comparison or
//! grouping code ever branches on representation. A shape that cannot be
//! normalized is a decode failure for the whole record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, de};

use crate::error::{DomainError, DomainResult};

/// Wire shapes accepted for record timestamps.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Millis(i64),
    Text(String),
    Seconds {
        seconds: i64,
        #[serde(default)]
        nanos: u32,
    },
}

fn from_raw(raw: &RawInstant) -> Option<DateTime<Utc>> {
    match raw {
        RawInstant::Millis(ms) => Utc.timestamp_millis_opt(*ms).single(),
        RawInstant::Seconds { seconds, nanos } => Utc.timestamp_opt(*seconds, *nanos).single(),
        RawInstant::Text(s) => from_text(s),
    }
}

fn from_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Offset-less date-times are taken as UTC.
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&ndt));
    }

    // Date-only documents mean midnight UTC.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// Parse a caller-supplied ISO-8601 date or date-time string.
pub fn parse_instant(s: &str) -> DomainResult<DateTime<Utc>> {
    from_text(s).ok_or_else(|| DomainError::validation(format!("unrecognized instant: {s}")))
}

/// Deserialize a required record timestamp from any accepted wire shape.
pub fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawInstant::deserialize(deserializer)?;
    from_raw(&raw).ok_or_else(|| de::Error::custom(format!("unrecognized instant: {raw:?}")))
}

/// Deserialize an optional record timestamp; `null` and absent are `None`.
pub fn deserialize_instant_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawInstant>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => from_raw(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unrecognized instant: {raw:?}"))),
    }
}
