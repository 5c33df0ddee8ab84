//! Timestamp (de)serialization for the public JSON format.
//!
//! Timestamps are written as `YYYY-MM-DDTHH:MM:SS[.fff]` and always mean UTC. On input an
//! explicit RFC 3339 offset is also accepted and converted to UTC, so no caller ever has to
//! compensate for a zone mismatch.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const NAIVE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a timestamp with or without an offset; values without one are taken as UTC.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(value, NAIVE_INPUT_FORMAT).map(|n| n.and_utc()),
    }
}

pub fn format_utc(value: &DateTime<Utc>) -> String {
    value.format(OUTPUT_FORMAT).to_string()
}

/// `#[serde(with = "utc")]` for required timestamps.
pub mod utc {
    use super::*;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_utc(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_utc(&raw).map_err(de::Error::custom)
    }
}

/// `#[serde(default, with = "utc_option")]` for timestamps a client may omit.
pub mod utc_option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&format_utc(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|raw| parse_utc(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
