//! Dates as the API writes them, e.g. `2015-05-21T14:24:03+00:00`.
//!
//! Use with `#[serde(with = "iso8601")]`, or `iso8601::option` for optional
//! fields.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::json_codec::error::CodecError;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

pub fn format(date: &DateTime<Utc>) -> String {
    date.format(FORMAT).to_string()
}

/// Accepts RFC 3339 as well as offsets written without a colon (`+0000`).
pub fn parse(input: &str) -> Result<DateTime<Utc>, CodecError> {
    DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::<FixedOffset>::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| CodecError::Date {
            input: input.to_string(),
            source,
        })
}

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = String::deserialize(deserializer)?;
    parse(&input).map_err(de::Error::custom)
}

pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_some(&super::format(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|input| super::parse(&input).map_err(de::Error::custom))
            .transpose()
    }
}
