//! Backend instants.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// A backend instant.
///
/// The backend serializes dates either as epoch milliseconds or as text
/// (RFC 3339, or `YYYY-MM-DD HH:MM:SS` without an offset, read as UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(pub DateTime<Utc>);

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

impl Timestamp {
    /// Parse the textual forms the backend emits.
    ///
    /// # Errors
    /// Returns a description of the input when no known format matches.
    pub fn parse(text: &str) -> Result<Self, String> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(parsed.with_timezone(&Utc)));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|naive| Self(naive.and_utc()))
            .ok_or_else(|| format!("unrecognised timestamp `{text}`"))
    }

    /// An instant from epoch milliseconds; `None` when out of range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Millis(i64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Millis(millis) => Self::from_millis(millis)
                .ok_or_else(|| de::Error::custom(format!("timestamp {millis} out of range"))),
            Wire::Text(text) => Self::parse(&text).map_err(de::Error::custom),
        }
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y-%m-%d %H:%M:%S").to_string() }
    }
}
