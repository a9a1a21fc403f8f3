// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Millisecond-precision timestamps.
//!
//! Issue timestamps are kept at millisecond resolution so that a value read
//! back from JSON compares equal to the stored instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Naive date-time layouts accepted in filters, read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Returns the current time truncated to milliseconds.
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Truncates an instant to millisecond precision.
pub fn truncate(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(3)
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a user-supplied date into a millisecond instant.
///
/// Accepts RFC 3339, naive date-times (as UTC) and bare dates (UTC midnight).
/// Returns `None` for anything else.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(truncate(dt.with_timezone(&Utc)));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(truncate(naive.and_utc()));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter writing timestamps in the millisecond wire format.
pub mod millis {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
