//! ISO-8601 event timestamps.
//!
//! Timestamps arrive as strings in a handful of ISO-8601 shapes. Offset-aware
//! values keep their original offset, and a `Z` suffix stays `Z`, so the
//! serialized form matches the input.
//! Values without an offset stay naive; no offset is invented for them.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Offset-aware layouts tried after RFC 3339
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

/// Layouts without an offset
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Point in time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTime {
    /// Timestamp written in UTC with the `Z` designator
    Utc(DateTime<Utc>),
    /// Timestamp that carried a numeric UTC offset (`±HH:MM`, `±HHMM`)
    Zoned(DateTime<FixedOffset>),
    /// Timestamp without offset information
    Naive(NaiveDateTime),
}

impl EventTime {
    /// Parse an ISO-8601 timestamp.
    ///
    /// Accepts RFC 3339, `±HHMM` offsets, naive date-times with optional
    /// seconds and fractions, and bare dates (taken as midnight).
    ///
    /// # Examples
    ///
    /// ```
    /// use nore_core::models::EventTime;
    ///
    /// let ts = EventTime::parse("2025-11-14T10:30:00-05:00").unwrap();
    /// assert_eq!(ts.offset().unwrap().local_minus_utc(), -5 * 3600);
    /// assert_eq!(ts.to_iso_string(), "2025-11-14T10:30:00-05:00");
    /// ```
    pub fn parse(input: &str) -> Result<Self, chrono::ParseError> {
        let rfc_err = match DateTime::parse_from_rfc3339(input) {
            Ok(dt) if input.ends_with(['Z', 'z']) => {
                return Ok(EventTime::Utc(dt.with_timezone(&Utc)))
            }
            Ok(dt) => return Ok(EventTime::Zoned(dt)),
            Err(e) => e,
        };

        for fmt in ZONED_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(input, fmt) {
                return Ok(EventTime::Zoned(dt));
            }
        }

        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
                return Ok(EventTime::Naive(dt));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(EventTime::Naive(midnight));
            }
        }

        Err(rfc_err)
    }

    /// UTC offset, if the source timestamp carried one.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            EventTime::Utc(dt) => Some(dt.offset().fix()),
            EventTime::Zoned(dt) => Some(*dt.offset()),
            EventTime::Naive(_) => None,
        }
    }

    /// Wall-clock date and time as written in the source.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            EventTime::Utc(dt) => dt.naive_utc(),
            EventTime::Zoned(dt) => dt.naive_local(),
            EventTime::Naive(dt) => *dt,
        }
    }

    /// Canonical ISO-8601 rendering.
    ///
    /// Fractional seconds are printed only when non-zero. UTC values written
    /// with `Z` keep it; an explicit `+00:00` stays `+00:00`.
    pub fn to_iso_string(&self) -> String {
        match self {
            EventTime::Utc(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            EventTime::Zoned(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            EventTime::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

impl FromStr for EventTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventTime::parse(s)
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}
