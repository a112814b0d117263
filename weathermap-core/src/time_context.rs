//! Local time-of-day classification for display purposes.
//!
//! Both classifiers resolve a UNIX timestamp in an IANA timezone and never
//! fail: an unknown timezone falls back to UTC.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;

/// Coarse time-of-day bucket, used to pick a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket for a local civil hour (0-23). Minutes are ignored.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..12 => TimeOfDay::Morning,
            12..17 => TimeOfDay::Day,
            17..21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Name of the background asset for this bucket.
    pub fn background_key(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Day => "Day",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.background_key())
    }
}

/// Parse an IANA identifier, falling back to UTC.
pub fn resolve_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        tracing::debug!(timezone = name, "unrecognized timezone, falling back to UTC");
        Tz::UTC
    })
}

/// Wall-clock time of `timestamp` in `tz`.
///
/// Timestamps chrono cannot represent are clamped to the UNIX epoch.
pub fn local_time(timestamp: i64, tz: Tz) -> DateTime<Tz> {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(&tz)
}

pub fn time_of_day_bucket(timestamp: i64, timezone: &str) -> TimeOfDay {
    let local = local_time(timestamp, resolve_timezone(timezone));
    TimeOfDay::from_hour(local.hour())
}

/// Night is 18:00 up to (not including) 05:30 local time.
///
/// Deliberately not derived from [`time_of_day_bucket`]: 17:xx is evening but
/// not night, and 05:00-05:29 is morning but still night.
pub fn is_night(timestamp: i64, timezone: &str) -> bool {
    let local = local_time(timestamp, resolve_timezone(timezone));
    let (hour, minute) = (local.hour(), local.minute());
    hour >= 18 || hour < 5 || (hour == 5 && minute < 30)
}
