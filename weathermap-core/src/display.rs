//! Display context for a single data point: bucket, night flag, icon and
//! background, plus local-time labels.

use serde::Serialize;

use crate::icon::{DEFAULT_ICON, icon_token};
use crate::model::{ConditionCode, DailyPoint, HourlyPoint, WeatherSnapshot};
use crate::time_context::{TimeOfDay, is_night, local_time, resolve_timezone, time_of_day_bucket};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayContext {
    pub time_of_day: TimeOfDay,
    pub is_night: bool,
    pub icon: &'static str,
    pub background: &'static str,
}

impl DisplayContext {
    /// Classify `timestamp` in `timezone` and pick the icon for the first
    /// condition, if any.
    pub fn for_point(timestamp: i64, conditions: &[ConditionCode], timezone: &str) -> Self {
        let time_of_day = time_of_day_bucket(timestamp, timezone);
        let night = is_night(timestamp, timezone);
        let icon = conditions
            .first()
            .map_or(DEFAULT_ICON, |c| icon_token(&c.category, night));

        Self {
            time_of_day,
            is_night: night,
            icon,
            background: time_of_day.background_key(),
        }
    }
}

impl WeatherSnapshot {
    pub fn current_display(&self) -> DisplayContext {
        DisplayContext::for_point(
            self.current.timestamp,
            &self.current.conditions,
            &self.timezone,
        )
    }
}

impl HourlyPoint {
    pub fn display(&self, timezone: &str) -> DisplayContext {
        DisplayContext::for_point(self.timestamp, &self.conditions, timezone)
    }
}

impl DailyPoint {
    pub fn display(&self, timezone: &str) -> DisplayContext {
        DisplayContext::for_point(self.timestamp, &self.conditions, timezone)
    }
}

/// Local-time label styles used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// "Thu 16 Nov"
    Date,
    /// "14:00"
    Time,
    /// "2 PM"
    Hour,
    /// "Thu 16"
    Weekday,
}

impl LabelStyle {
    fn pattern(self) -> &'static str {
        match self {
            LabelStyle::Date => "%a %d %b",
            LabelStyle::Time => "%H:%M",
            LabelStyle::Hour => "%-I %p",
            LabelStyle::Weekday => "%a %d",
        }
    }
}

/// Format `timestamp` in `timezone` (UTC if unknown).
pub fn format_local(timestamp: i64, timezone: &str, style: LabelStyle) -> String {
    local_time(timestamp, resolve_timezone(timezone))
        .format(style.pattern())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use crate::model::ConditionCategory;
    use rstest::rstest;

    const LONDON: &str = include_str!("../testdata/onecall_london.json");

    fn condition(category: ConditionCategory) -> ConditionCode {
        ConditionCode {
            id: 0,
            category,
            description: String::new(),
            icon: String::new(),
        }
    }

    #[test]
    fn clear_afternoon_in_london_is_day() {
        let snapshot = decode(LONDON.as_bytes()).unwrap();
        let context = snapshot.current_display();

        assert_eq!(
            context,
            DisplayContext {
                time_of_day: TimeOfDay::Day,
                is_night: false,
                icon: "ClearIcon",
                background: "Day",
            }
        );
    }

    #[test]
    fn hourly_points_use_their_own_timestamp() {
        let snapshot = decode(LONDON.as_bytes()).unwrap();
        let last = snapshot.hourly.last().unwrap();

        // 17:00 local, clear: evening bucket but not yet night.
        let context = last.display(&snapshot.timezone);
        assert_eq!(context.time_of_day, TimeOfDay::Evening);
        assert!(!context.is_night);
        assert_eq!(context.icon, "ClearIcon");
    }

    #[test]
    fn clear_night_gets_night_icon() {
        // 2023-11-16 22:00 UTC
        let ts = 1_700_172_000;
        let context =
            DisplayContext::for_point(ts, &[condition(ConditionCategory::Clear)], "Europe/London");

        assert_eq!(context.time_of_day, TimeOfDay::Night);
        assert!(context.is_night);
        assert_eq!(context.icon, "ClearNightIcon");
        assert_eq!(context.background, "Night");
    }

    #[test]
    fn first_condition_wins_and_empty_is_default() {
        let ts = 1_700_143_200;
        let conditions = [
            condition(ConditionCategory::Snow),
            condition(ConditionCategory::Clear),
        ];
        assert_eq!(
            DisplayContext::for_point(ts, &conditions, "UTC").icon,
            "SnowIcon"
        );
        assert_eq!(DisplayContext::for_point(ts, &[], "UTC").icon, DEFAULT_ICON);
    }

    #[rstest]
    #[case(LabelStyle::Date, "Thu 16 Nov")]
    #[case(LabelStyle::Time, "14:00")]
    #[case(LabelStyle::Hour, "2 PM")]
    #[case(LabelStyle::Weekday, "Thu 16")]
    fn labels(#[case] style: LabelStyle, #[case] expected: &str) {
        assert_eq!(format_local(1_700_143_200, "Europe/London", style), expected);
    }

    #[test]
    fn labels_follow_timezone() {
        assert_eq!(
            format_local(1_700_143_200, "Asia/Tokyo", LabelStyle::Time),
            "23:00"
        );
        assert_eq!(
            format_local(1_700_143_200, "Nowhere/Special", LabelStyle::Time),
            "14:00"
        );
    }
}
