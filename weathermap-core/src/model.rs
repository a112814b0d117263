use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// One decoded One Call response.
///
/// Built only by [`crate::decode`]; nothing mutates it afterwards. A new
/// fetch produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone identifier, e.g. "Europe/London".
    pub timezone: String,
    pub timezone_offset_seconds: Option<i64>,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}

impl WeatherSnapshot {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// UNIX seconds.
    pub timestamp: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub pressure: i64,
    pub humidity: i64,
    pub dew_point: f64,
    pub uv_index: f64,
    pub cloud_cover_percent: i64,
    pub visibility_meters: i64,
    pub wind_speed: f64,
    pub wind_direction_deg: i64,
    pub wind_gust: Option<f64>,
    /// Never empty.
    pub conditions: Vec<ConditionCode>,
    pub precipitation_probability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    pub timestamp: i64,
    pub temperature: f64,
    pub conditions: Vec<ConditionCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub timestamp: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub moonrise: i64,
    pub moonset: i64,
    pub moon_phase: f64,
    pub summary: Option<String>,
    pub temperature: DayTemperatureProfile,
    pub feels_like: FeelsLikeProfile,
    pub pressure: i64,
    pub humidity: i64,
    pub dew_point: f64,
    pub wind_speed: f64,
    pub wind_direction_deg: i64,
    pub wind_gust: f64,
    pub conditions: Vec<ConditionCode>,
    pub cloud_cover_percent: i64,
    pub precipitation_probability: f64,
    pub uv_index: f64,
    pub rain_volume_mm: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayTemperatureProfile {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
    pub evening: f64,
    pub morning: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeelsLikeProfile {
    pub day: f64,
    pub night: f64,
    pub evening: f64,
    pub morning: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionCode {
    pub id: i64,
    pub category: ConditionCategory,
    /// Free text from the provider, e.g. "light rain".
    pub description: String,
    pub icon: String,
}

/// Coarse weather classification, the `main` field on the wire.
///
/// Provider strings outside the known set are kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Atmosphere,
    Drizzle,
    Snow,
    Mist,
    Unknown(String),
}

impl ConditionCategory {
    /// Map a provider string; exact, case-sensitive match.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Clear" => ConditionCategory::Clear,
            "Clouds" => ConditionCategory::Clouds,
            "Rain" => ConditionCategory::Rain,
            "Thunderstorm" => ConditionCategory::Thunderstorm,
            "Atmosphere" => ConditionCategory::Atmosphere,
            "Drizzle" => ConditionCategory::Drizzle,
            "Snow" => ConditionCategory::Snow,
            "Mist" => ConditionCategory::Mist,
            other => ConditionCategory::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConditionCategory::Clear => "Clear",
            ConditionCategory::Clouds => "Clouds",
            ConditionCategory::Rain => "Rain",
            ConditionCategory::Thunderstorm => "Thunderstorm",
            ConditionCategory::Atmosphere => "Atmosphere",
            ConditionCategory::Drizzle => "Drizzle",
            ConditionCategory::Snow => "Snow",
            ConditionCategory::Mist => "Mist",
            ConditionCategory::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ConditionCategory::Unknown(_))
    }

    /// Every category except `Unknown`.
    pub fn known() -> &'static [ConditionCategory] {
        &KNOWN_CATEGORIES
    }
}

static KNOWN_CATEGORIES: [ConditionCategory; 8] = [
    ConditionCategory::Clear,
    ConditionCategory::Clouds,
    ConditionCategory::Rain,
    ConditionCategory::Thunderstorm,
    ConditionCategory::Atmosphere,
    ConditionCategory::Drizzle,
    ConditionCategory::Snow,
    ConditionCategory::Mist,
];

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_roundtrip() {
        for category in ConditionCategory::known() {
            assert_eq!(ConditionCategory::from_wire(category.as_str()), *category);
            assert!(category.is_known());
        }
    }

    #[test]
    fn unknown_category_keeps_raw_string() {
        let category = ConditionCategory::from_wire("Tornado");
        assert_eq!(category, ConditionCategory::Unknown("Tornado".to_string()));
        assert_eq!(category.to_string(), "Tornado");
        assert!(!category.is_known());
    }

    #[test]
    fn category_match_is_case_sensitive() {
        assert_eq!(
            ConditionCategory::from_wire("clear"),
            ConditionCategory::Unknown("clear".to_string())
        );
    }
}
