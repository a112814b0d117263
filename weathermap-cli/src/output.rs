use serde::Serialize;
use std::fmt::Write;
use weathermap_core::{
    ConditionCode, DisplayContext, LabelStyle, Place, Units, WeatherSnapshot, format_local,
};

#[derive(Serialize)]
struct SnapshotReport<'a> {
    snapshot: &'a WeatherSnapshot,
    display: DisplayContext,
}

pub fn render_json(snapshot: &WeatherSnapshot) -> anyhow::Result<String> {
    let report = SnapshotReport {
        snapshot,
        display: snapshot.current_display(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn description(conditions: &[ConditionCode]) -> &str {
    conditions.first().map_or("-", |c| c.description.as_str())
}

/// Plain-text report: current conditions, then hourly and daily forecasts.
pub fn render_snapshot(
    label: &str,
    snapshot: &WeatherSnapshot,
    hours: usize,
    days: usize,
    units: Units,
) -> String {
    let tz = snapshot.timezone.as_str();
    let deg = units.temperature_suffix();
    let current = &snapshot.current;
    let display = snapshot.current_display();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{label} ({}), {} {}",
        snapshot.coordinates(),
        format_local(current.timestamp, tz, LabelStyle::Date),
        format_local(current.timestamp, tz, LabelStyle::Time),
    );
    let _ = writeln!(
        out,
        "  {:.0}{deg}, feels like {:.0}{deg}, {} [{}] ({})",
        current.temperature,
        current.feels_like,
        description(&current.conditions),
        display.icon,
        display.background,
    );
    let _ = writeln!(
        out,
        "  humidity {}%, pressure {} hPa, wind {:.1} @ {}°",
        current.humidity, current.pressure, current.wind_speed, current.wind_direction_deg,
    );
    if let Some(gust) = current.wind_gust {
        let _ = writeln!(out, "  gusts {gust:.1}");
    }
    if let Some(pop) = current.precipitation_probability {
        let _ = writeln!(out, "  precipitation {:.0}%", pop * 100.0);
    }

    if hours > 0 && !snapshot.hourly.is_empty() {
        let _ = writeln!(out, "Hourly:");
        for hour in snapshot.hourly.iter().take(hours) {
            let _ = writeln!(
                out,
                "  {:>5}  {:>4.0}{deg}  {} [{}]",
                format_local(hour.timestamp, tz, LabelStyle::Hour),
                hour.temperature,
                description(&hour.conditions),
                hour.display(tz).icon,
            );
        }
    }

    if days > 0 && !snapshot.daily.is_empty() {
        let _ = writeln!(out, "Daily:");
        for day in snapshot.daily.iter().take(days) {
            let _ = write!(
                out,
                "  {}  {:.0}/{:.0}{deg}  {} [{}]",
                format_local(day.timestamp, tz, LabelStyle::Weekday),
                day.temperature.max,
                day.temperature.min,
                description(&day.conditions),
                day.display(tz).icon,
            );
            if let Some(rain) = day.rain_volume_mm {
                let _ = write!(out, "  rain {rain:.1} mm");
            }
            let _ = writeln!(out);
            if let Some(summary) = &day.summary {
                let _ = writeln!(out, "      {summary}");
            }
        }
    }

    out
}

pub fn render_places(city: &str, places: &[&Place]) -> String {
    if places.is_empty() {
        return format!("Location not available for {city}.\n");
    }

    let mut out = String::new();
    for place in places {
        let _ = writeln!(out, "{} ({})", place.name, place.coordinates);
        if !place.description.is_empty() {
            let _ = writeln!(out, "  {}", place.description);
        }
        if !place.image_names.is_empty() {
            let _ = writeln!(out, "  images: {}", place.image_names.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weathermap_core::{Coordinates, decode};

    const LONDON: &str = include_str!("../../weathermap-core/testdata/onecall_london.json");

    #[test]
    fn text_report_contains_current_and_forecasts() {
        let snapshot = decode(LONDON.as_bytes()).unwrap();
        let text = render_snapshot("London", &snapshot, 2, 1, Units::Metric);

        assert!(text.starts_with("London (51.5074, -0.1278), Thu 16 Nov 14:00"));
        assert!(text.contains("11°C, feels like 11°C, clear sky [ClearIcon] (Day)"));
        assert!(text.contains("Hourly:"));
        assert!(text.contains("2 PM"));
        assert!(text.contains("3 PM"));
        assert!(!text.contains("4 PM"));
        assert!(text.contains("Daily:"));
        assert!(text.contains("rain 1.6 mm"));
        assert!(text.contains("Expect a day of partly cloudy with rain"));
    }

    #[test]
    fn zero_counts_skip_sections() {
        let snapshot = decode(LONDON.as_bytes()).unwrap();
        let text = render_snapshot("London", &snapshot, 0, 0, Units::Imperial);

        assert!(!text.contains("Hourly:"));
        assert!(!text.contains("Daily:"));
        assert!(text.contains("°F"));
    }

    #[test]
    fn json_report_includes_display_context() {
        let snapshot = decode(LONDON.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&snapshot).unwrap()).unwrap();

        assert_eq!(json["display"]["icon"], "ClearIcon");
        assert_eq!(json["display"]["time_of_day"], "Day");
        assert_eq!(json["snapshot"]["timezone"], "Europe/London");
        assert_eq!(json["snapshot"]["current"]["conditions"][0]["category"], "Clear");
    }

    #[test]
    fn places_report() {
        let place = Place {
            name: "Tower Bridge".into(),
            city_name: "London".into(),
            coordinates: Coordinates::new(51.5055, -0.0754),
            image_names: vec!["tb-1".into()],
            description: "Bridge.".into(),
        };

        let text = render_places("London", &[&place]);
        assert!(text.contains("Tower Bridge (51.5055, -0.0754)"));
        assert!(text.contains("images: tb-1"));

        assert_eq!(render_places("Berlin", &[]), "Location not available for Berlin.\n");
    }
}
