//! Opt-in range checks on a decoded snapshot.
//!
//! The decoder only checks structure; callers that want to reject implausible
//! values call [`WeatherSnapshot::validate`].

use crate::error::ValidationError;
use crate::model::WeatherSnapshot;

fn check(path: impl Into<String>, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError {
            path: path.into(),
            value,
            min,
            max,
        })
    }
}

impl WeatherSnapshot {
    /// Return the first value outside its plausible range, in document order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check("lat", self.latitude, -90.0, 90.0)?;
        check("lon", self.longitude, -180.0, 180.0)?;

        let current = &self.current;
        check("current.humidity", current.humidity as f64, 0.0, 100.0)?;
        check("current.clouds", current.cloud_cover_percent as f64, 0.0, 100.0)?;
        check("current.wind_deg", current.wind_direction_deg as f64, 0.0, 360.0)?;
        if let Some(pop) = current.precipitation_probability {
            check("current.pop", pop, 0.0, 1.0)?;
        }

        for (i, day) in self.daily.iter().enumerate() {
            check(format!("daily[{i}].moon_phase"), day.moon_phase, 0.0, 1.0)?;
            check(format!("daily[{i}].humidity"), day.humidity as f64, 0.0, 100.0)?;
            check(format!("daily[{i}].clouds"), day.cloud_cover_percent as f64, 0.0, 100.0)?;
            check(format!("daily[{i}].wind_deg"), day.wind_direction_deg as f64, 0.0, 360.0)?;
            check(format!("daily[{i}].pop"), day.precipitation_probability, 0.0, 1.0)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::decode;

    const LONDON: &str = include_str!("../testdata/onecall_london.json");

    #[test]
    fn fixture_is_plausible() {
        let snapshot = decode(LONDON.as_bytes()).unwrap();
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn moon_phase_out_of_range() {
        let mut snapshot = decode(LONDON.as_bytes()).unwrap();
        snapshot.daily[1].moon_phase = 1.5;

        let err = snapshot.validate().unwrap_err();
        assert_eq!(err.path, "daily[1].moon_phase");
        assert_eq!(err.value, 1.5);
    }

    #[test]
    fn first_violation_wins() {
        let mut snapshot = decode(LONDON.as_bytes()).unwrap();
        snapshot.latitude = 91.0;
        snapshot.current.humidity = 120;

        let err = snapshot.validate().unwrap_err();
        assert_eq!(err.path, "lat");
    }

    #[test]
    fn missing_optional_pop_is_not_checked() {
        let mut snapshot = decode(LONDON.as_bytes()).unwrap();
        snapshot.current.precipitation_probability = None;
        assert!(snapshot.validate().is_ok());
    }
}
