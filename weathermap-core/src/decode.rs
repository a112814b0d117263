//! Decoding of One Call payloads into [`WeatherSnapshot`].
//!
//! The payload is parsed into a `serde_json::Value` first and then walked
//! field by field, so every failure can name the exact path that caused it.
//! Nothing is returned unless the whole document decodes.

use serde_json::{Map, Value};

use crate::error::{DecodeError, ExpectedKind};
use crate::model::{
    ConditionCategory, ConditionCode, CurrentConditions, DailyPoint, DayTemperatureProfile,
    FeelsLikeProfile, HourlyPoint, WeatherSnapshot,
};

/// What to do with a `main` value outside the known categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    /// Keep it as [`ConditionCategory::Unknown`].
    #[default]
    Lenient,
    /// Fail with [`DecodeError::UnrecognizedCategory`].
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub category_policy: CategoryPolicy,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            category_policy: CategoryPolicy::Strict,
        }
    }
}

/// Decode a raw response body with the default (lenient) options.
pub fn decode(raw: &[u8]) -> Result<WeatherSnapshot, DecodeError> {
    decode_with(raw, &DecodeOptions::default())
}

pub fn decode_with(raw: &[u8], options: &DecodeOptions) -> Result<WeatherSnapshot, DecodeError> {
    let result = serde_json::from_slice::<Value>(raw)
        .map_err(DecodeError::from)
        .and_then(|value| snapshot(&value, options));

    match &result {
        Ok(snapshot) => tracing::debug!(
            timezone = %snapshot.timezone,
            hourly = snapshot.hourly.len(),
            daily = snapshot.daily.len(),
            "decoded weather snapshot"
        ),
        Err(e) => tracing::debug!(error = %e, "failed to decode weather snapshot"),
    }

    result
}

fn snapshot(root: &Value, options: &DecodeOptions) -> Result<WeatherSnapshot, DecodeError> {
    let root = Fields::root(root)?;

    Ok(WeatherSnapshot {
        latitude: root.float("lat")?,
        longitude: root.float("lon")?,
        timezone: root.string("timezone")?,
        timezone_offset_seconds: root.opt_int("timezone_offset")?,
        current: current(&root.object("current")?, options)?,
        hourly: root.list("hourly", |item| hourly(&item, options))?,
        daily: root.list("daily", |item| daily(&item, options))?,
    })
}

fn current(fields: &Fields<'_>, options: &DecodeOptions) -> Result<CurrentConditions, DecodeError> {
    let current = CurrentConditions {
        timestamp: fields.int("dt")?,
        sunrise: fields.int("sunrise")?,
        sunset: fields.int("sunset")?,
        temperature: fields.float("temp")?,
        feels_like: fields.float("feels_like")?,
        pressure: fields.int("pressure")?,
        humidity: fields.int("humidity")?,
        dew_point: fields.float("dew_point")?,
        uv_index: fields.float("uvi")?,
        cloud_cover_percent: fields.int("clouds")?,
        visibility_meters: fields.int("visibility")?,
        wind_speed: fields.float("wind_speed")?,
        wind_direction_deg: fields.int("wind_deg")?,
        wind_gust: fields.opt_float("wind_gust")?,
        conditions: conditions(fields, options)?,
        precipitation_probability: fields.opt_float("pop")?,
    };

    if current.conditions.is_empty() {
        return Err(DecodeError::EmptyConditions {
            path: fields.path_of("weather"),
        });
    }

    Ok(current)
}

fn hourly(fields: &Fields<'_>, options: &DecodeOptions) -> Result<HourlyPoint, DecodeError> {
    Ok(HourlyPoint {
        timestamp: fields.int("dt")?,
        temperature: fields.float("temp")?,
        conditions: conditions(fields, options)?,
    })
}

fn daily(fields: &Fields<'_>, options: &DecodeOptions) -> Result<DailyPoint, DecodeError> {
    let temp = fields.object("temp")?;
    let feels_like = fields.object("feels_like")?;

    Ok(DailyPoint {
        timestamp: fields.int("dt")?,
        sunrise: fields.int("sunrise")?,
        sunset: fields.int("sunset")?,
        moonrise: fields.int("moonrise")?,
        moonset: fields.int("moonset")?,
        moon_phase: fields.float("moon_phase")?,
        summary: fields.opt_string("summary")?,
        temperature: DayTemperatureProfile {
            day: temp.float("day")?,
            min: temp.float("min")?,
            max: temp.float("max")?,
            night: temp.float("night")?,
            evening: temp.float("eve")?,
            morning: temp.float("morn")?,
        },
        feels_like: FeelsLikeProfile {
            day: feels_like.float("day")?,
            night: feels_like.float("night")?,
            evening: feels_like.float("eve")?,
            morning: feels_like.float("morn")?,
        },
        pressure: fields.int("pressure")?,
        humidity: fields.int("humidity")?,
        dew_point: fields.float("dew_point")?,
        wind_speed: fields.float("wind_speed")?,
        wind_direction_deg: fields.int("wind_deg")?,
        wind_gust: fields.float("wind_gust")?,
        conditions: conditions(fields, options)?,
        cloud_cover_percent: fields.int("clouds")?,
        precipitation_probability: fields.float("pop")?,
        uv_index: fields.float("uvi")?,
        rain_volume_mm: fields.opt_float("rain")?,
    })
}

fn conditions(
    fields: &Fields<'_>,
    options: &DecodeOptions,
) -> Result<Vec<ConditionCode>, DecodeError> {
    fields.list("weather", |item| condition(&item, options))
}

fn condition(fields: &Fields<'_>, options: &DecodeOptions) -> Result<ConditionCode, DecodeError> {
    let id = fields.int("id")?;
    let main = fields.string("main")?;
    let category = ConditionCategory::from_wire(&main);

    if !category.is_known() && options.category_policy == CategoryPolicy::Strict {
        return Err(DecodeError::UnrecognizedCategory {
            path: fields.path_of("main"),
            value: main,
        });
    }

    Ok(ConditionCode {
        id,
        category,
        description: fields.string("description")?,
        icon: fields.string("icon")?,
    })
}

/// A JSON object together with its path from the document root.
struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self {
                path: String::new(),
                map,
            }),
            _ => Err(DecodeError::TypeMismatch {
                path: "$".to_string(),
                expected: ExpectedKind::Object,
            }),
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Present and non-null value; null is treated like absence.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.get(key).ok_or_else(|| DecodeError::MissingField {
            path: self.path_of(key),
        })
    }

    fn mismatch(&self, key: &str, expected: ExpectedKind) -> DecodeError {
        DecodeError::TypeMismatch {
            path: self.path_of(key),
            expected,
        }
    }

    fn int(&self, key: &str) -> Result<i64, DecodeError> {
        let value = self.required(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(key, ExpectedKind::Integer))
    }

    fn float(&self, key: &str) -> Result<f64, DecodeError> {
        let value = self.required(key)?;
        value
            .as_f64()
            .ok_or_else(|| self.mismatch(key, ExpectedKind::Number))
    }

    fn string(&self, key: &str) -> Result<String, DecodeError> {
        let value = self.required(key)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(key, ExpectedKind::String))
    }

    fn opt_int(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.mismatch(key, ExpectedKind::Integer)),
        }
    }

    fn opt_float(&self, key: &str) -> Result<Option<f64>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.mismatch(key, ExpectedKind::Number)),
        }
    }

    fn opt_string(&self, key: &str) -> Result<Option<String>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_owned()))
                .ok_or_else(|| self.mismatch(key, ExpectedKind::String)),
        }
    }

    fn object(&self, key: &str) -> Result<Fields<'a>, DecodeError> {
        match self.required(key)? {
            Value::Object(map) => Ok(Fields {
                path: self.path_of(key),
                map,
            }),
            _ => Err(self.mismatch(key, ExpectedKind::Object)),
        }
    }

    /// Decode every element of an array of objects, in order.
    fn list<T>(
        &self,
        key: &str,
        mut decode_item: impl FnMut(Fields<'a>) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let Value::Array(items) = self.required(key)? else {
            return Err(self.mismatch(key, ExpectedKind::Array));
        };

        let base = self.path_of(key);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let path = format!("{base}[{index}]");
                match item {
                    Value::Object(map) => decode_item(Fields { path, map }),
                    Value::Null => Err(DecodeError::MissingField { path }),
                    _ => Err(DecodeError::TypeMismatch {
                        path,
                        expected: ExpectedKind::Object,
                    }),
                }
            })
            .collect()
    }
}
