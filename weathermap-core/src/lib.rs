//! Core library for the `weathermap` CLI.
//!
//! This crate defines:
//! - Decoding of OpenWeather One Call payloads into typed snapshots
//! - Time-of-day and night classification for display
//! - Icon and background selection
//! - Configuration & credentials handling
//! - Geocoding / fetching collaborators and the points-of-interest catalog
//!
//! It is used by `weathermap-cli`, but the decoder and classifier have no I/O
//! and can be reused by other front ends.

pub mod config;
pub mod decode;
pub mod display;
pub mod error;
pub mod icon;
pub mod model;
pub mod places;
pub mod provider;
pub mod time_context;
mod validate;

pub use config::{Config, Units};
pub use decode::{CategoryPolicy, DecodeOptions, decode, decode_with};
pub use display::{DisplayContext, LabelStyle, format_local};
pub use error::{DecodeError, ExpectedKind, ValidationError};
pub use icon::{DEFAULT_ICON, icon_token};
pub use model::{
    ConditionCategory, ConditionCode, Coordinates, CurrentConditions, DailyPoint,
    DayTemperatureProfile, FeelsLikeProfile, HourlyPoint, WeatherSnapshot,
};
pub use places::{Place, PlaceCatalog, PlaceCatalogError};
pub use provider::{Geocoder, OpenWeatherClient, ProviderError, WeatherFetcher, fetch_snapshot};
pub use time_context::{TimeOfDay, is_night, time_of_day_bucket};
