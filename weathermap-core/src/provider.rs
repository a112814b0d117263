//! Collaborators that supply the decoder with input: a geocoder turning a
//! city name into coordinates, and a fetcher returning the raw payload.

use anyhow::Context;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{decode, model::Coordinates, model::WeatherSnapshot};

pub mod openweather;

pub use openweather::OpenWeatherClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Request to {endpoint} failed")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {endpoint} response")]
    Json {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city: &str) -> Result<Coordinates, ProviderError>;
}

#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    /// Raw response body for the given location, undecoded.
    async fn fetch(&self, coords: Coordinates) -> Result<Vec<u8>, ProviderError>;
}

/// Geocode `city`, fetch its weather and decode it.
pub async fn fetch_snapshot(
    geocoder: &dyn Geocoder,
    fetcher: &dyn WeatherFetcher,
    city: &str,
) -> anyhow::Result<WeatherSnapshot> {
    let coords = geocoder.resolve(city).await?;
    tracing::debug!(city, %coords, "resolved coordinates");

    let body = fetcher
        .fetch(coords)
        .await
        .with_context(|| format!("Failed to fetch weather for {city}"))?;

    let snapshot = decode(&body).with_context(|| format!("Failed to decode weather for {city}"))?;
    Ok(snapshot)
}
