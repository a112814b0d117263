use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::Deserialize;

use crate::{
    config::{Config, Units},
    model::Coordinates,
};

use super::{Geocoder, ProviderError, WeatherFetcher};

const ONECALL: &str = "OpenWeather One Call";
const GEOCODING: &str = "OpenWeather geocoding";

/// OpenWeather One Call + direct geocoding client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    units: Units,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: impl Into<String>, units: Units) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            units,
            http: Client::new(),
        }
    }

    /// Build a client from config; fails with a hint when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self::new(api_key, config.base_url.as_str(), config.units))
    }

    fn onecall_request(&self, coords: Coordinates) -> Result<Request, ProviderError> {
        self.http
            .get(format!("{}/data/2.5/onecall", self.base_url))
            .query(&[
                ("lat", coords.latitude.to_string().as_str()),
                ("lon", coords.longitude.to_string().as_str()),
                ("exclude", "minutely"),
                ("units", self.units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .build()
            .map_err(|source| ProviderError::Network {
                endpoint: ONECALL,
                source,
            })
    }

    fn geocoding_request(&self, city: &str) -> Result<Request, ProviderError> {
        self.http
            .get(format!("{}/geo/1.0/direct", self.base_url))
            .query(&[
                ("q", city),
                ("limit", "1"),
                ("appid", self.api_key.as_str()),
            ])
            .build()
            .map_err(|source| ProviderError::Network {
                endpoint: GEOCODING,
                source,
            })
    }

    async fn send(&self, endpoint: &'static str, request: Request) -> Result<Vec<u8>, ProviderError> {
        let network = |source| ProviderError::Network { endpoint, source };

        let res = self.http.execute(request).await.map_err(network)?;

        let status = res.status();
        let body = res.bytes().await.map_err(network)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(body.to_vec())
    }
}

#[derive(Debug, Deserialize)]
struct OwGeocodingEntry {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: Option<String>,
}

/// First geocoding match, if any.
fn first_match(body: &[u8], city: &str) -> Result<Coordinates, ProviderError> {
    let entries: Vec<OwGeocodingEntry> =
        serde_json::from_slice(body).map_err(|source| ProviderError::Json {
            endpoint: GEOCODING,
            source,
        })?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NotFound(city.to_string()))?;

    tracing::debug!(
        query = city,
        name = %entry.name,
        country = entry.country.as_deref().unwrap_or("-"),
        "geocoded city"
    );

    Ok(Coordinates::new(entry.lat, entry.lon))
}

#[async_trait]
impl Geocoder for OpenWeatherClient {
    async fn resolve(&self, city: &str) -> Result<Coordinates, ProviderError> {
        let request = self.geocoding_request(city)?;
        let body = self.send(GEOCODING, request).await?;
        first_match(&body, city)
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherClient {
    async fn fetch(&self, coords: Coordinates) -> Result<Vec<u8>, ProviderError> {
        let request = self.onecall_request(coords)?;
        tracing::debug!(%coords, units = %self.units, "fetching One Call payload");
        self.send(ONECALL, request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
