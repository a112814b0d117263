//! Points-of-interest catalog, a read-only JSON list keyed by city name.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

use crate::model::Coordinates;

#[derive(Debug, Error)]
pub enum PlaceCatalogError {
    #[error("Failed to read places catalog '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse places catalog")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub city_name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub image_names: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    pub fn from_json(raw: &[u8]) -> Result<Self, PlaceCatalogError> {
        let places: Vec<Place> = serde_json::from_slice(raw)?;
        Ok(Self { places })
    }

    pub fn load(path: &Path) -> Result<Self, PlaceCatalogError> {
        let raw = fs::read(path).map_err(|e| PlaceCatalogError::Read(path.to_path_buf(), e))?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), places = catalog.len(), "loaded places catalog");
        Ok(catalog)
    }

    /// Places whose city name matches exactly, in catalog order.
    pub fn for_city(&self, city: &str) -> Vec<&Place> {
        self.places.iter().filter(|p| p.city_name == city).collect()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
