//! Parser für GeoJSON-Dateien (Import per Drag & Drop oder Dateidialog).

use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{Feature, FeatureCollection, Geometry};

/// Fehler beim Einlesen einer GeoJSON-Datei.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// Datei konnte nicht gelesen werden
    #[error("Datei konnte nicht gelesen werden: {0}")]
    Io(#[from] std::io::Error),
    /// Inhalt ist kein JSON
    #[error("kein gültiges JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// JSON, aber kein GeoJSON-Objekt
    #[error("kein gültiges GeoJSON: {0}")]
    NotGeoJson(String),
    /// GeoJSON ohne eine einzige darstellbare Position
    #[error("GeoJSON enthält keine darstellbare Geometrie")]
    EmptyGeometry,
}

/// Parst GeoJSON-Text in eine FeatureCollection.
///
/// Akzeptiert `FeatureCollection`, einzelne `Feature`s und nackte Geometrien;
/// die beiden letzten werden in eine Collection mit einem Feature verpackt.
pub fn parse_geojson(text: &str) -> Result<FeatureCollection, GeoJsonError> {
    let value: Value = serde_json::from_str(text).map_err(GeoJsonError::InvalidJson)?;

    let type_name = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| GeoJsonError::NotGeoJson("Feld `type` fehlt".to_string()))?
        .to_owned();

    let collection = match type_name.as_str() {
        "FeatureCollection" => serde_json::from_value::<FeatureCollection>(value)
            .map_err(|e| GeoJsonError::NotGeoJson(e.to_string()))?,
        "Feature" => {
            let feature = serde_json::from_value::<Feature>(value)
                .map_err(|e| GeoJsonError::NotGeoJson(e.to_string()))?;
            FeatureCollection::new(vec![feature])
        }
        _ => {
            let geometry = serde_json::from_value::<Geometry>(value)
                .map_err(|e| GeoJsonError::NotGeoJson(e.to_string()))?;
            FeatureCollection::new(vec![Feature::new(geometry, Map::new())])
        }
    };

    validate_positions(&collection)?;

    if collection.bounds().is_none() {
        return Err(GeoJsonError::EmptyGeometry);
    }

    log::debug!(
        "GeoJSON geparst: {} Features ({})",
        collection.len(),
        type_name
    );
    Ok(collection)
}

/// Liest und parst eine GeoJSON-Datei.
pub fn parse_geojson_file(path: &std::path::Path) -> Result<FeatureCollection, GeoJsonError> {
    let text = std::fs::read_to_string(path)?;
    parse_geojson(&text)
}

fn validate_positions(collection: &FeatureCollection) -> Result<(), GeoJsonError> {
    for (index, feature) in collection.features.iter().enumerate() {
        if let Some(geometry) = &feature.geometry {
            if !geometry.has_valid_positions() {
                return Err(GeoJsonError::NotGeoJson(format!(
                    "Feature {index}: {} mit ungültiger Position",
                    geometry.type_name()
                )));
            }
        }
    }
    Ok(())
}
