//! Schreiben von Strokes als GeoJSON.

use serde_json::{Map, Value};

use super::types::{Feature, FeatureCollection, Geometry};
use crate::core::Stroke;

/// Wandelt einen Stroke in ein LineString-Feature.
///
/// Properties: `color` und `type` (Herkunfts-Tag, z.B. `"drawn"`).
pub fn stroke_to_feature(stroke: &Stroke) -> Feature {
    let mut properties = Map::new();
    properties.insert("color".to_string(), Value::String(stroke.color.clone()));
    properties.insert(
        "type".to_string(),
        Value::String(stroke.provenance.as_tag().to_string()),
    );
    Feature::new(Geometry::line_string(&stroke.points), properties)
}

/// Serialisiert eine FeatureCollection als eingerücktes JSON.
pub fn write_feature_collection(collection: &FeatureCollection) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(collection)?)
}
