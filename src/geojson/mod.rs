//! GeoJSON-Ein- und Ausgabe für Overlays und gezeichnete Strokes.

pub mod parser;
pub mod types;
pub mod writer;

pub use parser::{parse_geojson, parse_geojson_file, GeoJsonError};
pub use types::{Feature, FeatureCollection, Geometry, Position};
pub use writer::{stroke_to_feature, write_feature_collection};
