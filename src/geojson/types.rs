//! GeoJSON-Datentypen (RFC 7946) als serde-Strukturen.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::{GeoBounds, GeoPoint};

/// GeoJSON-Position `[lng, lat]` oder `[lng, lat, alt]`.
pub type Position = Vec<f64>;

/// GeoJSON-Geometrie, unterschieden über das `type`-Feld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Einzelner Punkt
    Point { coordinates: Position },
    /// Mehrere Punkte
    MultiPoint { coordinates: Vec<Position> },
    /// Offene Linie
    LineString { coordinates: Vec<Position> },
    /// Mehrere Linien
    MultiLineString { coordinates: Vec<Vec<Position>> },
    /// Polygon (äußerer Ring + Löcher)
    Polygon { coordinates: Vec<Vec<Position>> },
    /// Mehrere Polygone
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    /// Verschachtelte Geometrien
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    /// LineString aus Geo-Punkten (Koordinaten in `[lng, lat]`-Reihenfolge).
    pub fn line_string(points: &[GeoPoint]) -> Geometry {
        Geometry::LineString {
            coordinates: points.iter().map(|p| p.to_lng_lat().to_vec()).collect(),
        }
    }

    /// Name des GeoJSON-Typs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Ruft `f` für jede Position der Geometrie auf (rekursiv).
    pub fn for_each_position<F: FnMut(&[f64])>(&self, f: &mut F) {
        match self {
            Geometry::Point { coordinates } => f(coordinates.as_slice()),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                coordinates.iter().for_each(|p| f(p.as_slice()));
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().flatten().for_each(|p| f(p.as_slice()));
            }
            Geometry::MultiPolygon { coordinates } => {
                coordinates
                    .iter()
                    .flatten()
                    .flatten()
                    .for_each(|p| f(p.as_slice()));
            }
            Geometry::GeometryCollection { geometries } => {
                for geometry in geometries {
                    geometry.for_each_position(f);
                }
            }
        }
    }

    /// Anzahl Positionen (rekursiv).
    pub fn position_count(&self) -> usize {
        let mut count = 0;
        self.for_each_position(&mut |_| count += 1);
        count
    }

    /// Geo-Ausdehnung; `None` wenn keine gültige Position vorhanden ist.
    pub fn bounds(&self) -> Option<GeoBounds> {
        let mut bounds: Option<GeoBounds> = None;
        self.for_each_position(&mut |position| {
            if let Some(point) = GeoPoint::from_lng_lat(position) {
                bounds = Some(match bounds {
                    Some(mut b) => {
                        b.extend(point);
                        b
                    }
                    None => GeoBounds::from_point(point),
                });
            }
        });
        bounds
    }

    /// Prüft, dass jede Position mindestens zwei endliche Komponenten hat.
    pub fn has_valid_positions(&self) -> bool {
        let mut valid = true;
        self.for_each_position(&mut |position| {
            valid &= GeoPoint::from_lng_lat(position).is_some();
        });
        valid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum FeatureType {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum FeatureCollectionType {
    #[default]
    FeatureCollection,
}

/// GeoJSON-Feature: Geometrie plus freie Properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: FeatureType,
    /// Optionale Feature-ID (String oder Zahl)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Geometrie; `null` ist laut RFC erlaubt
    pub geometry: Option<Geometry>,
    /// Freie Properties (`null` wird als leeres Objekt gelesen)
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Erstellt ein Feature mit Geometrie und Properties.
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            kind: FeatureType::Feature,
            id: None,
            geometry: Some(geometry),
            properties,
        }
    }
}

/// GeoJSON-FeatureCollection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: FeatureCollectionType,
    /// Enthaltene Features in Datei-Reihenfolge
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Erstellt eine Collection aus Features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: FeatureCollectionType::FeatureCollection,
            features,
        }
    }

    /// Anzahl Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// `true` wenn keine Features enthalten sind.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Vereinigte Ausdehnung aller Feature-Geometrien.
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .filter_map(Geometry::bounds)
            .reduce(GeoBounds::union)
    }
}

fn null_as_empty_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}
