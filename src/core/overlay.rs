//! Overlay-Layer der Karte: Basiskacheln und importierte Vektor-Geometrie.

use crate::geojson::FeatureCollection;

use super::GeoBounds;

/// Handle eines Overlays innerhalb eines `MapProvider`.
pub type OverlayId = u64;

/// Art eines Karten-Layers.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayKind {
    /// Raster-Basiskarte; wird nie exportiert
    Tile {
        /// Quellenangabe für die Statuszeile
        attribution: String,
    },
    /// Vektor-Geometrie (z.B. per Drag & Drop importiertes GeoJSON)
    Vector(FeatureCollection),
}

/// Ein Layer auf der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    /// Anzeigename (bei Importen: Dateiname)
    pub name: String,
    /// Inhalt des Layers
    pub kind: OverlayKind,
}

impl OverlayLayer {
    /// Erstellt einen Basiskarten-Layer.
    pub fn tile(name: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: OverlayKind::Tile {
                attribution: attribution.into(),
            },
        }
    }

    /// Erstellt einen Vektor-Layer aus einer FeatureCollection.
    pub fn vector(name: impl Into<String>, features: FeatureCollection) -> Self {
        Self {
            name: name.into(),
            kind: OverlayKind::Vector(features),
        }
    }

    /// `true` für Raster-Basiskarten.
    pub fn is_tile(&self) -> bool {
        matches!(self.kind, OverlayKind::Tile { .. })
    }

    /// Geo-Ausdehnung des Layers; `None` für Kacheln oder leere Geometrie.
    pub fn bounds(&self) -> Option<GeoBounds> {
        match &self.kind {
            OverlayKind::Tile { .. } => None,
            OverlayKind::Vector(collection) => collection.bounds(),
        }
    }
}
