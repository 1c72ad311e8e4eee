//! Core-Domänentypen: GeoPoints, Strokes, Projektion, Viewport und Overlays.

pub mod geo_point;
/// Schnittstelle zur Host-Karte
pub mod map_provider;
pub mod overlay;
pub mod projection;
pub mod stroke;
pub mod viewport;

pub use geo_point::{GeoBounds, GeoPoint};
pub use map_provider::MapProvider;
pub use overlay::{OverlayId, OverlayKind, OverlayLayer};
pub use projection::{meters_per_pixel, EARTH_CIRCUMFERENCE_M, TILE_SIZE_EXPONENT};
pub use stroke::{Provenance, Stroke, StrokeId, StrokeList, MIN_RENDERABLE_POINTS};
pub use viewport::MapViewport;
