//! Agro Map Sketch Library.
//! Freihand-Zeichen-Layer für Karten: Aufzeichnung, Glättung, Radierer und
//! GeoJSON-Export als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geojson;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawingMode, DrawingState, EraseOutcome,
    EraserCursor, ExportArtifact, ExportVariant, UiState,
};
pub use core::{
    GeoBounds, GeoPoint, MapProvider, MapViewport, OverlayId, OverlayKind, OverlayLayer, Stroke,
    StrokeList,
};
pub use geojson::{parse_geojson, Feature, FeatureCollection, GeoJsonError, Geometry};
pub use shared::{smooth_polyline, DrawingOptions, RenderScene};
