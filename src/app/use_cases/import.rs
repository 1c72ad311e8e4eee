//! Use-Case-Funktionen für den GeoJSON-Import als Vektor-Overlay.

use crate::core::{MapProvider, OverlayId, OverlayLayer};
use crate::geojson::{parse_geojson, parse_geojson_file, FeatureCollection, GeoJsonError};

/// Parst GeoJSON-Text und fügt ihn als Overlay `name` zur Karte hinzu.
///
/// Bei Erfolg wird die Ansicht auf die Ausdehnung des Overlays eingepasst.
/// Bei einem Fehler bleibt die Karte unverändert.
pub fn import_geojson_text(
    map: &mut dyn MapProvider,
    name: &str,
    text: &str,
) -> Result<OverlayId, GeoJsonError> {
    let collection = parse_geojson(text)?;
    Ok(add_vector_overlay(map, name, collection))
}

/// Liest eine GeoJSON-Datei und fügt sie als Overlay hinzu (Name = Dateiname).
pub fn import_geojson_file(
    map: &mut dyn MapProvider,
    path: &std::path::Path,
) -> Result<OverlayId, GeoJsonError> {
    let collection = parse_geojson_file(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(add_vector_overlay(map, &name, collection))
}

fn add_vector_overlay(
    map: &mut dyn MapProvider,
    name: &str,
    collection: FeatureCollection,
) -> OverlayId {
    let bounds = collection.bounds();
    let feature_count = collection.len();
    let id = map.add_overlay(OverlayLayer::vector(name, collection));

    if let Some(bounds) = bounds {
        map.fit_bounds(bounds);
    }

    log::info!(
        "GeoJSON importiert: '{}' ({} Features) als Overlay {}",
        name,
        feature_count,
        id
    );
    id
}
