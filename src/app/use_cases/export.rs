//! Use-Case-Funktionen für den GeoJSON-Export.
//! Der Export liest nur und verändert weder Strokes noch Overlays.

use crate::core::{MapProvider, OverlayKind, StrokeList};
use crate::geojson::{stroke_to_feature, write_feature_collection, Feature, FeatureCollection};
use crate::shared::{EXPORT_ALL_FILE_NAME, EXPORT_DRAWN_FILE_NAME};

/// Umfang eines Exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportVariant {
    /// Nur gezeichnete Strokes
    DrawnOnly,
    /// Gezeichnete Strokes plus alle Vektor-Overlays der Karte
    AllOverlays,
}

impl ExportVariant {
    /// Fester Dateiname der Variante.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportVariant::DrawnOnly => EXPORT_DRAWN_FILE_NAME,
            ExportVariant::AllOverlays => EXPORT_ALL_FILE_NAME,
        }
    }

    /// Beschriftung für Menü und Toolbar.
    pub fn label(self) -> &'static str {
        match self {
            ExportVariant::DrawnOnly => "Zeichnungen exportieren",
            ExportVariant::AllOverlays => "Karte mit Zeichnungen exportieren",
        }
    }
}

/// Fertiges Export-Ergebnis: Dateiname und JSON-Text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Vorgeschlagener Dateiname
    pub file_name: &'static str,
    /// Eingerücktes GeoJSON
    pub contents: String,
    /// Anzahl geschriebener Features
    pub feature_count: usize,
    /// Anzahl übersprungener, nicht konvertierbarer Overlay-Features
    pub skipped: usize,
}

/// Sammelt alle Features einer Export-Variante.
///
/// Strokes kommen zuerst in Zeichenreihenfolge, danach bei `AllOverlays` die
/// Features der Vektor-Overlays in Layer-Reihenfolge. Basiskacheln werden nie
/// exportiert. Overlay-Features ohne Geometrie werden mit Warnung übersprungen.
pub fn collect_features(
    strokes: &StrokeList,
    map: &dyn MapProvider,
    variant: ExportVariant,
) -> (FeatureCollection, usize) {
    let mut features: Vec<Feature> = strokes.strokes().map(stroke_to_feature).collect();
    let mut skipped = 0;

    if variant == ExportVariant::AllOverlays {
        for (id, layer) in map.overlays() {
            let OverlayKind::Vector(collection) = &layer.kind else {
                continue;
            };
            for (index, feature) in collection.features.iter().enumerate() {
                if feature.geometry.is_none() {
                    log::warn!(
                        "Overlay {} ('{}'): Feature {} ohne Geometrie übersprungen",
                        id,
                        layer.name,
                        index
                    );
                    skipped += 1;
                    continue;
                }
                features.push(feature.clone());
            }
        }
    }

    (FeatureCollection::new(features), skipped)
}

/// Serialisiert die Variante zu einem Export-Artefakt.
pub fn build_export(
    strokes: &StrokeList,
    map: &dyn MapProvider,
    variant: ExportVariant,
) -> anyhow::Result<ExportArtifact> {
    let (collection, skipped) = collect_features(strokes, map, variant);
    let contents = write_feature_collection(&collection)?;

    Ok(ExportArtifact {
        file_name: variant.file_name(),
        contents,
        feature_count: collection.len(),
        skipped,
    })
}

/// Schreibt ein Export-Artefakt nach `path`.
pub fn write_export(artifact: &ExportArtifact, path: &std::path::Path) -> anyhow::Result<()> {
    std::fs::write(path, &artifact.contents)?;
    log::info!(
        "Export geschrieben: {} ({} Features, {} übersprungen)",
        path.display(),
        artifact.feature_count,
        artifact.skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::testing::FlatMap;
    use crate::core::{GeoPoint, OverlayLayer, Stroke};
    use crate::geojson::Geometry;
    use serde_json::{Map, Value};

    fn sample_strokes() -> StrokeList {
        let mut strokes = StrokeList::new();
        strokes.push(Stroke::from_points(
            vec![GeoPoint::new(50.0, 8.0), GeoPoint::new(50.1, 8.2)],
            "#ff0000",
        ));
        strokes.push(Stroke::from_points(
            vec![
                GeoPoint::new(51.0, 9.0),
                GeoPoint::new(51.1, 9.1),
                GeoPoint::new(51.2, 9.3),
            ],
            "#0000ff",
        ));
        strokes
    }

    fn map_with_overlays() -> FlatMap {
        let mut map = FlatMap::default();
        map.add_overlay(OverlayLayer::tile("Basiskarte", "© OpenStreetMap"));
        let point = Feature::new(
            Geometry::Point {
                coordinates: vec![7.0, 49.0],
            },
            Map::new(),
        );
        let mut empty = Feature::new(
            Geometry::Point {
                coordinates: vec![0.0, 0.0],
            },
            Map::new(),
        );
        empty.geometry = None;
        map.add_overlay(OverlayLayer::vector(
            "feld.geojson",
            FeatureCollection::new(vec![point, empty]),
        ));
        map
    }

    #[test]
    fn drawn_export_has_one_line_string_per_stroke() {
        let strokes = sample_strokes();
        let map = map_with_overlays();

        let artifact = build_export(&strokes, &map, ExportVariant::DrawnOnly).expect("Export");
        assert_eq!(artifact.file_name, "user_drawings.geojson");
        assert_eq!(artifact.feature_count, 2);

        let value: Value = serde_json::from_str(&artifact.contents).expect("JSON");
        let features = value["features"].as_array().expect("features");
        for (feature, stroke) in features.iter().zip(strokes.strokes()) {
            assert_eq!(feature["geometry"]["type"], "LineString");
            assert_eq!(feature["properties"]["type"], "drawn");
            let coords = feature["geometry"]["coordinates"].as_array().expect("coords");
            assert_eq!(coords.len(), stroke.len());
            assert_eq!(coords[0][0], stroke.points[0].lng);
            assert_eq!(coords[0][1], stroke.points[0].lat);
        }
    }

    #[test]
    fn full_export_adds_vector_overlays_and_skips_broken_features() {
        let strokes = sample_strokes();
        let map = map_with_overlays();

        let artifact = build_export(&strokes, &map, ExportVariant::AllOverlays).expect("Export");

        assert_eq!(artifact.file_name, "map_with_drawings.geojson");
        assert_eq!(artifact.feature_count, 3);
        assert_eq!(artifact.skipped, 1);
    }

    #[test]
    fn export_is_read_only_and_repeatable() {
        let strokes = sample_strokes();
        let before = strokes.clone();
        let map = map_with_overlays();

        let first = build_export(&strokes, &map, ExportVariant::AllOverlays).expect("Export");
        let second = build_export(&strokes, &map, ExportVariant::AllOverlays).expect("Export");

        assert_eq!(first, second);
        assert_eq!(strokes, before);
        assert_eq!(map.overlays.len(), 2);
    }

    #[test]
    fn empty_drawing_exports_empty_collection() {
        let artifact = build_export(
            &StrokeList::new(),
            &FlatMap::default(),
            ExportVariant::DrawnOnly,
        )
        .expect("Export");

        assert_eq!(artifact.feature_count, 0);
        let value: Value = serde_json::from_str(&artifact.contents).expect("JSON");
        assert_eq!(value["type"], "FeatureCollection");
    }
}
