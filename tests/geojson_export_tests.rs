use agro_map_sketch::app::use_cases::{eraser, export, import};
use agro_map_sketch::geojson::parse_geojson;
use agro_map_sketch::{
    ExportVariant, GeoPoint, Geometry, MapProvider, MapViewport, OverlayLayer, Stroke, StrokeList,
};
use approx::assert_relative_eq;
use glam::DVec2;

const FIELD_WITH_NULL: &str = r#"{"type":"FeatureCollection","features":[
    {"type":"Feature","properties":{"name":"Schlag 7"},
     "geometry":{"type":"Polygon","coordinates":[[[10.0,51.0],[10.01,51.0],[10.01,51.01],[10.0,51.0]]]}},
    {"type":"Feature","properties":{"name":"ohne Geometrie"},"geometry":null},
    {"type":"Feature","properties":{},
     "geometry":{"type":"Point","coordinates":[10.005,51.005]}}
]}"#;

fn viewport() -> MapViewport {
    let mut vp = MapViewport::new(GeoPoint::new(51.0, 10.0), 14.0);
    vp.set_size(DVec2::new(800.0, 600.0));
    vp
}

fn strokes() -> StrokeList {
    let mut list = StrokeList::new();
    list.push(Stroke::from_points(
        vec![
            GeoPoint::new(51.0, 10.0),
            GeoPoint::new(51.001, 10.002),
            GeoPoint::new(51.002, 10.001),
        ],
        "#ff0000",
    ));
    list.push(Stroke::from_points(
        vec![GeoPoint::new(51.01, 10.01), GeoPoint::new(51.02, 10.02)],
        "#00aa00",
    ));
    list
}

#[test]
fn test_drawn_export_round_trips_through_parser() {
    let map = viewport();
    let list = strokes();

    let artifact = export::build_export(&list, &map, ExportVariant::DrawnOnly)
        .expect("Export sollte gelingen");
    assert_eq!(artifact.file_name, agro_map_sketch::shared::EXPORT_DRAWN_FILE_NAME);
    assert_eq!(artifact.feature_count, 2);
    assert_eq!(artifact.skipped, 0);

    let parsed = parse_geojson(&artifact.contents).expect("Export muss gültiges GeoJSON sein");
    assert_eq!(parsed.len(), 2);

    for (feature, stroke) in parsed.features.iter().zip(list.strokes()) {
        let Some(Geometry::LineString { coordinates }) = &feature.geometry else {
            panic!("LineString erwartet: {:?}", feature.geometry);
        };
        assert_eq!(coordinates.len(), stroke.len());
        for (position, point) in coordinates.iter().zip(&stroke.points) {
            // GeoJSON speichert [lng, lat]
            assert_relative_eq!(position[0], point.lng);
            assert_relative_eq!(position[1], point.lat);
        }
        assert_eq!(feature.properties["color"], stroke.color.as_str());
        assert_eq!(feature.properties["type"], "drawn");
    }
}

#[test]
fn test_full_export_puts_strokes_first_and_skips_null_geometry() {
    let mut map = viewport();
    map.add_overlay(OverlayLayer::tile("Basiskarte", "OSM"));
    import::import_geojson_text(&mut map, "schlaege.geojson", FIELD_WITH_NULL)
        .expect("Import sollte gelingen");

    let artifact = export::build_export(&strokes(), &map, ExportVariant::AllOverlays)
        .expect("Export sollte gelingen");
    assert_eq!(artifact.file_name, agro_map_sketch::shared::EXPORT_ALL_FILE_NAME);
    assert_eq!(artifact.feature_count, 4);
    assert_eq!(artifact.skipped, 1);

    let parsed = parse_geojson(&artifact.contents).expect("gültiges GeoJSON");
    let types: Vec<&str> = parsed
        .features
        .iter()
        .map(|f| f.geometry.as_ref().map_or("null", |g| g.type_name()))
        .collect();
    assert_eq!(types, vec!["LineString", "LineString", "Polygon", "Point"]);
    assert_eq!(parsed.features[2].properties["name"], "Schlag 7");
}

#[test]
fn test_empty_export_is_valid_empty_collection() {
    let map = viewport();
    let artifact = export::build_export(&StrokeList::new(), &map, ExportVariant::DrawnOnly)
        .expect("leerer Export sollte gelingen");

    let json: serde_json::Value = serde_json::from_str(&artifact.contents).expect("gültiges JSON");
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_erase_truncates_then_export_reflects_remaining_points() {
    let map = viewport();
    let list = strokes();
    let first = list.strokes().next().expect("erster Stroke").clone();

    // Radieren genau auf dem Startpunkt des ersten Strokes
    let pointer = map.project_to_pixel(first.points[0]);
    let (remaining, outcome) = eraser::erase_strokes(&list, &map, pointer, 5.0);

    assert_eq!(outcome.removed_points, 1);
    assert_eq!(outcome.removed_strokes, 0);
    assert_eq!(remaining.len(), 2);
    assert_eq!(list.total_points(), 5, "Eingabe bleibt unverändert");

    let artifact = export::build_export(&remaining, &map, ExportVariant::DrawnOnly)
        .expect("Export sollte gelingen");
    let parsed = parse_geojson(&artifact.contents).expect("gültiges GeoJSON");
    assert_eq!(parsed.features[0].geometry.as_ref().map(|g| g.position_count()), Some(2));
}
