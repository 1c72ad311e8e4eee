//! Builder für Render-Szenen aus dem AppState.

use glam::DVec2;

use crate::app::AppState;
use crate::core::projection::{world_size_px, MAX_LATITUDE, TILE_SIZE_EXPONENT};
use crate::core::{GeoPoint, MapProvider, OverlayKind};
use crate::geojson::{Geometry, Position};
use crate::shared::{RenderScene, SceneCircle, ScenePoint, ScenePolyline};

const TILE_GRID_COLOR: &str = "#c8c8c8";
const TILE_GRID_WIDTH: f32 = 1.0;
const OVERLAY_LINE_WIDTH: f32 = 2.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let map = &state.map;
    let options = &state.options;
    let mut scene = RenderScene {
        viewport_size: [map.size.x as f32, map.size.y as f32],
        ..RenderScene::default()
    };

    for (_, layer) in map.overlays() {
        match &layer.kind {
            OverlayKind::Tile { attribution } => {
                if scene.tile_grid.is_empty() {
                    scene.tile_grid = tile_grid(map, map.size);
                }
                scene.attribution = Some(attribution.clone());
            }
            OverlayKind::Vector(collection) => {
                for geometry in collection.features.iter().filter_map(|f| f.geometry.as_ref()) {
                    push_geometry(&mut scene, map, geometry, &options.overlay_color);
                }
            }
        }
    }

    scene.strokes = state
        .drawing
        .strokes
        .strokes()
        .map(|stroke| polyline(map, &stroke.points, &stroke.color, options.stroke_width_px))
        .collect();

    scene.preview = state.drawing.in_progress.as_ref().map(|s| {
        polyline(
            map,
            &s.preview.points,
            &s.preview.color,
            options.stroke_width_px,
        )
    });

    scene.eraser = state.drawing.eraser_cursor.map(|cursor| SceneCircle {
        center: to_px(map.project_to_pixel(cursor.center)),
        radius_px: options.eraser_radius_px as f32,
        radius_m: cursor.radius_m,
        color: options.eraser_indicator_color.clone(),
    });

    scene
}

fn to_px(v: DVec2) -> [f32; 2] {
    [v.x as f32, v.y as f32]
}

fn polyline(map: &dyn MapProvider, points: &[GeoPoint], color: &str, width: f32) -> ScenePolyline {
    ScenePolyline {
        points: points
            .iter()
            .map(|p| to_px(map.project_to_pixel(*p)))
            .collect(),
        color: color.to_string(),
        width,
        closed: false,
    }
}

fn positions_to_px(map: &dyn MapProvider, positions: &[Position]) -> Vec<[f32; 2]> {
    positions
        .iter()
        .filter_map(|p| GeoPoint::from_lng_lat(p))
        .map(|p| to_px(map.project_to_pixel(p)))
        .collect()
}

fn push_line(
    scene: &mut RenderScene,
    map: &dyn MapProvider,
    positions: &[Position],
    color: &str,
    closed: bool,
) {
    scene.overlay_lines.push(ScenePolyline {
        points: positions_to_px(map, positions),
        color: color.to_string(),
        width: OVERLAY_LINE_WIDTH,
        closed,
    });
}

fn push_point(scene: &mut RenderScene, map: &dyn MapProvider, position: &[f64], color: &str) {
    if let Some(point) = GeoPoint::from_lng_lat(position) {
        scene.overlay_points.push(ScenePoint {
            position: to_px(map.project_to_pixel(point)),
            color: color.to_string(),
        });
    }
}

fn push_geometry(scene: &mut RenderScene, map: &dyn MapProvider, geometry: &Geometry, color: &str) {
    match geometry {
        Geometry::Point { coordinates } => push_point(scene, map, coordinates, color),
        Geometry::MultiPoint { coordinates } => {
            for position in coordinates {
                push_point(scene, map, position, color);
            }
        }
        Geometry::LineString { coordinates } => push_line(scene, map, coordinates, color, false),
        Geometry::MultiLineString { coordinates } => {
            for line in coordinates {
                push_line(scene, map, line, color, false);
            }
        }
        Geometry::Polygon { coordinates } => {
            for ring in coordinates {
                push_line(scene, map, ring, color, true);
            }
        }
        Geometry::MultiPolygon { coordinates } => {
            for ring in coordinates.iter().flatten() {
                push_line(scene, map, ring, color, true);
            }
        }
        Geometry::GeometryCollection { geometries } => {
            for inner in geometries {
                push_geometry(scene, map, inner, color);
            }
        }
    }
}

/// Kachelgrenzen der Basiskarte im sichtbaren Bereich.
fn tile_grid(map: &dyn MapProvider, size: DVec2) -> Vec<ScenePolyline> {
    let zoom = map.zoom();
    let tile = (zoom - zoom.floor() + TILE_SIZE_EXPONENT as f64).exp2();
    let world = world_size_px(zoom);
    let origin = map.project_to_pixel(GeoPoint::new(MAX_LATITUDE, -180.0));

    let x_min = origin.x.max(0.0);
    let x_max = (origin.x + world).min(size.x);
    let y_min = origin.y.max(0.0);
    let y_max = (origin.y + world).min(size.y);
    if x_min >= x_max || y_min >= y_max {
        return Vec::new();
    }

    let line = |a: DVec2, b: DVec2| ScenePolyline {
        points: vec![to_px(a), to_px(b)],
        color: TILE_GRID_COLOR.to_string(),
        width: TILE_GRID_WIDTH,
        closed: false,
    };

    let mut lines = Vec::new();
    let mut x = origin.x + ((x_min - origin.x) / tile).ceil() * tile;
    while x <= x_max {
        lines.push(line(DVec2::new(x, y_min), DVec2::new(x, y_max)));
        x += tile;
    }
    let mut y = origin.y + ((y_min - origin.y) / tile).ceil() * tile;
    while y <= y_max {
        lines.push(line(DVec2::new(x_min, y), DVec2::new(x_max, y)));
        y += tile;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::{DrawingMode, EraserCursor};
    use crate::app::AppState;
    use crate::core::{GeoPoint, MapProvider, OverlayLayer, Stroke};
    use crate::geojson::parse_geojson;

    #[test]
    fn empty_state_builds_empty_scene() {
        let state = AppState::new();

        let scene = build(&state);

        assert!(!scene.has_strokes());
        assert!(scene.tile_grid.is_empty());
        assert!(scene.eraser.is_none());
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
    }

    #[test]
    fn strokes_keep_drawing_order_and_color() {
        let mut state = AppState::new();
        let center = state.map.center;
        let shifted = GeoPoint::new(center.lat + 0.01, center.lng + 0.01);
        state
            .drawing
            .strokes
            .push(Stroke::from_points(vec![center, shifted], "#111111"));
        state
            .drawing
            .strokes
            .push(Stroke::from_points(vec![shifted, center], "#222222"));

        let scene = build(&state);

        assert_eq!(scene.strokes.len(), 2);
        assert_eq!(scene.strokes[0].color, "#111111");
        assert_eq!(scene.strokes[1].color, "#222222");
        let [x, y] = scene.strokes[0].points[0];
        assert!((x - 400.0).abs() < 0.01 && (y - 300.0).abs() < 0.01);
    }

    #[test]
    fn eraser_circle_follows_cursor() {
        let mut state = AppState::new();
        state.drawing.mode = DrawingMode::Erase;
        state.drawing.eraser_cursor = Some(EraserCursor {
            center: state.map.center,
            radius_m: 12.0,
        });

        let scene = build(&state);

        let circle = scene.eraser.expect("Radierer-Kreis");
        assert_eq!(circle.radius_px, 5.0);
        assert_eq!(circle.radius_m, 12.0);
    }

    #[test]
    fn tile_layer_yields_grid_and_attribution() {
        let mut state = AppState::new();
        state
            .map
            .add_overlay(OverlayLayer::tile("Basiskarte", "© OpenStreetMap"));

        let scene = build(&state);

        assert!(!scene.tile_grid.is_empty());
        assert_eq!(scene.attribution.as_deref(), Some("© OpenStreetMap"));
    }

    #[test]
    fn vector_overlay_polygon_becomes_closed_ring() {
        let mut state = AppState::new();
        let collection = parse_geojson(
            r#"{"type":"Polygon","coordinates":[[[10.0,51.0],[10.5,51.0],[10.5,51.5],[10.0,51.0]]]}"#,
        )
        .expect("GeoJSON");
        state
            .map
            .add_overlay(OverlayLayer::vector("feld.geojson", collection));

        let scene = build(&state);

        assert_eq!(scene.overlay_lines.len(), 1);
        assert!(scene.overlay_lines[0].closed);
        assert_eq!(scene.overlay_lines[0].points.len(), 4);
    }
}
