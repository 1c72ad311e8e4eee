//! Zeichnet eine `RenderScene` mit dem egui-Painter in die Kartenfläche.

use crate::shared::{RenderScene, ScenePolyline};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(242, 239, 233);
const OVERLAY_POINT_RADIUS: f32 = 4.0;

/// Parst einen CSS-Hex-Farbstring; ungültige Werte werden magenta.
pub fn parse_color(color: &str) -> egui::Color32 {
    egui::Color32::from_hex(color).unwrap_or(egui::Color32::from_rgb(255, 0, 255))
}

fn to_pos(rect: egui::Rect, p: [f32; 2]) -> egui::Pos2 {
    rect.min + egui::vec2(p[0], p[1])
}

fn paint_polyline(painter: &egui::Painter, rect: egui::Rect, line: &ScenePolyline) {
    let color = parse_color(&line.color);
    let points: Vec<egui::Pos2> = line.points.iter().map(|p| to_pos(rect, *p)).collect();

    match points.as_slice() {
        [] => {}
        [single] => {
            painter.circle_filled(*single, line.width * 0.5, color);
        }
        _ => {
            let stroke = egui::Stroke::new(line.width, color);
            if line.closed {
                painter.add(egui::Shape::closed_line(points, stroke));
            } else {
                painter.add(egui::Shape::line(points, stroke));
            }
        }
    }
}

/// Zeichnet die Szene in `rect` (Viewport-Pixel relativ zu `rect.min`).
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    for line in &scene.tile_grid {
        paint_polyline(painter, rect, line);
    }
    for line in &scene.overlay_lines {
        paint_polyline(painter, rect, line);
    }
    for point in &scene.overlay_points {
        painter.circle_filled(
            to_pos(rect, point.position),
            OVERLAY_POINT_RADIUS,
            parse_color(&point.color),
        );
    }
    for line in &scene.strokes {
        paint_polyline(painter, rect, line);
    }
    if let Some(preview) = &scene.preview {
        paint_polyline(painter, rect, preview);
    }

    if let Some(eraser) = &scene.eraser {
        painter.circle_stroke(
            to_pos(rect, eraser.center),
            eraser.radius_px,
            egui::Stroke::new(1.5, parse_color(&eraser.color)),
        );
    }

    if let Some(attribution) = &scene.attribution {
        painter.text(
            rect.right_bottom() - egui::vec2(4.0, 4.0),
            egui::Align2::RIGHT_BOTTOM,
            attribution,
            egui::FontId::proportional(11.0),
            egui::Color32::DARK_GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_hex_colors() {
        assert_eq!(parse_color("#ff0000"), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("#00a000"), egui::Color32::from_rgb(0, 160, 0));
    }

    #[test]
    fn invalid_color_falls_back_to_magenta() {
        assert_eq!(parse_color("rot"), egui::Color32::from_rgb(255, 0, 255));
    }
}
