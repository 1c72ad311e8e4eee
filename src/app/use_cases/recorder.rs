//! Use-Case-Funktionen für die Stroke-Aufzeichnung (Pointer-Down/Move/Up).

use glam::DVec2;

use crate::app::state::{DrawingMode, DrawingState, InProgressStroke};
use crate::core::{MapProvider, Stroke, StrokeId, MIN_RENDERABLE_POINTS};
use crate::shared::{smooth_polyline, DrawingOptions};

/// Beginnt einen neuen Stroke an der Pixelposition `pos`.
///
/// Nur im Zeichenmodus und nur wenn kein Stroke läuft. Sperrt das
/// Drag-Panning der Karte bis zum Abschluss der Geste.
/// Gibt `true` zurück, wenn ein Stroke gestartet wurde.
pub fn begin_stroke(drawing: &mut DrawingState, map: &mut dyn MapProvider, pos: DVec2) -> bool {
    if drawing.mode != DrawingMode::Draw || drawing.in_progress.is_some() {
        return false;
    }

    let start = map.project_to_geo(pos);
    drawing.in_progress = Some(InProgressStroke {
        raw: vec![start],
        preview: Stroke::starting_at(start, drawing.stroke_color.clone()),
    });
    map.set_drag_enabled(false);

    log::debug!("Stroke begonnen bei {:.6}, {:.6}", start.lat, start.lng);
    true
}

/// Hängt einen Punkt an den laufenden Stroke und glättet die Vorschau neu.
pub fn extend_stroke(
    drawing: &mut DrawingState,
    map: &dyn MapProvider,
    options: &DrawingOptions,
    pos: DVec2,
) {
    let Some(stroke) = drawing.in_progress.as_mut() else {
        return;
    };

    stroke.raw.push(map.project_to_geo(pos));
    stroke.preview.points = smooth_polyline(&stroke.raw, options.smoothing_iterations);
}

/// Schließt den laufenden Stroke ab.
///
/// Glättet den vollständigen Puffer, übernimmt den Stroke in die Liste und
/// gibt das Drag-Panning wieder frei. Ein Puffer mit weniger als 2 Punkten
/// (Klick ohne Bewegung) wird verworfen.
pub fn finish_stroke(
    drawing: &mut DrawingState,
    map: &mut dyn MapProvider,
    options: &DrawingOptions,
) -> Option<StrokeId> {
    let stroke = drawing.in_progress.take()?;
    map.set_drag_enabled(true);

    if stroke.raw.len() < MIN_RENDERABLE_POINTS {
        log::debug!("Stroke mit {} Punkt(en) verworfen", stroke.raw.len());
        return None;
    }

    let points = smooth_polyline(&stroke.raw, options.smoothing_iterations);
    let raw_len = stroke.raw.len();
    let finished = Stroke {
        points,
        ..stroke.preview
    };
    let smoothed_len = finished.len();
    let id = drawing.strokes.push(finished);

    log::debug!(
        "Stroke {} übernommen: {} Rohpunkte → {} geglättet",
        id,
        raw_len,
        smoothed_len
    );
    Some(id)
}
