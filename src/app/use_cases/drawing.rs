//! Use-Case-Funktionen für Zeichenmodus, Farbe, Undo und Löschen.

use crate::app::state::{DrawingMode, DrawingState};
use crate::core::{MapProvider, Stroke};
use crate::shared::DrawingOptions;

use super::{eraser, recorder};

/// Wechselt den Zeichenmodus.
///
/// Verlassen des Zeichenmodus schließt einen laufenden Stroke ab,
/// Verlassen des Radier-Modus blendet den Indikator aus.
pub fn set_mode(
    drawing: &mut DrawingState,
    map: &mut dyn MapProvider,
    options: &DrawingOptions,
    mode: DrawingMode,
) {
    if drawing.mode == mode {
        return;
    }

    if drawing.mode == DrawingMode::Draw {
        recorder::finish_stroke(drawing, map, options);
    }
    if drawing.mode == DrawingMode::Erase {
        eraser::hide_cursor(drawing);
    }

    log::info!("Zeichenmodus: {} → {}", drawing.mode.label(), mode.label());
    drawing.mode = mode;
}

/// Setzt die Farbe für neue Strokes. Leere Farbwerte werden ignoriert.
pub fn set_color(drawing: &mut DrawingState, color: String) {
    let color = color.trim();
    if color.is_empty() {
        return;
    }
    drawing.stroke_color = color.to_string();
}

/// Entfernt den zuletzt gezeichneten Stroke.
pub fn undo_last(drawing: &mut DrawingState) -> Option<Stroke> {
    let (id, stroke) = drawing.strokes.pop()?;
    log::info!("Stroke {} rückgängig gemacht ({} Punkte)", id, stroke.len());
    Some(stroke)
}

/// Entfernt alle Strokes und gibt deren Anzahl zurück.
pub fn clear(drawing: &mut DrawingState) -> usize {
    let count = drawing.strokes.len();
    drawing.strokes.clear();
    if count > 0 {
        log::info!("{} Strokes gelöscht", count);
    }
    count
}
