//! Handler für Recorder, Radierer und Zeichen-Steuerung.

use crate::app::state::DrawingMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Beginnt einen Stroke an der Pixelposition.
pub fn begin_stroke(state: &mut AppState, pos: glam::DVec2) {
    use_cases::recorder::begin_stroke(&mut state.drawing, &mut state.map, pos);
}

/// Verlängert den laufenden Stroke.
pub fn extend_stroke(state: &mut AppState, pos: glam::DVec2) {
    use_cases::recorder::extend_stroke(&mut state.drawing, &state.map, &state.options, pos);
}

/// Schließt den laufenden Stroke ab.
pub fn finish_stroke(state: &mut AppState) {
    use_cases::recorder::finish_stroke(&mut state.drawing, &mut state.map, &state.options);
}

/// Radiert an der Pixelposition.
pub fn erase_at(state: &mut AppState, pos: glam::DVec2) {
    use_cases::eraser::erase_at(&mut state.drawing, &state.map, &state.options, pos);
}

/// Blendet den Radierer-Indikator aus.
pub fn hide_eraser_cursor(state: &mut AppState) {
    use_cases::eraser::hide_cursor(&mut state.drawing);
}

/// Setzt den Zeichenmodus.
pub fn set_mode(state: &mut AppState, mode: DrawingMode) {
    use_cases::drawing::set_mode(&mut state.drawing, &mut state.map, &state.options, mode);
}

/// Setzt die Strichfarbe für neue Strokes.
pub fn set_color(state: &mut AppState, color: String) {
    use_cases::drawing::set_color(&mut state.drawing, color);
}

/// Entfernt den zuletzt gezeichneten Stroke.
pub fn undo(state: &mut AppState) {
    if use_cases::drawing::undo_last(&mut state.drawing).is_none() {
        state.ui.status_message = Some("Nichts zum Rückgängigmachen".to_string());
    }
}

/// Entfernt alle Strokes.
pub fn clear(state: &mut AppState) {
    let count = use_cases::drawing::clear(&mut state.drawing);
    if count > 0 {
        state.ui.status_message = Some(format!("{} Zeichnungen gelöscht", count));
    }
}
