//! Use-Case-Funktionen für Kartenausschnitt und Viewport.

use glam::DVec2;

use crate::app::AppState;
use crate::core::MapProvider;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state
        .map
        .set_size(DVec2::new(size[0] as f64, size[1] as f64));
}

/// Verschiebt die Karte um ein Pixel-Delta, sofern Drag-Panning erlaubt ist.
pub fn pan(state: &mut AppState, delta: DVec2) {
    if !state.map.drag_enabled() {
        return;
    }
    state.map.pan_px(delta);
}

/// Zoomt um `delta` Stufen, optional um einen Fokuspunkt in Pixeln.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus_px: Option<DVec2>) {
    state.map.zoom_around(delta, focus_px);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.zoom_step;
    state.map.zoom_around(step, None);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.zoom_step;
    state.map.zoom_around(-step, None);
}
