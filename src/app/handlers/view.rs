//! Handler für Kartenausschnitt und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::view::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::view::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::view::resize(state, size);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    use_cases::view::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt in Viewport-Pixeln.
pub fn zoom_towards(state: &mut AppState, delta: f64, focus_px: Option<glam::DVec2>) {
    use_cases::view::zoom_towards(state, delta, focus_px);
}
