//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::DrawingOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Entfernt die aktuelle Statusnachricht.
pub fn dismiss_status_message(state: &mut AppState) {
    state.ui.status_message = None;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: DrawingOptions) -> anyhow::Result<()> {
    adopt_options(state, options);
    let path = DrawingOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    adopt_options(state, DrawingOptions::default());
    let path = DrawingOptions::config_path();
    state.options.save_to_file(&path)
}

fn adopt_options(state: &mut AppState, options: DrawingOptions) {
    let options = options.clamped();
    state.map.set_zoom_limits(options.zoom_min, options.zoom_max);
    state.options = options;
}
