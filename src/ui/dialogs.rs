//! Datei-Dialoge für Import und Export.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // GeoJSON-Import
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["geojson", "json"])
            .pick_file()
        {
            events.push(AppIntent::ImportFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Export mit fest vorgeschlagenem Dateinamen
    if let Some(variant) = ui_state.pending_export.take() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["geojson"])
            .set_file_name(variant.file_name())
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                variant,
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
