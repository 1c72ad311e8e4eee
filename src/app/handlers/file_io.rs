//! Handler für GeoJSON-Export und -Import.

use crate::app::use_cases;
use crate::app::use_cases::export::ExportVariant;
use crate::app::AppState;

/// Öffnet den Speichern-Dialog für eine Export-Variante.
pub fn request_export(state: &mut AppState, variant: ExportVariant) {
    state.ui.pending_export = Some(variant);
}

/// Erzeugt den Export und schreibt ihn nach `path`.
pub fn export(state: &mut AppState, variant: ExportVariant, path: String) -> anyhow::Result<()> {
    let artifact = use_cases::export::build_export(&state.drawing.strokes, &state.map, variant)?;
    use_cases::export::write_export(&artifact, std::path::Path::new(&path))?;

    state.ui.status_message = Some(if artifact.skipped > 0 {
        format!(
            "{} Features nach {} exportiert ({} übersprungen)",
            artifact.feature_count, path, artifact.skipped
        )
    } else {
        format!("{} Features nach {} exportiert", artifact.feature_count, path)
    });
    Ok(())
}

/// Öffnet den Datei-Öffnen-Dialog für GeoJSON.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Lädt eine GeoJSON-Datei als Overlay.
///
/// Fehler werden geloggt und als Statusnachricht angezeigt, die Karte
/// bleibt dabei unverändert.
pub fn import_file(state: &mut AppState, path: String) {
    let result = use_cases::import::import_geojson_file(&mut state.map, std::path::Path::new(&path));
    report_import(state, &path, result);
}

/// Lädt GeoJSON-Text (Drag & Drop) als Overlay.
pub fn import_text(state: &mut AppState, name: String, text: String) {
    let result = use_cases::import::import_geojson_text(&mut state.map, &name, &text);
    report_import(state, &name, result);
}

fn report_import(
    state: &mut AppState,
    name: &str,
    result: Result<crate::core::OverlayId, crate::geojson::GeoJsonError>,
) {
    match result {
        Ok(_) => {
            state.ui.status_message = Some(format!("'{}' importiert", name));
        }
        Err(e) => {
            log::error!("Import von '{}' fehlgeschlagen: {}", name, e);
            state.ui.status_message = Some(format!("Import von '{}' fehlgeschlagen: {}", name, e));
        }
    }
}
