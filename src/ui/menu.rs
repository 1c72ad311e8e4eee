//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState, ExportVariant};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_strokes = !state.drawing.strokes.is_empty();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("GeoJSON importieren... (Ctrl+O)").clicked() {
                    events.push(AppIntent::ImportRequested);
                    ui.close();
                }

                ui.separator();

                for variant in [ExportVariant::DrawnOnly, ExportVariant::AllOverlays] {
                    if ui.button(format!("{}...", variant.label())).clicked() {
                        events.push(AppIntent::ExportRequested { variant });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui
                    .add_enabled(has_strokes, egui::Button::new("Rückgängig (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(has_strokes, egui::Button::new("Alle Zeichnungen löschen"))
                    .clicked()
                {
                    events.push(AppIntent::ClearDrawingsRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Hineinzoomen (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Herauszoomen (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
