//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Strokes: {} | Punkte: {} | Overlays: {}",
                state.stroke_count(),
                state.drawing.strokes.total_points(),
                state.vector_overlay_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2} | Zentrum: ({:.5}, {:.5})",
                state.map.zoom, state.map.center.lat, state.map.center.lng
            ));

            ui.separator();

            ui.label(format!("Modus: {}", state.drawing.mode.label()));

            if let Some(cursor) = state.drawing.eraser_cursor {
                ui.separator();
                ui.label(format!("Radierer: {:.1} m", cursor.radius_m));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✕").clicked() {
                    events.push(AppIntent::StatusMessageDismissed);
                }
            }
        });
    });

    events
}
