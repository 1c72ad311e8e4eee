//! Toolbar für Zeichenmodus, Farbe und Zeichen-Optionen.

use crate::app::{AppIntent, AppState, DrawingMode};

use super::map_view::parse_color;
use crate::shared::options::{
    ERASER_RADIUS_RANGE_PX, SMOOTHING_ITERATIONS_MAX, STROKE_WIDTH_RANGE_PX,
};

const SWATCH_SIZE: egui::Vec2 = egui::Vec2::new(18.0, 18.0);

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.drawing.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");

            if ui
                .add(egui::Button::new("✏ Zeichnen (D)").selected(active == DrawingMode::Draw))
                .clicked()
            {
                events.push(AppIntent::DrawingModeRequested {
                    mode: DrawingMode::Draw,
                });
            }
            if ui
                .add(egui::Button::new("⌫ Radieren (E)").selected(active == DrawingMode::Erase))
                .clicked()
            {
                events.push(AppIntent::DrawingModeRequested {
                    mode: DrawingMode::Erase,
                });
            }

            ui.separator();

            // ── Farbpalette ──
            for color in &state.options.color_palette {
                let selected = *color == state.drawing.stroke_color;
                let stroke = if selected {
                    egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
                } else {
                    egui::Stroke::new(1.0, egui::Color32::GRAY)
                };
                let swatch = egui::Button::new("")
                    .fill(parse_color(color))
                    .stroke(stroke)
                    .min_size(SWATCH_SIZE);
                if ui.add(swatch).on_hover_text(color).clicked() {
                    events.push(AppIntent::StrokeColorChanged {
                        color: color.clone(),
                    });
                }
            }

            ui.separator();

            if ui
                .add_enabled(!state.drawing.strokes.is_empty(), egui::Button::new("↶ Rückgängig"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(!state.drawing.strokes.is_empty(), egui::Button::new("🗑 Alle löschen"))
                .clicked()
            {
                events.push(AppIntent::ClearDrawingsRequested);
            }

            ui.separator();

            ui.menu_button("Optionen", |ui| {
                let mut options = state.options.clone();
                let mut changed = false;

                changed |= ui
                    .add(
                        egui::Slider::new(
                            &mut options.smoothing_iterations,
                            0..=SMOOTHING_ITERATIONS_MAX,
                        )
                        .text("Glättung"),
                    )
                    .changed();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut options.eraser_radius_px, ERASER_RADIUS_RANGE_PX)
                            .text("Radierer (px)"),
                    )
                    .changed();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut options.stroke_width_px, STROKE_WIDTH_RANGE_PX)
                            .text("Strichbreite (px)"),
                    )
                    .changed();

                if changed {
                    events.push(AppIntent::OptionsChanged { options });
                }

                ui.separator();
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
