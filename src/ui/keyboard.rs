//! Keyboard-Shortcuts für die Kartenansicht.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, DrawingMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, mode: DrawingMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder (z.B. Farbeingabe) behalten ihre Tasten
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_z, key_o, key_d, key_e, key_escape, key_plus, key_minus) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::Z),
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::E),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
            )
        });

    if modifiers.command && key_z {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && key_o {
        events.push(AppIntent::ImportRequested);
    }

    if !modifiers.command {
        if key_d {
            events.push(AppIntent::DrawingModeRequested {
                mode: DrawingMode::Draw,
            });
        }
        if key_e {
            events.push(AppIntent::DrawingModeRequested {
                mode: DrawingMode::Erase,
            });
        }
        if key_plus {
            events.push(AppIntent::ZoomInRequested);
        }
        if key_minus {
            events.push(AppIntent::ZoomOutRequested);
        }
    }

    // Escape verlässt den aktiven Modus
    if key_escape && mode != DrawingMode::None {
        events.push(AppIntent::DrawingModeRequested { mode });
    }

    events
}
