//! Agro Map Sketch.
//!
//! Freihand-Zeichnen und Radieren auf einer Web-Mercator-Karte mit
//! GeoJSON-Import und -Export, gebaut mit egui.

use agro_map_sketch::{
    ui, AppController, AppIntent, AppState, DrawingMode, DrawingOptions, MapProvider,
    OverlayLayer,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Agro Map Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Agro Map Sketch")
                .with_drag_and_drop(true),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Agro Map Sketch",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DrawingOptions::config_path();
        let options = DrawingOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        // Basiskarte genau einmal beim Aufbau registrieren
        state
            .map
            .add_overlay(OverlayLayer::tile("Basiskarte", "Kacheln © OpenStreetMap"));

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let response = match self.state.drawing.mode {
                    DrawingMode::Draw => response.on_hover_cursor(egui::CursorIcon::Crosshair),
                    DrawingMode::Erase => response.on_hover_cursor(egui::CursorIcon::None),
                    DrawingMode::None => response.on_hover_cursor(egui::CursorIcon::Grab),
                };

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    self.state.drawing.mode,
                    &self.state.options,
                ));

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui.painter(), rect, &scene);

                if !self.state.map.drag_enabled() {
                    ui.painter().text(
                        rect.left_top() + egui::vec2(8.0, 8.0),
                        egui::Align2::LEFT_TOP,
                        "Zeichnen…",
                        egui::FontId::proportional(14.0),
                        egui::Color32::DARK_GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.drawing.is_recording()
        {
            ctx.request_repaint();
        }
    }
}
