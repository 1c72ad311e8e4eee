use super::*;

const SCREEN: egui::Vec2 = egui::Vec2::new(800.0, 600.0);
const SURFACE: egui::Vec2 = egui::Vec2::new(400.0, 300.0);

/// Führt Frames mit einer 400×300-Kartenfläche oben links aus.
struct Surface {
    ctx: egui::Context,
    input: InputState,
    mode: DrawingMode,
    options: DrawingOptions,
}

impl Surface {
    fn new(mode: DrawingMode) -> Self {
        let mut surface = Self {
            ctx: egui::Context::default(),
            input: InputState::new(),
            mode,
            options: DrawingOptions::default(),
        };
        // Hit-Testing nutzt die Widget-Rechtecke des Vorframes
        surface.frame(Vec::new());
        surface
    }

    fn frame(&mut self, events: Vec<egui::Event>) -> Vec<AppIntent> {
        let raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
            events,
            ..Default::default()
        };

        let input = &mut self.input;
        let mode = self.mode;
        let options = &self.options;
        let mut intents = Vec::new();
        let _ = self.ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let (_, response) =
                        ui.allocate_exact_size(SURFACE, egui::Sense::click_and_drag());
                    intents = input.collect_viewport_events(ui, &response, mode, options);
                });
        });

        intents
            .into_iter()
            .filter(|i| !matches!(i, AppIntent::ViewportResized { .. }))
            .collect()
    }

    fn hover(&mut self, x: f32, y: f32) -> Vec<AppIntent> {
        self.frame(vec![egui::Event::PointerMoved(egui::pos2(x, y))])
    }

    fn press(&mut self, x: f32, y: f32) -> Vec<AppIntent> {
        self.frame(vec![
            egui::Event::PointerMoved(egui::pos2(x, y)),
            primary_button(x, y, true),
        ])
    }

    fn release(&mut self, x: f32, y: f32) -> Vec<AppIntent> {
        self.frame(vec![primary_button(x, y, false)])
    }

    /// Drückt bei `(x, y)`, bewegt `steps`-mal um `dx` nach rechts und lässt los.
    fn drag(&mut self, x: f32, y: f32, steps: usize, dx: f32) -> Vec<AppIntent> {
        let mut all = self.press(x, y);
        for step in 1..=steps {
            all.extend(self.hover(x + dx * step as f32, y));
        }
        all.extend(self.release(x + dx * steps as f32, y));
        all
    }
}

fn primary_button(x: f32, y: f32, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos: egui::pos2(x, y),
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

fn count(intents: &[AppIntent], pred: impl Fn(&AppIntent) -> bool) -> usize {
    intents.iter().filter(|i| pred(i)).count()
}

fn is_pan(intent: &AppIntent) -> bool {
    matches!(intent, AppIntent::CameraPan { .. })
}

fn is_move(intent: &AppIntent) -> bool {
    matches!(intent, AppIntent::PointerMoved { .. })
}

#[test]
fn test_draw_mode_drag_emits_press_moves_and_release() {
    let mut surface = Surface::new(DrawingMode::Draw);

    let intents = surface.drag(100.0, 100.0, 5, 10.0);

    match intents.first() {
        Some(AppIntent::PointerPressed { pos }) => assert_eq!(*pos, DVec2::new(100.0, 100.0)),
        other => panic!("PointerPressed erwartet, erhalten: {other:?}"),
    }
    assert!(count(&intents, is_move) >= 4, "{intents:?}");
    assert_eq!(count(&intents, is_pan), 0);
    assert!(matches!(intents.last(), Some(AppIntent::PointerReleased)));
}

#[test]
fn test_erase_mode_primary_drag_erases_instead_of_panning() {
    let mut surface = Surface::new(DrawingMode::Erase);
    surface.hover(100.0, 100.0);

    let intents = surface.drag(100.0, 100.0, 7, 10.0);

    assert_eq!(count(&intents, is_pan), 0, "{intents:?}");
    assert!(intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerPressed { .. })));
    assert!(count(&intents, is_move) >= 6, "{intents:?}");

    let last_move = intents.iter().rev().find_map(|i| match i {
        AppIntent::PointerMoved { pos } => Some(*pos),
        _ => None,
    });
    assert_eq!(last_move, Some(DVec2::new(170.0, 100.0)));
}

#[test]
fn test_primary_drag_without_mode_pans_map() {
    let mut surface = Surface::new(DrawingMode::None);

    let intents = surface.drag(100.0, 100.0, 5, 10.0);

    assert!(count(&intents, is_pan) >= 4, "{intents:?}");
    assert_eq!(count(&intents, is_move), 0);
    assert!(!intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerPressed { .. })));
}

#[test]
fn test_erase_mode_hover_follows_pointer() {
    let mut surface = Surface::new(DrawingMode::Erase);

    let mut intents = surface.hover(50.0, 50.0);
    intents.extend(surface.hover(60.0, 50.0));
    intents.extend(surface.hover(70.0, 50.0));

    assert!(count(&intents, is_move) >= 2, "{intents:?}");
    assert!(matches!(
        intents.last(),
        Some(AppIntent::PointerMoved { pos }) if *pos == DVec2::new(70.0, 50.0)
    ));
}

#[test]
fn test_draw_mode_hover_emits_no_moves() {
    let mut surface = Surface::new(DrawingMode::Draw);

    let mut intents = surface.hover(50.0, 50.0);
    intents.extend(surface.hover(60.0, 50.0));

    assert_eq!(count(&intents, is_move), 0, "{intents:?}");
}

#[test]
fn test_leaving_surface_emits_pointer_left_once() {
    let mut surface = Surface::new(DrawingMode::Erase);

    surface.hover(50.0, 50.0);
    let intents = surface.hover(600.0, 50.0);
    let after = surface.hover(650.0, 50.0);

    assert_eq!(
        count(&intents, |i| matches!(i, AppIntent::PointerLeft)),
        1,
        "{intents:?}"
    );
    assert!(after.is_empty(), "{after:?}");
}

#[test]
fn test_leaving_mid_stroke_ignores_rest_of_drag() {
    let mut surface = Surface::new(DrawingMode::Draw);

    let mut before_leave = surface.press(300.0, 100.0);
    before_leave.extend(surface.hover(320.0, 100.0));
    before_leave.extend(surface.hover(340.0, 100.0));
    assert!(count(&before_leave, is_move) >= 1, "{before_leave:?}");

    let leave = surface.hover(500.0, 100.0);
    assert_eq!(
        leave,
        vec![AppIntent::PointerLeft],
        "Verlassen darf keinen Punkt außerhalb aufzeichnen"
    );

    let mut rest = surface.hover(550.0, 100.0);
    rest.extend(surface.hover(600.0, 120.0));
    rest.extend(surface.release(600.0, 120.0));

    assert_eq!(count(&rest, is_pan), 0, "{rest:?}");
    assert_eq!(count(&rest, is_move), 0, "{rest:?}");
}

#[test]
fn test_first_geojson_drop_is_selected() {
    let dropped = vec![
        egui::DroppedFile {
            name: "notizen.txt".to_string(),
            bytes: Some(std::sync::Arc::from(&b"hallo"[..])),
            ..Default::default()
        },
        egui::DroppedFile {
            name: "Feld.GeoJSON".to_string(),
            bytes: Some(std::sync::Arc::from(&b"{}"[..])),
            ..Default::default()
        },
        egui::DroppedFile {
            name: "zweites.geojson".to_string(),
            bytes: Some(std::sync::Arc::from(&b"[]"[..])),
            ..Default::default()
        },
    ];

    match select_dropped_geojson(dropped) {
        Some(AppIntent::FileDropped { name, contents }) => {
            assert_eq!(name, "Feld.GeoJSON");
            assert_eq!(contents, "{}");
        }
        other => panic!("FileDropped erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_dropped_path_becomes_file_import() {
    let dropped = vec![egui::DroppedFile {
        path: Some(std::path::PathBuf::from("/daten/schlaege.geojson")),
        ..Default::default()
    }];

    assert!(matches!(
        select_dropped_geojson(dropped),
        Some(AppIntent::ImportFileSelected { path }) if path.ends_with("schlaege.geojson")
    ));
}

#[test]
fn test_drop_without_geojson_is_ignored() {
    let dropped = vec![egui::DroppedFile {
        name: "bild.png".to_string(),
        bytes: Some(std::sync::Arc::from(&b"\x89PNG"[..])),
        ..Default::default()
    }];

    assert!(select_dropped_geojson(dropped).is_none());
}
