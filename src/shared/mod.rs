//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod smoothing;

pub use options::DrawingOptions;
pub use options::{EXPORT_ALL_FILE_NAME, EXPORT_DRAWN_FILE_NAME};
pub use render_scene::{RenderScene, SceneCircle, ScenePoint, ScenePolyline};
pub use smoothing::smooth_polyline;
