//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! sowie die zentralen Konstanten und Laufzeit-Optionen.

pub mod options;
pub mod render_scene;

pub use options::ViewerOptions;
pub use render_scene::RenderScene;
