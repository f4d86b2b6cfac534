//! Use-Case-Funktionen für den Viewport.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe.
///
/// Ausschließlich die Pixel-Dimensionen ändern sich: Node-Positionen
/// sind viewport-unabhängig, und Pan/Zoom-Zustand überlebt ein Resize.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
