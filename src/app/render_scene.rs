//! Baut die Render-Szene aus dem AppState.

use std::sync::Arc;

use crate::shared::RenderScene;

use super::AppState;

/// Erstellt den read-only Frame-Snapshot für den Renderer.
///
/// Hover/Selektion werden hier von stabilen IDs auf Arena-Indizes
/// aufgelöst; der Renderer arbeitet nur mit Indizes.
pub fn build(state: &AppState, viewport_size: [f32; 2], time: f64) -> RenderScene {
    let layout = Arc::clone(&state.layout);

    let hovered_node = state
        .interaction
        .hovered_node_id
        .as_deref()
        .and_then(|id| layout.index_of(id));
    let selected_node = state
        .selection
        .selected_node_id
        .as_deref()
        .and_then(|id| layout.index_of(id));

    RenderScene {
        snapshot: state.snapshot.clone(),
        layout,
        camera: state.view.camera.clone(),
        viewport_size,
        hovered_node,
        selected_node,
        options: state.options.clone(),
        time,
    }
}
