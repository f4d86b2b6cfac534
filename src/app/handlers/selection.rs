//! Handler für Selektion und Hover.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert den Node an der Weltposition (kein Treffer = Deselektion).
pub fn select_node_at(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::select_node_at(state, world_pos);
}

/// Aktualisiert den Hover-Zustand an der Weltposition.
pub fn update_hover(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::selection::update_hover(state, world_pos);
}

/// Löscht den Hover-Zustand.
pub fn clear_hover(state: &mut AppState) {
    use_cases::selection::clear_hover(state);
}

/// Hebt die Selektion auf (ohne Selektionsereignis).
pub fn clear_selection(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
