//! Use-Case-Funktionen für Selektion und Hover.

use glam::Vec2;

use crate::app::AppState;
use crate::core::pick_node_at;

/// Selektiert den obersten Node an der Weltposition.
///
/// Kein Treffer bedeutet Deselektion. In beiden Fällen wird genau ein
/// Selektionsereignis für den Host hinterlegt — Hover löst nie eines aus.
pub fn select_node_at(state: &mut AppState, world_pos: Vec2) {
    let picked = pick_node_at(&state.layout, world_pos)
        .and_then(|index| state.layout.nodes.get(index))
        .map(|node| node.id.clone());

    if let Some(id) = picked.as_deref() {
        log::info!("Node selektiert: {id}");
    }

    state.selection.selected_node_id = picked.clone();
    state.interaction.pending_selection_event = Some(picked);
}

/// Aktualisiert den gehoverten Node an der Weltposition (rein visuell).
pub fn update_hover(state: &mut AppState, world_pos: Vec2) {
    state.interaction.hovered_node_id = pick_node_at(&state.layout, world_pos)
        .and_then(|index| state.layout.nodes.get(index))
        .map(|node| node.id.clone());
}

/// Löscht den Hover-Zustand (Pointer außerhalb des Viewports).
pub fn clear_hover(state: &mut AppState) {
    state.interaction.hovered_node_id = None;
}

/// Hebt die Selektion auf, ohne ein Selektionsereignis auszulösen.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected_node_id = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::domain_data::apply_snapshot;
    use crate::core::{DomainData, DomainLevel, DomainNode, DomainSnapshot};

    fn demo_state() -> AppState {
        let mut state = AppState::new();
        apply_snapshot(
            &mut state,
            DomainSnapshot {
                domain: DomainData {
                    element_id: None,
                    name: "Chess".into(),
                    description: None,
                    levels: vec![DomainLevel {
                        element_id: None,
                        level: 1,
                        name: "Beginner".into(),
                        description: None,
                        points_required: 10,
                        knowledge: vec![DomainNode {
                            element_id: Some("el-rules".into()),
                            name: "Rules".into(),
                            description: None,
                            bloom_level: None,
                            dreyfus_level: None,
                            min_score: None,
                        }],
                        skills: Vec::new(),
                        traits: Vec::new(),
                        milestones: Vec::new(),
                    }],
                },
                progress: Default::default(),
            },
        );
        state
    }

    #[test]
    fn click_on_node_selects_and_emits_event() {
        let mut state = demo_state();
        let target = state
            .layout
            .get("knowledge-0-Rules")
            .expect("Node erwartet")
            .position;

        select_node_at(&mut state, target);

        assert_eq!(
            state.selection.selected_node_id.as_deref(),
            Some("knowledge-0-Rules")
        );
        assert_eq!(
            state.take_selection_event(),
            Some(Some("knowledge-0-Rules".into()))
        );
        // Ereignis wird nur einmal zugestellt
        assert_eq!(state.take_selection_event(), None);
    }

    #[test]
    fn click_on_empty_space_deselects_with_event() {
        let mut state = demo_state();
        state.selection.selected_node_id = Some("knowledge-0-Rules".into());

        select_node_at(&mut state, Vec2::new(-9999.0, -9999.0));

        assert_eq!(state.selection.selected_node_id, None);
        assert_eq!(state.take_selection_event(), Some(None));
    }

    #[test]
    fn hover_updates_without_event() {
        let mut state = demo_state();
        let target = state
            .layout
            .get("level-0")
            .expect("Header erwartet")
            .position;

        update_hover(&mut state, target);
        assert_eq!(state.interaction.hovered_node_id.as_deref(), Some("level-0"));
        assert_eq!(state.take_selection_event(), None);

        clear_hover(&mut state);
        assert_eq!(state.interaction.hovered_node_id, None);
    }
}
