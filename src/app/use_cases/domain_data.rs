//! Use-Case-Funktionen für das Laden und Anwenden von Domain-Snapshots.

use anyhow::Context;

use crate::app::AppState;
use crate::core::{calculate_layout, initial_camera, DomainSnapshot};

/// Liest einen Snapshot aus einer JSON-Datei und wendet ihn an.
pub fn load_snapshot_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Snapshot-Datei nicht lesbar: {path}"))?;
    let snapshot: DomainSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Snapshot-Datei fehlerhaft: {path}"))?;

    log::info!(
        "Snapshot geladen: {} ({} Levels, {} Nodes)",
        snapshot.domain.name,
        snapshot.domain.levels.len(),
        snapshot.domain.node_count()
    );

    apply_snapshot(state, snapshot);
    state.ui.status_message = None;
    Ok(())
}

/// Ersetzt den Snapshot und baut Layout, Kamera und Interaktion neu auf.
///
/// Das Layout wird komplett neu berechnet (nie inkrementell mutiert);
/// die Kamera wird nur hier zurückgesetzt — ein Resize fasst sie nicht an.
pub fn apply_snapshot(state: &mut AppState, snapshot: DomainSnapshot) {
    let layout = calculate_layout(&snapshot.domain);

    state.view.camera = initial_camera(&layout.bounds);
    state.layout = std::sync::Arc::new(layout);
    state.snapshot = Some(std::sync::Arc::new(snapshot));
    state.selection.selected_node_id = None;
    state.interaction.hovered_node_id = None;
    state.interaction.pending_selection_event = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DomainData, NodeKind};

    fn snapshot(name: &str) -> DomainSnapshot {
        DomainSnapshot {
            domain: DomainData {
                element_id: None,
                name: name.into(),
                description: None,
                levels: Vec::new(),
            },
            progress: Default::default(),
        }
    }

    #[test]
    fn apply_resets_camera_and_clears_interaction() {
        let mut state = AppState::new();
        state.view.camera.look_at(glam::Vec2::new(500.0, 500.0));
        state.selection.selected_node_id = Some("level-0".into());
        state.interaction.hovered_node_id = Some("level-0".into());

        apply_snapshot(&mut state, snapshot("Chess"));

        assert_eq!(state.domain_name(), Some("Chess"));
        assert_eq!(state.selection.selected_node_id, None);
        assert_eq!(state.interaction.hovered_node_id, None);
        // Leere Domain: Kamera auf Null-Bounds, Standard-Zoom
        assert_eq!(state.view.camera.position, glam::Vec2::ZERO);
    }

    #[test]
    fn missing_file_degrades_with_error() {
        let mut state = AppState::new();

        let result = load_snapshot_file(&mut state, "/nonexistent/snapshot.json");

        assert!(result.is_err());
        assert!(state.snapshot.is_none());
    }

    #[test]
    fn layout_is_rebuilt_on_apply() {
        let mut state = AppState::new();
        let mut snap = snapshot("Chess");
        snap.domain.levels.push(crate::core::DomainLevel {
            element_id: None,
            level: 1,
            name: "Beginner".into(),
            description: None,
            points_required: 0,
            knowledge: Vec::new(),
            skills: Vec::new(),
            traits: Vec::new(),
            milestones: Vec::new(),
        });

        apply_snapshot(&mut state, snap);

        assert_eq!(state.node_count(), 1);
        assert_eq!(state.layout.nodes[0].kind, NodeKind::Level);
    }
}
