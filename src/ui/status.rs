//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(name) = state.domain_name() {
                ui.label(format!(
                    "Domain: {} | Nodes: {} | Connections: {}",
                    name,
                    state.node_count(),
                    state.connection_count()
                ));
            } else {
                ui.label("No domain loaded");
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom,
                state.view.camera.position.x,
                state.view.camera.position.y
            ));

            if let Some(selected) = state
                .selection
                .selected_node_id
                .as_deref()
                .and_then(|id| state.layout.get(id))
            {
                ui.separator();
                ui.label(format!(
                    "Selected: {} ({})",
                    selected.name,
                    selected.kind.label()
                ));
            }

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });
    });
}
