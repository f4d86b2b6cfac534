//! Seitliches Detail-Panel für den selektierten Node.

use crate::app::{AppIntent, AppState};
use crate::core::{requirement_met, Requirement};

/// Rendert das Detail-Panel, wenn ein Node selektiert ist.
pub fn render_detail_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(node) = state
        .selection
        .selected_node_id
        .as_deref()
        .and_then(|id| state.layout.get(id))
    else {
        return events;
    };

    egui::SidePanel::right("node_detail_panel")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(&node.name);
            ui.label(node.kind.label());
            ui.separator();

            if let Some(description) = &node.description {
                ui.label(description);
                ui.add_space(8.0);
            }

            if let Some(points) = node.points_required {
                ui.label(format!("Points required: {points}"));
            }

            if let Some(requirement) = &node.requirement {
                let text = match requirement {
                    Requirement::Bloom(level) => format!("Requires bloom level: {level:?}"),
                    Requirement::Dreyfus(level) => format!("Requires dreyfus level: {level:?}"),
                    Requirement::MinScore(score) => format!("Requires score: {score:.0}"),
                };
                ui.label(text);
            }

            if let Some(snapshot) = &state.snapshot {
                let met = requirement_met(node, &snapshot.progress);
                let (text, color) = if met {
                    ("Requirement met", egui::Color32::LIGHT_GREEN)
                } else {
                    ("Not yet met", egui::Color32::GRAY)
                };
                ui.add_space(4.0);
                ui.colored_label(color, text);
            }

            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                events.push(AppIntent::ClearSelectionRequested);
            }
        });

    events
}
