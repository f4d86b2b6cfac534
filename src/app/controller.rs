//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Daten ===
            AppCommand::RequestOpenFileDialog => handlers::data::request_open(state),
            AppCommand::LoadSnapshotFile { path } => handlers::data::load_snapshot_file(state, path)?,
            AppCommand::ApplySnapshot { snapshot } => handlers::data::apply_snapshot(state, snapshot),
            AppCommand::RequestExit => state.should_exit = true,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Selektion & Hover ===
            AppCommand::SelectNodeAt { world_pos } => {
                handlers::selection::select_node_at(state, world_pos)
            }
            AppCommand::UpdateHover { world_pos } => {
                handlers::selection::update_hover(state, world_pos)
            }
            AppCommand::ClearHover => handlers::selection::clear_hover(state),
            AppCommand::ClearSelection => handlers::selection::clear_selection(state),
        }

        Ok(())
    }
}
