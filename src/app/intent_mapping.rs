//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadSnapshotFile { path }],
        AppIntent::SnapshotReplaced { snapshot } => {
            vec![AppCommand::ApplySnapshot { snapshot }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::NodePickRequested { world_pos } => {
            vec![AppCommand::SelectNodeAt { world_pos }]
        }
        AppIntent::HoverMoved { world_pos } => vec![AppCommand::UpdateHover { world_pos }],
        AppIntent::HoverCleared => vec![AppCommand::ClearHover],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
    }
}
