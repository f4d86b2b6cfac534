//! Handler für Snapshot-Laden und Datei-Dialog.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::DomainSnapshot;

/// Öffnet den Datei-Dialog beim nächsten UI-Durchlauf.
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt eine Snapshot-Datei und propagiert Fehler an den Aufrufer.
pub fn load_snapshot_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::domain_data::load_snapshot_file(state, &path)
}

/// Ersetzt den Domain-Snapshot (Layout + Kamera werden neu aufgebaut).
pub fn apply_snapshot(state: &mut AppState, snapshot: DomainSnapshot) {
    use_cases::domain_data::apply_snapshot(state, snapshot);
}
