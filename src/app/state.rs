//! Application State — zentrale Datenhaltung.

use std::sync::Arc;

use crate::core::{Camera2D, DomainSnapshot, TreeLayout};
use crate::shared::ViewerOptions;

use super::CommandLog;

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Auswahlbezogener Anwendungszustand
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Stabile Layout-ID des aktuell selektierten Nodes
    pub selected_node_id: Option<String>,
}

/// Interaktionszustand: Hover und ausstehendes Selektionsereignis.
#[derive(Clone, Default)]
pub struct InteractionState {
    /// Stabile Layout-ID des aktuell gehoverten Nodes (rein visuell)
    pub hovered_node_id: Option<String>,
    /// Ausstehendes Selektionsereignis für den Host.
    /// Genau ein Eintrag pro qualifizierendem Klick; `Some(None)` heißt
    /// Deselektion. Wird über `AppState::take_selection_event` geleert.
    pub pending_selection_event: Option<Option<String>>,
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Temporäre Statusnachricht (z.B. Ladefehler)
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladener Domain-Snapshot (None = nichts geladen)
    pub snapshot: Option<Arc<DomainSnapshot>>,
    /// Layout des aktuellen Snapshots (leer ohne Domain)
    pub layout: Arc<TreeLayout>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Interaktions-State (Hover, Selektionsereignis)
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Zoom-Grenzen, Labels, Culling)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            snapshot: None,
            layout: Arc::new(TreeLayout::empty()),
            view: ViewState::new(),
            ui: UiState::default(),
            selection: SelectionState::default(),
            interaction: InteractionState::default(),
            command_log: CommandLog::new(),
            options: ViewerOptions::default(),
            should_exit: false,
        }
    }

    /// Name der geladenen Domain (für Anzeige und Background-Cache-Key).
    pub fn domain_name(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.domain.name.as_str())
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.layout.node_count()
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.layout.connections.len()
    }

    /// Zieht das ausstehende Selektionsereignis ab (einmalige Zustellung).
    pub fn take_selection_event(&mut self) -> Option<Option<String>> {
        self.interaction.pending_selection_event.take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
