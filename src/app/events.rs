//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::DomainSnapshot;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Snapshot-Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Host liefert einen bereits geladenen Domain-Snapshot
    SnapshotReplaced { snapshot: DomainSnapshot },
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf die Baum-Mitte zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Qualifizierter Klick: Node an Weltposition selektieren oder deselektieren
    NodePickRequested { world_pos: glam::Vec2 },
    /// Hover-Position hat sich geändert (Pointer oben, über dem Viewport)
    HoverMoved { world_pos: glam::Vec2 },
    /// Pointer hat den Viewport verlassen
    HoverCleared,
    /// Detail-Panel geschlossen (Selektion aufheben)
    ClearSelectionRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Snapshot-Datei laden und anwenden
    LoadSnapshotFile { path: String },
    /// Domain-Snapshot ersetzen (Layout + Kamera neu aufbauen)
    ApplySnapshot { snapshot: DomainSnapshot },
    /// Anwendung beenden
    RequestExit,
    /// Kamera auf die Baum-Mitte zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Node an Weltposition selektieren (kein Treffer = deselektieren)
    SelectNodeAt { world_pos: glam::Vec2 },
    /// Hover-Zustand an Weltposition aktualisieren
    UpdateHover { world_pos: glam::Vec2 },
    /// Hover-Zustand löschen
    ClearHover,
    /// Selektion aufheben
    ClearSelection,
}
