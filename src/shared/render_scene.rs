//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use std::sync::Arc;

use crate::core::{Camera2D, DomainSnapshot, TreeLayout, UserProgress};

use super::ViewerOptions;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Geladener Snapshot (Arc für O(1)-Clone pro Frame)
    pub snapshot: Option<Arc<DomainSnapshot>>,
    /// Layout des aktuellen Snapshots
    pub layout: Arc<TreeLayout>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Arena-Index des gehoverten Nodes
    pub hovered_node: Option<usize>,
    /// Arena-Index des selektierten Nodes
    pub selected_node: Option<usize>,
    /// Laufzeit-Optionen (Labels, Culling)
    pub options: ViewerOptions,
    /// Monotone Zeit in Sekunden (Stern-Twinkle)
    pub time: f64,
}

impl RenderScene {
    /// Gibt zurück, ob eine Domain für Rendering vorhanden ist.
    pub fn has_domain(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Name der geladenen Domain (Key für den Background-Cache).
    pub fn domain_name(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.domain.name.as_str())
    }

    /// User-Progress des Snapshots (für Completion-Darstellung).
    pub fn progress(&self) -> Option<&UserProgress> {
        self.snapshot.as_ref().map(|s| &s.progress)
    }
}
