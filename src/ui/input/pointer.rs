//! Expliziter Pointer-Zustandsautomat: Klick/Drag-Unterscheidung.
//!
//! Zustände: `Idle → Pressed → Dragging`, Übergänge nur in eine
//! Richtung. Ein Pointer-Up in `Pressed` (Bewegung unter der Totzone in
//! beiden Achsen) ist ein Klick; sobald die Totzone einmal verlassen
//! wurde, kann die Geste kein Klick mehr werden. Die Totzone verhindert
//! versehentliche Deselektion durch ein zitterndes Aufliegen.
//!
//! Bewusst frei von egui-Typen, damit die Regel ohne UI-Framework
//! testbar bleibt.

use glam::Vec2;

/// Phase der aktuellen Pointer-Geste (Screen-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    /// Kein Button gedrückt
    Idle,
    /// Button unten, Totzone noch nicht verlassen
    Pressed { start: Vec2 },
    /// Button unten, Totzone verlassen — die Geste ist ein Drag
    Dragging { start: Vec2 },
}

/// Klassifikation beim Loslassen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Qualifizierter Klick an der Loslass-Position
    Click { pos: Vec2 },
    /// Die Geste war ein Drag — kein Selektionsereignis
    Drag,
}

/// Verfolgt die primäre Pointer-Geste über Frames hinweg.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    phase: PointerPhase,
    /// Totzone in Screen-Pixeln (pro Achse)
    threshold: f32,
}

impl PointerTracker {
    /// Erstellt einen Tracker mit der gegebenen Klick-Totzone.
    pub fn new(threshold: f32) -> Self {
        Self {
            phase: PointerPhase::Idle,
            threshold,
        }
    }

    /// Aktuelle Phase (für Cursor-Darstellung).
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    /// Gibt `true` zurück, solange der Button unten ist.
    pub fn is_down(&self) -> bool {
        !matches!(self.phase, PointerPhase::Idle)
    }

    /// Button wurde an `pos` gedrückt.
    pub fn on_press(&mut self, pos: Vec2) {
        self.phase = PointerPhase::Pressed { start: pos };
    }

    /// Pointer hat sich (bei gedrücktem Button) nach `pos` bewegt.
    pub fn on_move(&mut self, pos: Vec2) {
        if let PointerPhase::Pressed { start } = self.phase {
            let delta = pos - start;
            if delta.x.abs() >= self.threshold || delta.y.abs() >= self.threshold {
                self.phase = PointerPhase::Dragging { start };
            }
        }
    }

    /// Button wurde an `pos` losgelassen; klassifiziert die Geste.
    ///
    /// Gibt `None` zurück, wenn gar keine Geste aktiv war (z.B. Release
    /// nach Press außerhalb des Viewports).
    pub fn on_release(&mut self, pos: Vec2) -> Option<ReleaseOutcome> {
        let outcome = match self.phase {
            PointerPhase::Idle => None,
            PointerPhase::Pressed { start } => {
                let delta = pos - start;
                if delta.x.abs() < self.threshold && delta.y.abs() < self.threshold {
                    Some(ReleaseOutcome::Click { pos })
                } else {
                    Some(ReleaseOutcome::Drag)
                }
            }
            PointerPhase::Dragging { .. } => Some(ReleaseOutcome::Drag),
        };

        self.phase = PointerPhase::Idle;
        outcome
    }

    /// Bricht die Geste ab (Fokusverlust, Fenster verlassen).
    pub fn cancel(&mut self) {
        self.phase = PointerPhase::Idle;
    }
}
