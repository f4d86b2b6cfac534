//! Viewport-Input-Handling: Maus-Events → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `pointer` — expliziter Klick/Drag-Zustandsautomat (egui-frei)
//! - `zoom` — Scroll-Zoom auf Mausposition

pub mod pointer;
mod zoom;

use glam::Vec2;

use crate::app::AppIntent;
use crate::core::Camera2D;
use crate::shared::ViewerOptions;

pub use pointer::{PointerPhase, PointerTracker, ReleaseOutcome};

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a ViewerOptions,
    pub hovered_node_id: Option<&'a str>,
}

/// Verwaltet den Input-Zustand für das Viewport (Klick, Drag, Scroll).
pub struct InputState {
    tracker: PointerTracker,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(&ViewerOptions::default())
    }
}

impl InputState {
    /// Erstellt einen neuen Input-Zustand mit der konfigurierten Totzone.
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            tracker: PointerTracker::new(options.click_drag_threshold_px),
        }
    }

    /// Gibt `true` zurück, solange eine Drag-Geste läuft (Cursor-Darstellung).
    pub fn is_dragging(&self) -> bool {
        matches!(self.tracker.phase(), PointerPhase::Dragging { .. })
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &ViewerOptions,
        hovered_node_id: Option<&str>,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
            hovered_node_id,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_pointer(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }

    /// Verarbeitet Press/Move/Release des primären Buttons plus Hover.
    fn handle_pointer(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (pressed, released, down, latest_pos, delta) = ctx.ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        if pressed {
            if let Some(pos) = latest_pos.filter(|p| ctx.response.rect.contains(*p)) {
                self.tracker.on_press(Vec2::new(pos.x, pos.y));
            }
        }

        if self.tracker.is_down() && down {
            if let Some(pos) = latest_pos {
                self.tracker.on_move(Vec2::new(pos.x, pos.y));
            }

            // Pan: Kamera wandert gegen die Pointer-Bewegung, skaliert mit 1/Zoom
            if delta != egui::Vec2::ZERO {
                let wpp = ctx.camera.world_per_pixel();
                events.push(AppIntent::CameraPan {
                    delta: Vec2::new(-delta.x * wpp, -delta.y * wpp),
                });
            }
        }

        if released {
            if let Some(pos) = latest_pos {
                match self.tracker.on_release(Vec2::new(pos.x, pos.y)) {
                    Some(ReleaseOutcome::Click { pos }) => {
                        let world_pos = screen_pos_to_world(
                            egui::pos2(pos.x, pos.y),
                            ctx.response,
                            ctx.viewport_size,
                            ctx.camera,
                        );
                        events.push(AppIntent::NodePickRequested { world_pos });
                    }
                    Some(ReleaseOutcome::Drag) | None => {}
                }
            } else {
                self.tracker.cancel();
            }
        }

        // Hover nur bei losgelassenem Button
        if !self.tracker.is_down() && !down {
            match latest_pos.filter(|p| ctx.response.rect.contains(*p)) {
                Some(pos) => {
                    let world_pos =
                        screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera);
                    events.push(AppIntent::HoverMoved { world_pos });
                }
                None => {
                    if ctx.hovered_node_id.is_some() {
                        events.push(AppIntent::HoverCleared);
                    }
                }
            }
        }
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        Vec2::new(local.x, local.y),
        Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
