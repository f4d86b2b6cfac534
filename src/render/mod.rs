//! CPU-Rendering über den egui-Painter.

mod background_renderer;
mod connection_renderer;
mod node_renderer;

pub use crate::shared::RenderScene;

use egui::Color32;
use glam::Vec2;

use crate::core::{generate_background, BackgroundState};

/// Cache-Key des generierten Hintergrunds.
///
/// Der Generator läuft höchstens einmal pro `(Domain-Name, Breite, Höhe)`;
/// zwischen Frames wird das gecachte Ergebnis wiederverwendet.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BackgroundCacheKey {
    domain_name: String,
    width: u32,
    height: u32,
}

/// Haupt-Renderer für Domain-Bäume.
///
/// Zeichnet pro Frame: Hintergrund (aus dem Cache), Verbindungen, Nodes
/// in Back-to-Front-Reihenfolge. Eigener Zustand ist ausschließlich der
/// Background-Cache.
#[derive(Default)]
pub struct Renderer {
    background_cache: Option<(BackgroundCacheKey, BackgroundState)>,
}

impl Renderer {
    /// Erstellt einen neuen Renderer mit leerem Background-Cache.
    pub fn new() -> Self {
        Self {
            background_cache: None,
        }
    }

    /// Rendert die komplette Szene in den gegebenen Viewport-Ausschnitt.
    pub fn render_scene(&mut self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        // Flacher Fallback, solange kein Hintergrund generiert ist
        painter.rect_filled(
            rect,
            egui::CornerRadius::ZERO,
            color32(crate::shared::options::COLOR_BACKGROUND),
        );

        let Some(domain_name) = scene.domain_name() else {
            return;
        };

        let background = self.cached_background(domain_name, rect.size());
        background_renderer::draw(painter, rect, background, scene.time);
        connection_renderer::draw(painter, rect, scene);
        node_renderer::draw(painter, rect, scene);
    }

    /// Holt den Hintergrund aus dem Cache oder generiert ihn bei Key-Wechsel neu.
    fn cached_background(&mut self, domain_name: &str, size: egui::Vec2) -> &BackgroundState {
        let key = BackgroundCacheKey {
            domain_name: domain_name.to_owned(),
            width: size.x.round() as u32,
            height: size.y.round() as u32,
        };

        let entry = match self.background_cache.take() {
            Some(entry) if entry.0 == key => entry,
            _ => {
                log::info!(
                    "Generiere Hintergrund für '{}' ({}x{})",
                    key.domain_name,
                    key.width,
                    key.height
                );
                let state = generate_background(domain_name, size.x, size.y);
                (key, state)
            }
        };

        let (_, state) = self.background_cache.insert(entry);
        state
    }
}

/// RGBA-Array (0..1) → egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0).round() as u8,
        (rgba[1] * 255.0).round() as u8,
        (rgba[2] * 255.0).round() as u8,
        (rgba[3] * 255.0).round() as u8,
    )
}

/// RGBA-Array mit überschriebenem Alpha.
pub(crate) fn color32_with_alpha(rgba: [f32; 4], alpha: f32) -> Color32 {
    color32([rgba[0], rgba[1], rgba[2], alpha.clamp(0.0, 1.0)])
}

/// Welt-Position → Screen-Position innerhalb des Viewport-Rechtecks.
pub(crate) fn world_to_rect(
    world: Vec2,
    camera: &crate::core::Camera2D,
    rect: egui::Rect,
) -> egui::Pos2 {
    let viewport = Vec2::new(rect.width(), rect.height());
    let screen = camera.world_to_screen(world, viewport);
    rect.min + egui::vec2(screen.x, screen.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_regenerates_only_on_key_change() {
        let mut renderer = Renderer::new();

        let first = renderer
            .cached_background("Chess", egui::vec2(800.0, 600.0))
            .clone();
        let second = renderer
            .cached_background("Chess", egui::vec2(800.0, 600.0))
            .clone();
        assert_eq!(first, second);

        let resized = renderer
            .cached_background("Chess", egui::vec2(400.0, 300.0))
            .clone();
        assert_ne!(first.size, resized.size);

        let other = renderer
            .cached_background("Piano", egui::vec2(400.0, 300.0))
            .clone();
        assert_ne!(resized.seed, other.seed);
    }

    #[test]
    fn color_conversion_hits_byte_values() {
        assert_eq!(
            color32([1.0, 0.0, 0.5, 1.0]),
            Color32::from_rgba_unmultiplied(255, 0, 128, 255)
        );
        assert_eq!(
            color32_with_alpha([1.0, 1.0, 1.0, 1.0], 0.5),
            Color32::from_rgba_unmultiplied(255, 255, 255, 128)
        );
    }
}
