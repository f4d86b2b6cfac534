//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Die Projektion zentriert die Kamera-Position im Viewport:
/// `screen = (world - position) * zoom + viewport / 2`.
/// `screen_to_world` ist die exakte algebraische Umkehrung.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten (Viewport-Zentrum)
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.25;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 2.0;
    /// Start-Zoom beim Laden einer Domain.
    pub const ZOOM_INITIAL: f32 = 0.7;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level, geklemmt auf `[min, max]`.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world: Vec2, viewport_size: Vec2) -> Vec2 {
        (world - self.position) * self.zoom + viewport_size * 0.5
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen: Vec2, viewport_size: Vec2) -> Vec2 {
        (screen - viewport_size * 0.5) / self.zoom + self.position
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_zoom_clamps_to_bounds() {
        let mut camera = Camera2D::new();

        for _ in 0..100 {
            camera.zoom_by_clamped(1.5, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX);
        }
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);

        for _ in 0..100 {
            camera.zoom_by_clamped(0.5, Camera2D::ZOOM_MIN, Camera2D::ZOOM_MAX);
        }
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MIN);
    }

    #[test]
    fn test_screen_center_maps_to_camera_position() {
        let mut camera = Camera2D::new();
        camera.look_at(Vec2::new(250.0, -80.0));
        camera.zoom = 1.3;
        let viewport = Vec2::new(800.0, 600.0);

        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), viewport);

        assert_relative_eq!(world.x, 250.0, epsilon = 1e-3);
        assert_relative_eq!(world.y, -80.0, epsilon = 1e-3);
    }

    #[test]
    fn test_world_screen_round_trip() {
        let viewport = Vec2::new(1280.0, 720.0);
        let cameras = [
            Camera2D::new(),
            Camera2D {
                position: Vec2::new(512.0, -300.0),
                zoom: 0.25,
            },
            Camera2D {
                position: Vec2::new(-77.5, 1234.0),
                zoom: 2.0,
            },
            Camera2D {
                position: Vec2::new(1000.0, 1000.0),
                zoom: 0.7,
            },
        ];
        let points = [
            Vec2::ZERO,
            Vec2::new(100.0, 50.0),
            Vec2::new(-950.0, 425.5),
            Vec2::new(1650.0, -1650.0),
        ];

        for camera in &cameras {
            for point in &points {
                let screen = camera.world_to_screen(*point, viewport);
                let world = camera.screen_to_world(screen, viewport);

                assert_relative_eq!(world.x, point.x, epsilon = 1e-3);
                assert_relative_eq!(world.y, point.y, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_world_per_pixel_halves_at_double_zoom() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel();
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel();

        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }
}
