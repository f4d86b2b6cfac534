//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::layout;

/// Setzt die Kamera auf die Baum-Mitte mit Standard-Zoom zurück.
///
/// Bei leerem Layout landet die Kamera auf den Null-Bounds — das ist
/// bewusst kein Sonderfall.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = layout::initial_camera(&state.layout.bounds);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    if let Some(focus) = focus_world {
        let old_zoom = state.view.camera.zoom;
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
        let new_zoom = state.view.camera.zoom;
        // Kamera-Position korrigieren, damit focus_world an gleicher Stelle bleibt
        let scale = old_zoom / new_zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    } else {
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn reset_camera_centers_on_empty_bounds() {
        let mut state = AppState::new();
        state.view.camera.look_at(Vec2::new(100.0, 200.0));

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, Vec2::ZERO);
    }

    #[test]
    fn zoom_in_increases_zoom() {
        let mut state = AppState::new();
        let before = state.view.camera.zoom;

        zoom_in(&mut state);

        assert!(state.view.camera.zoom > before);
    }

    #[test]
    fn zoom_out_decreases_zoom() {
        let mut state = AppState::new();
        let before = state.view.camera.zoom;

        zoom_out(&mut state);

        assert!(state.view.camera.zoom < before);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        zoom_out(&mut state);

        assert!((state.view.camera.zoom - original).abs() < 1e-5);
    }

    #[test]
    fn pan_moves_camera_position() {
        let mut state = AppState::new();

        pan(&mut state, Vec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.position, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn repeated_zoom_never_leaves_bounds() {
        let mut state = AppState::new();

        for _ in 0..50 {
            zoom_towards(&mut state, 1.5, Some(Vec2::new(40.0, -20.0)));
        }
        assert!(state.view.camera.zoom <= state.options.camera_zoom_max);

        for _ in 0..100 {
            zoom_towards(&mut state, 0.6, None);
        }
        assert!(state.view.camera.zoom >= state.options.camera_zoom_min);
    }

    #[test]
    fn zoom_towards_keeps_focus_point_fixed_on_screen() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        let viewport = Vec2::new(800.0, 600.0);
        let focus = Vec2::new(100.0, 50.0);

        let screen_before = state.view.camera.world_to_screen(focus, viewport);
        zoom_towards(&mut state, 1.1, Some(focus));
        let screen_after = state.view.camera.world_to_screen(focus, viewport);

        assert_relative_eq!(screen_before.x, screen_after.x, epsilon = 1e-2);
        assert_relative_eq!(screen_before.y, screen_after.y, epsilon = 1e-2);

        // Und rückwärts: der Screen-Punkt zeigt weiter auf denselben Welt-Punkt
        let world_after = state.view.camera.screen_to_world(screen_before, viewport);
        assert_relative_eq!(world_after.x, focus.x, epsilon = 1e-2);
        assert_relative_eq!(world_after.y, focus.y, epsilon = 1e-2);
    }
}
