//! Plan-view camera
//!
//! World coordinates are meters with the hub at the origin and +y up.
//! Screen coordinates are CSS pixels with the origin top-left and +y down.

use glam::Vec2;

/// Margin around the city when framing it
const FRAME_MARGIN: f32 = 1.1;
/// Zoom limits in pixels per meter
pub const MIN_ZOOM: f32 = 0.005;
pub const MAX_ZOOM: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World point at the centre of the viewport
    pub center: Vec2,
    /// Pixels per meter
    pub zoom: f32,
    /// Viewport size in CSS pixels
    pub viewport: Vec2,
    last_reset: u64,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
            viewport: Vec2::new(width.max(1.0), height.max(1.0)),
            last_reset: 0,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Centre on the hub and fit a city of `radius` meters into the viewport
    pub fn frame_layout(&mut self, radius: f32) {
        self.center = Vec2::ZERO;
        if radius <= 0.0 || !radius.is_finite() {
            self.zoom = 1.0;
            return;
        }
        let fit = self.viewport.min_element() / (2.0 * radius * FRAME_MARGIN);
        self.zoom = fit.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Re-frame when `counter` differs from the last value seen.
    /// Returns true when a reset happened.
    pub fn observe_reset_trigger(&mut self, counter: u64, radius: f32) -> bool {
        if counter == self.last_reset {
            return false;
        }
        self.last_reset = counter;
        self.frame_layout(radius);
        log::debug!("Camera reset (trigger {})", counter);
        true
    }

    /// Multiply zoom by `factor`, keeping the world point under `anchor` fixed
    pub fn zoom_by(&mut self, factor: f32, anchor: Vec2) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let before = self.screen_to_world(anchor);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.screen_to_world(anchor);
        self.center += before - after;
    }

    /// Drag by a screen-space delta (pixels)
    pub fn pan_by(&mut self, delta: Vec2) {
        self.center -= Vec2::new(delta.x, -delta.y) / self.zoom;
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let half = self.viewport / 2.0;
        Vec2::new(
            (screen.x - half.x) / self.zoom + self.center.x,
            (half.y - screen.y) / self.zoom + self.center.y,
        )
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let half = self.viewport / 2.0;
        let d = (world - self.center) * self.zoom;
        Vec2::new(half.x + d.x, half.y - d.y)
    }

    /// World-to-clip scale for the vertex shader
    pub fn clip_scale(&self) -> Vec2 {
        2.0 * self.zoom / self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_frame_layout_fits_city() {
        let mut cam = Camera::new(1000.0, 800.0);
        cam.frame_layout(4000.0);
        assert_eq!(cam.center, Vec2::ZERO);
        // The whole city diameter fits in the short side
        let edge = cam.world_to_screen(Vec2::new(0.0, 4000.0));
        assert!(edge.y > 0.0 && edge.y < 400.0);
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let mut cam = Camera::new(1280.0, 720.0);
        cam.frame_layout(3950.0);
        cam.pan_by(Vec2::new(40.0, -25.0));
        let p = Vec2::new(321.0, 123.0);
        assert!(approx(cam.world_to_screen(cam.screen_to_world(p)), p));
        // Screen centre maps to camera centre
        assert!(approx(cam.screen_to_world(Vec2::new(640.0, 360.0)), cam.center));
    }

    #[test]
    fn test_zoom_keeps_anchor() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.frame_layout(2000.0);
        let anchor = Vec2::new(600.0, 100.0);
        let before = cam.screen_to_world(anchor);
        cam.zoom_by(2.0, anchor);
        assert!(approx(cam.screen_to_world(anchor), before));

        let zoom = cam.zoom;
        cam.zoom_by(f32::NAN, anchor);
        cam.zoom_by(0.0, anchor);
        assert_eq!(cam.zoom, zoom);
    }

    #[test]
    fn test_pan_moves_world_with_pointer() {
        let mut cam = Camera::new(800.0, 600.0);
        let p = Vec2::new(400.0, 300.0);
        let grabbed = cam.screen_to_world(p);
        cam.pan_by(Vec2::new(50.0, 20.0));
        assert!(approx(cam.world_to_screen(grabbed), p + Vec2::new(50.0, 20.0)));
    }

    #[test]
    fn test_reset_trigger_is_one_shot() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.frame_layout(4000.0);
        cam.zoom_by(3.0, Vec2::new(10.0, 10.0));
        let moved = cam.clone();

        // Same counter: no reset
        assert!(!cam.observe_reset_trigger(0, 4000.0));
        assert_eq!(cam, moved);

        assert!(cam.observe_reset_trigger(1, 4000.0));
        assert_eq!(cam.center, Vec2::ZERO);
        assert!(!cam.observe_reset_trigger(1, 4000.0));

        cam.pan_by(Vec2::new(100.0, 0.0));
        assert!(cam.observe_reset_trigger(2, 4000.0));
        assert_eq!(cam.center, Vec2::ZERO);
    }
}
