//! The Rotunda - a concentric rotating city
//!
//! Core modules:
//! - `layout`: Deterministic procedural generation (rings, bridges, umbilical towers)
//! - `sim`: Simulation clock (play/pause, time scale, ring rotation)
//! - `app`: Single-owner application state and control-surface commands
//! - `scene`: Renderer contract (camera framing, hit-testing for hover info)
//! - `renderer`: WebGPU rendering pipeline
//! - `advisory`: AI text generation side feature
//! - `theme`: Dark/light preference and palette

pub mod advisory;
pub mod app;
pub mod error;
pub mod hover;
pub mod layout;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod theme;

pub use app::{AppState, Command};
pub use error::{Result, RotundaError};
pub use layout::{Layout, LayoutParams, RingConfig, WalkwayConfig};
pub use theme::Theme;

use glam::Vec2;

/// City configuration constants
pub mod consts {
    /// Gap between two sections of the same ring, in meters of arc at mid radius
    pub const SECTION_GAP: f32 = 20.0;

    /// Time scale bounds (UI slider range)
    pub const MIN_TIME_SCALE: f64 = 1.0;
    pub const MAX_TIME_SCALE: f64 = 5000.0;
    pub const DEFAULT_TIME_SCALE: f64 = 200.0;

    /// Largest wall-clock step accepted per frame (seconds)
    pub const MAX_FRAME_DT: f64 = 0.25;

    /// Global opacity bounds
    pub const MIN_OPACITY: f64 = 0.1;
    pub const MAX_OPACITY: f64 = 1.0;

    /// Rings appended from the control panel
    pub const ADDED_RING_GAP: f64 = 150.0;
    pub const ADDED_RING_WIDTH: f64 = 300.0;
    pub const ADDED_RING_SECTIONS: u32 = 30;
    pub const ADDED_RING_FLOORS: u32 = 15;
    pub const FIRST_RING_INNER_RADIUS: f64 = 500.0;

    /// Upper bounds for ring edits; tower and section counts scale with these
    pub const MAX_RING_RADIUS: f64 = 100_000.0;
    pub const MAX_SECTIONS: u32 = 1000;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
