//! Per-frame rotation advance
//!
//! Unlike a fixed-step game loop, ring rotation is a closed-form function of
//! elapsed time, so each frame simply advances by the real frame delta.

use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use super::state::SimulationState;
use crate::consts::MAX_FRAME_DT;
use crate::layout::{RingConfig, RingId};

/// Degrees/minute to radians/second
#[inline]
pub fn angular_velocity(speed_deg_per_min: f64) -> f64 {
    (speed_deg_per_min / 60.0) * (PI / 180.0)
}

/// Angle normalized to [-π, π)
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Wall-clock delta between two frame timestamps (milliseconds), in seconds.
///
/// The first frame, clock skew and backgrounded tabs produce 0 or a clamped step.
pub fn frame_dt(last_ms: f64, now_ms: f64) -> f64 {
    if last_ms <= 0.0 {
        return 0.0;
    }
    let dt = (now_ms - last_ms) / 1000.0;
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}

/// Accumulated rotation of each ring (radians, wrapped)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RingAngles {
    angles: BTreeMap<RingId, f64>,
}

impl RingAngles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current angle of a ring; unknown rings sit at 0
    pub fn get(&self, id: &RingId) -> f64 {
        self.angles.get(id).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, id: &RingId, angle: f64) {
        self.angles.insert(id.clone(), wrap_angle(angle));
    }

    pub fn advance(&mut self, id: &RingId, delta: f64) {
        let angle = self.angles.entry(id.clone()).or_insert(0.0);
        *angle = wrap_angle(*angle + delta);
    }

    /// Drop angles of rings that no longer exist
    pub fn retain_rings(&mut self, rings: &[RingConfig]) {
        self.angles.retain(|id, _| rings.iter().any(|r| &r.id == id));
    }

    pub fn clear(&mut self) {
        self.angles.clear();
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

/// Advance the clock and every ring's angle by `dt` wall-clock seconds
pub fn tick(state: &mut SimulationState, angles: &mut RingAngles, rings: &[RingConfig], dt: f64) {
    if !state.is_playing() || dt.is_nan() || dt <= 0.0 {
        return;
    }

    let scaled = dt * state.time_scale;
    state.current_time += scaled;

    for ring in rings {
        if ring.rotation_speed == 0.0 || !ring.rotation_speed.is_finite() {
            continue;
        }
        angles.advance(&ring.id, angular_velocity(ring.rotation_speed) * scaled);
    }
}
