//! Simulation clock state
//!
//! Two phases, both user-driven: there are no automatic pause conditions.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TIME_SCALE, MAX_TIME_SCALE, MIN_TIME_SCALE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Rings advance every frame
    Playing,
    /// Rings hold their current angle
    Paused,
}

impl SimPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SimPhase::Playing => "RUNNING",
            SimPhase::Paused => "PAUSED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub phase: SimPhase,
    /// Multiplier applied to wall-clock time
    pub time_scale: f64,
    /// Simulated seconds since the last reset
    pub current_time: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            phase: SimPhase::Playing,
            time_scale: DEFAULT_TIME_SCALE,
            current_time: 0.0,
        }
    }
}

impl SimulationState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == SimPhase::Playing
    }

    pub fn play(&mut self) {
        self.phase = SimPhase::Playing;
    }

    pub fn pause(&mut self) {
        self.phase = SimPhase::Paused;
    }

    pub fn toggle_play(&mut self) {
        self.phase = match self.phase {
            SimPhase::Playing => SimPhase::Paused,
            SimPhase::Paused => SimPhase::Playing,
        };
    }

    /// Clamp into the slider range. Returns false (and keeps the old value) for NaN.
    pub fn set_time_scale(&mut self, scale: f64) -> bool {
        if scale.is_nan() {
            return false;
        }
        self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
        true
    }

    /// Force Playing and rewind simulated time
    pub fn reset(&mut self) {
        self.phase = SimPhase::Playing;
        self.current_time = 0.0;
    }
}
