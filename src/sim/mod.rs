//! Simulation clock
//!
//! Owns play/pause and time scale; ring angles advance by real frame time.
//! No rendering or platform dependencies.

pub mod state;
pub mod tick;

pub use state::{SimPhase, SimulationState};
pub use tick::{RingAngles, angular_velocity, frame_dt, tick, wrap_angle};
