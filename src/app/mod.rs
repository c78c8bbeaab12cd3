//! Application state and control surface
//!
//! One owner (`AppState`), mutated only through `Command`s, with every
//! dependent view derived by the pure functions in `selectors`.

pub mod command;
pub mod selectors;
pub mod state;
pub mod view;
pub mod visibility;

pub use command::{Command, RingEdit};
pub use state::AppState;
pub use view::{DiagramElement, InfrastructureView, UtilitySystem, View};
pub use visibility::{FloorGroupVisibility, Layer, LayerVisibility};
