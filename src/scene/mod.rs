//! Renderer contract
//!
//! `SceneInput` is everything the renderer and hit-testing are allowed to see,
//! borrowed from `AppState` once per frame.

pub mod camera;
pub mod geometry;
pub mod picking;

pub use camera::Camera;
pub use picking::pick;

use crate::app::{AppState, LayerVisibility};
use crate::layout::{RingConfig, RingId, UmbilicalTowerConfig, WalkwayConfig};
use crate::sim::{RingAngles, SimulationState};
use crate::theme::Theme;

pub struct SceneInput<'a> {
    pub rings: &'a [RingConfig],
    /// Already filtered by floor group, orphans removed
    pub walkways: Vec<&'a WalkwayConfig>,
    /// Empty unless the utilities layer is on
    pub umbilicals: Vec<&'a UmbilicalTowerConfig>,
    pub sim: &'a SimulationState,
    pub angles: &'a RingAngles,
    pub reset_trigger: u64,
    pub layers: LayerVisibility,
    pub opacity: f64,
    pub theme: Theme,
}

impl<'a> SceneInput<'a> {
    pub fn from_app(app: &'a AppState) -> Self {
        Self {
            rings: app.rings(),
            walkways: app.visible_walkways(),
            umbilicals: app.visible_umbilicals(),
            sim: app.sim(),
            angles: app.angles(),
            reset_trigger: app.reset_trigger(),
            layers: *app.layers(),
            opacity: app.opacity(),
            theme: app.theme(),
        }
    }

    pub fn ring(&self, id: &RingId) -> Option<&'a RingConfig> {
        self.rings.iter().find(|r| &r.id == id)
    }

    /// Current rotation of a ring in radians
    pub fn ring_angle(&self, ring: &RingConfig) -> f32 {
        self.angles.get(&ring.id) as f32
    }

    /// Outermost radius, used to frame the camera
    pub fn city_radius(&self) -> f32 {
        self.rings
            .iter()
            .map(|r| r.outer_radius as f32)
            .fold(0.0, f32::max)
    }

    /// Adjacent ring pairs with the ground gap between them
    pub fn gaps(&self) -> impl Iterator<Item = (&'a RingConfig, &'a RingConfig, (f32, f32))> + '_ {
        self.rings.windows(2).filter_map(|pair| {
            geometry::gap_band(&pair[0], &pair[1]).map(|gap| (&pair[0], &pair[1], gap))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Command, Layer};
    use crate::layout::LayoutParams;

    #[test]
    fn test_input_mirrors_app() {
        let mut app = AppState::new(LayoutParams::default(), 3);
        app.apply(Command::SetLayer(Layer::Utilities, true)).unwrap();
        app.apply(Command::Reset).unwrap();

        let input = SceneInput::from_app(&app);
        assert_eq!(input.rings.len(), 9);
        assert_eq!(input.walkways.len(), app.walkways().len());
        assert!(!input.umbilicals.is_empty());
        assert_eq!(input.reset_trigger, 1);
        assert_eq!(input.city_radius(), 3950.0);
        // Hub touches r1, every other pair has a 150 m gap
        assert_eq!(input.gaps().count(), 7);
    }
}
