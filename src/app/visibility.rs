//! Visibility toggles shared between the control panel and the renderer

use serde::{Deserialize, Serialize};

use crate::layout::FloorGroup;

/// Which bridge floor groups are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorGroupVisibility {
    pub low: bool,
    pub mid: bool,
    pub high: bool,
}

impl Default for FloorGroupVisibility {
    fn default() -> Self {
        Self {
            low: true,
            mid: true,
            high: true,
        }
    }
}

impl FloorGroupVisibility {
    pub fn is_visible(&self, group: FloorGroup) -> bool {
        match group {
            FloorGroup::Low => self.low,
            FloorGroup::Mid => self.mid,
            FloorGroup::High => self.high,
        }
    }

    /// Floor-level predicate: <= 4 low, <= 8 mid, else high
    pub fn shows_floor(&self, floor: u32) -> bool {
        self.is_visible(FloorGroup::of_floor(floor))
    }

    pub fn set(&mut self, group: FloorGroup, visible: bool) {
        match group {
            FloorGroup::Low => self.low = visible,
            FloorGroup::Mid => self.mid = visible,
            FloorGroup::High => self.high = visible,
        }
    }
}

/// Optional scene layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layer {
    Utilities,
    Tunnels,
    SolarPanels,
    RooftopAmenities,
    GroundAmenities,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Utilities,
        Layer::Tunnels,
        Layer::SolarPanels,
        Layer::RooftopAmenities,
        Layer::GroundAmenities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Layer::Utilities => "Utilities",
            Layer::Tunnels => "Tunnels",
            Layer::SolarPanels => "Solar Panels",
            Layer::RooftopAmenities => "Rooftop Amenities",
            Layer::GroundAmenities => "Ground Amenities",
        }
    }

    /// DOM id suffix used by the control panel checkboxes
    pub fn key(&self) -> &'static str {
        match self {
            Layer::Utilities => "utilities",
            Layer::Tunnels => "tunnels",
            Layer::SolarPanels => "solar",
            Layer::RooftopAmenities => "rooftop",
            Layer::GroundAmenities => "ground",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerVisibility {
    pub utilities: bool,
    pub tunnels: bool,
    pub solar_panels: bool,
    pub rooftop_amenities: bool,
    pub ground_amenities: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            // Utilities are an x-ray view, off until asked for
            utilities: false,
            tunnels: true,
            solar_panels: true,
            rooftop_amenities: true,
            ground_amenities: true,
        }
    }
}

impl LayerVisibility {
    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Utilities => self.utilities,
            Layer::Tunnels => self.tunnels,
            Layer::SolarPanels => self.solar_panels,
            Layer::RooftopAmenities => self.rooftop_amenities,
            Layer::GroundAmenities => self.ground_amenities,
        }
    }

    pub fn set(&mut self, layer: Layer, visible: bool) {
        match layer {
            Layer::Utilities => self.utilities = visible,
            Layer::Tunnels => self.tunnels = visible,
            Layer::SolarPanels => self.solar_panels = visible,
            Layer::RooftopAmenities => self.rooftop_amenities = visible,
            Layer::GroundAmenities => self.ground_amenities = visible,
        }
    }
}
