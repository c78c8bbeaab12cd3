//! Hover tooltip payload
//!
//! Every hoverable object reports the same record shape. The category is a
//! closed enum; serialized tags are kebab-case (`"solar-canopy"`, `"food-truck"`).

use serde::{Deserialize, Serialize};

use crate::layout::Color;

/// Tooltip box size used for edge clamping (px)
pub const TOOLTIP_WIDTH: f32 = 280.0;
pub const TOOLTIP_HEIGHT: f32 = 120.0;
/// Offset from the pointer (px)
pub const TOOLTIP_OFFSET: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoverKind {
    // Structures
    Hub,
    Ring,
    Bridge,
    Umbilical,
    Tunnel,
    Park,
    SolarCanopy,
    // Rooftop
    RooftopGarden,
    RooftopRestaurant,
    Pool,
    // Sports
    Soccer,
    Baseball,
    Basketball,
    Skatepark,
    MiniGolf,
    OutdoorGym,
    // Nature
    Forest,
    Woods,
    Pine,
    Stream,
    KoiPond,
    BotanicalGarden,
    DogPark,
    Garden,
    Playground,
    Amphitheater,
    // Ground amenities
    FoodTruck,
    FarmersMarket,
    Picnic,
    // Street furniture
    Bench,
    Lamp,
    Bin,
    Rack,
    Fountain,
    Planter,
    Sculpture,
    Clock,
    Sign,
}

impl HoverKind {
    /// Dot colour shown next to the tooltip title
    pub fn accent(&self) -> Color {
        use HoverKind::*;
        match self {
            RooftopGarden => Color::rgb(0x22, 0xc5, 0x5e),
            RooftopRestaurant => Color::rgb(0xf9, 0x73, 0x16),
            Pool => Color::rgb(0x0e, 0xa5, 0xe9),
            Soccer | Baseball => Color::rgb(0x10, 0xb9, 0x81),
            Forest | Woods => Color::rgb(0x15, 0x80, 0x3d),
            Stream => Color::rgb(0x60, 0xa5, 0xfa),
            Tunnel => Color::rgb(0x64, 0x74, 0x8b),
            SolarCanopy => Color::rgb(0x63, 0x66, 0xf1),
            Umbilical => Color::rgb(0xa8, 0x55, 0xf7),
            _ => Color::rgb(0x94, 0xa3, 0xb8),
        }
    }
}

/// Pointer position in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What is currently under the pointer. Cleared (None) on pointer-leave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverInfo {
    #[serde(rename = "type")]
    pub kind: HoverKind,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub position: ScreenPos,
}

impl HoverInfo {
    pub fn new(kind: HoverKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            details: None,
            position: ScreenPos::default(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn at(mut self, position: ScreenPos) -> Self {
        self.position = position;
        self
    }

    /// Top-left of the tooltip box, kept inside a `width` x `height` viewport
    pub fn tooltip_anchor(&self, width: f32, height: f32) -> (f32, f32) {
        (
            (self.position.x + TOOLTIP_OFFSET)
                .min(width - TOOLTIP_WIDTH)
                .max(0.0),
            (self.position.y + TOOLTIP_OFFSET)
                .min(height - TOOLTIP_HEIGHT)
                .max(0.0),
        )
    }
}
