//! Ring records and colour type
//!
//! A ring is an annular band of buildings split into `section_count` blocks.
//! The hub is the special ring at the centre: continuous, non-rotating.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::umbilical::UmbilicalTowerConfig;
use crate::consts::SECTION_GAP;
use crate::error::RotundaError;

/// Stable ring identifier ("hub", "r1".."rN", "ring-<n>" for added rings)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RingId(pub String);

impl RingId {
    pub const HUB: &'static str = "hub";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn hub() -> Self {
        Self(Self::HUB.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// sRGB colour, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hub masonry
    pub const HUB: Color = Color::rgb(0xcb, 0xd5, 0xe1);
    /// Even rings (and rings added from the control panel)
    pub const STONE: Color = Color::rgb(0xe2, 0xe8, 0xf0);
    /// Odd rings
    pub const BRICK: Color = Color::rgb(0xfd, 0xba, 0x74);

    /// Linear-space components for an sRGB render target
    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        fn linear(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [linear(self.r), linear(self.g), linear(self.b), alpha]
    }
}

impl FromStr for Color {
    type Err = RotundaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let bad = || RotundaError::InvalidColor(s.to_string());
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(bad()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| bad())?;
        Ok(Color::rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

impl TryFrom<String> for Color {
    type Error = RotundaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One concentric ring of the city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingConfig {
    pub id: RingId,
    pub name: String,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
    /// Degrees per minute, sign gives direction (negative = clockwise)
    pub rotation_speed: f64,
    pub color: Color,
    pub floor_count: u32,
    /// Number of distinct building blocks around the ring (1 = continuous)
    pub section_count: u32,
    pub umbilical_count: u32,
    #[serde(default)]
    pub umbilicals: Vec<UmbilicalTowerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RingConfig {
    /// The hub has no gaps and does not rotate
    pub fn is_hub(&self) -> bool {
        self.section_count <= 1
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    #[inline]
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Planar (footprint) area of the annulus
    pub fn planar_area(&self) -> f64 {
        PI * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    /// Angular slot occupied by one section including its gap (radians)
    pub fn section_angle(&self) -> f64 {
        TAU / self.section_count.max(1) as f64
    }

    /// Angular width of the gap between two sections (radians)
    pub fn gap_angle(&self) -> f64 {
        if self.is_hub() || self.mid_radius() <= 0.0 {
            0.0
        } else {
            SECTION_GAP as f64 / self.mid_radius()
        }
    }

    /// Angular width of the building part of one section (radians)
    pub fn block_angle(&self) -> f64 {
        (self.section_angle() - self.gap_angle()).max(0.0)
    }

    /// Linear speed at mid radius (m/s)
    pub fn edge_speed(&self) -> f64 {
        crate::sim::angular_velocity(self.rotation_speed) * self.mid_radius()
    }

    pub fn is_clockwise(&self) -> bool {
        self.rotation_speed < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_and_display() {
        let c: Color = "#fdba74".parse().unwrap();
        assert_eq!(c, Color::BRICK);
        assert_eq!(c.to_string(), "#fdba74");

        let short: Color = "#fff".parse().unwrap();
        assert_eq!(short, Color::rgb(255, 255, 255));

        assert!("#12345".parse::<Color>().is_err());
        assert!("zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::HUB).unwrap();
        assert_eq!(json, "\"#cbd5e1\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::HUB);
        assert!(serde_json::from_str::<Color>("\"#nothex\"").is_err());
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        let black = Color::rgb(0, 0, 0).to_linear_rgba(1.0);
        let white = Color::rgb(255, 255, 255).to_linear_rgba(0.5);
        assert_eq!(black, [0.0, 0.0, 0.0, 1.0]);
        assert!((white[0] - 1.0).abs() < 1e-6);
        assert_eq!(white[3], 0.5);
    }
}
