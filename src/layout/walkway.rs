//! Static bridges spanning the gap between two adjacent rings
//!
//! Bridges are anchored to the ground: they never rotate. Floors are assigned
//! round-robin so bridges are staggered vertically.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::params::LayoutParams;
use super::ring::{RingConfig, RingId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkwayKind {
    #[default]
    Static,
}

/// Coarse vertical bucket used to filter bridge visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorGroup {
    Low,
    Mid,
    High,
}

impl FloorGroup {
    pub const ALL: [FloorGroup; 3] = [FloorGroup::Low, FloorGroup::Mid, FloorGroup::High];

    pub fn of_floor(floor: u32) -> Self {
        if floor <= 4 {
            FloorGroup::Low
        } else if floor <= 8 {
            FloorGroup::Mid
        } else {
            FloorGroup::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FloorGroup::Low => "low",
            FloorGroup::Mid => "mid",
            FloorGroup::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(FloorGroup::Low),
            "mid" | "middle" => Some(FloorGroup::Mid),
            "high" => Some(FloorGroup::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkwayConfig {
    pub id: String,
    pub from_ring_id: RingId,
    pub to_ring_id: RingId,
    /// World-space angle in degrees
    pub angle_offset: f64,
    pub width: f64,
    #[serde(rename = "type")]
    pub kind: WalkwayKind,
    pub floor: u32,
}

impl WalkwayConfig {
    pub fn floor_group(&self) -> FloorGroup {
        FloorGroup::of_floor(self.floor)
    }

    pub fn touches(&self, ring: &RingId) -> bool {
        &self.from_ring_id == ring || &self.to_ring_id == ring
    }
}

/// Bridge count for one gap: spacing-derived, never below `min_bridges_per_gap`
pub fn bridge_count(source: &RingConfig, target: &RingConfig, params: &LayoutParams) -> u32 {
    let gap_mid_radius = (source.outer_radius + target.inner_radius) / 2.0;
    let circumference = TAU * gap_mid_radius;
    let ideal = (circumference / params.target_bridge_spacing).round().max(0.0) as u32;
    ideal.max(params.min_bridges_per_gap)
}

/// Generate bridges for every adjacent ring pair (in generation order)
pub fn generate_walkways(rings: &[RingConfig], params: &LayoutParams) -> Vec<WalkwayConfig> {
    let cycle = params.bridge_floor_cycle.max(1);

    rings
        .windows(2)
        .flat_map(|pair| {
            let (source, target) = (&pair[0], &pair[1]);
            let count = bridge_count(source, target, params);
            let step = 360.0 / count as f64;

            (0..count).map(move |b| WalkwayConfig {
                id: format!("br-{}-{}-{}", source.id, target.id, b),
                from_ring_id: source.id.clone(),
                to_ring_id: target.id.clone(),
                angle_offset: step * b as f64,
                width: params.bridge_width,
                kind: WalkwayKind::Static,
                floor: 1 + (b % cycle),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate_rings;

    #[test]
    fn test_floor_groups() {
        assert_eq!(FloorGroup::of_floor(1), FloorGroup::Low);
        assert_eq!(FloorGroup::of_floor(4), FloorGroup::Low);
        assert_eq!(FloorGroup::of_floor(5), FloorGroup::Mid);
        assert_eq!(FloorGroup::of_floor(8), FloorGroup::Mid);
        assert_eq!(FloorGroup::of_floor(9), FloorGroup::High);
        assert_eq!(FloorGroup::of_floor(12), FloorGroup::High);
    }

    #[test]
    fn test_every_gap_has_at_least_twenty_bridges() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        let walkways = generate_walkways(&rings, &params);

        for pair in rings.windows(2) {
            let n = walkways
                .iter()
                .filter(|w| w.from_ring_id == pair[0].id && w.to_ring_id == pair[1].id)
                .count();
            assert!(n >= 20, "gap {}-{} has {} bridges", pair[0].id, pair[1].id, n);
        }
    }

    #[test]
    fn test_hub_gap_bridge_count() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        // Gap mid radius (500 + 500) / 2 = 500 -> 3141.6 / 80 = 39.27 -> 39
        assert_eq!(bridge_count(&rings[0], &rings[1], &params), 39);
    }

    #[test]
    fn test_floors_round_robin() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        let walkways = generate_walkways(&rings, &params);

        let first_gap: Vec<_> = walkways
            .iter()
            .filter(|w| w.from_ring_id == rings[1].id)
            .collect();
        for (i, w) in first_gap.iter().enumerate() {
            assert_eq!(w.floor, 1 + (i as u32 % 12));
            assert_eq!(w.kind, WalkwayKind::Static);
        }
    }

    #[test]
    fn test_small_layouts_have_no_walkways() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        assert!(generate_walkways(&[], &params).is_empty());
        assert!(generate_walkways(&rings[..1], &params).is_empty());
    }

    #[test]
    fn test_bridges_evenly_spaced() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        let walkways = generate_walkways(&rings[..2], &params);
        let step = 360.0 / walkways.len() as f64;
        for (i, w) in walkways.iter().enumerate() {
            assert!((w.angle_offset - step * i as f64).abs() < 1e-9);
        }
        assert_eq!(walkways[0].id, "br-hub-r1-0");
    }

    #[test]
    fn test_walkway_json_shape() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        let w = &generate_walkways(&rings, &params)[0];
        let json = serde_json::to_value(w).unwrap();
        assert_eq!(json["type"], "static");
        assert_eq!(json["fromRingId"], "hub");
        assert_eq!(json["toRingId"], "r1");
    }
}
