//! Tunable targets for procedural generation

use serde::{Deserialize, Serialize};

/// Target constants the whole city is derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Number of rotating rings around the hub
    pub ring_count: u32,

    // === Hub ===
    pub hub_radius: f64,
    pub hub_height: f64,
    pub hub_floor_count: u32,

    // === Rings ===
    /// Radial width of every ring (m)
    pub ring_width: f64,
    /// Open ground between two rings (m)
    pub gap_width: f64,
    pub building_height: f64,
    pub ring_floor_count: u32,
    /// Linear speed at each ring's mid radius (m/s)
    pub target_edge_speed: f64,
    /// Desired arc length of one building block (m)
    pub target_section_length: f64,

    // === Bridges ===
    /// Desired arc distance between bridges at gap mid radius (m)
    pub target_bridge_spacing: f64,
    pub min_bridges_per_gap: u32,
    /// Bridges cycle through floors 1..=bridge_floor_cycle
    pub bridge_floor_cycle: u32,
    pub bridge_width: f64,

    // === Umbilical towers ===
    pub target_umbilical_spacing: f64,
    pub min_umbilicals: u32,
    /// Liters per day per square meter of ring footprint
    pub water_per_m2: f64,
    /// MW per square meter of ring footprint
    pub power_per_m2: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            ring_count: 8,

            hub_radius: 500.0,
            hub_height: 100.0,
            hub_floor_count: 25,

            ring_width: 300.0,
            gap_width: 150.0,
            building_height: 60.0,
            ring_floor_count: 15,
            target_edge_speed: 0.5,
            target_section_length: 400.0,

            target_bridge_spacing: 80.0,
            min_bridges_per_gap: 20,
            bridge_floor_cycle: 12,
            bridge_width: 8.0,

            target_umbilical_spacing: 1500.0,
            min_umbilicals: 4,
            water_per_m2: 150.0,
            power_per_m2: 0.05,
        }
    }
}

/// Round a non-negative count to the nearest integer, then bump odd values up to even.
/// Saturates at the largest even `u32`.
pub(crate) fn round_up_to_even(value: f64) -> u32 {
    let n = value.round().clamp(0.0, (u32::MAX - 1) as f64) as u32;
    if n % 2 == 0 { n } else { n + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_to_even() {
        assert_eq!(round_up_to_even(10.2), 10);
        assert_eq!(round_up_to_even(10.6), 12);
        assert_eq!(round_up_to_even(11.4), 12);
        assert_eq!(round_up_to_even(0.3), 0);
    }

    #[test]
    fn test_round_up_to_even_saturates() {
        assert_eq!(round_up_to_even(u32::MAX as f64), u32::MAX - 1);
        assert_eq!(round_up_to_even(1e300), u32::MAX - 1);
        assert_eq!(round_up_to_even(f64::NAN), 0);
    }
}
