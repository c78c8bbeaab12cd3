//! Deterministic city layout
//!
//! Everything here is derived from `LayoutParams`:
//! - No randomness (user-added rings live in `app`, not here)
//! - Stable ordering (hub first, then rings outward)
//! - No rendering or platform dependencies

pub mod generate;
pub mod params;
pub mod ring;
pub mod umbilical;
pub mod walkway;

pub use generate::{generate_rings, hub_ring, section_count, speed_for_edge};
pub use params::LayoutParams;
pub use ring::{Color, RingConfig, RingId};
pub use umbilical::{
    TowerStatus, UmbilicalTowerConfig, generate_umbilicals, refresh_umbilicals, umbilical_count,
};
pub use walkway::{FloorGroup, WalkwayConfig, WalkwayKind, bridge_count, generate_walkways};

use serde::{Deserialize, Serialize};

/// Rings plus the bridges between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub rings: Vec<RingConfig>,
    pub walkways: Vec<WalkwayConfig>,
}

impl Layout {
    pub fn ring(&self, id: &RingId) -> Option<&RingConfig> {
        self.rings.iter().find(|r| &r.id == id)
    }

    /// Outermost radius of any ring (0 for an empty layout)
    pub fn outer_radius(&self) -> f64 {
        self.rings
            .iter()
            .map(|r| r.outer_radius)
            .fold(0.0, f64::max)
    }

    pub fn stats(&self) -> LayoutStats {
        LayoutStats::of(&self.rings, &self.walkways)
    }
}

/// Generate the full city from the given targets
pub fn generate_layout(params: &LayoutParams) -> Layout {
    let rings = generate_rings(params);
    let walkways = generate_walkways(&rings, params);
    log::info!(
        "Layout generated: {} rings, {} bridges",
        rings.len(),
        walkways.len()
    );
    Layout { rings, walkways }
}

/// Summary figures shown in the status panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Rotating rings (hub excluded)
    pub rotating_rings: usize,
    pub sections: u32,
    pub bridges: usize,
    pub umbilicals: usize,
    pub water_liters_per_day: f64,
    pub power_mw: f64,
    pub city_radius: f64,
}

impl LayoutStats {
    pub fn of(rings: &[RingConfig], walkways: &[WalkwayConfig]) -> Self {
        let rotating = rings.iter().filter(|r| !r.is_hub());
        Self {
            rotating_rings: rotating.clone().count(),
            sections: rotating.clone().map(|r| r.section_count).sum(),
            bridges: walkways.len(),
            umbilicals: rings.iter().map(|r| r.umbilicals.len()).sum(),
            water_liters_per_day: rings
                .iter()
                .flat_map(|r| &r.umbilicals)
                .map(|u| u.water_capacity_liters_per_day)
                .sum(),
            power_mw: rings
                .iter()
                .flat_map(|r| &r.umbilicals)
                .map(|u| u.power_capacity_mw)
                .sum(),
            city_radius: rings.iter().map(|r| r.outer_radius).fold(0.0, f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_generation_is_idempotent() {
        let params = LayoutParams::default();
        assert_eq!(generate_layout(&params), generate_layout(&params));
    }

    #[test]
    fn test_default_layout_stats() {
        let layout = generate_layout(&LayoutParams::default());
        let stats = layout.stats();
        assert_eq!(stats.rotating_rings, 8);
        assert_eq!(stats.city_radius, layout.outer_radius());
        // r8: inner 3650, outer 3950
        assert_eq!(stats.city_radius, 3950.0);
        assert!(stats.bridges >= 8 * 20);
        assert_eq!(stats.bridges, layout.walkways.len());
    }

    #[test]
    fn test_ring_lookup() {
        let layout = generate_layout(&LayoutParams::default());
        assert_eq!(layout.ring(&RingId::from("r3")).unwrap().name, "Ring 3");
        assert!(layout.ring(&RingId::from("r99")).is_none());
    }

    fn arb_params() -> impl Strategy<Value = LayoutParams> {
        (
            0u32..12,
            100.0f64..2000.0,
            50.0f64..600.0,
            10.0f64..400.0,
            0.1f64..3.0,
            50.0f64..1000.0,
            20.0f64..300.0,
            200.0f64..4000.0,
            1u32..8,
        )
            .prop_map(
                |(rings, hub, width, gap, speed, section, bridge, umb, min_umb)| LayoutParams {
                    ring_count: rings,
                    hub_radius: hub,
                    ring_width: width,
                    gap_width: gap,
                    target_edge_speed: speed,
                    target_section_length: section,
                    target_bridge_spacing: bridge,
                    target_umbilical_spacing: umb,
                    min_umbilicals: min_umb,
                    ..Default::default()
                },
            )
    }

    proptest! {
        #[test]
        fn prop_ring_invariants(params in arb_params()) {
            let rings = generate_rings(&params);
            prop_assert_eq!(rings.len(), params.ring_count as usize + 1);
            prop_assert_eq!(rings[0].section_count, 1);
            prop_assert_eq!(rings[0].rotation_speed, 0.0);

            for ring in &rings[1..] {
                prop_assert!(ring.outer_radius > ring.inner_radius);
                prop_assert_eq!(ring.section_count % 2, 0);
                prop_assert!(ring.section_count >= 4);
                let omega = crate::sim::angular_velocity(ring.rotation_speed);
                let edge = omega.abs() * ring.mid_radius();
                prop_assert!((edge - params.target_edge_speed).abs() < 1e-9);

                prop_assert_eq!(ring.umbilical_count % 2, 0);
                prop_assert!(ring.umbilical_count >= params.min_umbilicals);
                prop_assert_eq!(ring.umbilicals.len(), ring.umbilical_count as usize);
                let water: f64 = ring.umbilicals.iter().map(|u| u.water_capacity_liters_per_day).sum();
                let total = ring.planar_area() * params.water_per_m2;
                prop_assert!((water - total).abs() <= total * 1e-9);
            }

            for pair in rings[1..].windows(2) {
                prop_assert!(pair[0].rotation_speed * pair[1].rotation_speed < 0.0);
            }
        }

        #[test]
        fn prop_walkway_invariants(params in arb_params()) {
            let layout = generate_layout(&params);
            for pair in layout.rings.windows(2) {
                let gap: Vec<_> = layout
                    .walkways
                    .iter()
                    .filter(|w| w.from_ring_id == pair[0].id && w.to_ring_id == pair[1].id)
                    .collect();
                prop_assert!(gap.len() >= 20);
                for (i, w) in gap.iter().enumerate() {
                    prop_assert_eq!(w.floor, 1 + (i as u32 % 12));
                }
            }
            prop_assert_eq!(generate_layout(&params), layout);
        }
    }
}
