//! Umbilical towers: fixed utility feeds at a ring's inner edge
//!
//! Capacity is derived from the ring footprint and split evenly across towers,
//! so towers never carry independently settable values.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::params::{LayoutParams, round_up_to_even};
use super::ring::{RingConfig, RingId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TowerStatus {
    #[default]
    Active,
    Maintenance,
    Standby,
}

impl TowerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TowerStatus::Active => "active",
            TowerStatus::Maintenance => "maintenance",
            TowerStatus::Standby => "standby",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmbilicalTowerConfig {
    pub id: String,
    pub ring_id: RingId,
    /// Degrees around the ring
    pub angle_position: f64,
    pub inner_radius: f64,
    pub height: f64,
    pub water_capacity_liters_per_day: f64,
    #[serde(rename = "powerCapacityMW")]
    pub power_capacity_mw: f64,
    pub status: TowerStatus,
}

/// Tower count for a ring: spacing-derived, at least `min_umbilicals`, always even
pub fn umbilical_count(inner_radius: f64, outer_radius: f64, params: &LayoutParams) -> u32 {
    let mid = (inner_radius + outer_radius) / 2.0;
    let circumference = TAU * mid;
    let ideal = (circumference / params.target_umbilical_spacing).round().max(0.0) as u32;
    let count = ideal.max(params.min_umbilicals);
    round_up_to_even(count as f64)
}

/// Place `ring.umbilical_count` towers evenly around the ring's inner edge
pub fn generate_umbilicals(ring: &RingConfig, params: &LayoutParams) -> Vec<UmbilicalTowerConfig> {
    let count = ring.umbilical_count;
    if count == 0 {
        return Vec::new();
    }

    let angle_step = 360.0 / count as f64;
    let area = ring.planar_area();
    let total_water = area * params.water_per_m2;
    let total_power = area * params.power_per_m2;

    (0..count)
        .map(|i| UmbilicalTowerConfig {
            id: format!("{}-umb-{}", ring.id, i),
            ring_id: ring.id.clone(),
            angle_position: i as f64 * angle_step,
            inner_radius: ring.inner_radius,
            height: ring.height,
            water_capacity_liters_per_day: total_water / count as f64,
            power_capacity_mw: total_power / count as f64,
            status: TowerStatus::Active,
        })
        .collect()
}

/// Recompute count and towers after the ring's geometry changed
pub fn refresh_umbilicals(ring: &mut RingConfig, params: &LayoutParams) {
    if ring.is_hub() {
        ring.umbilical_count = 0;
        ring.umbilicals.clear();
        return;
    }
    ring.umbilical_count = umbilical_count(ring.inner_radius, ring.outer_radius, params);
    ring.umbilicals = generate_umbilicals(ring, params);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate_rings;

    #[test]
    fn test_count_respects_minimum() {
        let params = LayoutParams::default();
        // Tiny ring: circumference well under one spacing
        assert_eq!(umbilical_count(10.0, 20.0, &params), 4);
    }

    #[test]
    fn test_count_stays_even_for_huge_rings() {
        let params = LayoutParams::default();
        for outer in [1e12, 1e15, f64::MAX] {
            let count = umbilical_count(500.0, outer, &params);
            assert_eq!(count % 2, 0, "{}", outer);
            assert!(count >= params.min_umbilicals, "{}", outer);
        }
    }

    #[test]
    fn test_count_even_for_first_ring() {
        let params = LayoutParams::default();
        // mid 650 -> 4084m / 1500 = 2.7 -> 3 -> max(4) = 4
        assert_eq!(umbilical_count(500.0, 800.0, &params), 4);
        // mid 3350 -> 21049m / 1500 = 14.03 -> 14
        assert_eq!(umbilical_count(3200.0, 3500.0, &params), 14);
    }

    #[test]
    fn test_capacities_sum_to_ring_totals() {
        let params = LayoutParams::default();
        for ring in generate_rings(&params).iter().filter(|r| !r.is_hub()) {
            let area = ring.planar_area();
            let water: f64 = ring.umbilicals.iter().map(|u| u.water_capacity_liters_per_day).sum();
            let power: f64 = ring.umbilicals.iter().map(|u| u.power_capacity_mw).sum();
            let want_water = area * params.water_per_m2;
            let want_power = area * params.power_per_m2;
            assert!((water - want_water).abs() / want_water < 1e-9, "{}", ring.id);
            assert!((power - want_power).abs() / want_power < 1e-9, "{}", ring.id);
        }
    }

    #[test]
    fn test_towers_evenly_spaced_at_inner_edge() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        let ring = &rings[3];
        let step = 360.0 / ring.umbilical_count as f64;
        for (i, tower) in ring.umbilicals.iter().enumerate() {
            assert!((tower.angle_position - i as f64 * step).abs() < 1e-9);
            assert_eq!(tower.inner_radius, ring.inner_radius);
            assert_eq!(tower.ring_id, ring.id);
            assert_eq!(tower.status, TowerStatus::Active);
        }
        assert_eq!(ring.umbilicals[1].id, format!("{}-umb-1", ring.id));
    }

    #[test]
    fn test_zero_count_yields_no_towers() {
        let params = LayoutParams::default();
        let hub = &generate_rings(&params)[0];
        assert!(generate_umbilicals(hub, &params).is_empty());
    }

    #[test]
    fn test_power_field_serializes_as_mw() {
        let params = LayoutParams::default();
        let ring = &generate_rings(&params)[1];
        let json = serde_json::to_value(&ring.umbilicals[0]).unwrap();
        assert!(json.get("powerCapacityMW").is_some());
        assert_eq!(json["status"], "active");
        assert_eq!(json["ringId"], "r1");
    }
}
