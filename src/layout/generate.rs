//! Procedural ring generation
//!
//! Pure and total: the same `LayoutParams` always produce the same rings.

use std::f64::consts::{PI, TAU};

use super::params::{LayoutParams, round_up_to_even};
use super::ring::{Color, RingConfig, RingId};
use super::umbilical::{generate_umbilicals, umbilical_count};

/// Rotation speed (degrees/minute) giving `edge_speed` m/s at `mid_radius`
pub fn speed_for_edge(edge_speed: f64, mid_radius: f64) -> f64 {
    if mid_radius <= 0.0 {
        return 0.0;
    }
    let omega_rad_sec = edge_speed / mid_radius;
    omega_rad_sec * (180.0 / PI) * 60.0
}

/// Section count for a ring: nearest integer of circumference / target,
/// forced even and at least 4
pub fn section_count(inner_radius: f64, outer_radius: f64, params: &LayoutParams) -> u32 {
    let mid = (inner_radius + outer_radius) / 2.0;
    let ideal = TAU * mid / params.target_section_length;
    round_up_to_even(ideal).max(4)
}

/// Even rings turn clockwise (negative), odd rings counter-clockwise
pub fn direction_for_index(index: usize) -> f64 {
    if index % 2 == 0 { -1.0 } else { 1.0 }
}

pub fn hub_ring(params: &LayoutParams) -> RingConfig {
    RingConfig {
        id: RingId::hub(),
        name: "Central Hub".to_string(),
        inner_radius: 0.0,
        outer_radius: params.hub_radius,
        height: params.hub_height,
        rotation_speed: 0.0,
        color: Color::HUB,
        floor_count: params.hub_floor_count,
        section_count: 1,
        umbilical_count: 0,
        umbilicals: Vec::new(),
        description: None,
    }
}

/// Hub followed by `params.ring_count` concentric rings
pub fn generate_rings(params: &LayoutParams) -> Vec<RingConfig> {
    let mut rings = Vec::with_capacity(params.ring_count as usize + 1);
    let hub = hub_ring(params);
    let mut current_inner = hub.outer_radius;
    rings.push(hub);

    for i in 0..params.ring_count as usize {
        let ring_num = i + 1;
        let outer = current_inner + params.ring_width;
        let mid = (current_inner + outer) / 2.0;

        let mut ring = RingConfig {
            id: RingId::new(format!("r{}", ring_num)),
            name: format!("Ring {}", ring_num),
            inner_radius: current_inner,
            outer_radius: outer,
            height: params.building_height,
            rotation_speed: speed_for_edge(params.target_edge_speed, mid) * direction_for_index(i),
            color: if i % 2 == 0 { Color::STONE } else { Color::BRICK },
            floor_count: params.ring_floor_count,
            section_count: section_count(current_inner, outer, params),
            umbilical_count: umbilical_count(current_inner, outer, params),
            umbilicals: Vec::new(),
            description: None,
        };
        ring.umbilicals = generate_umbilicals(&ring, params);
        rings.push(ring);

        current_inner = outer + params.gap_width;
    }

    log::debug!("Generated {} rings", rings.len());
    rings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_is_continuous_and_still() {
        let rings = generate_rings(&LayoutParams::default());
        let hub = &rings[0];
        assert_eq!(hub.id.as_str(), "hub");
        assert_eq!(hub.section_count, 1);
        assert_eq!(hub.rotation_speed, 0.0);
        assert_eq!(hub.inner_radius, 0.0);
        assert!(hub.umbilicals.is_empty());
    }

    #[test]
    fn test_first_ring_matches_reference_values() {
        let rings = generate_rings(&LayoutParams::default());
        let r1 = &rings[1];
        assert_eq!(r1.inner_radius, 500.0);
        assert_eq!(r1.outer_radius, 800.0);
        assert!(r1.rotation_speed < 0.0);
        let expected = (0.5 / 650.0) * (180.0 / PI) * 60.0;
        assert!((r1.rotation_speed.abs() - expected).abs() < 1e-12);
        assert!((r1.rotation_speed.abs() - 2.64).abs() < 0.01);
    }

    #[test]
    fn test_ring_spacing() {
        let params = LayoutParams::default();
        let rings = generate_rings(&params);
        assert_eq!(rings.len(), 9);
        for pair in rings[1..].windows(2) {
            assert_eq!(pair[1].inner_radius - pair[0].outer_radius, params.gap_width);
            assert_eq!(pair[1].width(), params.ring_width);
        }
    }

    #[test]
    fn test_sections_even_and_at_least_four() {
        let rings = generate_rings(&LayoutParams::default());
        for ring in &rings[1..] {
            assert_eq!(ring.section_count % 2, 0, "{}", ring.id);
            assert!(ring.section_count >= 4, "{}", ring.id);
        }
        // mid 650: 4084 / 400 = 10.2 -> 10
        assert_eq!(rings[1].section_count, 10);
        // mid 1100: 6911 / 400 = 17.3 -> 17 -> 18
        assert_eq!(rings[2].section_count, 18);
    }

    #[test]
    fn test_directions_alternate() {
        let rings = generate_rings(&LayoutParams::default());
        for pair in rings[1..].windows(2) {
            assert!(pair[0].rotation_speed.signum() != pair[1].rotation_speed.signum());
        }
    }

    #[test]
    fn test_edge_speed_matches_target() {
        let params = LayoutParams::default();
        for ring in &generate_rings(&params)[1..] {
            assert!((ring.edge_speed().abs() - params.target_edge_speed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_colors_alternate() {
        let rings = generate_rings(&LayoutParams::default());
        assert_eq!(rings[1].color, Color::STONE);
        assert_eq!(rings[2].color, Color::BRICK);
    }

    #[test]
    fn test_zero_rings_is_just_the_hub() {
        let params = LayoutParams {
            ring_count: 0,
            ..Default::default()
        };
        assert_eq!(generate_rings(&params).len(), 1);
    }
}
