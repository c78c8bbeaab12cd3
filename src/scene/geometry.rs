//! Plan-view placement shared by the mesh builder and hit-testing
//!
//! Angles are radians, counter-clockwise from +x. Ring sections rotate with
//! the ring; bridges, towers, tunnels and parks are fixed to the ground.

use std::f32::consts::{PI, TAU};

use crate::layout::{RingConfig, UmbilicalTowerConfig, WalkwayConfig};

/// Footprint radius of an umbilical tower (m)
pub const TOWER_RADIUS: f32 = 15.0;
/// Width of the service tunnel ring drawn in each gap (m)
pub const TUNNEL_WIDTH: f32 = 12.0;
/// Fraction of a ring's width covered by the solar canopy along its outer edge
pub const SOLAR_BAND: f32 = 0.15;
/// Fraction of a ring's width used by the rooftop amenity stripe
pub const ROOFTOP_BAND: f32 = 0.2;

#[inline]
pub fn deg_to_rad(deg: f64) -> f32 {
    (deg as f32).to_radians()
}

/// `angle` wrapped into [0, 2π)
#[inline]
pub fn wrap_positive(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// `angle` wrapped into [-π, π)
#[inline]
pub fn wrap_signed(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Centre angle of section `index` when the ring is rotated by `ring_angle`
pub fn section_center(ring: &RingConfig, ring_angle: f32, index: u32) -> f32 {
    ring_angle + index as f32 * ring.section_angle() as f32
}

/// Section under polar angle `theta`, or None when `theta` falls in a gap.
/// The hub is one continuous section.
pub fn section_at(ring: &RingConfig, ring_angle: f32, theta: f32) -> Option<u32> {
    if ring.is_hub() {
        return Some(0);
    }
    let step = ring.section_angle() as f32;
    let rel = wrap_positive(theta - ring_angle);
    let index = (rel / step).round() as u32 % ring.section_count;
    let offset = wrap_signed(rel - index as f32 * step);
    (offset.abs() <= ring.block_angle() as f32 / 2.0).then_some(index)
}

/// True when `r` lies within the ring's radial band
#[inline]
pub fn in_band(r: f32, inner: f32, outer: f32) -> bool {
    r >= inner && r <= outer
}

/// Radial extent of a bridge: source outer edge to target inner edge
pub fn bridge_span(source: &RingConfig, target: &RingConfig) -> (f32, f32) {
    (source.outer_radius as f32, target.inner_radius as f32)
}

/// True when polar point (r, theta) lies on the bridge deck
pub fn on_bridge(walkway: &WalkwayConfig, span: (f32, f32), r: f32, theta: f32) -> bool {
    let (start, end) = span;
    if !in_band(r, start, end) {
        return false;
    }
    let d = wrap_signed(theta - deg_to_rad(walkway.angle_offset));
    d.abs() < PI / 2.0 && (r * d.sin()).abs() <= walkway.width as f32 / 2.0
}

/// Ground position of an umbilical tower (at its ring's inner edge)
pub fn tower_position(tower: &UmbilicalTowerConfig) -> glam::Vec2 {
    crate::polar_to_cartesian(tower.inner_radius as f32, deg_to_rad(tower.angle_position))
}

/// Gap between two adjacent rings as (inner, outer) radii
pub fn gap_band(inner_ring: &RingConfig, outer_ring: &RingConfig) -> Option<(f32, f32)> {
    let (a, b) = (inner_ring.outer_radius as f32, outer_ring.inner_radius as f32);
    (b > a).then_some((a, b))
}

/// Tunnel band centred in a gap
pub fn tunnel_band(gap: (f32, f32)) -> (f32, f32) {
    let mid = (gap.0 + gap.1) / 2.0;
    let half = (TUNNEL_WIDTH / 2.0).min((gap.1 - gap.0) / 2.0);
    (mid - half, mid + half)
}

/// Solar canopy band along a ring's outer edge
pub fn solar_band(ring: &RingConfig) -> (f32, f32) {
    let outer = ring.outer_radius as f32;
    (outer - ring.width() as f32 * SOLAR_BAND, outer)
}

/// Rooftop amenity stripe centred on a ring's mid radius
pub fn rooftop_band(ring: &RingConfig) -> (f32, f32) {
    let mid = ring.mid_radius() as f32;
    let half = ring.width() as f32 * ROOFTOP_BAND / 2.0;
    (mid - half, mid + half)
}
