//! Triangle-list primitives, all centred on the hub

use std::f32::consts::TAU;

use glam::Vec2;

use super::vertex::Vertex;
use crate::polar_to_cartesian;

/// Segments for full circles and annuli
pub const CIRCLE_SEGMENTS: u32 = 96;
/// Tessellation density for arc bands
pub const SEGMENTS_PER_RADIAN: f32 = 24.0;
/// Lower bound on segments for a short arc
pub const MIN_ARC_SEGMENTS: u32 = 4;

/// Filled disc
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + polar_to_cartesian(radius, theta1), color));
        out.push(Vertex::at(center + polar_to_cartesian(radius, theta2), color));
    }
}

/// Number of segments `arc_band` uses for `span` radians
pub fn arc_segments(span: f32) -> u32 {
    ((span * SEGMENTS_PER_RADIAN) as u32).max(MIN_ARC_SEGMENTS)
}

/// Thick arc between `inner` and `outer` radii from `theta_start` to `theta_end`
pub fn arc_band(
    out: &mut Vec<Vertex>,
    inner: f32,
    outer: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
) {
    let span = theta_end - theta_start;
    if span <= 0.0 || outer <= inner {
        return;
    }
    let segments = arc_segments(span);
    band(out, inner, outer, theta_start, span, segments, color);
}

/// Full annulus
pub fn annulus(out: &mut Vec<Vertex>, inner: f32, outer: f32, color: [f32; 4]) {
    if outer <= inner {
        return;
    }
    band(out, inner, outer, 0.0, TAU, CIRCLE_SEGMENTS, color);
}

fn band(
    out: &mut Vec<Vertex>,
    inner: f32,
    outer: f32,
    theta_start: f32,
    span: f32,
    segments: u32,
    color: [f32; 4],
) {
    out.reserve((segments * 6) as usize);
    for i in 0..segments {
        let theta1 = theta_start + (i as f32 / segments as f32) * span;
        let theta2 = theta_start + ((i + 1) as f32 / segments as f32) * span;

        let inner1 = polar_to_cartesian(inner, theta1);
        let outer1 = polar_to_cartesian(outer, theta1);
        let inner2 = polar_to_cartesian(inner, theta2);
        let outer2 = polar_to_cartesian(outer, theta2);

        out.push(Vertex::at(inner1, color));
        out.push(Vertex::at(outer1, color));
        out.push(Vertex::at(inner2, color));

        out.push(Vertex::at(inner2, color));
        out.push(Vertex::at(outer1, color));
        out.push(Vertex::at(outer2, color));
    }
}

/// Straight radial strip from `r0` to `r1` along `theta`, `width` meters wide
pub fn radial_quad(out: &mut Vec<Vertex>, r0: f32, r1: f32, theta: f32, width: f32, color: [f32; 4]) {
    if r1 <= r0 {
        return;
    }
    let dir = Vec2::from_angle(theta);
    let perp = dir.perp() * (width / 2.0);
    let (a, b) = (dir * r0, dir * r1);

    out.push(Vertex::at(a - perp, color));
    out.push(Vertex::at(a + perp, color));
    out.push(Vertex::at(b - perp, color));

    out.push(Vertex::at(b - perp, color));
    out.push(Vertex::at(a + perp, color));
    out.push(Vertex::at(b + perp, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertices_on_radius() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::ZERO, 10.0, WHITE, 16);
        assert_eq!(out.len(), 48);
        for tri in out.chunks(3) {
            assert_eq!(tri[0].position, [0.0, 0.0]);
            assert!((Vec2::from(tri[1].position).length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_arc_band_counts() {
        let mut out = Vec::new();
        arc_band(&mut out, 100.0, 200.0, 0.0, 1.0, WHITE);
        assert_eq!(out.len(), 24 * 6);

        out.clear();
        arc_band(&mut out, 100.0, 200.0, 0.0, 0.01, WHITE);
        assert_eq!(out.len(), (MIN_ARC_SEGMENTS * 6) as usize);

        out.clear();
        arc_band(&mut out, 100.0, 200.0, 1.0, 1.0, WHITE);
        arc_band(&mut out, 200.0, 100.0, 0.0, 1.0, WHITE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_radial_quad_width() {
        let mut out = Vec::new();
        radial_quad(&mut out, 800.0, 950.0, 0.0, 8.0, WHITE);
        assert_eq!(out.len(), 6);
        for v in &out {
            assert!(v.position[1].abs() <= 4.0 + 1e-4);
            assert!(v.position[0] >= 800.0 - 1e-3 && v.position[0] <= 950.0 + 1e-3);
        }
        out.clear();
        radial_quad(&mut out, 500.0, 500.0, 0.0, 8.0, WHITE);
        assert!(out.is_empty());
    }
}
