//! Scene tessellation: turns a `SceneInput` into one triangle list
//!
//! Pure and GPU-free. Draw order is back to front:
//! parks, tunnels, hub, ring sections, canopies and rooftops, bridges, towers.

use super::shapes::{CIRCLE_SEGMENTS, annulus, arc_band, circle, radial_quad};
use super::vertex::Vertex;
use crate::layout::{Color, FloorGroup, RingConfig};
use crate::scene::SceneInput;
use crate::scene::geometry::{
    TOWER_RADIUS, bridge_span, deg_to_rad, rooftop_band, section_center, solar_band, tower_position,
    tunnel_band,
};
use crate::theme::Palette;

/// Segments for the small tower discs
pub const TOWER_SEGMENTS: u32 = 12;
/// Depth of the lit window strip on a section's outer face (m)
const WINDOW_DEPTH: f32 = 6.0;

const GARDEN: Color = Color::rgb(0x22, 0xc5, 0x5e);
const RESTAURANT: Color = Color::rgb(0xf9, 0x73, 0x16);

pub fn build_scene(input: &SceneInput) -> Vec<Vertex> {
    let palette = input.theme.palette();
    let opacity = input.opacity.clamp(0.0, 1.0) as f32;
    let mut out = Vec::new();

    for (_, _, gap) in input.gaps() {
        if input.layers.ground_amenities {
            annulus(&mut out, gap.0, gap.1, palette.park.to_linear_rgba(1.0));
        }
        if input.layers.tunnels {
            let (a, b) = tunnel_band(gap);
            annulus(&mut out, a, b, palette.tunnel.to_linear_rgba(1.0));
        }
    }

    for ring in input.rings {
        if ring.is_hub() {
            hub(&mut out, ring, opacity);
        } else {
            sections(&mut out, ring, input, &palette, opacity);
        }
    }

    for w in &input.walkways {
        let (Some(source), Some(target)) = (input.ring(&w.from_ring_id), input.ring(&w.to_ring_id))
        else {
            continue;
        };
        let (r0, r1) = bridge_span(source, target);
        radial_quad(
            &mut out,
            r0,
            r1,
            deg_to_rad(w.angle_offset),
            w.width as f32,
            bridge_color(&palette, w.floor_group()),
        );
    }

    let tower_color = palette.water.to_linear_rgba(1.0);
    for tower in &input.umbilicals {
        circle(
            &mut out,
            tower_position(tower),
            TOWER_RADIUS,
            tower_color,
            TOWER_SEGMENTS,
        );
    }

    out
}

fn hub(out: &mut Vec<Vertex>, ring: &RingConfig, opacity: f32) {
    let color = ring.color.to_linear_rgba(opacity);
    let (inner, outer) = (ring.inner_radius as f32, ring.outer_radius as f32);
    if inner > 0.0 {
        annulus(out, inner, outer, color);
    } else {
        circle(out, glam::Vec2::ZERO, outer, color, CIRCLE_SEGMENTS);
    }
}

fn sections(
    out: &mut Vec<Vertex>,
    ring: &RingConfig,
    input: &SceneInput,
    palette: &Palette,
    opacity: f32,
) {
    let angle = input.ring_angle(ring);
    let half = ring.block_angle() as f32 / 2.0;
    if half <= 0.0 {
        return;
    }
    let (inner, outer) = (ring.inner_radius as f32, ring.outer_radius as f32);
    let body = ring.color.to_linear_rgba(opacity);
    let glow = input.theme.is_dark().then(|| palette.window_glow.to_linear_rgba(0.5));
    let solar = palette.solar.to_linear_rgba(opacity);

    for i in 0..ring.section_count {
        let c = section_center(ring, angle, i);
        let (start, end) = (c - half, c + half);

        arc_band(out, inner, outer, start, end, body);

        if input.layers.solar_panels {
            let (a, b) = solar_band(ring);
            arc_band(out, a, b, start, end, solar);
        }
        if input.layers.rooftop_amenities {
            let (a, b) = rooftop_band(ring);
            let color = if i % 2 == 0 { GARDEN } else { RESTAURANT };
            arc_band(out, a, b, start, end, color.to_linear_rgba(opacity));
        }
        if let Some(glow) = glow {
            let inset = WINDOW_DEPTH.min((outer - inner) / 2.0);
            arc_band(out, outer - inset, outer, c - half / 4.0, c + half / 4.0, glow);
        }
    }
}

/// Lower floors draw lighter so staggering reads in plan view
fn bridge_color(palette: &Palette, group: FloorGroup) -> [f32; 4] {
    let shade = match group {
        FloorGroup::Low => 1.0,
        FloorGroup::Mid => 0.85,
        FloorGroup::High => 0.7,
    };
    let [r, g, b, a] = palette.bridge.to_linear_rgba(1.0);
    [r * shade, g * shade, b * shade, a]
}
