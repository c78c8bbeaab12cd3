//! Hit-testing: what is under the pointer

use glam::Vec2;

use super::SceneInput;
use super::geometry::{
    TOWER_RADIUS, bridge_span, in_band, on_bridge, rooftop_band, section_at, solar_band,
    tower_position, tunnel_band,
};
use crate::hover::{HoverInfo, HoverKind, ScreenPos};
use crate::layout::RingConfig;

/// Topmost feature at `world`, tagged with the pointer's `screen` position.
/// None means nothing is hovered (tooltip hidden).
pub fn pick(world: Vec2, screen: ScreenPos, input: &SceneInput) -> Option<HoverInfo> {
    let (r, theta) = crate::cartesian_to_polar(world);

    let info = pick_tower(world, input)
        .or_else(|| pick_bridge(r, theta, input))
        .or_else(|| pick_ring(r, theta, input))
        .or_else(|| pick_gap(r, input))?;
    Some(info.at(screen))
}

fn pick_tower(world: Vec2, input: &SceneInput) -> Option<HoverInfo> {
    let tower = input
        .umbilicals
        .iter()
        .find(|t| tower_position(t).distance(world) <= TOWER_RADIUS)?;
    Some(
        HoverInfo::new(
            HoverKind::Umbilical,
            format!("Umbilical Tower {}", tower.id),
            format!(
                "Feeds {} through a rotary union. Status: {}.",
                tower.ring_id,
                tower.status.as_str()
            ),
        )
        .with_details(format!(
            "{:.0} L/day water • {:.2} MW power",
            tower.water_capacity_liters_per_day, tower.power_capacity_mw
        )),
    )
}

fn pick_bridge(r: f32, theta: f32, input: &SceneInput) -> Option<HoverInfo> {
    input.walkways.iter().find_map(|w| {
        let source = input.ring(&w.from_ring_id)?;
        let target = input.ring(&w.to_ring_id)?;
        let span = bridge_span(source, target);
        on_bridge(w, span, r, theta).then(|| {
            HoverInfo::new(
                HoverKind::Bridge,
                format!("Bridge {} → {}", source.name, target.name),
                "Static walkway fixed to the ground. Step off the moving ring to cross.",
            )
            .with_details(format!(
                "Floor {} • {:.0} m span • {:.0} m wide",
                w.floor,
                span.1 - span.0,
                w.width
            ))
        })
    })
}

fn pick_ring(r: f32, theta: f32, input: &SceneInput) -> Option<HoverInfo> {
    let ring = input
        .rings
        .iter()
        .find(|ring| in_band(r, ring.inner_radius as f32, ring.outer_radius as f32))?;

    if ring.is_hub() {
        return Some(
            HoverInfo::new(
                HoverKind::Hub,
                ring.name.clone(),
                "Stationary core of the city. Every ring turns around it.",
            )
            .with_details(format!("{} floors • {:.0} m radius", ring.floor_count, ring.outer_radius)),
        );
    }

    // Gaps between sections are open ground
    let section = section_at(ring, input.ring_angle(ring), theta)?;

    if input.layers.rooftop_amenities && in_band_of(r, rooftop_band(ring)) {
        let (kind, name) = if section % 2 == 0 {
            (HoverKind::RooftopGarden, "Rooftop Garden")
        } else {
            (HoverKind::RooftopRestaurant, "Rooftop Restaurant")
        };
        return Some(HoverInfo::new(
            kind,
            format!("{} ({})", name, ring.name),
            format!("On top of section {} of {}.", section + 1, ring.section_count),
        ));
    }
    if input.layers.solar_panels && in_band_of(r, solar_band(ring)) {
        return Some(HoverInfo::new(
            HoverKind::SolarCanopy,
            format!("Solar Canopy ({})", ring.name),
            "Photovoltaic canopy along the ring's outer edge.",
        ));
    }

    Some(ring_info(ring, section))
}

fn ring_info(ring: &RingConfig, section: u32) -> HoverInfo {
    HoverInfo::new(
        HoverKind::Ring,
        ring.name.clone(),
        format!(
            "Section {} of {} • {} floors",
            section + 1,
            ring.section_count,
            ring.floor_count
        ),
    )
    .with_details(format!(
        "Rotating {} at {:.2} m/s",
        if ring.is_clockwise() { "clockwise" } else { "counter-clockwise" },
        ring.edge_speed().abs()
    ))
}

fn pick_gap(r: f32, input: &SceneInput) -> Option<HoverInfo> {
    let (inner, outer, gap) = input.gaps().find(|(_, _, gap)| in_band_of(r, *gap))?;

    if input.layers.tunnels && in_band_of(r, tunnel_band(gap)) {
        return Some(HoverInfo::new(
            HoverKind::Tunnel,
            "Service Tunnel",
            format!("Utility corridor beneath the gap between {} and {}.", inner.name, outer.name),
        ));
    }
    if input.layers.ground_amenities {
        return Some(
            HoverInfo::new(
                HoverKind::Park,
                "Park",
                format!("Green belt between {} and {}.", inner.name, outer.name),
            )
            .with_details(format!("{:.0} m wide", gap.1 - gap.0)),
        );
    }
    None
}

fn in_band_of(r: f32, band: (f32, f32)) -> bool {
    in_band(r, band.0, band.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppState, Command, Layer};
    use crate::layout::{FloorGroup, LayoutParams, RingId};
    use crate::polar_to_cartesian;

    const AT: ScreenPos = ScreenPos::new(12.0, 34.0);

    fn app() -> AppState {
        AppState::new(LayoutParams::default(), 1)
    }

    fn pick_at(app: &AppState, r: f32, theta: f32) -> Option<HoverInfo> {
        pick(polar_to_cartesian(r, theta), AT, &SceneInput::from_app(app))
    }

    #[test]
    fn test_hub() {
        let info = pick_at(&app(), 100.0, 1.0).unwrap();
        assert_eq!(info.kind, HoverKind::Hub);
        assert_eq!(info.name, "Central Hub");
        assert_eq!(info.position, AT);
    }

    #[test]
    fn test_section_and_gap() {
        let app = app();
        let r1 = app.ring(&RingId::from("r1")).unwrap();
        let step = r1.section_angle() as f32;

        // Section 1 of r1, between the rooftop stripe and the solar canopy
        let info = pick_at(&app, 700.0, step).unwrap();
        assert_eq!(info.kind, HoverKind::Ring);
        assert_eq!(info.name, "Ring 1");
        assert!(info.description.starts_with("Section 2 of 10"));

        // Between two sections there is nothing to hover
        assert!(pick_at(&app, 700.0, step * 1.5).is_none());
    }

    #[test]
    fn test_rotated_section() {
        let mut app = app();
        let step = app.ring(&"r1".into()).unwrap().section_angle() as f32;
        // Run until r1 has turned noticeably
        for _ in 0..200 {
            app.advance(0.25);
        }
        let angle = app.angles().get(&"r1".into()) as f32;
        assert!(angle.abs() > 1e-3);

        let info = pick_at(&app, 700.0, angle + step).unwrap();
        assert!(info.description.starts_with("Section 2 of 10"));
    }

    #[test]
    fn test_bridge() {
        let app = app();
        // r1 -> r2 bridge 0 at angle 0, gap 800..950
        let info = pick_at(&app, 875.0, 0.0).unwrap();
        assert_eq!(info.kind, HoverKind::Bridge);
        assert_eq!(info.name, "Bridge Ring 1 → Ring 2");
        assert!(info.details.as_deref().unwrap().starts_with("Floor 1"));
    }

    #[test]
    fn test_hidden_bridge_group_falls_through_to_park() {
        let mut app = app();
        app.apply(Command::SetFloorGroup(FloorGroup::Low, false)).unwrap();
        let info = pick_at(&app, 820.0, 0.0).unwrap();
        assert_eq!(info.kind, HoverKind::Park);
    }

    #[test]
    fn test_tunnel_layer() {
        let mut app = app();
        app.apply(Command::SetFloorGroup(FloorGroup::Low, false)).unwrap();
        app.apply(Command::SetLayer(Layer::Tunnels, true)).unwrap();
        assert_eq!(pick_at(&app, 875.0, 0.0).unwrap().kind, HoverKind::Tunnel);

        app.apply(Command::SetLayer(Layer::Tunnels, false)).unwrap();
        app.apply(Command::SetLayer(Layer::GroundAmenities, false)).unwrap();
        assert!(pick_at(&app, 875.0, 0.0).is_none());
    }

    #[test]
    fn test_towers_only_with_utilities() {
        let mut app = app();
        let tower = app.ring(&"r2".into()).unwrap().umbilicals[1].clone();
        let pos = tower_position(&tower);
        let input = SceneInput::from_app(&app);
        assert_ne!(
            pick(pos, AT, &input).map(|i| i.kind),
            Some(HoverKind::Umbilical)
        );

        app.apply(Command::SetLayer(Layer::Utilities, true)).unwrap();
        let info = pick(pos, AT, &SceneInput::from_app(&app)).unwrap();
        assert_eq!(info.kind, HoverKind::Umbilical);
        assert!(info.name.ends_with(&tower.id));
    }

    #[test]
    fn test_rooftop_and_solar_layers() {
        let mut app = app();
        let r1 = app.ring(&"r1".into()).unwrap().clone();
        let step = r1.section_angle() as f32;

        // Both layers start on: odd sections host restaurants, even ones gardens
        assert_eq!(pick_at(&app, 650.0, step).unwrap().kind, HoverKind::RooftopRestaurant);
        assert_eq!(pick_at(&app, 650.0, 2.0 * step).unwrap().kind, HoverKind::RooftopGarden);
        assert_eq!(pick_at(&app, 790.0, step).unwrap().kind, HoverKind::SolarCanopy);

        app.apply(Command::SetLayer(Layer::RooftopAmenities, false)).unwrap();
        app.apply(Command::SetLayer(Layer::SolarPanels, false)).unwrap();
        assert_eq!(pick_at(&app, 650.0, step).unwrap().kind, HoverKind::Ring);
        assert_eq!(pick_at(&app, 790.0, step).unwrap().kind, HoverKind::Ring);
    }

    #[test]
    fn test_outside_city() {
        assert!(pick_at(&app(), 10_000.0, 0.3).is_none());
    }
}
