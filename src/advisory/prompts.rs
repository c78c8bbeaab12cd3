//! Prompt text for the architect and the city archives

use std::fmt::Write;

use crate::layout::{LayoutStats, RingConfig, WalkwayConfig};

/// Plain-text description of the current city, one line per ring
pub fn city_summary(rings: &[RingConfig], walkways: &[WalkwayConfig]) -> String {
    let stats = LayoutStats::of(rings, walkways);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "- {} rotating rings around a central hub, city radius {:.0} m.",
        stats.rotating_rings, stats.city_radius
    );
    let _ = writeln!(
        out,
        "- {} static bridges span the gaps; they never rotate and are staggered across floors {}-{}.",
        stats.bridges,
        walkways.iter().map(|w| w.floor).min().unwrap_or(0),
        walkways.iter().map(|w| w.floor).max().unwrap_or(0),
    );
    let _ = writeln!(
        out,
        "- {} umbilical towers supply {:.0} L/day of water and {:.1} MW of power.",
        stats.umbilicals, stats.water_liters_per_day, stats.power_mw
    );

    for ring in rings {
        if ring.is_hub() {
            let _ = writeln!(
                out,
                "  * {}: stationary hub, radius {:.0} m, {} floors",
                ring.name, ring.outer_radius, ring.floor_count
            );
            continue;
        }
        let _ = writeln!(
            out,
            "  * {}: {:.0}-{:.0} m, {} sections, {:.3} deg/min {} ({:.2} m/s at mid radius)",
            ring.name,
            ring.inner_radius,
            ring.outer_radius,
            ring.section_count,
            ring.rotation_speed.abs(),
            if ring.is_clockwise() { "CW" } else { "CCW" },
            ring.edge_speed().abs(),
        );
    }
    out
}

pub fn architect_prompt(rings: &[RingConfig], walkways: &[WalkwayConfig], query: &str) -> String {
    format!(
        r#"You are the Chief Architect of "The Rotunda", a ground-based megacity of concentric rotating rings.

CURRENT CONFIGURATION:
{summary}
MECHANICS:
- Adjacent rings rotate in opposite directions.
- Every ring moves at roughly walking pace at its edge.
- Bridges are fixed to the ground. Citizens step off their moving ring onto a bridge,
  cross the gap, and step onto the next ring moving the other way.

User Query: "{query}"

Answer as the engineer who keeps this kinetic city running. Cover the step-off maneuver,
the alternating horizons, and how the vertical bridge stagger helps. Output in Markdown."#,
        summary = city_summary(rings, walkways),
        query = query.trim(),
    )
}

pub fn lore_prompt(rings: &[RingConfig], walkways: &[WalkwayConfig]) -> String {
    format!(
        r#"Write a short archive entry (max 100 words) about life in "The Rotunda".

{summary}
Focus on the step-off: citizens stepping from a moving ring onto a static bridge while the
next ring turns the opposite way. Mention the bridges staggered across different floors."#,
        summary = city_summary(rings, walkways),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutParams, generate_layout};

    #[test]
    fn test_summary_describes_rings() {
        let layout = generate_layout(&LayoutParams::default());
        let summary = city_summary(&layout.rings, &layout.walkways);
        assert!(summary.contains("8 rotating rings"));
        assert!(summary.contains("Central Hub: stationary hub, radius 500 m"));
        assert!(summary.contains("Ring 8"));
        assert!(summary.contains("floors 1-12"));
        assert!(summary.contains(" CW ") && summary.contains(" CCW "));
    }

    #[test]
    fn test_prompts_embed_query_and_summary() {
        let layout = generate_layout(&LayoutParams::default());
        let prompt = architect_prompt(&layout.rings, &layout.walkways, "  How do I cross?  ");
        assert!(prompt.contains("User Query: \"How do I cross?\""));
        assert!(prompt.contains("Ring 3"));

        let lore = lore_prompt(&layout.rings, &layout.walkways);
        assert!(lore.contains("max 100 words"));
        assert!(lore.contains("Ring 1"));
    }

    #[test]
    fn test_summary_of_empty_city() {
        let summary = city_summary(&[], &[]);
        assert!(summary.contains("0 rotating rings"));
        assert!(summary.contains("0 static bridges"));
    }
}
