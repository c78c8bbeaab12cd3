//! Pure derived views over application state

use super::visibility::{FloorGroupVisibility, LayerVisibility};
use crate::layout::{LayoutStats, RingConfig, RingId, UmbilicalTowerConfig, WalkwayConfig};

pub fn ring_by_id<'a>(rings: &'a [RingConfig], id: &RingId) -> Option<&'a RingConfig> {
    rings.iter().find(|r| &r.id == id)
}

/// Bridges whose floor group is enabled and whose rings both still exist
pub fn visible_walkways<'a>(
    walkways: &'a [WalkwayConfig],
    rings: &[RingConfig],
    groups: &FloorGroupVisibility,
) -> Vec<&'a WalkwayConfig> {
    walkways
        .iter()
        .filter(|w| groups.shows_floor(w.floor))
        .filter(|w| {
            ring_by_id(rings, &w.from_ring_id).is_some() && ring_by_id(rings, &w.to_ring_id).is_some()
        })
        .collect()
}

/// All umbilical towers when the utilities layer is on, none otherwise
pub fn visible_umbilicals<'a>(
    rings: &'a [RingConfig],
    layers: &LayerVisibility,
) -> Vec<&'a UmbilicalTowerConfig> {
    if !layers.utilities {
        return Vec::new();
    }
    rings.iter().flat_map(|r| r.umbilicals.iter()).collect()
}

/// Totals shown in the control panel footer
pub fn layout_stats(rings: &[RingConfig], walkways: &[WalkwayConfig]) -> LayoutStats {
    LayoutStats::of(rings, walkways)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutParams, generate_layout};

    #[test]
    fn test_orphans_skipped() {
        let layout = generate_layout(&LayoutParams::default());
        let rings: Vec<_> = layout
            .rings
            .iter()
            .filter(|r| r.id.as_str() != "r1")
            .cloned()
            .collect();
        let visible = visible_walkways(&layout.walkways, &rings, &FloorGroupVisibility::default());
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|w| !w.touches(&"r1".into())));
    }

    #[test]
    fn test_high_group_only() {
        let layout = generate_layout(&LayoutParams::default());
        let groups = FloorGroupVisibility {
            low: false,
            mid: false,
            high: true,
        };
        let visible = visible_walkways(&layout.walkways, &layout.rings, &groups);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|w| (9..=12).contains(&w.floor)));
    }

    #[test]
    fn test_umbilicals_hidden_by_default() {
        let layout = generate_layout(&LayoutParams::default());
        assert!(visible_umbilicals(&layout.rings, &LayerVisibility::default()).is_empty());
    }
}
