//! Navigation views and the infrastructure explainer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    City,
    Infrastructure,
}

impl View {
    pub const ALL: [View; 2] = [View::City, View::Infrastructure];

    pub fn path(&self) -> &'static str {
        match self {
            View::City => "/",
            View::Infrastructure => "/infrastructure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::City => "City View",
            View::Infrastructure => "Infrastructure",
        }
    }

    /// Unknown paths fall back to the city view
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/infrastructure" => View::Infrastructure,
            _ => View::City,
        }
    }
}

/// Clickable parts of the water distribution diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagramElement {
    RotaryUnion,
    InnerRing,
    OuterRing,
}

impl DiagramElement {
    pub fn id(&self) -> &'static str {
        match self {
            DiagramElement::RotaryUnion => "rotary-union",
            DiagramElement::InnerRing => "ring-1",
            DiagramElement::OuterRing => "ring-2",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "rotary-union" => Some(DiagramElement::RotaryUnion),
            "ring-1" => Some(DiagramElement::InnerRing),
            "ring-2" => Some(DiagramElement::OuterRing),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DiagramElement::RotaryUnion => "Multi-Passage Rotary Union",
            DiagramElement::InnerRing => "Inner Rotating Ring",
            DiagramElement::OuterRing => "Outer Rotating Ring",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DiagramElement::RotaryUnion => {
                "The rotary union contains multiple sealed channels that allow water, power, \
                 sewage, and data to transfer between stationary and rotating components without \
                 leakage. Each channel rotates independently while maintaining continuous connection."
            }
            DiagramElement::InnerRing => {
                "The inner rotating ring receives fresh water through the rotary union and \
                 distributes it to buildings via an internal pipe network. Water pressure is \
                 maintained through the distribution system."
            }
            DiagramElement::OuterRing => {
                "The outer ring operates on the same principle, with water flowing through \
                 umbilical connections to reach all residential and commercial buildings on this level."
            }
        }
    }
}

/// Utility systems described on the infrastructure page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilitySystem {
    Water,
    Electricity,
    Sewage,
    Data,
}

impl UtilitySystem {
    pub const ALL: [UtilitySystem; 4] = [
        UtilitySystem::Water,
        UtilitySystem::Electricity,
        UtilitySystem::Sewage,
        UtilitySystem::Data,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            UtilitySystem::Water => "Water System",
            UtilitySystem::Electricity => "Electricity",
            UtilitySystem::Sewage => "Sewage System",
            UtilitySystem::Data => "Data & Internet",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            UtilitySystem::Water => {
                "Fresh water flows from ground reservoirs through umbilical towers, passing through \
                 rotary union seals into the rotating ring distribution network."
            }
            UtilitySystem::Electricity => {
                "Power transfers via slip rings - stationary brushes contact rotating conductors, \
                 enabling continuous electrical flow without cables wrapping."
            }
            UtilitySystem::Sewage => {
                "Wastewater drains from buildings into ring collection systems, flows through rotary \
                 unions to ground treatment facilities."
            }
            UtilitySystem::Data => {
                "Fiber optic rotary joints maintain high-speed connectivity, with hundreds of fiber \
                 channels rotating freely without signal loss."
            }
        }
    }

    pub fn facts(&self) -> [&'static str; 3] {
        match self {
            UtilitySystem::Water => [
                "Pressurized distribution at 60-80 PSI",
                "Redundant supply lines for reliability",
                "Real-time flow monitoring",
            ],
            UtilitySystem::Electricity => [
                "3-phase AC power distribution",
                "Slip ring capacity: 50MW per tower",
                "Minimal transmission loss (<2%)",
            ],
            UtilitySystem::Sewage => [
                "Gravity-assisted drainage",
                "Vacuum-assist backup system",
                "Real-time blockage detection",
            ],
            UtilitySystem::Data => [
                "100 Gbps per fiber channel",
                "<0.5 dB insertion loss",
                "Redundant fiber paths (N+1)",
            ],
        }
    }
}

/// State of the infrastructure page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfrastructureView {
    pub animating: bool,
    pub selected: Option<DiagramElement>,
}

impl Default for InfrastructureView {
    fn default() -> Self {
        Self {
            animating: true,
            selected: None,
        }
    }
}

impl InfrastructureView {
    /// Clicking the selected element again clears the selection
    pub fn select(&mut self, element: DiagramElement) {
        self.selected = if self.selected == Some(element) {
            None
        } else {
            Some(element)
        };
    }

    pub fn toggle_animation(&mut self) {
        self.animating = !self.animating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        for view in View::ALL {
            assert_eq!(View::from_path(view.path()), view);
        }
        assert_eq!(View::from_path("/infrastructure/"), View::Infrastructure);
        assert_eq!(View::from_path("/nowhere"), View::City);
        assert_eq!(View::Infrastructure.label(), "Infrastructure");
    }

    #[test]
    fn test_diagram_selection_toggles() {
        let mut v = InfrastructureView::default();
        v.select(DiagramElement::RotaryUnion);
        assert_eq!(v.selected, Some(DiagramElement::RotaryUnion));
        v.select(DiagramElement::InnerRing);
        assert_eq!(v.selected, Some(DiagramElement::InnerRing));
        v.select(DiagramElement::InnerRing);
        assert_eq!(v.selected, None);
    }

    #[test]
    fn test_element_ids_roundtrip() {
        for el in [
            DiagramElement::RotaryUnion,
            DiagramElement::InnerRing,
            DiagramElement::OuterRing,
        ] {
            assert_eq!(DiagramElement::from_id(el.id()), Some(el));
        }
        assert_eq!(DiagramElement::from_id("ring-3"), None);
    }
}
