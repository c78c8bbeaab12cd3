//! Control-surface commands
//!
//! Every mutation of `AppState` goes through one of these.

use crate::consts::{MAX_RING_RADIUS, MAX_SECTIONS};
use crate::error::{Result, RotundaError};
use crate::hover::HoverInfo;
use crate::layout::{Color, FloorGroup, RingId};
use crate::theme::Theme;

use super::view::{DiagramElement, View};
use super::visibility::Layer;

/// One editable field of a ring
#[derive(Debug, Clone, PartialEq)]
pub enum RingEdit {
    Name(String),
    OuterRadius(f64),
    SectionCount(u32),
    Color(Color),
}

impl RingEdit {
    /// Build an edit from raw form text. `field` uses the form's camelCase names.
    pub fn parse(field: &str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        match field {
            "name" => {
                if raw.is_empty() {
                    return Err(RotundaError::invalid("name", raw));
                }
                Ok(RingEdit::Name(raw.to_string()))
            }
            "outerRadius" => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| RotundaError::invalid("outerRadius", raw))?;
                if !value.is_finite() || value <= 0.0 || value > MAX_RING_RADIUS {
                    return Err(RotundaError::invalid("outerRadius", raw));
                }
                Ok(RingEdit::OuterRadius(value))
            }
            "sectionCount" => {
                // Accept "12" and "12.0" the way a number input reports them
                let value: f64 = raw
                    .parse()
                    .map_err(|_| RotundaError::invalid("sectionCount", raw))?;
                if !value.is_finite() || value < 1.0 || value.round() > MAX_SECTIONS as f64 {
                    return Err(RotundaError::invalid("sectionCount", raw));
                }
                Ok(RingEdit::SectionCount(value.round() as u32))
            }
            "color" => Ok(RingEdit::Color(raw.parse()?)),
            _ => Err(RotundaError::invalid("field", field)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // === Rings ===
    UpdateRing { id: RingId, edit: RingEdit },
    SetGlobalColor(Color),
    AddRing,
    RemoveRing(RingId),

    // === Appearance ===
    SetOpacity(f64),
    SetFloorGroup(FloorGroup, bool),
    SetLayer(Layer, bool),
    SetTheme(Theme),

    // === Simulation ===
    TogglePlay,
    SetTimeScale(f64),
    /// Resume, rewind simulated time, and re-frame the camera
    Reset,

    // === Navigation / overlays ===
    Navigate(View),
    SetHover(Option<HoverInfo>),
    SelectDiagramElement(DiagramElement),
    ToggleDiagramAnimation,
    CloseAdvisory,
}
