//! Application state: the single owner of everything the UI shows
//!
//! The renderer only ever borrows this; the control panel mutates it through
//! `AppState::apply`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::command::{Command, RingEdit};
use super::selectors;
use super::view::{InfrastructureView, View};
use super::visibility::{FloorGroupVisibility, LayerVisibility};
use crate::advisory::{AdvisoryPanel, AnalysisResult};
use crate::consts::*;
use crate::error::{Result, RotundaError};
use crate::hover::HoverInfo;
use crate::layout::params::round_up_to_even;
use crate::layout::{
    Color, Layout, LayoutParams, LayoutStats, RingConfig, RingId, UmbilicalTowerConfig,
    WalkwayConfig, generate_layout, refresh_umbilicals,
};
use crate::sim::{self, RingAngles, SimulationState};
use crate::theme::Theme;

pub struct AppState {
    params: LayoutParams,
    rings: Vec<RingConfig>,
    walkways: Vec<WalkwayConfig>,
    sim: SimulationState,
    angles: RingAngles,
    floor_groups: FloorGroupVisibility,
    layers: LayerVisibility,
    opacity: f64,
    theme: Theme,
    /// Bumped on every Reset; the camera re-frames when it changes
    reset_trigger: u64,
    hover: Option<HoverInfo>,
    view: View,
    infrastructure: InfrastructureView,
    advisory: AdvisoryPanel,
    /// Only used for rings added from the control panel
    rng: Pcg32,
    next_ring_id: u32,
}

impl AppState {
    /// Generate the city from `params`. `seed` only affects rings added later.
    pub fn new(params: LayoutParams, seed: u64) -> Self {
        let Layout { rings, walkways } = generate_layout(&params);
        Self {
            params,
            rings,
            walkways,
            sim: SimulationState::default(),
            angles: RingAngles::new(),
            floor_groups: FloorGroupVisibility::default(),
            layers: LayerVisibility::default(),
            opacity: MAX_OPACITY,
            theme: Theme::default(),
            reset_trigger: 0,
            hover: None,
            view: View::default(),
            infrastructure: InfrastructureView::default(),
            advisory: AdvisoryPanel::default(),
            rng: Pcg32::seed_from_u64(seed),
            next_ring_id: 1,
        }
    }

    // === Read access ===

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn rings(&self) -> &[RingConfig] {
        &self.rings
    }

    pub fn walkways(&self) -> &[WalkwayConfig] {
        &self.walkways
    }

    pub fn ring(&self, id: &RingId) -> Option<&RingConfig> {
        selectors::ring_by_id(&self.rings, id)
    }

    pub fn sim(&self) -> &SimulationState {
        &self.sim
    }

    pub fn angles(&self) -> &RingAngles {
        &self.angles
    }

    pub fn floor_groups(&self) -> &FloorGroupVisibility {
        &self.floor_groups
    }

    pub fn layers(&self) -> &LayerVisibility {
        &self.layers
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn reset_trigger(&self) -> u64 {
        self.reset_trigger
    }

    pub fn hover(&self) -> Option<&HoverInfo> {
        self.hover.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn infrastructure(&self) -> &InfrastructureView {
        &self.infrastructure
    }

    pub fn advisory(&self) -> &AdvisoryPanel {
        &self.advisory
    }

    // === Derived views ===

    pub fn visible_walkways(&self) -> Vec<&WalkwayConfig> {
        selectors::visible_walkways(&self.walkways, &self.rings, &self.floor_groups)
    }

    pub fn visible_umbilicals(&self) -> Vec<&UmbilicalTowerConfig> {
        selectors::visible_umbilicals(&self.rings, &self.layers)
    }

    pub fn stats(&self) -> LayoutStats {
        selectors::layout_stats(&self.rings, &self.walkways)
    }

    // === Frame ===

    /// Advance the simulation clock by `dt` wall-clock seconds
    pub fn advance(&mut self, dt: f64) {
        sim::tick(&mut self.sim, &mut self.angles, &self.rings, dt);
    }

    // === Advisory ===

    /// Open the advisory panel in its loading state; returns the request ticket
    pub fn begin_advisory(&mut self) -> u64 {
        self.advisory.begin()
    }

    /// Deliver a response. Stale tickets are ignored (returns false).
    pub fn complete_advisory(&mut self, ticket: u64, result: AnalysisResult) -> bool {
        self.advisory.complete(ticket, result)
    }

    // === Commands ===

    pub fn apply(&mut self, command: Command) -> Result<()> {
        log::debug!("apply {:?}", command);
        match command {
            Command::UpdateRing { id, edit } => self.update_ring(&id, edit)?,
            Command::SetGlobalColor(color) => {
                for ring in &mut self.rings {
                    ring.color = color;
                }
            }
            Command::AddRing => {
                self.add_ring();
            }
            Command::RemoveRing(id) => self.remove_ring(&id)?,

            Command::SetOpacity(opacity) => {
                if opacity.is_nan() {
                    return Err(RotundaError::invalid("opacity", opacity));
                }
                self.opacity = opacity.clamp(MIN_OPACITY, MAX_OPACITY);
            }
            Command::SetFloorGroup(group, visible) => self.floor_groups.set(group, visible),
            Command::SetLayer(layer, visible) => self.layers.set(layer, visible),
            Command::SetTheme(theme) => self.theme = theme,

            Command::TogglePlay => self.sim.toggle_play(),
            Command::SetTimeScale(scale) => {
                if !self.sim.set_time_scale(scale) {
                    return Err(RotundaError::invalid("timeScale", scale));
                }
            }
            Command::Reset => {
                self.sim.reset();
                self.reset_trigger += 1;
            }

            Command::Navigate(view) => {
                self.view = view;
                self.hover = None;
            }
            Command::SetHover(hover) => self.hover = hover,
            Command::SelectDiagramElement(element) => self.infrastructure.select(element),
            Command::ToggleDiagramAnimation => self.infrastructure.toggle_animation(),
            Command::CloseAdvisory => self.advisory.close(),
        }
        Ok(())
    }

    fn update_ring(&mut self, id: &RingId, edit: RingEdit) -> Result<()> {
        let params = &self.params;
        let ring = self
            .rings
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| RotundaError::UnknownRing(id.clone()))?;

        match edit {
            RingEdit::Name(name) => ring.name = name,
            RingEdit::OuterRadius(outer) => {
                if !outer.is_finite() || outer <= ring.inner_radius || outer > MAX_RING_RADIUS {
                    return Err(RotundaError::invalid("outerRadius", outer));
                }
                ring.outer_radius = outer;
                refresh_umbilicals(ring, params);
            }
            RingEdit::SectionCount(count) => {
                if ring.is_hub() || count > MAX_SECTIONS {
                    return Err(RotundaError::invalid("sectionCount", count));
                }
                ring.section_count = round_up_to_even(count as f64).max(4);
            }
            RingEdit::Color(color) => ring.color = color,
        }
        Ok(())
    }

    /// Append a ring past the current outermost one. Height and speed are random.
    fn add_ring(&mut self) -> RingId {
        let inner = self
            .rings
            .last()
            .map(|r| r.outer_radius + ADDED_RING_GAP)
            .unwrap_or(FIRST_RING_INNER_RADIUS);
        let id = RingId::new(format!("ring-{}", self.next_ring_id));
        self.next_ring_id += 1;

        let mut ring = RingConfig {
            id: id.clone(),
            name: format!("Ring {}", self.rings.len() + 1),
            inner_radius: inner,
            outer_radius: inner + ADDED_RING_WIDTH,
            height: 150.0 + self.rng.random::<f64>() * 100.0,
            rotation_speed: (self.rng.random::<f64>() - 0.5) * 5.0,
            color: Color::STONE,
            floor_count: ADDED_RING_FLOORS,
            section_count: ADDED_RING_SECTIONS,
            umbilical_count: 0,
            umbilicals: Vec::new(),
            description: None,
        };
        refresh_umbilicals(&mut ring, &self.params);

        log::info!("Added {} at r={}..{}", ring.id, ring.inner_radius, ring.outer_radius);
        self.rings.push(ring);
        id
    }

    /// Remove a ring and every bridge that referenced it
    fn remove_ring(&mut self, id: &RingId) -> Result<()> {
        let before = self.rings.len();
        self.rings.retain(|r| &r.id != id);
        if self.rings.len() == before {
            return Err(RotundaError::UnknownRing(id.clone()));
        }

        let bridges = self.walkways.len();
        self.walkways.retain(|w| !w.touches(id));
        self.angles.retain_rings(&self.rings);

        log::info!(
            "Removed {} ({} bridges removed with it)",
            id,
            bridges - self.walkways.len()
        );
        Ok(())
    }
}
