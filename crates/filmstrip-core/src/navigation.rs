//! Per-container carousel controller.
//!
//! Sequences autoplay, keyboard stepping and free scrolling into scroll
//! commands, and defers loop correction until motion has settled.

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::corrector::{self, Correction};
use crate::focus::{Closest, FocusEngine, FocusFrame};
use crate::geometry::{Geometry, ScrollBehavior, ScrollCommand, ScrollEvent, ScrollOrigin};
use crate::loop_shift::LoopShift;
use crate::registry::{Band, Container, ItemRegistry};
use crate::schedule::{Debounce, FrameRequest, Interval};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Autoplay is gated while the user is interacting
    pub paused: bool,
    /// A navigation-initiated smooth scroll has not settled yet
    pub auto_scrolling: bool,
    /// The closest slot was a clone at some frame since the last settle
    pub pending_correction: bool,
}

/// Keys as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Whether the host should suppress its default handling of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    TouchStart,
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

#[derive(Debug)]
pub struct Filmstrip {
    registry: ItemRegistry,
    loop_shift: LoopShift,
    focus: FocusEngine,
    state: NavigationState,
    frame: FrameRequest,
    settle: Debounce,
    autoplay: Option<Interval>,
    keyboard: bool,
    last_focus: FocusFrame,
}

impl Filmstrip {
    /// Activate the carousel on `container`.
    ///
    /// `None` when the container is already initialized or too short; the
    /// container is then left as it was. Under reduced motion no autoplay timer
    /// is created and keys are not intercepted.
    pub fn activate<T: Clone>(
        container: &mut Container<T>,
        config: &CarouselConfig,
        now: Instant,
    ) -> Option<Self> {
        let registry = ItemRegistry::activate(container, config.min_items)?;
        let reduced_motion = config.reduced_motion;
        let autoplay = (!reduced_motion).then(|| Interval::start(config.autoplay_interval(), now));
        debug!(
            items = registry.logical_len(),
            reduced_motion, "Filmstrip controller created"
        );
        Some(Self {
            registry,
            loop_shift: LoopShift::new(),
            focus: FocusEngine::new(config.focus),
            state: NavigationState::default(),
            frame: FrameRequest::default(),
            settle: Debounce::new(config.settle_window()),
            autoplay,
            keyboard: !reduced_motion,
            last_focus: FocusFrame::default(),
        })
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Weights from the most recent focus pass
    pub fn focus_frame(&self) -> &FocusFrame {
        &self.last_focus
    }

    pub fn loop_shift(&self) -> Option<f64> {
        self.loop_shift.get()
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_some_and(|timer| timer.is_running())
    }

    pub fn keyboard_enabled(&self) -> bool {
        self.keyboard
    }

    pub fn frame_pending(&self) -> bool {
        self.frame.is_pending()
    }

    pub fn settle_armed(&self) -> bool {
        self.settle.is_armed()
    }

    pub fn closest<G: Geometry + ?Sized>(&self, geometry: &G) -> Option<Closest> {
        self.focus.closest(&self.registry, geometry)
    }

    /// First layout pass: measure, center the first original, weight items
    pub fn on_layout_ready<G: Geometry + ?Sized>(&mut self, geometry: &mut G) {
        self.loop_shift.compute(&self.registry, geometry);
        if let Some(first) = self.registry.original(0) {
            let position = geometry.centering_offset(first);
            self.write_scroll(
                geometry,
                ScrollCommand {
                    position,
                    behavior: ScrollBehavior::Instant,
                    origin: ScrollOrigin::Navigation,
                },
            );
        }
        self.update_focus(geometry);
    }

    pub fn on_resize<G: Geometry + ?Sized>(&mut self, geometry: &G) {
        self.loop_shift.compute(&self.registry, geometry);
        self.frame.request();
    }

    /// A scroll happened in the host viewport
    pub fn handle_scroll(&mut self, event: ScrollEvent, now: Instant) {
        match event.origin {
            ScrollOrigin::Corrective => {
                trace!("Ignoring scroll caused by loop correction");
            }
            ScrollOrigin::User | ScrollOrigin::Navigation => {
                self.frame.request();
                self.settle.rearm(now);
            }
        }
    }

    /// Render-frame hook. Returns `true` when focus was recomputed.
    pub fn on_frame<G: Geometry + ?Sized>(&mut self, geometry: &G) -> bool {
        if !self.frame.take() {
            return false;
        }
        trace!("Frame focus update");
        self.update_focus(geometry);
        true
    }

    /// Timer hook: settle debounce first, then autoplay
    pub fn on_tick<G: Geometry + ?Sized>(&mut self, geometry: &mut G, now: Instant) {
        if self.settle.fire_due(now) {
            self.settle(geometry);
        }
        let autoplay_due = self.autoplay.as_mut().is_some_and(|timer| timer.poll(now));
        if autoplay_due {
            self.auto_advance(geometry);
        }
    }

    pub fn handle_key<G: Geometry + ?Sized>(&mut self, key: NavKey, geometry: &mut G) -> KeyOutcome {
        if !self.keyboard {
            return KeyOutcome::Ignored;
        }
        let step = match key {
            NavKey::ArrowRight => Step::Next,
            NavKey::ArrowLeft => Step::Previous,
            NavKey::Other => return KeyOutcome::Ignored,
        };
        self.state.paused = true;
        self.update_focus(geometry);
        self.step(step, geometry);
        KeyOutcome::Handled
    }

    pub fn handle_interaction(&mut self, interaction: Interaction) {
        self.state.paused = matches!(
            interaction,
            Interaction::PointerEnter | Interaction::FocusIn | Interaction::TouchStart
        );
    }

    /// Host is going away: cancel everything scheduled
    pub fn teardown(&mut self) {
        if let Some(timer) = self.autoplay.as_mut() {
            timer.cancel();
        }
        self.settle.cancel();
        self.frame.cancel();
        debug!("Filmstrip torn down");
    }

    /// Autoplay body; a no-op while paused
    pub fn auto_advance<G: Geometry + ?Sized>(&mut self, geometry: &mut G) {
        if self.state.paused || self.registry.is_empty() {
            return;
        }
        self.update_focus(geometry);
        self.step(Step::Next, geometry);
    }

    /// Scroll to the neighbour of the active item. Returns the target slot.
    ///
    /// Stepping right from the last item targets the trailing clone of the
    /// first, and left from the first targets the leading clone of the last, so
    /// motion continues in the same direction and is corrected on settle.
    pub fn step<G: Geometry + ?Sized>(&mut self, step: Step, geometry: &mut G) -> Option<usize> {
        let active = self.resolve_active(geometry)?;
        let current = self.registry.item(active)?.logical_index;
        let last = self.registry.logical_len().checked_sub(1)?;
        let target = match step {
            Step::Next if current < last => self.registry.slot(Band::Primary, current + 1),
            Step::Next => self.registry.slot(Band::Trailing, 0),
            Step::Previous if current > 0 => self.registry.slot(Band::Primary, current - 1),
            Step::Previous => self.registry.slot(Band::Leading, last),
        }?;
        debug!(?step, from = current, target, "Navigating");
        let position = geometry.centering_offset(target);
        self.write_scroll(
            geometry,
            ScrollCommand {
                position,
                behavior: ScrollBehavior::Smooth,
                origin: ScrollOrigin::Navigation,
            },
        );
        Some(target)
    }

    /// Settle handler: runs once motion has been quiet for the settle window
    pub fn settle<G: Geometry + ?Sized>(&mut self, geometry: &mut G) {
        self.state.auto_scrolling = false;
        if !self.state.pending_correction {
            return;
        }
        let closest = self.closest(geometry).map(|c| c.slot);
        if self.correct(closest, geometry) {
            if let Some(refreshed) = self.closest(geometry) {
                self.apply_focus(refreshed.center, geometry);
            }
        }
        self.state.pending_correction = false;
    }

    /// Recompute weights and flag a correction if a clone is centered
    fn update_focus<G: Geometry + ?Sized>(&mut self, geometry: &G) {
        if self.registry.is_empty() {
            return;
        }
        self.loop_shift.ensure(&self.registry, geometry);
        let Some(closest) = self.closest(geometry) else {
            return;
        };
        self.apply_focus(closest.center, geometry);
        if closest.item.band.is_clone() {
            self.state.pending_correction = true;
        }
    }

    fn apply_focus<G: Geometry + ?Sized>(&mut self, center: f64, geometry: &G) {
        self.last_focus = self.focus.apply(center, &self.registry, geometry);
    }

    /// Primary slot of the centered item, jumping out of a clone band first
    fn resolve_active<G: Geometry + ?Sized>(&mut self, geometry: &mut G) -> Option<usize> {
        let closest = self.closest(geometry)?;
        if closest.item.band.is_clone() {
            self.correct(Some(closest.slot), geometry);
        }
        self.registry.primary_equivalent(closest.slot)
    }

    fn correct<G: Geometry + ?Sized>(&mut self, slot: Option<usize>, geometry: &mut G) -> bool {
        match corrector::plan(slot, &self.registry, &mut self.loop_shift, geometry) {
            Correction::Jump { command, .. } => {
                self.write_scroll(geometry, command);
                true
            }
            Correction::Unavailable => {
                debug!("Loop shift unavailable, skipping correction");
                false
            }
            Correction::NotNeeded => false,
        }
    }

    /// Single entry point for every scroll write
    fn write_scroll<G: Geometry + ?Sized>(&mut self, geometry: &mut G, command: ScrollCommand) {
        match command.origin {
            ScrollOrigin::Corrective => {
                debug!(position = command.position, "Loop correction");
            }
            ScrollOrigin::Navigation => {
                if command.behavior == ScrollBehavior::Smooth {
                    self.state.auto_scrolling = true;
                }
            }
            ScrollOrigin::User => {}
        }
        geometry.scroll_to(command);
    }
}
