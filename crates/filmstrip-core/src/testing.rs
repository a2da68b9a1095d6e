//! Simulated viewport for driving the controller in tests.

use std::time::{Duration, Instant};

use crate::geometry::{
    Geometry, ScrollBehavior, ScrollCommand, ScrollEvent, ScrollOrigin, StripLayout,
};
use crate::navigation::Filmstrip;

pub(crate) const FRAME: Duration = Duration::from_millis(16);

/// Uniform strip whose smooth scrolls advance only when the test says so
#[derive(Debug)]
pub(crate) struct SimViewport {
    layout: StripLayout,
    width: f64,
    scroll: f64,
    motion: Option<(f64, ScrollOrigin)>,
    pub(crate) commands: Vec<ScrollCommand>,
}

impl SimViewport {
    pub(crate) fn uniform(slots: usize, item_width: f64, gap: f64, width: f64) -> Self {
        Self {
            layout: StripLayout::new(slots, item_width, gap),
            width,
            scroll: 0.0,
            motion: None,
            commands: Vec::new(),
        }
    }

    pub(crate) fn set_layout(&mut self, item_width: f64, gap: f64) {
        self.layout.item_width = item_width;
        self.layout.gap = gap;
    }

    fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.layout.max_scroll(self.width))
    }

    pub(crate) fn set_scroll(&mut self, position: f64) {
        self.scroll = self.clamp(position);
        self.motion = None;
    }

    /// User drag; cancels any smooth scroll in flight
    pub(crate) fn drag(&mut self, delta: f64) -> ScrollEvent {
        self.set_scroll(self.scroll + delta);
        ScrollEvent {
            origin: ScrollOrigin::User,
        }
    }

    /// Cover `fraction` of the remaining smooth-scroll distance
    pub(crate) fn advance(&mut self, fraction: f64) -> Option<ScrollEvent> {
        let (target, origin) = self.motion?;
        self.scroll += (target - self.scroll) * fraction;
        Some(ScrollEvent { origin })
    }

    pub(crate) fn finish(&mut self) -> Option<ScrollEvent> {
        let (target, origin) = self.motion.take()?;
        self.scroll = target;
        Some(ScrollEvent { origin })
    }
}

impl Geometry for SimViewport {
    fn item_offset(&self, slot: usize) -> f64 {
        self.layout.offset(slot)
    }

    fn item_width(&self, _slot: usize) -> f64 {
        self.layout.item_width
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.commands.push(command);
        let target = self.clamp(command.position);
        match command.behavior {
            ScrollBehavior::Instant => {
                self.scroll = target;
                self.motion = None;
            }
            ScrollBehavior::Smooth => self.motion = Some((target, command.origin)),
        }
    }
}

/// Play out the current smooth scroll frame by frame, then let the settle
/// window elapse. Returns the time after settling.
pub(crate) fn run_until_settled(
    strip: &mut Filmstrip,
    sim: &mut SimViewport,
    start: Instant,
) -> Instant {
    let mut now = start;
    for _ in 0..12 {
        now += FRAME;
        if let Some(event) = sim.advance(0.5) {
            strip.handle_scroll(event, now);
        }
        strip.on_frame(&*sim);
        strip.on_tick(sim, now);
    }
    now += FRAME;
    if let Some(event) = sim.finish() {
        strip.handle_scroll(event, now);
    }
    strip.on_frame(&*sim);
    now += Duration::from_millis(141);
    strip.on_tick(sim, now);
    now
}
