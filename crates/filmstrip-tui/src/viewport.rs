//! Terminal viewport over a uniform strip, measured in virtual pixels.
//!
//! One terminal column is `cell_width_px` pixels. Scroll commands go through a
//! [`ScrollAnimator`]; every position change is queued as a [`ScrollEvent`]
//! tagged with the origin of the motion.

use std::time::Instant;

use filmstrip_core::{
    Geometry, ScrollBehavior, ScrollCommand, ScrollEvent, ScrollOrigin, StripLayout, UiConfig,
};

use crate::scroll::{ScrollAnimator, ScrollConfigExt};

#[derive(Debug)]
pub struct Viewport {
    layout: StripLayout,
    cell_px: f64,
    width_px: f64,
    animator: ScrollAnimator,
    /// Clock of the last `advance`; smooth commands start from here
    clock: Instant,
    events: Vec<ScrollEvent>,
}

impl Viewport {
    pub fn new(slot_count: usize, ui: &UiConfig, now: Instant) -> Self {
        Self {
            layout: StripLayout::new(
                slot_count,
                ui.item_width_px as f64,
                ui.item_gap_px as f64,
            ),
            cell_px: ui.cell_width_px.max(1) as f64,
            width_px: 0.0,
            animator: ScrollAnimator::new(ui.scroll.clone()),
            clock: now,
            events: Vec::new(),
        }
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    pub fn cell_px(&self) -> f64 {
        self.cell_px
    }

    /// Resize to `columns` terminal columns. Returns `true` if the width changed.
    pub fn set_width_cells(&mut self, columns: u16) -> bool {
        let width = columns as f64 * self.cell_px;
        if (width - self.width_px).abs() < f64::EPSILON {
            return false;
        }
        self.width_px = width;
        let clamped = self.animator.current().min(self.max_scroll());
        if clamped != self.animator.current() {
            self.animator.set_scroll(clamped, ScrollOrigin::User);
        }
        true
    }

    pub fn max_scroll(&self) -> f64 {
        self.layout.max_scroll(self.width_px)
    }

    /// Free scroll by `delta` pixels (wheel, drag, h/l)
    pub fn user_scroll(&mut self, delta: f64) {
        self.animator.scroll_by(delta);
    }

    /// Wheel notch distance from config
    pub fn wheel_step(&self) -> f64 {
        self.animator.config().wheel_step()
    }

    /// Advance animations to `now`, queueing a scroll event if the view moved
    pub fn advance(&mut self, now: Instant) {
        self.clock = now;
        if let Some(origin) = self.animator.update(self.max_scroll(), now) {
            self.events.push(ScrollEvent { origin });
        }
    }

    /// Scroll events observed since the last call
    pub fn take_events(&mut self) -> Vec<ScrollEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_moving(&self) -> bool {
        self.animator.needs_update()
    }

    /// Pixel position to terminal column offset from the viewport's left edge
    pub fn to_column(&self, content_px: f64) -> i32 {
        ((content_px - self.animator.current()) / self.cell_px).round() as i32
    }

    pub fn to_columns(&self, px: f64) -> i32 {
        (px / self.cell_px).round() as i32
    }
}

impl Geometry for Viewport {
    fn item_offset(&self, slot: usize) -> f64 {
        self.layout.offset(slot)
    }

    fn item_width(&self, _slot: usize) -> f64 {
        self.layout.item_width
    }

    fn scroll_offset(&self) -> f64 {
        self.animator.current()
    }

    fn viewport_width(&self) -> f64 {
        self.width_px
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        let max = self.max_scroll();
        match command.behavior {
            ScrollBehavior::Instant => {
                let position = command.position.clamp(0.0, max);
                self.animator.set_scroll(position, command.origin);
                // Report now; the animator's pending flag is consumed here
                if let Some(origin) = self.animator.update(max, self.clock) {
                    self.events.push(ScrollEvent { origin });
                }
            }
            ScrollBehavior::Smooth => {
                self.animator
                    .scroll_to(command.position, max, command.origin, self.clock);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn viewport(now: Instant) -> Viewport {
        let ui = UiConfig::default();
        let mut viewport = Viewport::new(15, &ui, now);
        viewport.set_width_cells(80);
        viewport
    }

    #[test]
    fn test_metrics_in_virtual_pixels() {
        let t0 = Instant::now();
        let viewport = viewport(t0);
        assert_eq!(viewport.viewport_width(), 640.0);
        assert_eq!(viewport.item_offset(2), 416.0);
        assert_eq!(viewport.item_center(0), 96.0);
        assert_eq!(viewport.max_scroll(), 15.0 * 208.0 - 16.0 - 640.0);
    }

    #[test]
    fn test_instant_write_is_visible_immediately_and_reported() {
        let t0 = Instant::now();
        let mut viewport = viewport(t0);
        viewport.scroll_to(ScrollCommand {
            position: 500.0,
            behavior: ScrollBehavior::Instant,
            origin: ScrollOrigin::Corrective,
        });
        assert_eq!(viewport.scroll_offset(), 500.0);
        assert_eq!(
            viewport.take_events(),
            vec![ScrollEvent {
                origin: ScrollOrigin::Corrective
            }]
        );
        assert!(viewport.take_events().is_empty());
    }

    #[test]
    fn test_smooth_write_reports_navigation_motion() {
        let t0 = Instant::now();
        let mut viewport = viewport(t0);
        viewport.scroll_to(ScrollCommand {
            position: 800.0,
            behavior: ScrollBehavior::Smooth,
            origin: ScrollOrigin::Navigation,
        });
        assert_eq!(viewport.scroll_offset(), 0.0);
        viewport.advance(t0 + Duration::from_millis(100));
        let events = viewport.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].origin, ScrollOrigin::Navigation);
        viewport.advance(t0 + Duration::from_secs(1));
        assert_eq!(viewport.scroll_offset(), 800.0);
        assert!(!viewport.is_moving());
    }

    #[test]
    fn test_user_scroll_is_tagged_user() {
        let t0 = Instant::now();
        let mut viewport = viewport(t0);
        viewport.user_scroll(viewport.wheel_step());
        viewport.advance(t0);
        viewport.advance(t0 + Duration::from_millis(50));
        let events = viewport.take_events();
        assert!(!events.is_empty());
        assert!(events.iter().all(|e| e.origin == ScrollOrigin::User));
    }

    #[test]
    fn test_columns() {
        let t0 = Instant::now();
        let viewport = viewport(t0);
        assert_eq!(viewport.to_columns(192.0), 24);
        assert_eq!(viewport.to_column(416.0), 52);
    }
}
