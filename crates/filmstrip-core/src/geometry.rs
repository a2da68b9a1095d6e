//! Layout surface the carousel reads and writes through.
//!
//! The core never lays anything out. Hosts implement [`Geometry`] over their
//! own viewport; [`StripLayout`] covers the common uniform-width case.

/// How a scroll command moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated; may be retargeted by a later command
    Smooth,
    /// Applied before `scroll_to` returns
    Instant,
}

/// Who caused a scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOrigin {
    /// Drag, wheel, trackpad
    User,
    /// Autoplay or keyboard stepping
    Navigation,
    /// Loop correction; never observed as new motion
    Corrective,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub position: f64,
    pub behavior: ScrollBehavior,
    pub origin: ScrollOrigin,
}

/// A scroll the host observed, tagged with the origin of the motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEvent {
    pub origin: ScrollOrigin,
}

/// Synchronous layout metrics plus the viewport scroll command
pub trait Geometry {
    /// Left edge of a padded slot in content coordinates
    fn item_offset(&self, slot: usize) -> f64;

    fn item_width(&self, slot: usize) -> f64;

    /// Current horizontal scroll offset
    fn scroll_offset(&self) -> f64;

    /// Visible width of the viewport
    fn viewport_width(&self) -> f64;

    /// Move the viewport. `Instant` commands must be reflected by
    /// `scroll_offset` as soon as this returns.
    fn scroll_to(&mut self, command: ScrollCommand);

    fn item_center(&self, slot: usize) -> f64 {
        self.item_offset(slot) + self.item_width(slot) / 2.0
    }

    fn viewport_center(&self) -> f64 {
        self.scroll_offset() + self.viewport_width() / 2.0
    }

    /// Scroll offset that puts `slot` at the viewport center
    fn centering_offset(&self, slot: usize) -> f64 {
        self.item_center(slot) - self.viewport_width() / 2.0
    }
}

/// Uniform-width items separated by a fixed gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub slot_count: usize,
    pub item_width: f64,
    pub gap: f64,
}

impl StripLayout {
    pub fn new(slot_count: usize, item_width: f64, gap: f64) -> Self {
        Self {
            slot_count,
            item_width,
            gap,
        }
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.item_width + self.gap
    }

    pub fn offset(&self, slot: usize) -> f64 {
        slot as f64 * self.pitch()
    }

    pub fn content_width(&self) -> f64 {
        if self.slot_count == 0 {
            return 0.0;
        }
        self.slot_count as f64 * self.pitch() - self.gap
    }

    /// Largest scroll offset for a viewport of `viewport_width`
    pub fn max_scroll(&self, viewport_width: f64) -> f64 {
        (self.content_width() - viewport_width).max(0.0)
    }

    /// Slots that intersect `[scroll, scroll + viewport_width)`
    pub fn visible_slots(&self, scroll: f64, viewport_width: f64) -> std::ops::Range<usize> {
        if self.slot_count == 0 || self.pitch() <= 0.0 {
            return 0..0;
        }
        let first = ((scroll - self.item_width) / self.pitch()).floor().max(0.0) as usize;
        let last = ((scroll + viewport_width) / self.pitch()).ceil().max(0.0) as usize;
        first.min(self.slot_count)..(last + 1).min(self.slot_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_offsets() {
        let layout = StripLayout::new(9, 200.0, 20.0);
        assert!((layout.offset(3) - 660.0).abs() < 1e-9);
        assert!((layout.content_width() - (9.0 * 220.0 - 20.0)).abs() < 1e-9);
        assert!((layout.max_scroll(500.0) - (layout.content_width() - 500.0)).abs() < 1e-9);
        assert_eq!(layout.max_scroll(1e6), 0.0);
    }

    #[test]
    fn test_visible_slots_cover_viewport() {
        let layout = StripLayout::new(15, 200.0, 20.0);
        let range = layout.visible_slots(1000.0, 600.0);
        for slot in 0..15 {
            let left = layout.offset(slot);
            let right = left + 200.0;
            let intersects = right > 1000.0 && left < 1600.0;
            if intersects {
                assert!(range.contains(&slot), "slot {slot} missing from {range:?}");
            }
        }
    }

    #[test]
    fn test_empty_layout() {
        let layout = StripLayout::new(0, 200.0, 20.0);
        assert_eq!(layout.content_width(), 0.0);
        assert_eq!(layout.visible_slots(0.0, 100.0), 0..0);
    }
}
