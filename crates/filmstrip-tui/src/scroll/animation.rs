//! L3 Molecular Layer: Scroll animation controller
//!
//! Combines easing functions and timing utilities into an animated horizontal
//! scroll position. Every motion carries the origin of the command that
//! started it, so the viewport can tag the scroll events it reports.

use std::time::{Duration, Instant};

use filmstrip_core::ScrollOrigin;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
    origin: ScrollOrigin,
}

/// Animated scroll position in virtual pixels.
///
/// Call `scroll_to()` or `scroll_by()` to start motion, then `update()` each
/// frame; it reports whether the position moved and on whose behalf.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
    /// User deltas batched until the next update
    pending_delta: f64,
    /// Position changed outside of an animation since the last update
    moved: Option<ScrollOrigin>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            pending_delta: 0.0,
            moved: None,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Work left for `update()`; use this to pick the fast tick rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0 || self.moved.is_some()
    }

    /// Where the current motion ends
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump without animation, cancelling anything in flight
    pub fn set_scroll(&mut self, position: f64, origin: ScrollOrigin) {
        self.animation = None;
        self.pending_delta = 0.0;
        if position != self.current {
            self.current = position;
            self.moved = Some(origin);
        }
    }

    /// Animate toward `target`, retargeting any motion in flight from the
    /// currently visible position
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64, origin: ScrollOrigin, now: Instant) {
        let target = target.clamp(0.0, max_scroll.max(0.0));
        self.pending_delta = 0.0;

        if !self.config.is_smooth() {
            self.set_scroll(target, origin);
            return;
        }
        if target == self.current {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
            origin,
        });
    }

    /// User scroll by `delta` pixels; batched until the next `update()`
    pub fn scroll_by(&mut self, delta: f64) {
        self.pending_delta += delta;
    }

    /// Advance the animation. Returns the origin of the motion if the
    /// position changed since the last call.
    pub fn update(&mut self, max_scroll: f64, now: Instant) -> Option<ScrollOrigin> {
        let max_scroll = max_scroll.max(0.0);
        let mut moved = self.moved.take();

        if self.pending_delta != 0.0 {
            let target = (self.target() + self.pending_delta).clamp(0.0, max_scroll);
            self.pending_delta = 0.0;
            if self.config.is_smooth() {
                // Wheel motion is short; a third of a navigation animation
                self.animation = (target != self.current).then(|| ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: target,
                    duration: self.config.animation_duration() / 3,
                    easing: EasingType::EaseOut,
                    origin: ScrollOrigin::User,
                });
            } else if target != self.current {
                self.current = target;
                moved = Some(ScrollOrigin::User);
            }
        }

        if let Some(anim) = self.animation.clone() {
            let before = self.current;
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.current = lerp(anim.from, anim.to, t).min(max_scroll);
            }
            if self.current != before {
                moved = Some(anim.origin);
            }
        }

        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        let now = Instant::now();
        animator.scroll_to(100.0, 200.0, ScrollOrigin::Navigation, now);
        assert_eq!(animator.current(), 100.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(200.0, now), Some(ScrollOrigin::Navigation));
        assert_eq!(animator.update(200.0, now), None);
    }

    #[test]
    fn test_animation_reports_its_origin() {
        let mut animator = smooth(100);
        let t0 = Instant::now();
        animator.scroll_to(100.0, 500.0, ScrollOrigin::Navigation, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100.0);

        let origin = animator.update(500.0, t0 + Duration::from_millis(50));
        assert_eq!(origin, Some(ScrollOrigin::Navigation));
        assert!((animator.current() - 50.0).abs() < 1e-9);

        animator.update(500.0, t0 + Duration::from_millis(100));
        assert_eq!(animator.current(), 100.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(500.0, t0 + Duration::from_millis(120)), None);
    }

    #[test]
    fn test_retarget_starts_from_visible_position() {
        let mut animator = smooth(100);
        let t0 = Instant::now();
        animator.scroll_to(200.0, 500.0, ScrollOrigin::Navigation, t0);
        animator.update(500.0, t0 + Duration::from_millis(50));
        let t1 = t0 + Duration::from_millis(50);
        animator.scroll_to(0.0, 500.0, ScrollOrigin::Navigation, t1);
        animator.update(500.0, t1);
        assert!((animator.current() - 100.0).abs() < 1e-9);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = smooth(300);
        animator.scroll_by(10.0);
        animator.scroll_by(10.0);
        animator.scroll_by(10.0);
        let t0 = Instant::now();
        animator.update(200.0, t0);
        assert_eq!(animator.target(), 30.0);
        animator.update(200.0, t0 + Duration::from_millis(100));
        assert_eq!(animator.current(), 30.0);
    }

    #[test]
    fn test_user_scroll_reports_user_origin() {
        let mut animator = smooth(300);
        let t0 = Instant::now();
        animator.scroll_by(40.0);
        animator.update(200.0, t0);
        let origin = animator.update(200.0, t0 + Duration::from_millis(20));
        assert_eq!(origin, Some(ScrollOrigin::User));
    }

    #[test]
    fn test_set_scroll_cancels_animation() {
        let mut animator = smooth(100);
        let t0 = Instant::now();
        animator.scroll_to(300.0, 500.0, ScrollOrigin::Navigation, t0);
        animator.set_scroll(42.0, ScrollOrigin::Corrective);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(500.0, t0), Some(ScrollOrigin::Corrective));
        assert_eq!(animator.current(), 42.0);
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut animator = smooth(100);
        let t0 = Instant::now();
        animator.set_scroll(50.0, ScrollOrigin::User);
        animator.scroll_to(300.0, 100.0, ScrollOrigin::Navigation, t0);
        assert!(animator.target() <= 100.0);
        animator.scroll_by(-1000.0);
        animator.update(100.0, t0);
        assert_eq!(animator.target(), 0.0);
    }
}
