//! L4 Atomic Layer: Scroll configuration helpers
//!
//! The config types live in filmstrip-core; this adds the derived values the
//! animator needs.

use std::time::Duration;

pub use filmstrip_core::ScrollConfig;

pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Smooth scrolling is on and has a non-zero duration
    fn is_smooth(&self) -> bool;

    /// One wheel notch, in virtual pixels
    fn wheel_step(&self) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_micros(1_000_000 / fps as u64),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    #[inline]
    fn wheel_step(&self) -> f64 {
        self.wheel_step_px as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmstrip_core::EasingType;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration(), Duration::from_millis(450));
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.wheel_step(), 48.0);
    }

    #[test]
    fn test_tick_duration_falls_back_at_zero_fps() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        let config = ScrollConfig {
            animation_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(20));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
