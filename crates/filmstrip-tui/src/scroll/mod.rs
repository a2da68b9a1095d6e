//! Smooth horizontal scrolling for the filmstrip viewport
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation over an explicit clock
//! - `config` - Derived values for `ScrollConfig` (defined in filmstrip-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animator combining the atoms, tagging motion with its origin
//!
//! # Usage
//!
//! ```ignore
//! use filmstrip_core::ScrollOrigin;
//! use filmstrip_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::default();
//! animator.scroll_to(880.0, max_scroll, ScrollOrigin::Navigation, Instant::now());
//!
//! // Each frame
//! if let Some(origin) = animator.update(max_scroll, Instant::now()) {
//!     // report a scroll event tagged with `origin`
//! }
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
