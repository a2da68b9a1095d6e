pub mod config;
pub mod corrector;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod items;
pub mod loop_shift;
pub mod navigation;
pub mod registry;
pub mod schedule;

#[cfg(test)]
mod testing;

pub use config::{CarouselConfig, EasingType, FilmstripConfig, FocusConfig, ScrollConfig, UiConfig};
pub use error::{Error, Result};
pub use focus::{FocusEngine, FocusFrame, Weight};
pub use geometry::{Geometry, ScrollBehavior, ScrollCommand, ScrollEvent, ScrollOrigin, StripLayout};
pub use navigation::{Filmstrip, Interaction, KeyOutcome, NavKey, NavigationState, Step};
pub use registry::{Band, Container, ItemRegistry, PaddedItem};
