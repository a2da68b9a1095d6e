//! Attention weighting around the viewport center.

use crate::config::FocusConfig;
use crate::geometry::Geometry;
use crate::registry::{ItemRegistry, PaddedItem};

/// Visual weight consumed by styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    pub scale: f64,
    /// In `[0, 1]`
    pub opacity: f64,
}

/// Slot nearest the viewport center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Closest {
    pub center: f64,
    pub slot: usize,
    pub item: PaddedItem,
    pub distance: f64,
}

/// Weights for every slot, measured against one center
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FocusFrame {
    pub center: f64,
    pub weights: Vec<Weight>,
}

impl FocusFrame {
    pub fn weight(&self, slot: usize) -> Option<Weight> {
        self.weights.get(slot).copied()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FocusEngine {
    config: FocusConfig,
}

impl FocusEngine {
    pub fn new(config: FocusConfig) -> Self {
        Self { config }
    }

    /// Distance at which weights bottom out
    pub fn radius(&self, viewport_width: f64) -> f64 {
        (viewport_width * self.config.radius_fraction).max(self.config.min_radius)
    }

    pub fn weight(&self, distance: f64, viewport_width: f64) -> Weight {
        let ratio = (distance.abs() / self.radius(viewport_width)).min(1.0);
        Weight {
            scale: self.config.peak_scale - self.config.scale_falloff * ratio,
            opacity: 1.0 - self.config.opacity_falloff * ratio,
        }
    }

    /// Scan in sequence order; the first slot wins ties
    pub fn closest<G: Geometry + ?Sized>(
        &self,
        registry: &ItemRegistry,
        geometry: &G,
    ) -> Option<Closest> {
        let center = geometry.viewport_center();
        let mut best: Option<Closest> = None;
        for (slot, item) in registry.iter() {
            let distance = (center - geometry.item_center(slot)).abs();
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Closest {
                    center,
                    slot,
                    item,
                    distance,
                });
            }
        }
        best
    }

    pub fn apply<G: Geometry + ?Sized>(
        &self,
        center: f64,
        registry: &ItemRegistry,
        geometry: &G,
    ) -> FocusFrame {
        let viewport_width = geometry.viewport_width();
        let weights = (0..registry.len())
            .map(|slot| self.weight(center - geometry.item_center(slot), viewport_width))
            .collect();
        FocusFrame { center, weights }
    }
}
