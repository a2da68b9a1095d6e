//! Distance between equivalent positions in adjacent bands.

use tracing::debug;

use crate::geometry::Geometry;
use crate::registry::{Band, ItemRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Measurement {
    #[default]
    Unmeasured,
    Measured(f64),
}

/// Cached loop shift with an explicit measured state.
///
/// A zero measurement (items not laid out yet, zero-width items) is kept but
/// reported as unavailable, and the next [`LoopShift::ensure`] measures again.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopShift {
    measurement: Measurement,
}

impl LoopShift {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure from logical index 0: `center(Trailing, 0) - center(Primary, 0)`
    pub fn compute<G: Geometry + ?Sized>(&mut self, registry: &ItemRegistry, geometry: &G) {
        let (Some(primary), Some(trailing)) = (
            registry.slot(Band::Primary, 0),
            registry.slot(Band::Trailing, 0),
        ) else {
            return;
        };
        let shift = geometry.item_center(trailing) - geometry.item_center(primary);
        if !shift.is_finite() {
            return;
        }
        debug!(shift, "Measured loop shift");
        self.measurement = Measurement::Measured(shift);
    }

    /// Measure only if no usable value is cached
    pub fn ensure<G: Geometry + ?Sized>(
        &mut self,
        registry: &ItemRegistry,
        geometry: &G,
    ) -> Option<f64> {
        if self.get().is_none() {
            self.compute(registry, geometry);
        }
        self.get()
    }

    /// Usable shift, if any
    pub fn get(&self) -> Option<f64> {
        match self.measurement {
            Measurement::Measured(shift) if shift.abs() > f64::EPSILON => Some(shift),
            _ => None,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self.measurement, Measurement::Measured(_))
    }
}
