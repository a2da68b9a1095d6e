//! Relocates the viewport from a clone band to the equivalent primary slot.

use crate::geometry::{Geometry, ScrollBehavior, ScrollCommand, ScrollOrigin};
use crate::loop_shift::LoopShift;
use crate::registry::{Band, ItemRegistry};

/// Outcome of planning a boundary correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    /// No slot, or the slot is already in the primary band
    NotNeeded,
    /// Clone slot, but no usable loop shift
    Unavailable,
    /// Instant corrective write landing on `target_slot`
    Jump {
        command: ScrollCommand,
        target_slot: usize,
    },
}

/// Plan the jump for `slot`, measuring the loop shift lazily if needed.
///
/// Trailing clones map back one period, leading clones forward one period.
/// Nothing is written here.
pub fn plan<G: Geometry + ?Sized>(
    slot: Option<usize>,
    registry: &ItemRegistry,
    loop_shift: &mut LoopShift,
    geometry: &G,
) -> Correction {
    let Some(item) = slot.and_then(|slot| registry.item(slot)) else {
        return Correction::NotNeeded;
    };
    let delta = match item.band {
        Band::Primary => return Correction::NotNeeded,
        Band::Trailing => -1.0,
        Band::Leading => 1.0,
    };
    let Some(shift) = loop_shift.ensure(registry, geometry) else {
        return Correction::Unavailable;
    };
    let Some(target_slot) = registry.original(item.logical_index) else {
        return Correction::NotNeeded;
    };
    Correction::Jump {
        command: ScrollCommand {
            position: geometry.scroll_offset() + delta * shift,
            behavior: ScrollBehavior::Instant,
            origin: ScrollOrigin::Corrective,
        },
        target_slot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusEngine;
    use crate::registry::Container;
    use crate::testing::SimViewport;

    fn setup() -> (ItemRegistry, SimViewport) {
        let mut container = Container::new(0..5);
        let registry = ItemRegistry::activate(&mut container, 3).unwrap();
        (registry, SimViewport::uniform(15, 200.0, 20.0, 640.0))
    }

    #[test]
    fn test_primary_and_missing_slots_need_nothing() {
        let (registry, viewport) = setup();
        let mut shift = LoopShift::new();
        assert_eq!(plan(None, &registry, &mut shift, &viewport), Correction::NotNeeded);
        assert_eq!(plan(Some(7), &registry, &mut shift, &viewport), Correction::NotNeeded);
        assert_eq!(plan(Some(99), &registry, &mut shift, &viewport), Correction::NotNeeded);
        assert!(!shift.is_measured());
    }

    #[test]
    fn test_trailing_clone_maps_back_one_period() {
        let (registry, mut viewport) = setup();
        let mut shift = LoopShift::new();
        let clone = registry.slot(Band::Trailing, 1).unwrap();
        viewport.set_scroll(viewport.centering_offset(clone) + 13.0);

        match plan(Some(clone), &registry, &mut shift, &viewport) {
            Correction::Jump {
                command,
                target_slot,
            } => {
                assert_eq!(target_slot, registry.original(1).unwrap());
                assert_eq!(command.behavior, ScrollBehavior::Instant);
                assert_eq!(command.origin, ScrollOrigin::Corrective);
                assert!((command.position - (viewport.scroll_offset() - 1100.0)).abs() < 1e-9);
            }
            other => panic!("expected jump, got {other:?}"),
        }
    }

    #[test]
    fn test_correction_preserves_centered_logical_item() {
        let (registry, mut viewport) = setup();
        let engine = FocusEngine::default();
        let mut shift = LoopShift::new();
        for band in [Band::Leading, Band::Trailing] {
            for logical in 0..5 {
                let clone = registry.slot(band, logical).unwrap();
                viewport.set_scroll(viewport.centering_offset(clone) - 37.0);
                let before = engine.closest(&registry, &viewport).unwrap();
                let Correction::Jump { command, .. } =
                    plan(Some(before.slot), &registry, &mut shift, &viewport)
                else {
                    panic!("expected jump");
                };
                viewport.scroll_to(command);
                let after = engine.closest(&registry, &viewport).unwrap();
                assert_eq!(after.item.logical_index, before.item.logical_index);
                assert_eq!(after.item.band, Band::Primary);
                assert!((after.distance - before.distance).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_unmeasurable_shift_skips_correction() {
        let mut container = Container::new(0..3);
        let registry = ItemRegistry::activate(&mut container, 3).unwrap();
        let viewport = SimViewport::uniform(9, 0.0, 0.0, 300.0);
        let mut shift = LoopShift::new();
        assert_eq!(
            plan(Some(0), &registry, &mut shift, &viewport),
            Correction::Unavailable
        );
    }
}
