//! Per-tick orchestration over a pointer and a set of rings.

use crate::config::SimulationConfig;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::pointer::PointerState;
use crate::ring::SpringRing;

/// Advance every ring by one tick.
///
/// A scripted pointer moves first, then each ring computes all of its forces
/// before any of its particles integrate.
pub fn advance<F: Float>(
    pointer: &mut PointerState<F>,
    rings: &mut [SpringRing<F>],
    tick: u64,
    config: &SimulationConfig<F>,
) {
    advance_observed(pointer, rings, tick, config, &mut NoOpStepObserver);
}

/// [`advance`] with phase notifications.
pub fn advance_observed<F: Float, O: StepObserver>(
    pointer: &mut PointerState<F>,
    rings: &mut [SpringRing<F>],
    tick: u64,
    config: &SimulationConfig<F>,
    observer: &mut O,
) {
    if pointer.is_scripted() {
        pointer.apply_motion_override(tick);
        observer.on_pointer_moved(tick);
    }

    for (i, ring) in rings.iter_mut().enumerate() {
        ring.compute_forces(pointer, config);
        observer.on_forces_computed(i);
        ring.integrate();
        observer.on_integrate(i);
    }

    observer.on_step_complete(tick);
}
