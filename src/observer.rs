//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this trait to monitor the two phases of each ring update
/// (e.g., for debugging, visualization, or performance profiling). All
/// methods have default no-op implementations.
pub trait StepObserver {
    /// Called after the pointer script, if any, has moved the pointer.
    fn on_pointer_moved(&mut self, _tick: u64) {}

    /// Called after every force of ring `ring` has been accumulated.
    fn on_forces_computed(&mut self, _ring: usize) {}

    /// Called after every particle of ring `ring` has been integrated.
    fn on_integrate(&mut self, _ring: usize) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
