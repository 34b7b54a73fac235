//! Pointer tracking and scripted pointer motion.

use crate::error::SimulationError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::boxed::Box;

/// Produces a pointer position for a given tick when no real input is present.
///
/// Implemented for any `FnMut(u64) -> Vec2<F>`. The pointer does the
/// `last_position` bookkeeping itself, so a script only says where to go.
pub trait MotionScript<F: Float> {
    fn position_at(&mut self, tick: u64) -> Vec2<F>;
}

impl<F: Float, T: FnMut(u64) -> Vec2<F>> MotionScript<F> for T {
    fn position_at(&mut self, tick: u64) -> Vec2<F> {
        self(tick)
    }
}

/// Vertical sweep around a fixed center: `y = center.y + cos(-tick / period) * amplitude`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OscillatingSweep<F: Float> {
    pub center: Vec2<F>,
    pub amplitude: F,
    period: F,
}

impl<F: Float> OscillatingSweep<F> {
    pub fn new(center: Vec2<F>, amplitude: F) -> Self {
        OscillatingSweep { center, amplitude, period: F::from_f32(20.0) }
    }

    /// Ticks per radian of phase. Default: 20.
    pub fn with_period(mut self, period: F) -> Result<Self, SimulationError> {
        if !(period.is_finite() && period > F::zero()) {
            return Err(SimulationError::InvalidSweepPeriod);
        }
        self.period = period;
        Ok(self)
    }

    pub fn period(&self) -> F {
        self.period
    }
}

impl<F: Float> MotionScript<F> for OscillatingSweep<F> {
    fn position_at(&mut self, tick: u64) -> Vec2<F> {
        let phase = -F::from_f64(tick as f64) / self.period;
        Vec2::new(self.center.x, self.center.y + phase.cos() * self.amplitude)
    }
}

/// What moves the pointer.
pub enum MotionSource<F: Float> {
    /// Only real input events move the pointer.
    RealInput,
    /// A script moves the pointer once per tick until real input arrives.
    Scripted(Box<dyn MotionScript<F>>),
}

impl<F: Float> core::fmt::Debug for MotionSource<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MotionSource::RealInput => f.write_str("RealInput"),
            MotionSource::Scripted(_) => f.write_str("Scripted(..)"),
        }
    }
}

/// Current and previous pointer position.
///
/// `velocity()` is always exactly one step of displacement: every move,
/// real or scripted, first copies `position` into `last_position`.
#[derive(Debug)]
pub struct PointerState<F: Float> {
    position: Vec2<F>,
    last_position: Vec2<F>,
    source: MotionSource<F>,
}

impl<F: Float> PointerState<F> {
    pub fn new() -> Self {
        Self::at(Vec2::zero())
    }

    /// A resting pointer at `position`.
    pub fn at(position: Vec2<F>) -> Self {
        PointerState {
            position,
            last_position: position,
            source: MotionSource::RealInput,
        }
    }

    pub fn position(&self) -> Vec2<F> { self.position }
    pub fn last_position(&self) -> Vec2<F> { self.last_position }
    pub fn source(&self) -> &MotionSource<F> { &self.source }

    /// Displacement over the most recent move. Zero before any motion.
    pub fn velocity(&self) -> Vec2<F> {
        self.position.delta(self.last_position)
    }

    pub fn is_scripted(&self) -> bool {
        matches!(self.source, MotionSource::Scripted(_))
    }

    /// Move to a position reported by a real input device.
    ///
    /// Any installed script is dropped; real input takes over for good.
    pub fn record_real_motion(&mut self, x: F, y: F) {
        if self.is_scripted() {
            log::trace!("real pointer input at ({}, {}), dropping motion script", x, y);
            self.source = MotionSource::RealInput;
        }
        self.move_to(Vec2::new(x, y));
    }

    pub fn set_motion_override<S: MotionScript<F> + 'static>(&mut self, script: S) {
        log::trace!("installing pointer motion script");
        self.source = MotionSource::Scripted(Box::new(script));
    }

    pub fn clear_motion_override(&mut self) {
        self.source = MotionSource::RealInput;
    }

    /// Let the installed script, if any, move the pointer for `tick`.
    pub fn apply_motion_override(&mut self, tick: u64) {
        if let MotionSource::Scripted(script) = &mut self.source {
            let next = script.position_at(tick);
            self.move_to(next);
        }
    }

    fn move_to(&mut self, next: Vec2<F>) {
        self.last_position = self.position;
        self.position = next;
    }
}

impl<F: Float> Default for PointerState<F> {
    fn default() -> Self {
        Self::new()
    }
}
