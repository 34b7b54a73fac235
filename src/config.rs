//! Configuration types for rings and the per-tick simulation.

use crate::color::{Color, PALETTE};
use crate::error::SimulationError;
use crate::float::Float;

/// Default particle mass.
pub const MASS: f32 = 10.0;
/// Default restoring-spring elasticity.
pub const ELASTICITY: f32 = 0.05;
/// Default velocity damping.
pub const DAMPING: f32 = 0.4;
/// Default target spacing between spring particles.
pub const RESOLUTION: f32 = 50.0;
/// Default pointer influence radius.
pub const POINTER_RADIUS: f32 = 200.0;
/// Upper bound on the particles a single spring segment may produce.
pub const MAX_SEGMENT_PARTICLES: usize = 1 << 16;
/// Default pointer influence strength.
pub const POINTER_STRENGTH: f32 = 1.0;
/// Neighbor coupling the wave model appears to have been tuned for.
///
/// It is not the default: neighbor pull is applied unscaled unless
/// [`SimulationConfig::with_neighbor_coupling`] says otherwise.
pub const ADJACENT_SPRING_CONSTANT: f32 = 0.12;

/// Global tuning for [`advance`](crate::simulation::advance).
///
/// # Builder Pattern
/// ```
/// use polywave::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_pointer_radius(150.0)
///     .with_pointer_strength(0.5)
///     .with_neighbor_coupling(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Pointer influence radius. Default: 200.
    pub pointer_radius: F,
    /// Pointer influence strength. Default: 1.
    pub pointer_strength: F,
    /// Scale applied to the summed neighbor pull. Default: 1 (unscaled).
    pub neighbor_coupling: F,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            pointer_radius: F::from_f32(POINTER_RADIUS),
            pointer_strength: F::from_f32(POINTER_STRENGTH),
            neighbor_coupling: F::one(),
        }
    }

    pub fn with_pointer_radius(mut self, radius: F) -> Self {
        self.pointer_radius = radius;
        self
    }

    pub fn with_pointer_strength(mut self, strength: F) -> Self {
        self.pointer_strength = strength;
        self
    }

    pub fn with_neighbor_coupling(mut self, coupling: F) -> Self {
        self.neighbor_coupling = coupling;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.pointer_radius.is_finite() && self.pointer_radius > F::zero()) {
            return Err(SimulationError::InvalidPointerRadius);
        }
        if !self.pointer_strength.is_finite() {
            return Err(SimulationError::InvalidPointerStrength);
        }
        if !self.neighbor_coupling.is_finite() {
            return Err(SimulationError::InvalidNeighborCoupling);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-ring spring constants, density and fill.
#[derive(Clone, Debug, PartialEq)]
pub struct RingConfig<F: Float> {
    /// Target spacing between spring particles. Default: 50.
    pub resolution: F,
    /// Pull back towards the anchor, in (0, 1]. Default: 0.05.
    pub elasticity: F,
    /// Fraction of velocity kept each tick, in [0, 1]. Default: 0.4.
    pub damping: F,
    /// Particle mass, > 0. Default: 10.
    pub mass: F,
    pub color: Color,
}

impl<F: Float> RingConfig<F> {
    pub fn new() -> Self {
        RingConfig {
            resolution: F::from_f32(RESOLUTION),
            elasticity: F::from_f32(ELASTICITY),
            damping: F::from_f32(DAMPING),
            mass: F::from_f32(MASS),
            color: PALETTE[0],
        }
    }

    pub fn with_resolution(mut self, resolution: F) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_elasticity(mut self, elasticity: F) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Reject constants that would make the ring diverge or never settle.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let (zero, one) = (F::zero(), F::one());
        if !(self.mass.is_finite() && self.mass > zero) {
            return Err(SimulationError::InvalidMass);
        }
        if !(self.elasticity > zero && self.elasticity <= one) {
            return Err(SimulationError::InvalidElasticity);
        }
        if !(self.damping >= zero && self.damping <= one) {
            return Err(SimulationError::InvalidDamping);
        }
        if !(self.resolution.is_finite() && self.resolution > zero) {
            return Err(SimulationError::InvalidResolution);
        }
        Ok(())
    }
}

impl<F: Float> Default for RingConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
