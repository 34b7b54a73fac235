//! Error types for simulation construction.

use core::fmt;

/// Errors raised while building rings, scenes or configurations.
///
/// Stepping a simulation never fails; every check happens up front.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// An outline needs at least two entries to form a segment.
    TooFewVertices { count: usize },
    /// Outline vertex coordinates must be finite.
    NonFiniteVertex { index: usize },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Elasticity must be in (0, 1].
    InvalidElasticity,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Resolution must be positive and finite.
    InvalidResolution,
    /// A spring segment would need more than `limit` particles.
    TooManyParticles { segment: usize, limit: usize },
    /// Pointer radius must be positive and finite.
    InvalidPointerRadius,
    /// Pointer strength must be finite.
    InvalidPointerStrength,
    /// Neighbor coupling must be finite.
    InvalidNeighborCoupling,
    /// Sweep period must be positive and finite.
    InvalidSweepPeriod,
    /// A scene needs at least one wave.
    InvalidWaveCount,
    /// Viewport dimensions must be positive and finite.
    InvalidViewport,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::TooFewVertices { count } => {
                write!(f, "outline needs at least 2 vertices (got {})", count)
            }
            SimulationError::NonFiniteVertex { index } => {
                write!(f, "outline vertex {} has non-finite coordinates", index)
            }
            SimulationError::InvalidMass => write!(f, "mass must be positive and finite"),
            SimulationError::InvalidElasticity => write!(f, "elasticity must be in (0, 1]"),
            SimulationError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            SimulationError::InvalidResolution => {
                write!(f, "resolution must be positive and finite")
            }
            SimulationError::TooManyParticles { segment, limit } => {
                write!(f, "spring segment {} needs more than {} particles", segment, limit)
            }
            SimulationError::InvalidPointerStrength => write!(f, "pointer strength must be finite"),
            SimulationError::InvalidNeighborCoupling => write!(f, "neighbor coupling must be finite"),
            SimulationError::InvalidSweepPeriod => {
                write!(f, "sweep period must be positive and finite")
            }
            SimulationError::InvalidPointerRadius => {
                write!(f, "pointer radius must be positive and finite")
            }
            SimulationError::InvalidWaveCount => write!(f, "scene needs at least one wave"),
            SimulationError::InvalidViewport => {
                write!(f, "viewport must have positive, finite dimensions")
            }
        }
    }
}

impl core::error::Error for SimulationError {}
