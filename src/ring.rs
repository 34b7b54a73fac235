//! Closed rings of spring particles built from polygon outlines.

use crate::color::Color;
use crate::config::{RingConfig, SimulationConfig, MAX_SEGMENT_PARTICLES};
use crate::error::SimulationError;
use crate::float::Float;
use crate::particle::SpringParticle;
use crate::pointer::PointerState;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One entry of a ring outline.
///
/// A `spring` vertex subdivides the segment that starts at it into free
/// particles; any other vertex contributes a single fixed particle at the
/// end of its segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutlineVertex<F: Float> {
    pub point: Vec2<F>,
    pub spring: bool,
}

impl<F: Float> OutlineVertex<F> {
    pub fn spring(x: F, y: F) -> Self {
        OutlineVertex { point: Vec2::new(x, y), spring: true }
    }

    pub fn fixed(x: F, y: F) -> Self {
        OutlineVertex { point: Vec2::new(x, y), spring: false }
    }
}

/// A deformable closed polygon: an arena of spring particles in ring order.
///
/// The outline is taken as a closed path, so callers repeat the first vertex
/// as the last entry. Each free particle is wired to its ring predecessor and
/// successor exactly once, at construction.
#[derive(Clone, Debug)]
pub struct SpringRing<F: Float> {
    particles: AllocVec<SpringParticle<F>>,
    config: RingConfig<F>,
}

impl<F: Float> SpringRing<F> {
    pub fn new(outline: &[OutlineVertex<F>], config: RingConfig<F>) -> Result<Self, SimulationError> {
        config.validate()?;
        if outline.len() < 2 {
            return Err(SimulationError::TooFewVertices { count: outline.len() });
        }
        if let Some(index) = outline.iter().position(|v| !v.point.is_finite()) {
            return Err(SimulationError::NonFiniteVertex { index });
        }

        let particles = Self::subdivide(outline, &config)?;
        let mut ring = SpringRing { particles, config };
        ring.wire_attractors();

        log::debug!(
            "built spring ring: {} particles ({} free) from {} outline vertices",
            ring.len(),
            ring.free_count(),
            outline.len(),
        );
        Ok(ring)
    }

    fn subdivide(
        outline: &[OutlineVertex<F>],
        config: &RingConfig<F>,
    ) -> Result<AllocVec<SpringParticle<F>>, SimulationError> {
        let mut particles = AllocVec::new();

        for (i, pair) in outline.windows(2).enumerate() {
            let (start, end) = (pair[0], pair[1]);
            if !start.spring {
                particles.push(SpringParticle::fixed(end.point, config));
                continue;
            }

            // distance overflows to infinity for far-apart finite vertices
            let ratio = (start.point.distance(end.point) / config.resolution).round();
            if !(ratio.is_finite() && ratio <= F::from_f64(MAX_SEGMENT_PARTICLES as f64)) {
                return Err(SimulationError::TooManyParticles { segment: i, limit: MAX_SEGMENT_PARTICLES });
            }
            let count = ratio.to_usize();
            if count == 0 {
                log::warn!(
                    "spring segment {} is shorter than half the resolution, keeping only its end point",
                    i,
                );
                particles.push(SpringParticle::fixed(end.point, config));
                continue;
            }

            let step = end.point.delta(start.point).scale(F::one() / F::from_f64(count as f64));
            for k in 1..=count {
                let pos = start.point + step.scale(F::from_f64(k as f64));
                if k == count {
                    particles.push(SpringParticle::fixed(pos, config));
                } else {
                    particles.push(SpringParticle::new(pos, config));
                }
            }
        }

        Ok(particles)
    }

    fn wire_attractors(&mut self) {
        let n = self.particles.len();
        for i in 0..n {
            if self.particles[i].is_fixed() {
                continue;
            }
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            self.particles[i].set_attractors(prev, next);
        }
    }

    /// Phase one of a tick: accumulate pointer, restoring and neighbor forces
    /// on every free particle. No position changes here.
    pub fn compute_forces(&mut self, pointer: &PointerState<F>, config: &SimulationConfig<F>) {
        for i in 0..self.particles.len() {
            if self.particles[i].is_fixed() {
                continue;
            }
            let pull = self.particles[i].neighbor_force(&self.particles);
            let p = &mut self.particles[i];
            p.apply_pointer_force(pointer, config.pointer_radius, config.pointer_strength);
            p.apply_restoring_force();
            p.apply_force(pull.scale(config.neighbor_coupling));
        }
    }

    /// Phase two of a tick: move every particle under its accumulated force.
    pub fn integrate(&mut self) {
        for p in self.particles.iter_mut() {
            p.integrate();
        }
    }

    /// Both phases, in order.
    pub fn step(&mut self, pointer: &PointerState<F>, config: &SimulationConfig<F>) {
        self.compute_forces(pointer, config);
        self.integrate();
    }

    /// Snapshot of the boundary in ring order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[SpringParticle<F>] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> &SpringParticle<F> {
        &self.particles[index]
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn free_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_fixed()).count()
    }

    pub fn fixed_count(&self) -> usize {
        self.len() - self.free_count()
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    pub fn config(&self) -> &RingConfig<F> {
        &self.config
    }

    pub fn kinetic_energy(&self) -> F {
        self.particles.iter().fold(F::zero(), |acc, p| acc + p.kinetic_energy())
    }

    /// Largest distance of any particle from its anchor.
    pub fn max_displacement(&self) -> F {
        self.particles
            .iter()
            .fold(F::zero(), |acc, p| acc.max(p.displacement().length()))
    }
}
