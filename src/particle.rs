//! Anchored spring particles with damped semi-implicit Euler integration.

use crate::config::RingConfig;
use crate::float::Float;
use crate::pointer::PointerState;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A single spring point: a position pulled back towards its anchor and
/// towards its ring neighbors.
///
/// Neighbors ("attractors") are indices into the owning ring's particle
/// arena, so a particle never holds a reference to another.
#[derive(Clone, Debug)]
pub struct SpringParticle<F: Float> {
    pub pos: Vec2<F>,
    anchor: Vec2<F>,
    velocity: Vec2<F>,
    force: Vec2<F>,
    mass: F,
    elasticity: F,
    damping: F,
    fixed: bool,
    attractors: AllocVec<usize>,
}

impl<F: Float> SpringParticle<F> {
    /// A free particle resting at `pos`.
    ///
    /// Constants are taken from `config` as-is; [`RingConfig::validate`]
    /// is the place to reject them.
    pub fn new(pos: Vec2<F>, config: &RingConfig<F>) -> Self {
        SpringParticle {
            pos,
            anchor: pos,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            mass: config.mass,
            elasticity: config.elasticity,
            damping: config.damping,
            fixed: false,
            attractors: AllocVec::new(),
        }
    }

    /// A particle that never moves.
    pub fn fixed(pos: Vec2<F>, config: &RingConfig<F>) -> Self {
        SpringParticle { fixed: true, ..Self::new(pos, config) }
    }

    pub fn anchor(&self) -> Vec2<F> { self.anchor }
    pub fn velocity(&self) -> Vec2<F> { self.velocity }
    pub fn force(&self) -> Vec2<F> { self.force }
    pub fn mass(&self) -> F { self.mass }
    pub fn elasticity(&self) -> F { self.elasticity }
    pub fn damping(&self) -> F { self.damping }
    pub fn is_fixed(&self) -> bool { self.fixed }
    pub fn attractors(&self) -> &[usize] { &self.attractors }

    /// Offset of the live position from the anchor.
    pub fn displacement(&self) -> Vec2<F> {
        self.pos - self.anchor
    }

    pub(crate) fn set_attractors(&mut self, prev: usize, next: usize) {
        debug_assert!(self.attractors.is_empty(), "attractors are wired once");
        self.attractors.push(prev);
        self.attractors.push(next);
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.fixed {
            self.force += force;
        }
    }

    /// Drag along the pointer's motion, fading linearly to zero at `radius`.
    pub fn apply_pointer_force(&mut self, pointer: &PointerState<F>, radius: F, strength: F) {
        let distance = self.pos.distance(pointer.position());
        if distance < radius {
            let power = (F::one() - distance / radius) * strength;
            self.apply_force(pointer.velocity().scale(power));
        }
    }

    /// Linear spring towards the anchor.
    pub fn apply_restoring_force(&mut self) {
        let pull = (self.anchor - self.pos).scale(self.elasticity);
        self.apply_force(pull);
    }

    /// Summed, unscaled pull towards every attractor in `arena`.
    ///
    /// Only positions are read, so calling this for every particle before
    /// any of them integrates yields a consistent snapshot.
    pub fn neighbor_force(&self, arena: &[SpringParticle<F>]) -> Vec2<F> {
        self.attractors
            .iter()
            .fold(Vec2::zero(), |acc, &i| acc + (arena[i].pos - self.pos))
    }

    /// Advance one tick under the accumulated force, then clear it.
    ///
    /// Damping decays the previous velocity before the new acceleration is
    /// added. Does nothing when no force has accumulated.
    pub fn integrate(&mut self) {
        if self.force.is_zero() {
            return;
        }
        let accel = self.force.scale(F::one() / self.mass);
        self.velocity = self.velocity.scale(self.damping) + accel;
        self.pos.translate(self.velocity);
        self.force = Vec2::zero();
    }

    pub fn kinetic_energy(&self) -> F {
        F::half() * self.mass * self.velocity.length_sq()
    }
}
