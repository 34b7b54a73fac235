//! The stacked-waves scene: rings spanning the lower half of a viewport,
//! a swept pointer, and a frame counter.

use crate::color::palette_color;
use crate::config::{RingConfig, SimulationConfig, RESOLUTION};
use crate::error::SimulationError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::pointer::{OscillatingSweep, PointerState};
use crate::ring::{OutlineVertex, SpringRing};
use crate::simulation;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use core::ops::Range;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Configuration for a [`WaveScene`].
///
/// # Builder Pattern
/// ```
/// use polywave::scene::{SceneConfig, WaveScene};
///
/// let config: SceneConfig<f32> = SceneConfig::new(800.0, 600.0)
///     .with_waves(3)
///     .with_seed(7);
/// let scene = WaveScene::new(config).unwrap();
/// assert_eq!(scene.rings().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig<F: Float> {
    pub width: F,
    pub height: F,
    /// Number of stacked rings. Default: 4.
    pub waves: usize,
    /// Seed for the per-ring constants. Default: 0.
    pub seed: u64,
    /// Default: 50.
    pub resolution: F,
    /// Per-ring elasticity is drawn from this range. Default: 0.1..0.2.
    pub elasticity: Range<f32>,
    /// Per-ring damping is drawn from this range. Default: 0.88..0.9.
    pub damping: Range<f32>,
    pub simulation: SimulationConfig<F>,
}

impl<F: Float> SceneConfig<F> {
    pub fn new(width: F, height: F) -> Self {
        SceneConfig {
            width,
            height,
            waves: 4,
            seed: 0,
            resolution: F::from_f32(RESOLUTION),
            elasticity: 0.1..0.2,
            damping: 0.88..0.9,
            simulation: SimulationConfig::new(),
        }
    }

    pub fn with_waves(mut self, waves: usize) -> Self {
        self.waves = waves;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_resolution(mut self, resolution: F) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_elasticity(mut self, range: Range<f32>) -> Self {
        self.elasticity = range;
        self
    }

    pub fn with_damping(mut self, range: Range<f32>) -> Self {
        self.damping = range;
        self
    }

    pub fn with_simulation(mut self, simulation: SimulationConfig<F>) -> Self {
        self.simulation = simulation;
        self
    }
}

/// Outline of one wave: a spring edge across the middle of the viewport,
/// closed through the two bottom corners.
pub fn wave_outline<F: Float>(width: F, height: F) -> [OutlineVertex<F>; 5] {
    let mid = height * F::half();
    [
        OutlineVertex::spring(F::zero(), mid),
        OutlineVertex::fixed(width, mid),
        OutlineVertex::fixed(width, height),
        OutlineVertex::fixed(F::zero(), height),
        OutlineVertex::fixed(F::zero(), mid),
    ]
}

/// Rings, pointer and tick counter for the waves animation.
#[derive(Debug)]
pub struct WaveScene<F: Float> {
    rings: AllocVec<SpringRing<F>>,
    pointer: PointerState<F>,
    simulation: SimulationConfig<F>,
    tick: u64,
}

impl<F: Float> WaveScene<F> {
    pub fn new(config: SceneConfig<F>) -> Result<Self, SimulationError> {
        let (w, h) = (config.width, config.height);
        if !(w.is_finite() && h.is_finite() && w > F::zero() && h > F::zero()) {
            return Err(SimulationError::InvalidViewport);
        }
        if config.waves == 0 {
            return Err(SimulationError::InvalidWaveCount);
        }
        config.simulation.validate()?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let outline = wave_outline(w, h);
        let mut rings = AllocVec::with_capacity(config.waves);
        for i in 0..config.waves {
            let elasticity = sample(&mut rng, &config.elasticity);
            let damping = sample(&mut rng, &config.damping);
            let ring_config = RingConfig::new()
                .with_resolution(config.resolution)
                .with_elasticity(F::from_f32(elasticity))
                .with_damping(F::from_f32(damping))
                .with_color(palette_color(i));
            rings.push(SpringRing::new(&outline, ring_config)?);
        }

        // rests at the viewport centre until the sweep's first move
        let center = Vec2::new(w * F::half(), h * F::half());
        let mut pointer = PointerState::at(center);
        pointer.set_motion_override(OscillatingSweep::new(center, h * F::half() * F::half()));

        log::debug!("wave scene {}x{}: {} rings, seed {}", w, h, config.waves, config.seed);
        Ok(WaveScene { rings, pointer, simulation: config.simulation, tick: 0 })
    }

    /// Advance one frame.
    pub fn frame(&mut self) {
        simulation::advance(&mut self.pointer, &mut self.rings, self.tick, &self.simulation);
        self.tick += 1;
    }

    pub fn frame_observed<O: StepObserver>(&mut self, observer: &mut O) {
        simulation::advance_observed(
            &mut self.pointer,
            &mut self.rings,
            self.tick,
            &self.simulation,
            observer,
        );
        self.tick += 1;
    }

    /// Real pointer input; stops the scripted sweep.
    pub fn pointer_moved(&mut self, x: F, y: F) {
        self.pointer.record_real_motion(x, y);
    }

    pub fn rings(&self) -> &[SpringRing<F>] { &self.rings }
    pub fn pointer(&self) -> &PointerState<F> { &self.pointer }
    pub fn tick(&self) -> u64 { self.tick }
}

// An empty range yields its start rather than panicking.
fn sample(rng: &mut SmallRng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}
