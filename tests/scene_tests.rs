use polywave::scene::wave_outline;
use polywave::{SceneConfig, SimulationConfig, SimulationError, Vec2, WaveScene, PALETTE};

#[test]
fn builds_requested_wave_count_with_cycled_colors() {
    let scene = WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_waves(8)).unwrap();
    assert_eq!(scene.rings().len(), 8);
    for (i, ring) in scene.rings().iter().enumerate() {
        assert_eq!(ring.color(), PALETTE[i % PALETTE.len()]);
    }
}

#[test]
fn ring_constants_drawn_from_ranges() {
    let scene = WaveScene::new(SceneConfig::new(800.0f64, 600.0).with_waves(16).with_seed(9)).unwrap();
    for ring in scene.rings() {
        let c = ring.config();
        // ranges are sampled in f32
        assert!(c.elasticity >= 0.1f32 as f64 && c.elasticity < 0.2f32 as f64, "elasticity {}", c.elasticity);
        assert!(c.damping >= 0.88f32 as f64 && c.damping < 0.9f32 as f64, "damping {}", c.damping);
    }
}

#[test]
fn empty_range_uses_its_start() {
    let config = SceneConfig::new(800.0f32, 600.0).with_elasticity(0.3..0.3).with_damping(0.5..0.5);
    let scene = WaveScene::new(config).unwrap();
    assert_eq!(scene.rings()[0].config().elasticity, 0.3);
    assert_eq!(scene.rings()[0].config().damping, 0.5);
}

#[test]
fn outline_spans_lower_half() {
    let outline = wave_outline(800.0f32, 600.0);
    assert!(outline[0].spring);
    assert!(outline[1..].iter().all(|v| !v.spring));
    assert_eq!(outline[0].point, Vec2::new(0.0, 300.0));
    assert_eq!(outline[2].point, Vec2::new(800.0, 600.0));
    assert_eq!(outline[4].point, outline[0].point);
}

#[test]
fn wave_ring_layout() {
    let scene = WaveScene::new(SceneConfig::new(1000.0f32, 600.0)).unwrap();
    let ring = &scene.rings()[0];
    // 20 across the spring edge, then 3 corners
    assert_eq!(ring.len(), 23);
    assert_eq!(ring.free_count(), 19);
}

#[test]
fn sweep_drives_pointer_and_rings() {
    let mut scene = WaveScene::new(SceneConfig::new(800.0f32, 600.0)).unwrap();
    assert!(scene.pointer().is_scripted());
    for _ in 0..60 {
        scene.frame();
    }
    assert_eq!(scene.tick(), 60);
    assert_eq!(scene.pointer().position().x, 400.0);
    assert!(scene.rings().iter().all(|r| r.max_displacement() > 0.0));
}

#[test]
fn pointer_starts_at_rest_in_viewport_centre() {
    let mut scene = WaveScene::new(SceneConfig::new(800.0f32, 600.0)).unwrap();
    assert_eq!(scene.pointer().position(), Vec2::new(400.0, 300.0));
    assert_eq!(scene.pointer().velocity(), Vec2::zero());

    // first scripted move goes straight up to the sweep's peak
    scene.frame();
    assert_eq!(scene.pointer().position(), Vec2::new(400.0, 450.0));
    assert_eq!(scene.pointer().velocity(), Vec2::new(0.0, 150.0));
}

#[test]
fn real_input_takes_over() {
    let mut scene = WaveScene::new(SceneConfig::new(800.0f32, 600.0)).unwrap();
    scene.frame();
    scene.pointer_moved(10.0, 20.0);
    assert!(!scene.pointer().is_scripted());
    scene.frame();
    assert_eq!(scene.pointer().position(), Vec2::new(10.0, 20.0));
}

#[test]
fn invalid_scene_configs_rejected() {
    assert_eq!(
        WaveScene::new(SceneConfig::new(0.0f32, 600.0)).unwrap_err(),
        SimulationError::InvalidViewport,
    );
    assert_eq!(
        WaveScene::new(SceneConfig::new(800.0f32, f32::NAN)).unwrap_err(),
        SimulationError::InvalidViewport,
    );
    assert_eq!(
        WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_waves(0)).unwrap_err(),
        SimulationError::InvalidWaveCount,
    );
    assert_eq!(
        WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_elasticity(0.0..0.0)).unwrap_err(),
        SimulationError::InvalidElasticity,
    );
    let bad_sim = SimulationConfig::new().with_pointer_radius(-1.0);
    assert_eq!(
        WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_simulation(bad_sim)).unwrap_err(),
        SimulationError::InvalidPointerRadius,
    );
    let bad_sim = SimulationConfig::new().with_pointer_strength(f32::NAN);
    assert_eq!(
        WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_simulation(bad_sim)).unwrap_err(),
        SimulationError::InvalidPointerStrength,
    );
    let bad_sim = SimulationConfig::new().with_neighbor_coupling(f32::INFINITY);
    assert_eq!(
        WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_simulation(bad_sim)).unwrap_err(),
        SimulationError::InvalidNeighborCoupling,
    );
}

#[derive(Default)]
struct TickCounter {
    ticks: Vec<u64>,
    integrations: usize,
}

impl polywave::StepObserver for TickCounter {
    fn on_integrate(&mut self, _ring: usize) {
        self.integrations += 1;
    }
    fn on_step_complete(&mut self, tick: u64) {
        self.ticks.push(tick);
    }
}

#[test]
fn observed_frames_report_every_ring() {
    let mut scene = WaveScene::new(SceneConfig::new(800.0f32, 600.0).with_waves(3)).unwrap();
    let mut counter = TickCounter::default();
    for _ in 0..4 {
        scene.frame_observed(&mut counter);
    }
    assert_eq!(counter.ticks, vec![0, 1, 2, 3]);
    assert_eq!(counter.integrations, 12);
}
