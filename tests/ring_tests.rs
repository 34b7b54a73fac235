use polywave::config::MAX_SEGMENT_PARTICLES;
use polywave::{OutlineVertex, RingConfig, SimulationError, SpringRing, Vec2};

fn strip_outline() -> [OutlineVertex<f32>; 5] {
    [
        OutlineVertex::spring(0.0, 100.0),
        OutlineVertex::fixed(200.0, 100.0),
        OutlineVertex::fixed(200.0, 200.0),
        OutlineVertex::fixed(0.0, 200.0),
        OutlineVertex::fixed(0.0, 100.0),
    ]
}

#[test]
fn spring_segment_subdivides_by_resolution() {
    let ring = SpringRing::new(&strip_outline(), RingConfig::new().with_resolution(50.0)).unwrap();

    // 4 chain particles + 3 corner particles
    assert_eq!(ring.len(), 7);
    let positions = ring.positions();
    assert_eq!(positions[0], Vec2::new(50.0, 100.0));
    assert_eq!(positions[1], Vec2::new(100.0, 100.0));
    assert_eq!(positions[2], Vec2::new(150.0, 100.0));
    assert_eq!(positions[3], Vec2::new(200.0, 100.0));
    assert_eq!(positions[6], Vec2::new(0.0, 100.0));
}

#[test]
fn chain_endpoints_fixed_interior_free() {
    let ring = SpringRing::new(&strip_outline(), RingConfig::new()).unwrap();

    let fixed: Vec<bool> = ring.particles().iter().map(|p| p.is_fixed()).collect();
    assert_eq!(fixed, vec![false, false, false, true, true, true, true]);
    assert_eq!(ring.free_count(), 3);
    assert_eq!(ring.fixed_count(), 4);
}

#[test]
fn free_particles_have_two_attractors() {
    let ring = SpringRing::new(&strip_outline(), RingConfig::new().with_resolution(20.0)).unwrap();
    for (i, p) in ring.particles().iter().enumerate() {
        if p.is_fixed() {
            assert!(p.attractors().is_empty(), "fixed particle {} has attractors", i);
        } else {
            assert_eq!(p.attractors().len(), 2, "particle {}", i);
            assert!(!p.attractors().contains(&i), "particle {} attracts itself", i);
        }
    }
}

#[test]
fn attractors_follow_ring_adjacency() {
    let ring = SpringRing::new(&strip_outline(), RingConfig::new().with_resolution(20.0)).unwrap();
    let n = ring.len();
    for (i, p) in ring.particles().iter().enumerate() {
        if p.is_fixed() {
            continue;
        }
        let (prev, next) = (p.attractors()[0], p.attractors()[1]);
        assert_eq!(prev, (i + n - 1) % n);
        assert_eq!(next, (i + 1) % n);

        // if next is free, its predecessor must be us
        let succ = ring.particle(next);
        if !succ.is_fixed() {
            assert_eq!(succ.attractors()[0], i);
        }
    }
}

#[test]
fn first_particle_wraps_to_last() {
    let ring = SpringRing::new(&strip_outline(), RingConfig::new()).unwrap();
    assert_eq!(ring.particle(0).attractors(), &[ring.len() - 1, 1]);
}

#[test]
fn consecutive_spring_segments_share_fixed_joint() {
    let outline = [
        OutlineVertex::spring(0.0f64, 0.0),
        OutlineVertex::spring(100.0, 0.0),
        OutlineVertex::fixed(100.0, 100.0),
        OutlineVertex::fixed(0.0, 0.0),
    ];
    let ring = SpringRing::new(&outline, RingConfig::new()).unwrap();

    // 2 + 2 from the spring edges, 1 closing corner
    assert_eq!(ring.len(), 5);
    assert!(ring.particle(1).is_fixed());
    assert_eq!(ring.particle(1).pos, Vec2::new(100.0, 0.0));
    assert!(ring.particle(3).is_fixed());
    assert_eq!(ring.free_count(), 2);
}

#[test]
fn ring_carries_its_color_and_constants() {
    let config = RingConfig::new()
        .with_elasticity(0.15)
        .with_damping(0.89)
        .with_color(polywave::PALETTE[2]);
    let ring = SpringRing::new(&strip_outline(), config).unwrap();
    assert_eq!(ring.color(), polywave::PALETTE[2]);
    assert_eq!(ring.particle(0).elasticity(), 0.15);
    assert_eq!(ring.particle(0).damping(), 0.89);
}

#[test]
fn zero_length_outline_degenerates_without_panicking() {
    let outline = [OutlineVertex::spring(5.0f32, 5.0), OutlineVertex::spring(5.0, 5.0)];
    let ring = SpringRing::new(&outline, RingConfig::new()).unwrap();
    assert_eq!(ring.len(), 1);
    assert_eq!(ring.free_count(), 0);
}

#[test]
fn far_apart_spring_vertices_are_rejected() {
    let outline = [
        OutlineVertex::spring(-3e38f32, 0.0),
        OutlineVertex::fixed(3e38, 0.0),
        OutlineVertex::fixed(-3e38, 0.0),
    ];
    let err = SpringRing::new(&outline, RingConfig::new()).unwrap_err();
    assert_eq!(err, SimulationError::TooManyParticles { segment: 0, limit: MAX_SEGMENT_PARTICLES });
}

#[test]
fn tiny_resolution_is_rejected_before_allocating() {
    let err = SpringRing::new(&strip_outline(), RingConfig::new().with_resolution(1e-6)).unwrap_err();
    assert_eq!(err, SimulationError::TooManyParticles { segment: 0, limit: MAX_SEGMENT_PARTICLES });

    // right at the limit is still accepted
    let limit = MAX_SEGMENT_PARTICLES as f64;
    let outline = [
        OutlineVertex::spring(0.0f64, 0.0),
        OutlineVertex::fixed(limit, 0.0),
        OutlineVertex::fixed(0.0, 0.0),
    ];
    let ring = SpringRing::new(&outline, RingConfig::new().with_resolution(1.0)).unwrap();
    assert_eq!(ring.len(), MAX_SEGMENT_PARTICLES + 1);
}
