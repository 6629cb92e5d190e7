use glam::Vec3;
use rand::prelude::*;
use touchless_core::*;

#[test]
fn burst_spawns_fixed_particle_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let burst = ParticleBurst::new(Vec3::new(-2.0, 0.8, 0.0), BURST_COLOR, &mut rng);
    assert_eq!(burst.particles().len(), BURST_PARTICLE_COUNT);
    assert!(burst
        .particles()
        .iter()
        .all(|p| p.offset == Vec3::ZERO && p.scale > BURST_MIN_SCALE));
    assert!(!burst.is_finished());
}

#[test]
fn particles_rise_then_fall() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut burst = ParticleBurst::new(Vec3::ZERO, BURST_COLOR, &mut rng);
    let v0: Vec<f32> = burst.particles().iter().map(|p| p.velocity.y).collect();
    burst.step();
    for (p, v) in burst.particles().iter().zip(v0) {
        assert!((p.velocity.y - (v - BURST_GRAVITY)).abs() < 1e-6);
    }
}

#[test]
fn burst_finishes_in_bounded_ticks() {
    // Largest starting scale is 0.5; 0.5 * 0.92^47 < 0.01.
    let mut rng = StdRng::seed_from_u64(3);
    let mut burst = ParticleBurst::new(Vec3::ZERO, BURST_COLOR, &mut rng);
    let mut ticks = 0;
    while burst.step() {
        ticks += 1;
        assert!(ticks < 60, "burst never finished");
    }
    assert!(burst.is_finished());
}

#[test]
fn same_seed_gives_same_burst() {
    let a = ParticleBurst::new(Vec3::ZERO, BURST_COLOR, &mut StdRng::seed_from_u64(9));
    let b = ParticleBurst::new(Vec3::ZERO, BURST_COLOR, &mut StdRng::seed_from_u64(9));
    let va: Vec<Vec3> = a.particles().iter().map(|p| p.velocity).collect();
    let vb: Vec<Vec3> = b.particles().iter().map(|p| p.velocity).collect();
    assert_eq!(va, vb);
}
