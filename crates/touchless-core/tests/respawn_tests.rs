// Respawn timer and two-phase scheduler, driven by an explicit clock.

use glam::Vec3;
use std::time::Duration;
use touchless_core::*;

fn cube() -> ManipulableObject {
    ManipulableObject::new(ObjectSpec {
        id: ObjectId(1),
        rest_position: Vec3::new(-1.0, 0.0, 0.0),
        target: ZoneSide::Left,
        color: DEFAULT_OBJECT_COLORS[0],
    })
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn timer_is_due_at_deadline() {
    let t = RespawnTimer::arm(ms(500), ms(2000), Vec3::X);
    assert_eq!(t.deadline(), ms(2500));
    assert_eq!(t.rest_position(), Vec3::X);
    assert!(!t.is_due(ms(2499)));
    assert!(t.is_due(ms(2500)));
    assert!(t.is_due(ms(9000)));
    assert_eq!(t.remaining(ms(1500)), ms(1000));
    assert_eq!(t.remaining(ms(9000)), Duration::ZERO);
}

#[test]
fn begin_makes_object_inert_immediately() {
    let sched = RespawnScheduler::new(ms(RESPAWN_DELAY_MS), SCALE_LERP_FACTOR);
    let mut obj = cube();
    assert!(!obj.is_inert(INTERACTIVE_SCALE_FLOOR));

    sched.begin(&mut obj, ms(1000));
    assert!(obj.respawn_pending());
    assert!(obj.is_inert(INTERACTIVE_SCALE_FLOOR));
    assert_eq!(obj.respawn_remaining(ms(1500)), Some(ms(1500)));
}

#[test]
fn shrinks_below_floor_within_bounded_ticks() {
    // 0.9^22 is the first power below 0.1.
    let sched = RespawnScheduler::new(ms(2000), 0.1);
    let mut obj = cube();
    sched.begin(&mut obj, Duration::ZERO);
    for _ in 0..21 {
        sched.animate(&mut obj);
    }
    assert!(obj.scale() > 0.1);
    sched.animate(&mut obj);
    assert!(obj.scale() <= 0.1, "scale {}", obj.scale());
}

#[test]
fn phase_b_waits_for_the_clock_not_the_frame_count() {
    let sched = RespawnScheduler::new(ms(2000), 0.1);
    let mut obj = cube();
    sched.begin(&mut obj, ms(100));

    for _ in 0..500 {
        sched.animate(&mut obj);
    }
    assert!(!sched.advance(&mut obj, ms(2099)));
    assert!(obj.respawn_pending());
    assert!(obj.scale() < 1e-3);

    assert!(sched.advance(&mut obj, ms(2100)));
    assert!(!obj.respawn_pending());
    assert_eq!(obj.position(), obj.rest_position());
    assert_eq!(obj.rotation(), Vec3::ZERO);
    assert_eq!(obj.status(), ObjectStatus::Idle);
    assert!(!sched.advance(&mut obj, ms(5000)));
}

#[test]
fn late_tick_still_restores() {
    let sched = RespawnScheduler::new(ms(2000), 0.1);
    let mut obj = cube();
    sched.begin(&mut obj, Duration::ZERO);
    assert!(sched.advance(&mut obj, ms(60_000)));
    assert_eq!(obj.position(), obj.rest_position());
}

#[test]
fn grows_back_after_restore() {
    let sched = RespawnScheduler::new(ms(2000), 0.1);
    let mut obj = cube();
    sched.begin(&mut obj, Duration::ZERO);
    for _ in 0..40 {
        sched.animate(&mut obj);
    }
    sched.advance(&mut obj, ms(2000));
    for _ in 0..60 {
        sched.animate(&mut obj);
    }
    assert!(obj.scale() > 0.95);
    assert!(obj.scale() <= 1.0);
    assert!(!obj.is_inert(INTERACTIVE_SCALE_FLOOR));
}

#[test]
fn cancel_disarms_without_restoring() {
    let sched = RespawnScheduler::new(ms(2000), 0.1);
    let mut obj = cube();
    sched.begin(&mut obj, Duration::ZERO);
    assert!(sched.cancel(&mut obj));
    assert!(!obj.respawn_pending());
    assert!(!sched.cancel(&mut obj));
    assert!(!sched.advance(&mut obj, ms(5000)));
}
