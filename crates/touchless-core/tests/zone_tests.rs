// Release classification and the default zone layout.

use glam::Vec3;
use touchless_core::*;

#[test]
fn left_object_past_threshold_is_correct() {
    assert_eq!(classify(-1.51, ZoneSide::Left, 1.5), Classification::Correct);
    assert_eq!(classify(-4.0, ZoneSide::Left, 1.5), Classification::Correct);
}

#[test]
fn neutral_band_is_undecided() {
    assert_eq!(classify(-1.49, ZoneSide::Left, 1.5), Classification::Undecided);
    assert_eq!(classify(0.0, ZoneSide::Right, 1.5), Classification::Undecided);
    assert_eq!(classify(1.5, ZoneSide::Right, 1.5), Classification::Undecided);
    assert_eq!(classify(-1.5, ZoneSide::Left, 1.5), Classification::Undecided);
}

#[test]
fn wrong_side_is_incorrect() {
    assert_eq!(classify(-1.51, ZoneSide::Right, 1.5), Classification::Incorrect);
    assert_eq!(classify(2.0, ZoneSide::Left, 1.5), Classification::Incorrect);
}

#[test]
fn right_object_past_threshold_is_correct() {
    assert_eq!(classify(1.51, ZoneSide::Right, 1.5), Classification::Correct);
}

#[test]
fn side_from_sign() {
    assert_eq!(ZoneSide::from_sign(-1.0), Some(ZoneSide::Left));
    assert_eq!(ZoneSide::from_sign(1.0), Some(ZoneSide::Right));
    assert_eq!(ZoneSide::from_sign(0.0), None);
    assert_eq!(ZoneSide::Left.sign(), -1.0);
}

#[test]
fn default_registry_has_a_zone_per_side() {
    let reg = ZoneRegistry::with_defaults(ZONE_CLASSIFY_THRESHOLD);
    assert_eq!(reg.zones().len(), 2);
    assert_eq!(reg.threshold(), ZONE_CLASSIFY_THRESHOLD);

    let a = reg.zones().iter().find(|z| z.side == ZoneSide::Left).unwrap();
    assert_eq!(a.label, "ZONE A");
    assert_eq!(a.position, zone_a_position());
    let b = reg.zones().iter().find(|z| z.side == ZoneSide::Right).unwrap();
    assert_eq!(b.label, "ZONE B");
    assert!(b.position.x > 0.0);
}

#[test]
fn zone_at_uses_shared_threshold() {
    let reg = ZoneRegistry::with_defaults(1.5);
    assert_eq!(reg.zone_at(Vec3::new(-2.0, 5.0, 1.0)).map(|z| z.label), Some("ZONE A"));
    assert_eq!(reg.zone_at(Vec3::new(2.0, 0.0, 0.0)).map(|z| z.label), Some("ZONE B"));
    assert!(reg.zone_at(Vec3::new(0.3, 0.0, 0.0)).is_none());

    let wide = ZoneRegistry::with_defaults(3.0);
    assert!(wide.zone_at(Vec3::new(-2.0, 0.0, 0.0)).is_none());
    assert!(wide.zones()[0].accepts(Vec3::new(-3.5, 0.0, 0.0), wide.threshold()));
    assert_eq!(
        reg.classify(Vec3::new(-3.0, 0.0, 0.0), ZoneSide::Right),
        Classification::Incorrect
    );
}
