// Relationships between tuning constants.

use touchless_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(CONTROL_SMOOTHING_ALPHA > 0.0 && CONTROL_SMOOTHING_ALPHA <= 1.0);
    assert!(SKELETON_SMOOTHING_ALPHA > 0.0 && SKELETON_SMOOTHING_ALPHA <= 1.0);
    assert!(SKELETON_SMOOTHING_ALPHA_LOW > SKELETON_SMOOTHING_ALPHA);
    assert!(IDLE_FOLLOW_FACTOR > 0.0 && IDLE_FOLLOW_FACTOR <= 1.0);
    assert!(SCALE_LERP_FACTOR > 0.0 && SCALE_LERP_FACTOR < 1.0);
    assert!(BURST_SCALE_DECAY > 0.0 && BURST_SCALE_DECAY < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pinch_landmarks_exist() {
    assert!(THUMB_TIP < HAND_LANDMARK_COUNT);
    assert!(INDEX_TIP < HAND_LANDMARK_COUNT);
    assert_ne!(THUMB_TIP, INDEX_TIP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rest_positions_sit_inside_the_neutral_band() {
    // A freshly spawned object must not already count as sorted.
    for p in DEFAULT_OBJECT_POSITIONS {
        assert!(p[0].abs() < ZONE_CLASSIFY_THRESHOLD);
    }
    assert!(ZONE_OFFSET_X > ZONE_CLASSIFY_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scoring_and_respawn_are_positive() {
    assert!(AWARD_POINTS > PENALTY_POINTS);
    assert!(RESPAWN_DELAY_MS > 0);
    assert!(INTERACTIVE_SCALE_FLOOR > 0.0 && INTERACTIVE_SCALE_FLOOR < 1.0);
}
