use glam::Vec3;

// Shared gameplay/tuning constants. `EngineConfig::default()` is built from these.

// Hand input
pub const HAND_LANDMARK_COUNT: usize = 21;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const GRIP_DISTANCE_THRESHOLD: f32 = 0.08; // normalized 2D thumb/index distance

// Normalized landmark space -> world space
pub const LANDMARK_CENTER: f32 = 0.5;
pub const LANDMARK_XY_SCALE: f32 = -10.0;
pub const LANDMARK_Z_SCALE: f32 = -5.0;

// Smoothing
pub const CONTROL_SMOOTHING_ALPHA: f32 = 0.2;
pub const SKELETON_SMOOTHING_ALPHA: f32 = 0.25;
pub const SKELETON_SMOOTHING_ALPHA_LOW: f32 = 0.5; // faster follow when quality is LOW

// Interaction
pub const GRAB_PROXIMITY_THRESHOLD: f32 = 1.8; // world units, object <-> control point
pub const ZONE_CLASSIFY_THRESHOLD: f32 = 1.5; // |x| beyond which a release is judged
pub const TRACKING_LOSS_GRACE_TICKS: u32 = 3; // empty frames before a held object is dropped

// Idle motion
pub const IDLE_FOLLOW_FACTOR: f32 = 0.2;
pub const IDLE_BOB_AMPLITUDE: f32 = 0.1;
pub const IDLE_BOB_FREQUENCY: f32 = 2.0; // radians per second
pub const IDLE_HOVER_HEIGHT: f32 = 0.8;
pub const IDLE_SPIN_RATE: [f32; 2] = [0.5, 0.2]; // radians per second around x, y

// Respawn
pub const SCALE_LERP_FACTOR: f32 = 0.1;
pub const INTERACTIVE_SCALE_FLOOR: f32 = 0.1;
pub const RESPAWN_DELAY_MS: u64 = 2000;

// Scoring
pub const AWARD_POINTS: u64 = 100;
pub const PENALTY_POINTS: u64 = 50;

// Success particle burst
pub const BURST_PARTICLE_COUNT: usize = 20;
pub const BURST_SPREAD: f32 = 0.4;
pub const BURST_LIFT: f32 = 0.2;
pub const BURST_GRAVITY: f32 = 0.01;
pub const BURST_SCALE_DECAY: f32 = 0.92;
pub const BURST_MIN_SCALE: f32 = 0.01;
pub const BURST_COLOR: [f32; 3] = [0.29, 0.871, 0.502]; // #4ade80

// Default zones
pub const ZONE_OFFSET_X: f32 = 4.5;
pub const ZONE_FLOOR_Y: f32 = -2.0;
pub const ZONE_A_COLOR: [f32; 3] = [0.984, 0.749, 0.141]; // #fbbf24
pub const ZONE_B_COLOR: [f32; 3] = [0.133, 0.827, 0.933]; // #22d3ee

// Default palette and rest positions for the two sortable objects
pub const DEFAULT_OBJECT_COLORS: [[f32; 3]; 2] = [ZONE_A_COLOR, ZONE_B_COLOR];
pub const DEFAULT_OBJECT_POSITIONS: [[f32; 3]; 2] = [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];

#[inline]
pub fn zone_a_position() -> Vec3 {
    Vec3::new(-ZONE_OFFSET_X, ZONE_FLOOR_Y, 0.0)
}

#[inline]
pub fn zone_b_position() -> Vec3 {
    Vec3::new(ZONE_OFFSET_X, ZONE_FLOOR_Y, 0.0)
}
