//! Hand-pose input and smoothing.
//!
//! The pose estimator hands us 21 normalized landmarks per frame. Two of them
//! (thumb tip and index tip) define the pinch, whose midpoint becomes the
//! authoritative control point after exponential smoothing. The full skeleton
//! is smoothed separately for display and never feeds gameplay decisions.

use crate::constants::*;
use glam::Vec3;
use smallvec::SmallVec;

/// One tracked point: x/y normalized to \[0, 1\], z a relative depth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Project into engine world space (mirrored, centered on 0.5).
    #[inline]
    pub fn to_world(self) -> Vec3 {
        Vec3::new(
            (self.x - LANDMARK_CENTER) * LANDMARK_XY_SCALE,
            (self.y - LANDMARK_CENTER) * LANDMARK_XY_SCALE,
            self.z * LANDMARK_Z_SCALE,
        )
    }
}

pub type LandmarkSet = SmallVec<[Landmark; HAND_LANDMARK_COUNT]>;

/// Pinch detection: thumb and index tips closer than `threshold` in the image plane.
#[inline]
pub fn detect_grip(landmarks: &[Landmark], threshold: f32) -> bool {
    match (landmarks.get(THUMB_TIP), landmarks.get(INDEX_TIP)) {
        (Some(t), Some(i)) => (t.x - i.x).hypot(t.y - i.y) < threshold,
        _ => false,
    }
}

/// Raw (unsmoothed) control target: world-space midpoint of thumb and index tips.
#[inline]
pub fn control_target(landmarks: &[Landmark]) -> Option<Vec3> {
    let thumb = landmarks.get(THUMB_TIP)?;
    let index = landmarks.get(INDEX_TIP)?;
    let mid = Landmark::new(
        (thumb.x + index.x) / 2.0,
        (thumb.y + index.y) / 2.0,
        (thumb.z + index.z) / 2.0,
    );
    Some(mid.to_world())
}

/// Everything the engine consumes from the pose estimator for one frame.
#[derive(Clone, Debug, Default)]
pub struct HandFrame {
    pub landmarks: LandmarkSet,
    pub grip: bool,
}

impl HandFrame {
    /// "No hand detected this frame".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Frame with an externally computed grip signal.
    pub fn new(landmarks: impl IntoIterator<Item = Landmark>, grip: bool) -> Self {
        Self {
            landmarks: landmarks.into_iter().collect(),
            grip,
        }
    }

    /// Frame with the grip derived from the thumb/index distance.
    pub fn from_landmarks(landmarks: impl IntoIterator<Item = Landmark>) -> Self {
        Self::with_grip_threshold(landmarks, GRIP_DISTANCE_THRESHOLD)
    }

    pub fn with_grip_threshold(landmarks: impl IntoIterator<Item = Landmark>, threshold: f32) -> Self {
        let landmarks: LandmarkSet = landmarks.into_iter().collect();
        let grip = detect_grip(&landmarks, threshold);
        Self { landmarks, grip }
    }

    pub fn has_hand(&self) -> bool {
        !self.landmarks.is_empty()
    }

    /// A full 21-point skeleton; anything else is treated as "no hand".
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() == HAND_LANDMARK_COUNT
    }
}

/// Exponential smoother for a single point: `s' = lerp(s, raw, alpha)`.
///
/// The first sample is adopted as-is so there is no warm-up lag.
#[derive(Clone, Debug)]
pub struct PoseSmoother {
    alpha: f32,
    value: Option<Vec3>,
}

impl PoseSmoother {
    pub fn new(alpha: f32) -> Self {
        Self { alpha, value: None }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn update(&mut self, raw: Vec3) -> Vec3 {
        let next = match self.value {
            Some(prev) => prev.lerp(raw, self.alpha),
            None => raw,
        };
        self.value = Some(next);
        next
    }

    pub fn value(&self) -> Option<Vec3> {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// Display-only smoothing of the full 21-point skeleton.
#[derive(Clone, Debug)]
pub struct SkeletonSmoother {
    alpha: f32,
    points: Option<[Vec3; HAND_LANDMARK_COUNT]>,
}

impl SkeletonSmoother {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            points: None,
        }
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    /// Smooth a complete skeleton. Incomplete input clears the retained pose.
    pub fn update(&mut self, landmarks: &[Landmark]) -> Option<&[Vec3; HAND_LANDMARK_COUNT]> {
        if landmarks.len() != HAND_LANDMARK_COUNT {
            self.points = None;
            return None;
        }
        let alpha = self.alpha;
        let next = match self.points {
            Some(prev) => {
                std::array::from_fn(|i| prev[i].lerp(landmarks[i].to_world(), alpha))
            }
            None => std::array::from_fn(|i| landmarks[i].to_world()),
        };
        self.points = Some(next);
        self.points.as_ref()
    }

    pub fn points(&self) -> Option<&[Vec3; HAND_LANDMARK_COUNT]> {
        self.points.as_ref()
    }

    pub fn reset(&mut self) {
        self.points = None;
    }
}

/// Health of the upstream pose estimator, as shown on the HUD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingStatus {
    #[default]
    Initializing,
    Searching,
    Tracking,
    /// The estimator failed to start; the engine keeps running with no hand.
    Error,
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Initializing => "INITIALIZING...",
            TrackingStatus::Searching => "SEARCHING...",
            TrackingStatus::Tracking => "TRACKING ACTIVE",
            TrackingStatus::Error => "ERROR LOADING",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    None,
    OpenHand,
    Gripping,
}

impl Gesture {
    pub fn from_frame(frame: &HandFrame) -> Self {
        match (frame.is_complete(), frame.grip) {
            (false, _) => Gesture::None,
            (true, true) => Gesture::Gripping,
            (true, false) => Gesture::OpenHand,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::None => "NONE",
            Gesture::OpenHand => "OPEN HAND",
            Gesture::Gripping => "GRIPPING",
        }
    }
}
