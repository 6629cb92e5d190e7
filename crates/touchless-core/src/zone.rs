use crate::constants::*;
use glam::Vec3;

/// Which side of the workspace an object has to be dropped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneSide {
    Left,
    Right,
}

impl ZoneSide {
    /// Interpret a signed target coordinate (e.g. `-1.0` / `1.0`). Zero has no side.
    pub fn from_sign(x: f32) -> Option<Self> {
        if x < 0.0 {
            Some(ZoneSide::Left)
        } else if x > 0.0 {
            Some(ZoneSide::Right)
        } else {
            None
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            ZoneSide::Left => -1.0,
            ZoneSide::Right => 1.0,
        }
    }
}

/// Result of judging a release position against an object's target side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Correct,
    Incorrect,
    /// Still inside the neutral band around x = 0.
    Undecided,
}

/// Judge a release at control-point `x` for an object that belongs on `side`.
#[inline]
pub fn classify(x: f32, side: ZoneSide, threshold: f32) -> Classification {
    let correct = match side {
        ZoneSide::Left => x < -threshold,
        ZoneSide::Right => x > threshold,
    };
    if correct {
        Classification::Correct
    } else if x.abs() > threshold {
        Classification::Incorrect
    } else {
        Classification::Undecided
    }
}

/// A static drop target.
#[derive(Clone, Debug)]
pub struct Zone {
    pub label: &'static str,
    pub position: Vec3,
    pub side: ZoneSide,
    pub color: [f32; 3],
}

impl Zone {
    /// Whether a control point at `point` counts as inside this zone.
    pub fn accepts(&self, point: Vec3, threshold: f32) -> bool {
        classify(point.x, self.side, threshold) == Classification::Correct
    }
}

/// Immutable set of zones plus the classification threshold they share.
#[derive(Clone, Debug)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
    threshold: f32,
}

impl ZoneRegistry {
    pub fn new(zones: Vec<Zone>, threshold: f32) -> Self {
        Self { zones, threshold }
    }

    /// ZONE A on the left, ZONE B on the right.
    pub fn with_defaults(threshold: f32) -> Self {
        Self::new(
            vec![
                Zone {
                    label: "ZONE A",
                    position: zone_a_position(),
                    side: ZoneSide::Left,
                    color: ZONE_A_COLOR,
                },
                Zone {
                    label: "ZONE B",
                    position: zone_b_position(),
                    side: ZoneSide::Right,
                    color: ZONE_B_COLOR,
                },
            ],
            threshold,
        )
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The zone a control point currently sits in, if any.
    pub fn zone_at(&self, point: Vec3) -> Option<&Zone> {
        self.zones.iter().find(|z| z.accepts(point, self.threshold))
    }

    pub fn classify(&self, point: Vec3, side: ZoneSide) -> Classification {
        classify(point.x, side, self.threshold)
    }
}
