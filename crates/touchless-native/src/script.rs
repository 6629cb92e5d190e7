//! Scripted hand used by the headless driver in place of a camera + pose model.

use glam::Vec3;
use rand::prelude::*;
use touchless_core::{
    Landmark, HAND_LANDMARK_COUNT, INDEX_TIP, LANDMARK_CENTER, LANDMARK_XY_SCALE,
    LANDMARK_Z_SCALE, THUMB_TIP,
};

const PINCH_GAP_CLOSED: f32 = 0.02; // normalized thumb/index separation while gripping
const PINCH_GAP_OPEN: f32 = 0.14;

/// One straight-line leg of the scripted motion, in world units.
#[derive(Clone, Debug)]
pub struct Segment {
    pub duration_sec: f32,
    pub from: Vec3,
    pub to: Vec3,
    pub grip: bool,
    /// `false` simulates the estimator losing the hand.
    pub visible: bool,
}

impl Segment {
    fn hold(duration_sec: f32, at: Vec3, grip: bool) -> Self {
        Self::travel(duration_sec, at, at, grip)
    }

    fn travel(duration_sec: f32, from: Vec3, to: Vec3, grip: bool) -> Self {
        Self {
            duration_sec,
            from,
            to,
            grip,
            visible: true,
        }
    }

    fn hidden(duration_sec: f32) -> Self {
        Self {
            duration_sec,
            from: Vec3::ZERO,
            to: Vec3::ZERO,
            grip: false,
            visible: false,
        }
    }
}

/// Sort cube 1 correctly, misplace cube 2, fix it, then lose tracking mid-carry.
pub fn demo_script() -> Vec<Segment> {
    let cube1 = Vec3::new(-1.0, 0.8, 0.0);
    let cube2 = Vec3::new(1.0, 0.8, 0.0);
    let left = Vec3::new(-3.0, 0.6, 0.0);
    let right = Vec3::new(3.0, 0.6, 0.0);
    let left_high = Vec3::new(-3.0, 0.8, 0.0);
    vec![
        Segment::hidden(1.0),
        Segment::travel(1.0, Vec3::new(0.0, 2.0, 0.0), cube1, false),
        Segment::hold(0.4, cube1, true),
        Segment::travel(1.2, cube1, left, true),
        Segment::hold(0.4, left, false),
        Segment::travel(1.0, left, cube2, false),
        Segment::hold(0.4, cube2, true),
        Segment::travel(1.2, cube2, left, true),
        Segment::hold(0.4, left, false),
        Segment::travel(0.4, left, left_high, false),
        Segment::hold(0.4, left_high, true),
        Segment::travel(1.6, left_high, right, true),
        Segment::hold(0.4, right, false),
        Segment::travel(1.0, right, cube1, false),
        Segment::hold(0.4, cube1, true),
        Segment::travel(0.6, cube1, Vec3::new(0.0, 0.8, 0.0), true),
        Segment::hidden(1.0),
        Segment::hold(0.5, Vec3::new(0.0, 2.0, 0.0), false),
    ]
}

pub struct ScriptedHand {
    segments: Vec<Segment>,
    rng: StdRng,
    jitter: f32,
}

impl ScriptedHand {
    pub fn new(segments: Vec<Segment>, seed: u64, jitter: f32) -> Self {
        Self {
            segments,
            rng: StdRng::seed_from_u64(seed),
            jitter,
        }
    }

    pub fn duration_sec(&self) -> f32 {
        self.segments.iter().map(|s| s.duration_sec).sum()
    }

    /// Landmarks the estimator would report at `t` seconds into the script,
    /// or `None` while the hand is out of view.
    pub fn landmarks_at(&mut self, t: f32) -> Option<[Landmark; HAND_LANDMARK_COUNT]> {
        let mut start = 0.0f32;
        let mut current = None;
        for seg in &self.segments {
            if t < start + seg.duration_sec {
                let u = ((t - start) / seg.duration_sec.max(1e-3)).clamp(0.0, 1.0);
                current = Some((seg.from.lerp(seg.to, u), seg.grip, seg.visible));
                break;
            }
            start += seg.duration_sec;
        }
        match current {
            Some((pos, grip, true)) => Some(self.synthesize(pos, grip)),
            _ => None,
        }
    }

    /// Build a plausible 21-point hand whose pinch midpoint maps to `pos`.
    fn synthesize(&mut self, pos: Vec3, grip: bool) -> [Landmark; HAND_LANDMARK_COUNT] {
        let cx = pos.x / LANDMARK_XY_SCALE + LANDMARK_CENTER;
        let cy = pos.y / LANDMARK_XY_SCALE + LANDMARK_CENTER;
        let cz = pos.z / LANDMARK_Z_SCALE;
        let gap = if grip { PINCH_GAP_CLOSED } else { PINCH_GAP_OPEN };
        let half_gap = gap / 2.0;

        let mut points = [Landmark::default(); HAND_LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            // Fingers fan out below the pinch; wrist sits lowest.
            let finger = (i.max(1) - 1) / 4;
            let joint = (i.max(1) - 1) % 4;
            let (dx, dy) = if i == 0 {
                (0.0, 0.18)
            } else {
                (
                    (finger as f32 - 2.0) * 0.03,
                    0.15 - joint as f32 * 0.035,
                )
            };
            *p = Landmark::new(cx + dx, cy + dy, cz);
        }
        points[THUMB_TIP] = Landmark::new(cx - half_gap, cy, cz);
        points[INDEX_TIP] = Landmark::new(cx + half_gap, cy, cz);

        if self.jitter > 0.0 {
            for p in &mut points {
                p.x += self.rng.gen_range(-self.jitter..self.jitter);
                p.y += self.rng.gen_range(-self.jitter..self.jitter);
            }
        }
        points
    }
}
