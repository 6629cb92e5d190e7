// Shared helpers for building hand frames at known world positions.
#![allow(dead_code)]

use glam::Vec3;
use std::time::Duration;
use touchless_core::*;

pub const FRAME_MS: u64 = 16;

/// Time of the n-th frame at ~60 Hz.
pub fn frame_time(n: u64) -> Duration {
    Duration::from_millis(n * FRAME_MS)
}

/// Normalized landmark whose world projection is `p`.
pub fn landmark_for(p: Vec3) -> Landmark {
    Landmark::new(
        p.x / LANDMARK_XY_SCALE + LANDMARK_CENTER,
        p.y / LANDMARK_XY_SCALE + LANDMARK_CENTER,
        p.z / LANDMARK_Z_SCALE,
    )
}

/// A full 21-point hand whose pinch midpoint projects to `p`.
pub fn hand_at(p: Vec3, grip: bool) -> HandFrame {
    let center = landmark_for(p);
    let mut landmarks = vec![center; HAND_LANDMARK_COUNT];
    let half_gap = if grip { 0.0 } else { 0.06 };
    landmarks[THUMB_TIP].x -= half_gap;
    landmarks[INDEX_TIP].x += half_gap;
    HandFrame::new(landmarks, grip)
}

pub fn engine() -> Engine {
    Engine::with_defaults(EngineConfig::default()).expect("default engine")
}

pub fn status(engine: &Engine, id: u32) -> ObjectStatus {
    engine.object(ObjectId(id)).expect("object").status()
}

/// Drives an engine frame by frame, keeping the clock and event log.
pub struct Harness {
    pub engine: Engine,
    pub frame: u64,
    pub events: Vec<EngineEvent>,
}

impl Harness {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        frame_time(self.frame)
    }

    pub fn step(&mut self, frame: &HandFrame) -> EventBuffer {
        let mut out = EventBuffer::new();
        let now = self.now();
        self.engine.tick(frame, now, &mut out);
        self.events.extend(out.iter().cloned());
        self.frame += 1;
        out
    }

    pub fn step_at(&mut self, frame: &HandFrame, now: Duration) -> EventBuffer {
        let mut out = EventBuffer::new();
        self.engine.tick(frame, now, &mut out);
        self.events.extend(out.iter().cloned());
        out
    }

    pub fn run(&mut self, frame: &HandFrame, ticks: usize) {
        for _ in 0..ticks {
            self.step(frame);
        }
    }

    /// Settle an open hand over `at`, pinch, carry to `to`, then open the hand.
    pub fn carry_and_release(&mut self, at: Vec3, to: Vec3) -> EventBuffer {
        self.run(&hand_at(at, false), 40);
        self.step(&hand_at(at, true));
        self.run(&hand_at(to, true), 40);
        self.step(&hand_at(to, false))
    }
}
