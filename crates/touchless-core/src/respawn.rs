//! Non-blocking respawn choreography.
//!
//! Phase A starts immediately: the object's scale target drops to zero and it
//! shrinks a fixed fraction per tick. Phase B fires once the timer's deadline
//! has passed on the injected clock, however many ticks that took: the object
//! snaps back to rest and grows back in.

use crate::object::{ManipulableObject, ObjectStatus};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct RespawnTimer {
    deadline: Duration,
    rest_position: Vec3,
}

impl RespawnTimer {
    pub fn arm(now: Duration, delay: Duration, rest_position: Vec3) -> Self {
        Self {
            deadline: now + delay,
            rest_position,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.deadline.saturating_sub(now)
    }
}

#[derive(Clone, Debug)]
pub struct RespawnScheduler {
    delay: Duration,
    scale_lerp: f32,
}

impl RespawnScheduler {
    pub fn new(delay: Duration, scale_lerp: f32) -> Self {
        Self { delay, scale_lerp }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Phase A: arm the timer and start shrinking.
    pub fn begin(&self, object: &mut ManipulableObject, now: Duration) {
        object.respawn = Some(RespawnTimer::arm(now, self.delay, object.rest_position()));
        object.scale_target = 0.0;
        log::debug!(
            "[respawn] object {} shrinking, back in {} ms",
            object.id(),
            self.delay.as_millis()
        );
    }

    /// Ease the scale one tick towards its current target.
    pub fn animate(&self, object: &mut ManipulableObject) {
        let next = object.scale + (object.scale_target - object.scale) * self.scale_lerp;
        object.scale = next.clamp(0.0, 1.0);
    }

    /// Phase B if the timer is due. Returns whether the object was restored.
    pub fn advance(&self, object: &mut ManipulableObject, now: Duration) -> bool {
        let Some(timer) = object.respawn.as_ref() else {
            return false;
        };
        if !timer.is_due(now) {
            return false;
        }
        let rest = timer.rest_position();
        object.position = rest;
        object.anchor = rest;
        object.rotation = Vec3::ZERO;
        object.scale_target = 1.0;
        object.status = ObjectStatus::Idle;
        object.respawn = None;
        log::debug!("[respawn] object {} restored to rest", object.id());
        true
    }

    /// Disarm without restoring.
    pub fn cancel(&self, object: &mut ManipulableObject) -> bool {
        object.respawn.take().is_some()
    }
}
