//! Per-object manipulation state machine.
//!
//! `Idle -> Hover -> Grabbed -> {Success, Wrong} -> Idle`, with respawn
//! overlaying everything while the object is shrunk below the interactive
//! floor or waiting for its respawn timer.

use crate::arbiter::{GrabArbiter, GrabLock};
use crate::config::EngineConfig;
use crate::constants::IDLE_SPIN_RATE;
use crate::respawn::RespawnTimer;
use crate::zone::{Classification, ZoneRegistry, ZoneSide};
use glam::Vec3;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectStatus {
    #[default]
    Idle,
    Hover,
    Grabbed,
    Success,
    Wrong,
}

impl ObjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectStatus::Idle => "IDLE",
            ObjectStatus::Hover => "HOVER",
            ObjectStatus::Grabbed => "GRABBED",
            ObjectStatus::Success => "SUCCESS",
            ObjectStatus::Wrong => "WRONG",
        }
    }

    /// Display states that only hover (or a completed respawn) may replace.
    pub fn is_verdict(&self) -> bool {
        matches!(self, ObjectStatus::Success | ObjectStatus::Wrong)
    }

    /// Color, caption and glow the front-end draws for this status.
    pub fn visual(&self, base_color: [f32; 3]) -> StatusVisual {
        match self {
            ObjectStatus::Grabbed => StatusVisual::new([0.0, 1.0, 1.0], "LOCKED", 2.0),
            ObjectStatus::Hover => StatusVisual::new([0.557, 0.773, 1.0], "GRAB", 0.5),
            ObjectStatus::Success => StatusVisual::new([0.29, 0.871, 0.502], "READY", 1.0),
            ObjectStatus::Wrong => StatusVisual::new([0.937, 0.267, 0.267], "RETRY", 1.0),
            ObjectStatus::Idle => StatusVisual::new(base_color, "", 0.2),
        }
    }
}

impl fmt::Display for ObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusVisual {
    pub color: [f32; 3],
    pub caption: &'static str,
    pub emissive: f32,
}

impl StatusVisual {
    const fn new(color: [f32; 3], caption: &'static str, emissive: f32) -> Self {
        Self {
            color,
            caption,
            emissive,
        }
    }
}

/// Static configuration for an object used at engine construction time.
#[derive(Clone, Debug)]
pub struct ObjectSpec {
    pub id: ObjectId,
    pub rest_position: Vec3,
    pub target: ZoneSide,
    pub color: [f32; 3],
}

/// The smoothed hand as seen by every object during one tick.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HandSample {
    pub control_point: Vec3,
    pub grip: bool,
}

pub(crate) struct TickContext<'a> {
    pub elapsed_sec: f32,
    pub dt_sec: f32,
    /// `None` when no complete hand was tracked this tick.
    pub hand: Option<HandSample>,
    /// Lock state before any object ran this tick.
    pub lock_at_start: GrabLock,
    /// The hand has been missing long enough to drop whatever is held.
    pub tracking_lost: bool,
    pub config: &'a EngineConfig,
    pub zones: &'a ZoneRegistry,
}

/// What an object asks the engine to do after its step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum StepOutcome {
    Acquired,
    Released {
        verdict: Classification,
        at: Vec3,
    },
    TrackingLost {
        at: Vec3,
    },
}

#[derive(Clone, Debug)]
pub struct ManipulableObject {
    spec: ObjectSpec,
    pub(crate) position: Vec3,
    /// Where idle drift pulls towards: rest, or the last drop point.
    pub(crate) anchor: Vec3,
    /// Euler angles; spins while idle, zeroed while held.
    pub(crate) rotation: Vec3,
    pub(crate) scale: f32,
    pub(crate) scale_target: f32,
    pub(crate) status: ObjectStatus,
    pub(crate) respawn: Option<RespawnTimer>,
}

impl ManipulableObject {
    pub fn new(spec: ObjectSpec) -> Self {
        let rest = spec.rest_position;
        Self {
            spec,
            position: rest,
            anchor: rest,
            rotation: Vec3::ZERO,
            scale: 1.0,
            scale_target: 1.0,
            status: ObjectStatus::Idle,
            respawn: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.spec.id
    }

    pub fn spec(&self) -> &ObjectSpec {
        &self.spec
    }

    pub fn rest_position(&self) -> Vec3 {
        self.spec.rest_position
    }

    pub fn target(&self) -> ZoneSide {
        self.spec.target
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn status(&self) -> ObjectStatus {
        self.status
    }

    pub fn respawn_pending(&self) -> bool {
        self.respawn.is_some()
    }

    pub fn respawn_remaining(&self, now: Duration) -> Option<Duration> {
        self.respawn.as_ref().map(|t| t.remaining(now))
    }

    /// Excluded from proximity and grab tests.
    pub fn is_inert(&self, floor: f32) -> bool {
        self.respawn.is_some() || self.scale < floor
    }

    /// Restore to the freshly created state. The caller owns lock bookkeeping.
    pub(crate) fn reset(&mut self) {
        let rest = self.spec.rest_position;
        self.position = rest;
        self.anchor = rest;
        self.rotation = Vec3::ZERO;
        self.scale = 1.0;
        self.scale_target = 1.0;
        self.status = ObjectStatus::Idle;
        self.respawn = None;
    }

    pub(crate) fn step(
        &mut self,
        ctx: &TickContext<'_>,
        arbiter: &mut GrabArbiter,
    ) -> Option<StepOutcome> {
        if self.is_inert(ctx.config.interactive_floor) {
            return None;
        }
        if arbiter.is_held_by(self.id()) {
            return self.step_held(ctx, arbiter);
        }

        self.drift(ctx);

        let Some(hand) = ctx.hand else {
            if self.status == ObjectStatus::Hover {
                self.status = ObjectStatus::Idle;
            }
            return None;
        };
        if !ctx.lock_at_start.is_free() {
            return None;
        }

        if self.position.distance(hand.control_point) < ctx.config.grab_proximity {
            self.status = ObjectStatus::Hover;
            if hand.grip && arbiter.request_grab(self.id()) {
                self.status = ObjectStatus::Grabbed;
                self.rotation = Vec3::ZERO;
                return Some(StepOutcome::Acquired);
            }
        } else if !self.status.is_verdict() {
            self.status = ObjectStatus::Idle;
        }
        None
    }

    fn step_held(
        &mut self,
        ctx: &TickContext<'_>,
        arbiter: &mut GrabArbiter,
    ) -> Option<StepOutcome> {
        let Some(hand) = ctx.hand else {
            // Hold the last position until the grace window runs out.
            if ctx.tracking_lost {
                arbiter.release_grab(self.id());
                self.status = ObjectStatus::Idle;
                return Some(StepOutcome::TrackingLost { at: self.position });
            }
            return None;
        };

        self.status = ObjectStatus::Grabbed;
        self.position = hand.control_point;
        self.anchor = hand.control_point;
        self.rotation = Vec3::ZERO;

        if hand.grip {
            return None;
        }

        arbiter.release_grab(self.id());
        let verdict = ctx.zones.classify(hand.control_point, self.target());
        self.status = match verdict {
            Classification::Correct => ObjectStatus::Success,
            Classification::Incorrect => ObjectStatus::Wrong,
            Classification::Undecided => ObjectStatus::Idle,
        };
        Some(StepOutcome::Released {
            verdict,
            at: hand.control_point,
        })
    }

    fn drift(&mut self, ctx: &TickContext<'_>) {
        let cfg = ctx.config;
        self.position = self.position.lerp(self.anchor, cfg.idle_follow);
        if cfg.idle_bob {
            let phase = ctx.elapsed_sec * cfg.idle_bob_frequency + self.id().0 as f32;
            self.position.y = phase.sin() * cfg.idle_bob_amplitude + cfg.idle_hover_height;
        }
        self.rotation.x += ctx.dt_sec * IDLE_SPIN_RATE[0];
        self.rotation.y += ctx.dt_sec * IDLE_SPIN_RATE[1];
    }
}
