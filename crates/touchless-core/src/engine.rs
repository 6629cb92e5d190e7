use crate::arbiter::{GrabArbiter, GrabLock};
use crate::config::{EngineConfig, Quality};
use crate::constants::*;
use crate::effects::ParticleBurst;
use crate::error::SessionError;
use crate::object::{
    HandSample, ManipulableObject, ObjectId, ObjectSpec, ObjectStatus, StepOutcome, TickContext,
};
use crate::pose::{
    control_target, Gesture, HandFrame, Landmark, PoseSmoother, SkeletonSmoother, TrackingStatus,
};
use crate::respawn::RespawnScheduler;
use crate::score::ScoreLedger;
use crate::state::{EngineSnapshot, InstanceData, ObjectView, SessionStats};
use crate::zone::{Classification, ZoneRegistry, ZoneSide};
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

/// Transient feedback for the presentation layer. Fire-and-forget.
///
/// Fields:
/// - `id`: the object the event concerns
/// - `position`: world-space control point at the moment of the event
/// - `score`: ledger total after the event was applied
/// - `zone`: label of the zone the release landed in
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    Grabbed { id: ObjectId },
    Success {
        id: ObjectId,
        position: Vec3,
        color: [f32; 3],
        zone: Option<&'static str>,
        score: u64,
    },
    Wrong {
        id: ObjectId,
        position: Vec3,
        zone: Option<&'static str>,
        score: u64,
    },
    /// Released in the neutral band; no score effect.
    Dropped { id: ObjectId, position: Vec3 },
    /// Auto-released because the hand stopped being tracked.
    TrackingLost { id: ObjectId, position: Vec3 },
    Respawned { id: ObjectId },
}

pub type EventBuffer = SmallVec<[EngineEvent; 8]>;

/// The two sortable cubes: id 1 belongs left, id 2 belongs right.
pub fn default_objects() -> Vec<ObjectSpec> {
    let sides = [ZoneSide::Left, ZoneSide::Right];
    (0..DEFAULT_OBJECT_POSITIONS.len())
        .map(|i| ObjectSpec {
            id: ObjectId(i as u32 + 1),
            rest_position: Vec3::from(DEFAULT_OBJECT_POSITIONS[i]),
            target: sides[i],
            color: DEFAULT_OBJECT_COLORS[i],
        })
        .collect()
}

/// Frame-driven manipulation engine.
///
/// Owns the control-point smoother, the grab lock, every object's runtime
/// state, the score and the pending respawns. Objects are evaluated in
/// ascending id order each tick, so the lower id wins when two objects reach
/// for a free lock in the same tick.
///
/// Typical usage:
/// - Construct with `Engine::new(config, objects)` or `Engine::with_defaults(config)`
/// - Call `tick(&frame, now, &mut events)` once per rendered frame, `now`
///   being time since the session started
/// - Read `snapshot()` for drawing and drain `events` for transient feedback
/// - Call `shutdown()` on teardown to free the lock and cancel respawns
///
/// The config is fixed at construction; `set_quality` is the only runtime knob.
pub struct Engine {
    config: EngineConfig,
    objects: Vec<ManipulableObject>,
    index: FnvHashMap<ObjectId, usize>,
    zones: ZoneRegistry,
    arbiter: GrabArbiter,
    ledger: ScoreLedger,
    respawn: RespawnScheduler,
    control: PoseSmoother,
    skeleton: SkeletonSmoother,
    tracking: TrackingStatus,
    gesture: Gesture,
    missing_ticks: u32,
    bursts: Vec<ParticleBurst>,
    rng: StdRng,
    stats: SessionStats,
    last_now: Option<Duration>,
    shut_down: bool,
}

impl Engine {
    pub fn new(config: EngineConfig, specs: Vec<ObjectSpec>) -> Result<Self, SessionError> {
        config.validate()?;
        if specs.is_empty() {
            return Err(SessionError::NoObjects);
        }
        let mut specs = specs;
        specs.sort_by_key(|s| s.id);
        if let Some(dup) = specs.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(SessionError::DuplicateObject(dup[0].id));
        }

        let objects = specs
            .into_iter()
            .map(ManipulableObject::new)
            .collect::<Vec<_>>();
        let index = objects
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id(), i))
            .collect::<FnvHashMap<_, _>>();

        log::info!(
            "[engine] objects={} quality={} proximity={:.2} zone_threshold={:.2} respawn={}ms",
            objects.len(),
            config.quality,
            config.grab_proximity,
            config.zone_threshold,
            config.respawn_delay.as_millis()
        );

        Ok(Self {
            zones: ZoneRegistry::with_defaults(config.zone_threshold),
            ledger: ScoreLedger::new(config.award_points, config.penalty_points),
            respawn: RespawnScheduler::new(config.respawn_delay, config.scale_lerp),
            control: PoseSmoother::new(config.control_alpha),
            skeleton: SkeletonSmoother::new(config.skeleton_alpha()),
            rng: StdRng::seed_from_u64(config.seed),
            objects,
            index,
            arbiter: GrabArbiter::new(),
            tracking: TrackingStatus::Initializing,
            gesture: Gesture::None,
            missing_ticks: 0,
            bursts: Vec::new(),
            stats: SessionStats::default(),
            last_now: None,
            shut_down: false,
            config,
        })
    }

    pub fn with_defaults(config: EngineConfig) -> Result<Self, SessionError> {
        Self::new(config, default_objects())
    }

    /// Build a frame from raw landmarks, deriving the grip with the configured threshold.
    pub fn frame_from_landmarks(&self, landmarks: impl IntoIterator<Item = Landmark>) -> HandFrame {
        HandFrame::with_grip_threshold(landmarks, self.config.grip_threshold)
    }

    /// Advance one frame. `now` is time since session start on the caller's clock.
    pub fn tick(&mut self, frame: &HandFrame, now: Duration, out_events: &mut EventBuffer) {
        if self.shut_down {
            return;
        }
        let dt = self
            .last_now
            .map(|prev| now.saturating_sub(prev))
            .unwrap_or_default();
        self.last_now = Some(now);

        let hand = self.ingest(frame);
        let ctx = TickContext {
            elapsed_sec: now.as_secs_f32(),
            dt_sec: dt.as_secs_f32(),
            hand,
            lock_at_start: self.arbiter.lock(),
            tracking_lost: hand.is_none()
                && self.missing_ticks >= self.config.tracking_loss_grace_ticks,
            config: &self.config,
            zones: &self.zones,
        };

        let mut outcomes: SmallVec<[(usize, StepOutcome); 4]> = SmallVec::new();
        for (i, object) in self.objects.iter_mut().enumerate() {
            self.respawn.animate(object);
            if let Some(outcome) = object.step(&ctx, &mut self.arbiter) {
                outcomes.push((i, outcome));
            }
        }
        for (i, outcome) in outcomes {
            self.apply_outcome(i, outcome, now, out_events);
        }

        for object in &mut self.objects {
            if self.respawn.advance(object, now) {
                out_events.push(EngineEvent::Respawned { id: object.id() });
            }
        }

        self.bursts.retain_mut(|b| b.step());
    }

    fn ingest(&mut self, frame: &HandFrame) -> Option<HandSample> {
        self.gesture = Gesture::from_frame(frame);
        if frame.has_hand() && !frame.is_complete() {
            log::warn!(
                "[engine] ignoring frame with {} landmarks (expected {})",
                frame.landmarks.len(),
                HAND_LANDMARK_COUNT
            );
        }

        let raw = if frame.is_complete() {
            control_target(&frame.landmarks)
        } else {
            None
        };
        let Some(raw) = raw else {
            self.missing_ticks = self.missing_ticks.saturating_add(1);
            match self.tracking {
                TrackingStatus::Tracking => {
                    log::info!("[engine] hand lost");
                    self.tracking = TrackingStatus::Searching;
                }
                TrackingStatus::Initializing => self.tracking = TrackingStatus::Searching,
                TrackingStatus::Searching | TrackingStatus::Error => {}
            }
            self.skeleton.reset();
            return None;
        };

        if self.tracking != TrackingStatus::Tracking {
            log::info!("[engine] hand acquired");
            self.tracking = TrackingStatus::Tracking;
        }
        self.missing_ticks = 0;
        self.skeleton.update(&frame.landmarks);
        Some(HandSample {
            control_point: self.control.update(raw),
            grip: frame.grip,
        })
    }

    fn apply_outcome(
        &mut self,
        i: usize,
        outcome: StepOutcome,
        now: Duration,
        out_events: &mut EventBuffer,
    ) {
        let id = self.objects[i].id();
        match outcome {
            StepOutcome::Acquired => {
                self.stats.grabs += 1;
                log::debug!("[engine] object {id} grabbed");
                out_events.push(EngineEvent::Grabbed { id });
            }
            StepOutcome::Released {
                verdict: Classification::Correct,
                at,
            } => {
                let score = self.ledger.award();
                let zone = self.zones.zone_at(at).map(|z| z.label);
                self.stats.successes += 1;
                self.respawn.begin(&mut self.objects[i], now);
                if self.config.quality.spawns_bursts() {
                    self.bursts
                        .push(ParticleBurst::new(at, BURST_COLOR, &mut self.rng));
                }
                log::info!("[engine] object {id} sorted correctly at x={:.2} score={score}", at.x);
                out_events.push(EngineEvent::Success {
                    id,
                    position: at,
                    color: BURST_COLOR,
                    zone,
                    score,
                });
            }
            StepOutcome::Released {
                verdict: Classification::Incorrect,
                at,
            } => {
                let score = self.ledger.penalize();
                let zone = self.zones.zone_at(at).map(|z| z.label);
                self.stats.failures += 1;
                log::info!("[engine] object {id} dropped in wrong zone at x={:.2} score={score}", at.x);
                out_events.push(EngineEvent::Wrong {
                    id,
                    position: at,
                    zone,
                    score,
                });
            }
            StepOutcome::Released {
                verdict: Classification::Undecided,
                at,
            } => {
                self.stats.drops += 1;
                log::debug!("[engine] object {id} dropped mid-air");
                out_events.push(EngineEvent::Dropped { id, position: at });
            }
            StepOutcome::TrackingLost { at } => {
                self.stats.tracking_releases += 1;
                log::warn!(
                    "[engine] tracking lost for {} ticks, releasing object {id}",
                    self.missing_ticks
                );
                out_events.push(EngineEvent::TrackingLost { id, position: at });
            }
        }
    }

    /// The pose estimator failed to start; keep idling with no hand.
    pub fn mark_estimator_failed(&mut self) {
        log::warn!("[engine] pose estimator unavailable, running without hand input");
        self.tracking = TrackingStatus::Error;
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.config.quality = quality;
        self.skeleton.set_alpha(quality.skeleton_alpha());
        if !quality.spawns_bursts() {
            self.bursts.clear();
        }
    }

    /// Force an object back to its rest state, releasing the lock if it holds it.
    pub fn reset_object(&mut self, id: ObjectId) -> bool {
        let Some(&i) = self.index.get(&id) else {
            return false;
        };
        if self.arbiter.release_grab(id) {
            log::info!("[engine] object {id} reset while held; lock released");
        }
        self.objects[i].reset();
        true
    }

    /// Teardown: release the lock and cancel every pending respawn.
    /// Later ticks are ignored.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        let holder = self.arbiter.force_release();
        if let Some(&i) = holder.and_then(|id| self.index.get(&id)) {
            self.objects[i].status = ObjectStatus::Idle;
        }
        let mut cancelled = 0usize;
        for object in &mut self.objects {
            if self.respawn.cancel(object) {
                cancelled += 1;
            }
        }
        self.bursts.clear();
        self.shut_down = true;
        log::info!(
            "[engine] shutdown: released={:?} cancelled_respawns={} final_score={}",
            holder.map(|id| id.0),
            cancelled,
            self.ledger.score()
        );
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn objects(&self) -> &[ManipulableObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&ManipulableObject> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn score(&self) -> u64 {
        self.ledger.score()
    }

    pub fn lock(&self) -> GrabLock {
        self.arbiter.lock()
    }

    pub fn lock_holder(&self) -> Option<ObjectId> {
        self.arbiter.holder()
    }

    pub fn control_point(&self) -> Option<Vec3> {
        self.control.value()
    }

    pub fn skeleton(&self) -> Option<&[Vec3; HAND_LANDMARK_COUNT]> {
        self.skeleton.points()
    }

    pub fn tracking(&self) -> TrackingStatus {
        self.tracking
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn bursts(&self) -> &[ParticleBurst] {
        &self.bursts
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let objects = self
            .objects
            .iter()
            .map(|o| ObjectView {
                id: o.id(),
                position: o.position(),
                rotation: o.rotation(),
                scale: o.scale(),
                status: o.status(),
                caption: o.status().visual(o.spec().color).caption,
            })
            .collect();
        let instances = self
            .objects
            .iter()
            .map(|o| {
                let vis = o.status().visual(o.spec().color);
                InstanceData {
                    pos: o.position().to_array(),
                    scale: o.scale(),
                    color: [vis.color[0], vis.color[1], vis.color[2], 1.0],
                    emissive: vis.emissive,
                }
            })
            .collect();
        EngineSnapshot {
            objects,
            score: self.ledger.score(),
            lock_holder: self.arbiter.holder(),
            control_point: self.control.value(),
            tracking: self.tracking,
            gesture: self.gesture,
            stats: self.stats,
            instances,
        }
    }
}
