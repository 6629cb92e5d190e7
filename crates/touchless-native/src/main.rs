use anyhow::Context;
use instant::Instant;
use std::thread;
use std::time::Duration;
use touchless_core::{Engine, EngineConfig, EngineEvent, EventBuffer, HandFrame, Quality};

mod script;

use script::{demo_script, ScriptedHand};

const DEFAULT_FPS: u32 = 60;
const SENSOR_JITTER: f32 = 0.002; // normalized landmark noise

struct DriverOptions {
    fps: u32,
    realtime: bool,
    config: EngineConfig,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn options_from_env() -> anyhow::Result<DriverOptions> {
    let mut config = EngineConfig::default();
    if let Some(q) = env_var("TOUCHLESS_QUALITY") {
        config.quality = q.parse::<Quality>()?;
    }
    if let Some(seed) = env_var("TOUCHLESS_SEED") {
        config.seed = seed
            .parse()
            .with_context(|| format!("TOUCHLESS_SEED is not an integer: {seed}"))?;
    }
    let fps = match env_var("TOUCHLESS_FPS") {
        Some(v) => v
            .parse::<u32>()
            .with_context(|| format!("TOUCHLESS_FPS is not an integer: {v}"))?,
        None => DEFAULT_FPS,
    };
    if fps == 0 {
        anyhow::bail!("TOUCHLESS_FPS must be at least 1");
    }
    let realtime = env_var("TOUCHLESS_REALTIME").is_some_and(|v| v != "0");
    config.validate().context("engine config rejected")?;
    Ok(DriverOptions {
        fps,
        realtime,
        config,
    })
}

fn log_event(ev: &EngineEvent) {
    match ev {
        EngineEvent::Grabbed { id } => log::info!("[hud] OBJECT {id} LOCKED"),
        EngineEvent::Success {
            id,
            position,
            zone,
            score,
            ..
        } => log::info!(
            "[hud] object {id} READY in {} at ({:.2},{:.2},{:.2}) score={score}",
            zone.unwrap_or("-"),
            position.x,
            position.y,
            position.z
        ),
        EngineEvent::Wrong {
            id, zone, score, ..
        } => log::info!(
            "[hud] object {id} RETRY in {} score={score}",
            zone.unwrap_or("-")
        ),
        EngineEvent::Dropped { id, .. } => log::info!("[hud] object {id} dropped"),
        EngineEvent::TrackingLost { id, .. } => {
            log::info!("[hud] object {id} released: hand lost")
        }
        EngineEvent::Respawned { id } => log::info!("[hud] object {id} respawned"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = options_from_env()?;
    let seed = opts.config.seed;
    let mut engine = Engine::with_defaults(opts.config).context("failed to build engine")?;
    let mut hand = ScriptedHand::new(demo_script(), seed, SENSOR_JITTER);

    let frame_dt = Duration::from_secs_f64(1.0 / opts.fps as f64);
    let total_frames = (hand.duration_sec() * opts.fps as f32).ceil() as u32;
    log::info!(
        "[driver] replaying {:.1}s scripted session at {} fps ({} frames, realtime={})",
        hand.duration_sec(),
        opts.fps,
        total_frames,
        opts.realtime
    );

    let started = Instant::now();
    let mut events = EventBuffer::new();
    let mut last_tracking = engine.tracking();
    for n in 0..total_frames {
        let now = frame_dt * n;
        let frame = match hand.landmarks_at(now.as_secs_f32()) {
            Some(landmarks) => engine.frame_from_landmarks(landmarks),
            None => HandFrame::empty(),
        };
        engine.tick(&frame, now, &mut events);
        for ev in events.drain(..) {
            log_event(&ev);
        }
        if engine.tracking() != last_tracking {
            last_tracking = engine.tracking();
            log::info!("[hud] {} gesture={}", last_tracking.as_str(), engine.gesture().as_str());
        }
        if opts.realtime {
            let due = frame_dt * (n + 1);
            if let Some(wait) = due.checked_sub(started.elapsed()) {
                thread::sleep(wait);
            }
        }
    }

    let snapshot = engine.snapshot();
    for obj in &snapshot.objects {
        log::info!(
            "[driver] object {} {} pos=({:.2},{:.2},{:.2}) scale={:.2}",
            obj.id,
            obj.label(),
            obj.position.x,
            obj.position.y,
            obj.position.z,
            obj.scale
        );
    }
    let stats = snapshot.stats;
    log::info!(
        "[driver] score={} grabs={} successes={} failures={} drops={} tracking_releases={} wall={:.2}s",
        snapshot.score,
        stats.grabs,
        stats.successes,
        stats.failures,
        stats.drops,
        stats.tracking_releases,
        started.elapsed().as_secs_f32()
    );
    engine.shutdown();
    Ok(())
}
