use crate::constants::*;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Render quality preset chosen by the front-end.
///
/// The engine only cares about two of its consequences: how quickly the
/// display skeleton follows the raw landmarks, and whether success bursts
/// are simulated at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Low => "LOW",
            Quality::Medium => "MEDIUM",
            Quality::High => "HIGH",
        }
    }

    pub fn skeleton_alpha(&self) -> f32 {
        match self {
            Quality::Low => SKELETON_SMOOTHING_ALPHA_LOW,
            Quality::Medium | Quality::High => SKELETON_SMOOTHING_ALPHA,
        }
    }

    pub fn spawns_bursts(&self) -> bool {
        !matches!(self, Quality::Low)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Quality::Low),
            "MEDIUM" => Ok(Quality::Medium),
            "HIGH" => Ok(Quality::High),
            _ => Err(ConfigError::UnknownQuality(s.to_string())),
        }
    }
}

/// Tuning knobs for one engine instance.
///
/// Defaults come from `constants`. The two spatial thresholds
/// (`grab_proximity` and `zone_threshold`) define what counts as reach and
/// what counts as sorted.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub quality: Quality,
    pub control_alpha: f32,
    pub grab_proximity: f32,
    pub zone_threshold: f32,
    pub grip_threshold: f32,
    pub tracking_loss_grace_ticks: u32,
    pub idle_follow: f32,
    pub idle_bob: bool,
    pub idle_bob_amplitude: f32,
    pub idle_bob_frequency: f32,
    pub idle_hover_height: f32,
    pub scale_lerp: f32,
    pub interactive_floor: f32,
    pub respawn_delay: Duration,
    pub award_points: u64,
    pub penalty_points: u64,
    /// Seed for the success-burst particle spread.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            control_alpha: CONTROL_SMOOTHING_ALPHA,
            grab_proximity: GRAB_PROXIMITY_THRESHOLD,
            zone_threshold: ZONE_CLASSIFY_THRESHOLD,
            grip_threshold: GRIP_DISTANCE_THRESHOLD,
            tracking_loss_grace_ticks: TRACKING_LOSS_GRACE_TICKS,
            idle_follow: IDLE_FOLLOW_FACTOR,
            idle_bob: true,
            idle_bob_amplitude: IDLE_BOB_AMPLITUDE,
            idle_bob_frequency: IDLE_BOB_FREQUENCY,
            idle_hover_height: IDLE_HOVER_HEIGHT,
            scale_lerp: SCALE_LERP_FACTOR,
            interactive_floor: INTERACTIVE_SCALE_FLOOR,
            respawn_delay: Duration::from_millis(RESPAWN_DELAY_MS),
            award_points: AWARD_POINTS,
            penalty_points: PENALTY_POINTS,
            seed: 42,
        }
    }
}

impl EngineConfig {
    pub fn skeleton_alpha(&self) -> f32 {
        self.quality.skeleton_alpha()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_factor("control_alpha", self.control_alpha)?;
        unit_factor("idle_follow", self.idle_follow)?;
        unit_factor("scale_lerp", self.scale_lerp)?;
        positive("grab_proximity", self.grab_proximity)?;
        positive("zone_threshold", self.zone_threshold)?;
        positive("grip_threshold", self.grip_threshold)?;
        positive("interactive_floor", self.interactive_floor)?;
        if self.interactive_floor >= 1.0 {
            return Err(ConfigError::ScaleFloorTooHigh(self.interactive_floor));
        }
        if self.respawn_delay.is_zero() {
            return Err(ConfigError::ZeroRespawnDelay);
        }
        Ok(())
    }
}

fn unit_factor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FactorOutOfRange { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
