//! Construction-time errors. The per-frame tick path never fails.

use crate::object::ObjectId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be in (0, 1], got {value}")]
    FactorOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("respawn delay must be non-zero")]
    ZeroRespawnDelay,
    #[error("interactive scale floor {0} must be below 1.0")]
    ScaleFloorTooHigh(f32),
    #[error("unknown quality preset '{0}' (expected LOW, MEDIUM or HIGH)")]
    UnknownQuality(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),
    #[error("engine needs at least one manipulable object")]
    NoObjects,
    #[error("object id {0} is registered more than once")]
    DuplicateObject(ObjectId),
}
