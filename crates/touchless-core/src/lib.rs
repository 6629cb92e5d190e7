pub mod arbiter;
pub mod config;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod error;
pub mod object;
pub mod pose;
pub mod respawn;
pub mod score;
pub mod state;
pub mod zone;

pub use arbiter::*;
pub use config::*;
pub use constants::*;
pub use effects::*;
pub use engine::*;
pub use error::*;
pub use object::{ManipulableObject, ObjectId, ObjectSpec, ObjectStatus, StatusVisual};
pub use pose::*;
pub use respawn::*;
pub use score::*;
pub use state::*;
pub use zone::*;
