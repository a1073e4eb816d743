pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{NetworkConfig, ConfigError};
pub use api::cue::{AudioCue, CueError, SilentCue};
pub use api::network::Network;
pub use api::types::{Rgb, Viewport, Bounds};
pub use crate::core::field::ParticleField;
pub use crate::core::tempo::{TempoController, TempoState};
pub use crate::core::time::FrameClock;
pub use renderer::{DrawSurface, CommandSurface, DrawCommand};
pub use systems::geometry::{random_int, random_float, distance};
pub use systems::particle::{Particle, Edge, MAX_TRAJECTORY_SLOPE};
pub use systems::render::{Link, connections, line_opacity};
pub use systems::rng::Rng;
