//! Periodic "pulse" of the global speed multiplier.
//!
//! The controller alternates between a fast and a slow phase on an
//! irregular schedule. Its state lives in [`TempoState`], which the
//! simulation step reads every frame.

use crate::api::config::NetworkConfig;
use crate::api::cue::AudioCue;
use crate::systems::geometry::{random_float, random_int};
use crate::systems::rng::Rng;

/// Shared speed multiplier and current phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoState {
    pub speed_modifier: f32,
    /// True while in the fast phase.
    pub faster: bool,
}

impl Default for TempoState {
    /// Slow phase at normal speed, so the first tick goes fast.
    fn default() -> Self {
        Self {
            speed_modifier: 1.0,
            faster: false,
        }
    }
}

/// Ranges that drive the tempo. Copied out of [`NetworkConfig`].
#[derive(Debug, Clone)]
pub struct TempoController {
    fast_speed: (f32, f32),
    slow_speed: (f32, f32),
    delay_ms: (u32, u32),
    audio_cue: bool,
}

impl TempoController {
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            fast_speed: config.fast_speed,
            slow_speed: config.slow_speed,
            delay_ms: config.tempo_delay_ms,
            audio_cue: config.audio_cue,
        }
    }

    /// Switch phase and pick the new multiplier. Entering the slow phase
    /// plays the cue when enabled; cue failures are ignored.
    ///
    /// Returns the delay in milliseconds until the next tick.
    pub fn tick(&self, state: &mut TempoState, rng: &mut Rng, cue: &mut dyn AudioCue) -> u32 {
        state.faster = !state.faster;
        if state.faster {
            state.speed_modifier = sample(rng, self.fast_speed);
            log::debug!("tempo: fast x{:.2}", state.speed_modifier);
        } else {
            state.speed_modifier = sample(rng, self.slow_speed);
            log::debug!("tempo: slow x{:.2}", state.speed_modifier);
            if self.audio_cue {
                if let Err(e) = cue.play() {
                    log::debug!("tempo: {}", e);
                }
            }
        }
        self.next_delay(rng)
    }

    /// Random delay within the configured range, in milliseconds.
    pub fn next_delay(&self, rng: &mut Rng) -> u32 {
        let (min, max) = self.delay_ms;
        random_int(rng, min as i32, max as i32) as u32
    }
}

fn sample(rng: &mut Rng, (min, max): (f32, f32)) -> f32 {
    if max <= min {
        return min;
    }
    random_float(rng, min, max)
}
