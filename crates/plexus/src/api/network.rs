use crate::api::config::{ConfigError, NetworkConfig};
use crate::api::cue::AudioCue;
use crate::api::types::{Bounds, Viewport};
use crate::core::field::ParticleField;
use crate::core::tempo::{TempoController, TempoState};
use crate::core::time::FrameClock;
use crate::renderer::traits::DrawSurface;
use crate::systems::render::render;
use crate::systems::rng::Rng;
use crate::systems::simulation::step;

/// The whole effect: particle field, tempo, and frame clock.
///
/// A host calls [`Network::frame`] once per display refresh and
/// [`Network::tempo_tick`] whenever the delay it last returned elapses.
/// Both run on the same thread; neither blocks.
pub struct Network {
    config: NetworkConfig,
    field: ParticleField,
    tempo: TempoState,
    controller: TempoController,
    clock: FrameClock,
    rng: Rng,
    respawns: u64,
}

impl Network {
    /// Validate `config` and populate the field inside `viewport`.
    pub fn new(config: NetworkConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Rng::new(seed);
        let bounds = Bounds::new(viewport, config.off_screen_margin);
        let field = ParticleField::new(config.dot_count, &mut rng, &bounds, &config);
        log::info!(
            "network: {} dots in {}x{}",
            field.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            controller: TempoController::new(&config),
            clock: FrameClock::new(config.max_frame_gap_ms),
            tempo: TempoState::default(),
            field,
            config,
            rng,
            respawns: 0,
        })
    }

    /// Simulate up to `timestamp` (milliseconds) and draw the result.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, timestamp: f64, viewport: Viewport, surface: &mut S) {
        let dt = self.clock.tick(timestamp);
        self.advance(dt, viewport);
        render(self.field.as_slice(), surface, viewport, &self.config);
    }

    /// Run the simulation step alone for `dt` milliseconds.
    pub fn advance(&mut self, dt: f32, viewport: Viewport) {
        let bounds = Bounds::new(viewport, self.config.off_screen_margin);
        let respawned = step(
            &mut self.field,
            &self.tempo,
            &bounds,
            dt,
            &mut self.rng,
            &self.config,
        );
        self.respawns += respawned as u64;
    }

    /// Toggle the tempo phase. Returns milliseconds until the next call.
    pub fn tempo_tick(&mut self, cue: &mut dyn AudioCue) -> u32 {
        self.controller.tick(&mut self.tempo, &mut self.rng, cue)
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn tempo(&self) -> &TempoState {
        &self.tempo
    }

    /// Total respawns since creation.
    pub fn respawn_count(&self) -> u64 {
        self.respawns
    }
}
