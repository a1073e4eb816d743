use crate::api::config::NetworkConfig;
use crate::api::types::Bounds;
use crate::core::field::ParticleField;
use crate::core::tempo::TempoState;
use crate::systems::rng::Rng;

/// Advance every particle by `dt` milliseconds and respawn the ones that
/// left the expanded area. Returns the number of respawns.
pub fn step(
    field: &mut ParticleField,
    tempo: &TempoState,
    bounds: &Bounds,
    dt: f32,
    rng: &mut Rng,
    config: &NetworkConfig,
) -> u32 {
    let mut respawned = 0;
    for (i, particle) in field.iter_mut().enumerate() {
        particle.advance(dt, tempo.speed_modifier);
        if particle.needs_respawn(bounds) {
            let edge = particle.respawn(rng, bounds, config);
            log::trace!("particle {} respawned from {:?}", i, edge);
            respawned += 1;
        }
    }
    respawned
}
