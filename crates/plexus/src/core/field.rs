use crate::api::config::NetworkConfig;
use crate::api::types::Bounds;
use crate::systems::particle::Particle;
use crate::systems::rng::Rng;

/// Fixed-size, ordered collection of particles.
/// Created once; particles are respawned in place, never added or removed.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create `count` freshly initialized particles.
    pub fn new(count: usize, rng: &mut Rng, bounds: &Bounds, config: &NetworkConfig) -> Self {
        let particles = (0..count)
            .map(|_| Particle::new(rng, bounds, config))
            .collect();
        Self { particles }
    }

    /// Build a field from existing particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Viewport;

    #[test]
    fn creates_requested_count() {
        let mut rng = Rng::new(42);
        let bounds = Bounds::new(Viewport::new(640.0, 480.0), 50.0);
        let field = ParticleField::new(120, &mut rng, &bounds, &NetworkConfig::default());
        assert_eq!(field.len(), 120);
        assert!(field.iter().all(|p| bounds.contains(p.position)));
    }

    #[test]
    fn indexed_access() {
        let mut rng = Rng::new(1);
        let bounds = Bounds::new(Viewport::new(100.0, 100.0), 10.0);
        let field = ParticleField::new(3, &mut rng, &bounds, &NetworkConfig::default());
        let second = field.iter().nth(1).map(|p| p.position);
        assert_eq!(field.get(1).map(|p| p.position), second);
        assert!(field.get(3).is_none());
    }
}
