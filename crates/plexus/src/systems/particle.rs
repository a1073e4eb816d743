//! A single dot travelling along a fixed straight line.
//!
//! Each particle owns a trajectory: a line through `origin` with slope
//! `slope`. Motion is arc-length driven, so a particle covers exactly
//! `|speed * modifier * dt|` pixels per step no matter how steep its line is.

use std::f32::consts::TAU;

use glam::Vec2;

use super::geometry::{random_float, random_int};
use super::rng::Rng;
use crate::api::config::NetworkConfig;
use crate::api::types::{Bounds, Rgb};

/// Steepest slope a trajectory may have (about 89.4 degrees).
pub const MAX_TRAJECTORY_SLOPE: f32 = 100.0;

const MIN_RADIUS: i32 = 2;
const MIN_OPACITY: f32 = 0.2;
const MAX_OPACITY: f32 = 0.9;

/// Screen edge a respawned particle enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// A single dot with its trajectory and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    /// Anchor point of the trajectory line.
    pub origin: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Signed speed along the line, in pixels per millisecond.
    /// Positive moves toward +x.
    pub speed: f32,
    pub color: Rgb,
    pub slope: f32,
}

impl Particle {
    /// Create a particle somewhere inside `bounds`, margin included.
    pub fn new(rng: &mut Rng, bounds: &Bounds, config: &NetworkConfig) -> Self {
        let mut p = Particle {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            radius: MIN_RADIUS as f32,
            opacity: 1.0,
            speed: 0.0,
            color: Rgb::BLACK,
            slope: 0.0,
        };
        p.initialize(rng, bounds, config);
        p
    }

    /// Re-randomize every attribute and anchor the particle at a random
    /// point of the expanded area.
    pub fn initialize(&mut self, rng: &mut Rng, bounds: &Bounds, config: &NetworkConfig) {
        let start = Vec2::new(
            random_float(rng, bounds.min_x(), bounds.max_x()),
            random_float(rng, bounds.min_y(), bounds.max_y()),
        );
        self.position = start;
        self.origin = start;
        self.radius = random_int(rng, MIN_RADIUS, config.max_radius as i32) as f32;
        self.opacity = if config.transparent_dots {
            random_float(rng, MIN_OPACITY, MAX_OPACITY)
        } else {
            1.0
        };
        self.speed = random_float(rng, -config.max_speed, config.max_speed);
        let idx = rng.next_int(config.palette.len() as u32) as usize;
        self.color = config.palette.get(idx).copied().unwrap_or(Rgb::BLACK);
        self.slope = clamp_slope(random_float(rng, 0.0, TAU).tan());
    }

    /// True once the particle has left the expanded area on any side.
    pub fn needs_respawn(&self, bounds: &Bounds) -> bool {
        self.position.x < bounds.min_x()
            || self.position.y < bounds.min_y()
            || self.position.x > bounds.max_x()
            || self.position.y > bounds.max_y()
    }

    /// Re-randomize the particle, move it onto a random edge of the
    /// expanded area, and aim it at a random visible point so it crosses
    /// the viewport before it can leave again. Returns the edge chosen.
    pub fn respawn(&mut self, rng: &mut Rng, bounds: &Bounds, config: &NetworkConfig) -> Edge {
        self.initialize(rng, bounds, config);

        let edge = if rng.coin() {
            if rng.coin() { Edge::Left } else { Edge::Right }
        } else if rng.coin() {
            Edge::Top
        } else {
            Edge::Bottom
        };

        // The coordinate along the edge stays within the visible span.
        let entry = match edge {
            Edge::Left | Edge::Right => {
                let x = if edge == Edge::Left { bounds.min_x() } else { bounds.max_x() };
                Vec2::new(x, random_float(rng, 0.0, bounds.height))
            }
            Edge::Top | Edge::Bottom => {
                let y = if edge == Edge::Top { bounds.min_y() } else { bounds.max_y() };
                Vec2::new(random_float(rng, 0.0, bounds.width), y)
            }
        };
        let target = Vec2::new(
            random_float(rng, 0.0, bounds.width),
            random_float(rng, 0.0, bounds.height),
        );
        self.position = entry;
        self.origin = entry;
        self.aim_at(target);
        edge
    }

    /// Point the trajectory from the current position toward `target`,
    /// keeping the speed magnitude.
    ///
    /// With a clamped slope the line no longer hits `target` exactly, but
    /// it still moves toward it on both axes, so the path passes through a
    /// point whose coordinates each lie between the entry and the target.
    fn aim_at(&mut self, target: Vec2) {
        let d = target - self.position;
        // d.x == 0 yields ±inf, which the clamp turns into a vertical-ish line
        self.slope = clamp_slope(d.y / d.x);
        let magnitude = self.speed.abs();
        self.speed = if d.x < 0.0 { -magnitude } else { magnitude };
    }

    /// Offset the particle would move by in one step.
    pub fn displacement(&self, dt: f32, speed_modifier: f32) -> Vec2 {
        let s = self.speed * speed_modifier * dt;
        let dx = s / (1.0 + self.slope * self.slope).sqrt();
        Vec2::new(dx, self.slope * dx)
    }

    /// Move along the trajectory line.
    pub fn advance(&mut self, dt: f32, speed_modifier: f32) {
        self.position += self.displacement(dt, speed_modifier);
    }
}

fn clamp_slope(slope: f32) -> f32 {
    if slope.is_nan() {
        return 0.0;
    }
    slope.clamp(-MAX_TRAJECTORY_SLOPE, MAX_TRAJECTORY_SLOPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Viewport;

    /// Perpendicular distance from the position to the trajectory line.
    fn off_line_distance(p: &Particle) -> f32 {
        let d = p.position - p.origin;
        (p.slope * d.x - d.y).abs() / (1.0 + p.slope * p.slope).sqrt()
    }

    fn visible(p: &Particle, b: &Bounds, slack: f32) -> bool {
        p.position.x >= -slack
            && p.position.x <= b.width + slack
            && p.position.y >= -slack
            && p.position.y <= b.height + slack
    }

    fn bounds() -> Bounds {
        Bounds::new(Viewport::new(800.0, 600.0), 50.0)
    }

    fn particle_at(x: f32, y: f32, speed: f32, slope: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            origin: Vec2::new(x, y),
            radius: 2.0,
            opacity: 1.0,
            speed,
            color: Rgb::BLACK,
            slope,
        }
    }

    #[test]
    fn initialize_respects_ranges() {
        let mut rng = Rng::new(42);
        let config = NetworkConfig {
            transparent_dots: true,
            ..NetworkConfig::default()
        };
        let b = bounds();
        for _ in 0..500 {
            let p = Particle::new(&mut rng, &b, &config);
            assert!(b.contains(p.position));
            assert_eq!(p.position, p.origin);
            assert!(p.radius >= 2.0 && p.radius <= config.max_radius as f32);
            assert!(p.opacity >= 0.2 && p.opacity <= 0.9);
            assert!(p.speed.abs() <= config.max_speed);
            assert!(config.palette.contains(&p.color));
            assert!(p.slope.is_finite() && p.slope.abs() <= MAX_TRAJECTORY_SLOPE);
        }
    }

    #[test]
    fn opaque_dots_by_default() {
        let mut rng = Rng::new(1);
        let p = Particle::new(&mut rng, &bounds(), &NetworkConfig::default());
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn needs_respawn_past_margin() {
        let b = bounds();
        assert!(particle_at(800.0 + 50.0 + 1.0, 300.0, 0.0, 0.0).needs_respawn(&b));
        assert!(particle_at(-51.0, 300.0, 0.0, 0.0).needs_respawn(&b));
        assert!(particle_at(400.0, -51.0, 0.0, 0.0).needs_respawn(&b));
        assert!(particle_at(400.0, 651.0, 0.0, 0.0).needs_respawn(&b));
        assert!(!particle_at(850.0, 650.0, 0.0, 0.0).needs_respawn(&b));
        assert!(!particle_at(-20.0, 10.0, 0.0, 0.0).needs_respawn(&b));
    }

    #[test]
    fn respawn_lands_on_edge_inside_bounds() {
        let mut rng = Rng::new(7);
        let config = NetworkConfig::default();
        let b = bounds();
        let mut p = particle_at(851.0, 300.0, 0.05, 0.0);
        assert!(p.needs_respawn(&b));
        for _ in 0..1000 {
            let edge = p.respawn(&mut rng, &b, &config);
            assert!(!p.needs_respawn(&b), "respawned at {:?}", p.position);
            assert_eq!(p.position, p.origin);
            let on_edge = match edge {
                Edge::Left => p.position.x == b.min_x(),
                Edge::Right => p.position.x == b.max_x(),
                Edge::Top => p.position.y == b.min_y(),
                Edge::Bottom => p.position.y == b.max_y(),
            };
            assert!(on_edge, "{:?} entry at {:?}", edge, p.position);
        }
    }

    #[test]
    fn respawn_heads_inward() {
        let mut rng = Rng::new(2024);
        let config = NetworkConfig::default();
        let b = bounds();
        let mut p = particle_at(0.0, 0.0, 0.0, 0.0);
        let mut seen = [false; 4];
        for _ in 0..2000 {
            let edge = p.respawn(&mut rng, &b, &config);
            let step = p.displacement(16.0, 1.0);
            match edge {
                Edge::Left => { seen[0] = true; assert!(step.x >= 0.0) }
                Edge::Right => { seen[1] = true; assert!(step.x <= 0.0) }
                Edge::Top => { seen[2] = true; assert!(step.y >= 0.0) }
                Edge::Bottom => { seen[3] = true; assert!(step.y <= 0.0) }
            }
        }
        assert!(seen.iter().all(|s| *s), "all four edges should be used");
    }

    #[test]
    fn respawned_particles_cross_the_viewport() {
        let mut rng = Rng::new(31337);
        let config = NetworkConfig::default();
        let b = bounds();
        let mut p = particle_at(0.0, 0.0, 0.0, 0.0);
        for i in 0..5000 {
            let edge = p.respawn(&mut rng, &b, &config);
            // Walk the trajectory in half-pixel steps, whatever the sampled speed.
            let mut walker = p.clone();
            walker.speed = p.speed.signum() * 0.5;
            let mut seen = visible(&walker, &b, 1.0);
            let mut steps = 0;
            while !seen && !walker.needs_respawn(&b) && steps < 20_000 {
                walker.advance(1.0, 1.0);
                seen = visible(&walker, &b, 1.0);
                steps += 1;
            }
            assert!(seen, "respawn {} from {:?} at {:?} with slope {} never became visible", i, edge, p.position, p.slope);
        }
    }

    #[test]
    fn aim_at_heads_toward_target() {
        let mut p = particle_at(-50.0, 300.0, -0.03, 0.0);
        p.aim_at(Vec2::new(400.0, 100.0));
        assert!(p.speed > 0.0);
        assert!((p.slope - (-200.0 / 450.0)).abs() < 1e-6);

        let mut down = particle_at(200.0, -50.0, 0.02, 0.0);
        down.aim_at(Vec2::new(200.0, 300.0));
        assert_eq!(down.slope, MAX_TRAJECTORY_SLOPE);
        assert!(down.displacement(16.0, 1.0).y > 0.0);

        let mut up = particle_at(200.0, 650.0, 0.02, 0.0);
        up.aim_at(Vec2::new(200.0, 300.0));
        assert!(up.displacement(16.0, 1.0).y < 0.0);
    }

    #[test]
    fn advance_preserves_speed_along_line() {
        for slope in [0.0, 0.5, -3.0, 42.0, -MAX_TRAJECTORY_SLOPE] {
            let mut p = particle_at(100.0, 100.0, -0.04, slope);
            let before = p.position;
            p.advance(16.0, 2.0);
            let moved = (p.position - before).length();
            let expected = (0.04f32 * 2.0 * 16.0).abs();
            assert!(
                (moved - expected).abs() < 1e-4,
                "slope {}: moved {} expected {}",
                slope,
                moved,
                expected
            );
        }
    }

    #[test]
    fn advance_stays_on_trajectory() {
        let mut p = particle_at(10.0, 20.0, 0.03, -1.7);
        for _ in 0..100 {
            p.advance(16.0, 1.5);
        }
        assert!(off_line_distance(&p) < 1e-2, "drifted {}", off_line_distance(&p));
    }

    #[test]
    fn zero_dt_is_noop() {
        let mut p = particle_at(12.5, -4.0, 0.05, 7.0);
        p.advance(0.0, 2.0);
        assert_eq!(p.position, Vec2::new(12.5, -4.0));
    }

    #[test]
    fn clamp_slope_handles_extremes() {
        assert_eq!(clamp_slope(f32::INFINITY), MAX_TRAJECTORY_SLOPE);
        assert_eq!(clamp_slope(f32::NEG_INFINITY), -MAX_TRAJECTORY_SLOPE);
        assert_eq!(clamp_slope(f32::NAN), 0.0);
        assert_eq!(clamp_slope(0.25), 0.25);
    }
}
