//! Scalar helpers shared by the particle and render systems.

use glam::Vec2;

use super::rng::Rng;

/// Uniformly distributed integer in `[min, max]`, both ends inclusive.
pub fn random_int(rng: &mut Rng, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    let span = (max as i64 - min as i64 + 1) as u32;
    min + rng.next_int(span) as i32
}

/// Uniformly distributed float in `[min, max)`.
pub fn random_float(rng: &mut Rng, min: f32, max: f32) -> f32 {
    scale_unit(rng.next_unit(), min, max)
}

/// Map a unit sample `u` in `[0, 1)` onto `[min, max)`.
/// Results that round up to `max` are pulled back to the float just below it.
fn scale_unit(u: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    let v = (min as f64 + u as f64 * (max as f64 - min as f64)) as f32;
    if v >= max {
        next_below(max).max(min)
    } else {
        v
    }
}

/// Largest f32 strictly less than `x` (finite `x` only).
fn next_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_is_inclusive() {
        let mut rng = Rng::new(11);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = random_int(&mut rng, 2, 4);
            assert!((2..=4).contains(&v));
            seen[(v - 2) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value in [2, 4] should appear");
    }

    #[test]
    fn random_int_handles_negative_span() {
        let mut rng = Rng::new(5);
        for _ in 0..200 {
            let v = random_int(&mut rng, -50, 50);
            assert!((-50..=50).contains(&v));
        }
    }

    #[test]
    fn random_int_degenerate_range() {
        let mut rng = Rng::new(5);
        assert_eq!(random_int(&mut rng, 3, 3), 3);
    }

    #[test]
    fn random_float_half_open() {
        let mut rng = Rng::new(17);
        for _ in 0..1000 {
            let v = random_float(&mut rng, -0.05, 0.05);
            assert!(v >= -0.05 && v < 0.05, "sample {} out of range", v);
        }
    }

    #[test]
    fn largest_unit_sample_stays_below_max() {
        let u = 1.0 - 1.0 / (1u32 << 24) as f32;
        for (min, max) in [(0.1, 0.3), (-0.05, 0.05), (0.0, std::f32::consts::TAU), (-850.0, -50.0), (-1.0, 0.0)] {
            let v = scale_unit(u, min, max);
            assert!(v >= min && v < max, "[{}, {}) gave {}", min, max, v);
        }
    }

    #[test]
    fn smallest_unit_sample_is_min() {
        assert_eq!(scale_unit(0.0, 0.2, 0.9), 0.2);
        assert_eq!(scale_unit(0.0, -50.0, 650.0), -50.0);
    }

    #[test]
    fn next_below_steps_one_ulp() {
        assert!(next_below(0.3) < 0.3);
        assert!(next_below(-2.0) < -2.0);
        assert!(next_below(0.0) < 0.0);
        assert_eq!(next_below(1.0), 1.0 - f32::EPSILON / 2.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(3.0, -7.5);
        let b = Vec2::new(-12.0, 40.0);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn distance_three_four_five() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }
}
