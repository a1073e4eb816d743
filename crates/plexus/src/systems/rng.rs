//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

/// Xorshift64 generator state.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a uniform float in [0, 1).
    pub fn next_unit(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, so the result never rounds up to 1.0.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}
