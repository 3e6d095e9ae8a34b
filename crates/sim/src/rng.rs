//! Simple LCG (Linear Congruential Generator) RNG.
//!
//! Uses constants from Numerical Recipes. Not cryptographic and not meant
//! to be: the point is cheap, seed-reproducible randomness for body spawns.

/// Deterministic 32-bit LCG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Random float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Split off an independent generator seeded from this one.
    ///
    /// Each body owns its own generator so bodies stay deterministic
    /// regardless of tick interleaving.
    pub fn fork(&mut self) -> SimpleRng {
        SimpleRng::new(self.next_u32())
    }
}
