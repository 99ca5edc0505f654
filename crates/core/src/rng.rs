//! RNG module - engine-owned randomness for fruit placement
//!
//! The engine never reaches for a global generator. It owns one
//! [`RandomSource`] handed in at construction, so a fixed seed (or a scripted
//! source in tests) reproduces the exact same sequence of fruit positions.

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // The low bits of an LCG are weak; take the high half.
        let hi = (self.next_u32() >> 16) as u64;
        ((hi * bound as u64) >> 16) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
