//! RNG module - seeded generation and the per-level seed contract
//!
//! A simple LCG drives every random decision in the engine so that a
//! level is reproducible from its (mode, level) pair alone. The palette
//! and the shuffle use two distinct seeds derived from the same inputs,
//! keeping the streams independently replayable.

use huesort_types::{GameMode, PALETTE_SEED_STRIDE, SHUFFLE_SEED_OFFSET};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a uniform f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Generate a uniform f64 in [min, max)
    pub fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Palette seed for a level: `(ordinal + 1) * 10000 + level`.
///
/// Casual level 1 -> 10001, Precision level 1 -> 20001, and so on; the
/// `+ 1` keeps every seed nonzero and mode streams disjoint.
pub fn palette_seed(mode: GameMode, level: u32) -> u32 {
    (mode.ordinal() + 1) * PALETTE_SEED_STRIDE + level
}

/// Shuffle seed for a level: a fixed offset from the palette seed, so
/// palette and shuffle are reproducible independently of each other.
pub fn shuffle_seed(mode: GameMode, level: u32) -> u32 {
    palette_seed(mode, level) + SHUFFLE_SEED_OFFSET
}
