//! Seeded Random Number Engine
//!
//! Linear congruential generator shared by every Labyrinth client.
//! Given the same seed, produces the identical draw sequence on all platforms,
//! which is what lets tournament players race on the same maze.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// LCG modulus (2^31).
pub const LCG_MODULUS: u64 = 1 << 31;

/// LCG multiplier.
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;

/// LCG increment.
pub const LCG_INCREMENT: u64 = 12_345;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
pub const MAX_SAFE_SEED: f64 = 9_007_199_254_740_991.0;

/// Deterministic PRNG using the classic `1103515245 / 12345 / 2^31` LCG.
///
/// # Determinism Guarantee
///
/// All state transitions are exact integer arithmetic. Replay data recorded
/// by other clients depends on these constants and on the `m - 1`
/// normalizer in [`SeededEngine::next`]; neither may change.
///
/// # Example
///
/// ```
/// use labyrinth_maze::core::rng::SeededEngine;
///
/// let mut engine = SeededEngine::new(42);
/// engine.next();
/// assert_eq!(engine.state(), 1250496027); // Always the same!
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededEngine {
    seed: u64,
    state: u64,
}

impl Default for SeededEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SeededEngine {
    /// Create a new engine from a non-negative seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, state: seed }
    }

    /// Create an engine from a signed seed, rejecting negative values.
    pub fn try_from_i64(seed: i64) -> Result<Self, MazeError> {
        u64::try_from(seed)
            .map(Self::new)
            .map_err(|_| MazeError::InvalidSeed(format!("{seed} is negative")))
    }

    /// Create an engine from a seed that arrived as a floating point number
    /// (JSON payloads, browser clients).
    ///
    /// Rejects values that are not finite, not integral, negative, or beyond
    /// the exactly representable integer range.
    pub fn try_from_f64(seed: f64) -> Result<Self, MazeError> {
        if !seed.is_finite() {
            return Err(MazeError::InvalidSeed(format!("{seed} is not finite")));
        }
        if seed.fract() != 0.0 {
            return Err(MazeError::InvalidSeed(format!("{seed} is not an integer")));
        }
        if seed < 0.0 {
            return Err(MazeError::InvalidSeed(format!("{seed} is negative")));
        }
        if seed > MAX_SAFE_SEED {
            return Err(MazeError::InvalidSeed(format!(
                "{seed} exceeds the exact integer range"
            )));
        }
        Ok(Self::new(seed as u64))
    }

    /// Advance the generator and return a value in `[0, 1]`.
    ///
    /// The state is divided by `m - 1`, so the single state `m - 1` yields
    /// exactly `1.0`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        // Reducing first is congruent and keeps the product inside u64
        // for seeds wider than 31 bits (millisecond clocks).
        self.state = (LCG_MULTIPLIER * (self.state % LCG_MODULUS) + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / (LCG_MODULUS - 1) as f64
    }

    /// Generate a random integer in range `[min, max]`.
    ///
    /// Uses the floor mapping `floor(next() * (max - min + 1)) + min`.
    /// No rejection sampling: the draw count per call is always exactly one.
    #[inline]
    pub fn next_int(&mut self, min: i64, max: i64) -> Result<i64, MazeError> {
        if min > max {
            return Err(MazeError::InvalidRange { min, max });
        }
        let span = (max as i128 - min as i128 + 1) as f64;
        let offset = (self.next() * span).floor() as i128;
        // next() == 1.0 would land one past max
        let value = (min as i128 + offset).min(max as i128);
        Ok(value as i64)
    }

    /// Draw an index into a collection of `len` elements.
    ///
    /// Equivalent to `next_int(0, len - 1)`; this is the draw the maze
    /// builder makes per carving step. Returns `None` without consuming a
    /// draw when `len` is zero.
    #[inline]
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.next_int(0, len as i64 - 1).ok().map(|idx| idx as usize)
    }

    /// Seed this engine was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: u64) {
        self.state = state;
    }
}

// =============================================================================
// TESTS
// =============================================================================
