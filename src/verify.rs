//! Verification API
//!
//! Verify mazes by deterministic replay. A tournament client that reports a
//! maze fingerprint (or a whole grid) can be checked by regenerating the maze
//! from its dimension and seed.

use thiserror::Error;
use tracing::debug;

use crate::core::hash::GridHash;
use crate::core::rng::SeededEngine;
use crate::core::seed::Seed;
use crate::error::MazeError;
use crate::maze::builder::MazeBuilder;
use crate::maze::grid::MazeGrid;

/// Errors that can occur during verification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerificationError {
    /// Regeneration itself failed.
    #[error("generation failed: {0}")]
    Generation(#[from] MazeError),

    /// Fingerprint of the replayed maze differs from the claim.
    #[error("maze hash mismatch: expected {}, computed {}", hex::encode(.expected), hex::encode(.computed))]
    HashMismatch {
        /// Claimed hash.
        expected: GridHash,
        /// Hash of the replayed maze.
        computed: GridHash,
    },

    /// Claimed grid differs from the replayed one.
    #[error("grid differs from replay at row {row}, column {col}")]
    GridMismatch {
        /// First differing row.
        row: usize,
        /// First differing column.
        col: usize,
    },

    /// Clock seeds are not reproducible and cannot be verified.
    #[error("clock seeds cannot be verified")]
    NonDeterministicSeed,
}

/// Regenerate a maze and check it against a claimed fingerprint.
///
/// Returns the replayed grid on success.
pub fn verify_maze(
    builder: &MazeBuilder,
    dimension: usize,
    seed: &Seed,
    expected: &GridHash,
) -> Result<MazeGrid, VerificationError> {
    if !seed.is_deterministic() {
        return Err(VerificationError::NonDeterministicSeed);
    }

    let grid = builder.generate_from_seed(dimension, seed)?;
    let computed = grid.compute_hash();

    debug!(
        dimension,
        seed = grid.seed(),
        computed = %hex::encode(computed),
        "verifying maze hash"
    );

    if &computed != expected {
        return Err(VerificationError::HashMismatch {
            expected: *expected,
            computed,
        });
    }

    Ok(grid)
}

/// Check a full grid against a replay from its own dimension and seed.
pub fn verify_grid(builder: &MazeBuilder, claimed: &MazeGrid) -> Result<(), VerificationError> {
    let mut engine = SeededEngine::new(claimed.seed());
    let replay = builder.generate(claimed.dimension(), &mut engine)?;

    let dimension = replay.dimension();
    let mismatch = claimed
        .cells()
        .iter()
        .zip(replay.cells())
        .position(|(a, b)| a != b);

    match mismatch {
        Some(idx) => Err(VerificationError::GridMismatch {
            row: idx / dimension,
            col: idx % dimension,
        }),
        None => Ok(()),
    }
}
