//! Maze generation errors.
//!
//! Every variant is a validation failure raised before any carving starts,
//! so a caller never observes a partially generated grid.

use thiserror::Error;

/// Errors raised by the engine and the maze builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// Seed is negative, non-finite, or not an integer.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// `next_int` called with `min > max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// Dimension cannot hold a maze or exceeds the configured limit.
    #[error("invalid dimension {dimension}: {reason}")]
    InvalidDimension {
        /// Requested dimension.
        dimension: usize,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MazeError::InvalidRange { min: 5, max: 2 };
        assert_eq!(err.to_string(), "invalid range: min 5 is greater than max 2");

        let err = MazeError::InvalidDimension {
            dimension: 0,
            reason: "must be at least 2".to_string(),
        };
        assert_eq!(err.to_string(), "invalid dimension 0: must be at least 2");

        let err = MazeError::InvalidSeed("-1".to_string());
        assert_eq!(err.to_string(), "invalid seed: -1");
    }
}
