//! Generation Configuration
//!
//! Limits and defaults for maze generation, overridable from the environment.

use std::str::FromStr;

use tracing::warn;

/// Default maze dimension (10 x 10 rooms).
pub const DEFAULT_DIMENSION: usize = 21;

/// Default upper bound on the maze dimension.
pub const DEFAULT_MAX_DIMENSION: usize = 4001;

/// Smallest dimension that contains the start cell `(1, 1)`.
pub const MIN_DIMENSION: usize = 2;

/// Hard ceiling on any configured dimension. Its square fits in `u32`, so
/// cell counts and fingerprints never overflow.
pub const ABSOLUTE_MAX_DIMENSION: usize = u16::MAX as usize;

/// Maze generation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Dimension used when the caller does not pick one.
    pub default_dimension: usize,
    /// Largest accepted dimension. Bounds memory at `max_dimension²` cells.
    pub max_dimension: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            default_dimension: DEFAULT_DIMENSION,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl MazeConfig {
    /// Create config from environment variables.
    ///
    /// Reads `MAZE_DEFAULT_DIMENSION` and `MAZE_MAX_DIMENSION`. Unparseable
    /// values are logged and replaced by the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let max_dimension = parse_var(&lookup, "MAZE_MAX_DIMENSION", defaults.max_dimension)
            .clamp(MIN_DIMENSION, ABSOLUTE_MAX_DIMENSION);
        let default_dimension =
            parse_var(&lookup, "MAZE_DEFAULT_DIMENSION", defaults.default_dimension)
                .clamp(MIN_DIMENSION, max_dimension);

        Self {
            default_dimension,
            max_dimension,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MazeConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, MazeConfig::default());
        assert_eq!(config.default_dimension, 21);
    }

    #[test]
    fn test_overrides() {
        let config = MazeConfig::from_lookup(lookup_from(&[
            ("MAZE_DEFAULT_DIMENSION", "31"),
            ("MAZE_MAX_DIMENSION", " 101 "),
        ]));
        assert_eq!(config.default_dimension, 31);
        assert_eq!(config.max_dimension, 101);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = MazeConfig::from_lookup(lookup_from(&[
            ("MAZE_DEFAULT_DIMENSION", "big"),
            ("MAZE_MAX_DIMENSION", "-5"),
        ]));
        assert_eq!(config, MazeConfig::default());
    }

    #[test]
    fn test_default_dimension_clamped_to_max() {
        let config = MazeConfig::from_lookup(lookup_from(&[
            ("MAZE_DEFAULT_DIMENSION", "99"),
            ("MAZE_MAX_DIMENSION", "51"),
        ]));
        assert_eq!(config.default_dimension, 51);

        let config = MazeConfig::from_lookup(lookup_from(&[("MAZE_MAX_DIMENSION", "0")]));
        assert_eq!(config.max_dimension, MIN_DIMENSION);
        assert_eq!(config.default_dimension, MIN_DIMENSION);
    }

    #[test]
    fn test_max_dimension_clamped_to_ceiling() {
        let config = MazeConfig::from_lookup(lookup_from(&[(
            "MAZE_MAX_DIMENSION",
            "18446744073709551615",
        )]));
        assert_eq!(config.max_dimension, ABSOLUTE_MAX_DIMENSION);
        assert!(ABSOLUTE_MAX_DIMENSION
            .checked_mul(ABSOLUTE_MAX_DIMENSION)
            .is_some_and(|cells| cells <= u32::MAX as usize));
    }
}
