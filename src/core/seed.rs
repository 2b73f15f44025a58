//! Seed Resolution
//!
//! Turns the seeds players and tournaments deal in (numbers, tournament IDs,
//! or nothing at all) into the numeric seed fed to [`SeededEngine`].
//!
//! [`SeededEngine`]: super::rng::SeededEngine

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A maze seed as supplied by a caller.
///
/// Serializes untagged: a JSON number is [`Seed::Numeric`], a JSON string is
/// [`Seed::Text`], and `null` is [`Seed::Clock`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Raw numeric seed, used as-is.
    Numeric(u64),
    /// Human-readable seed (e.g. a tournament maze seed), folded by
    /// [`hash_string_to_seed`].
    Text(String),
    /// No seed supplied: derived from the wall clock. Never reproducible.
    #[default]
    Clock,
}

impl Seed {
    /// Resolve to the numeric engine seed.
    pub fn resolve(&self) -> u64 {
        match self {
            Seed::Numeric(value) => *value,
            Seed::Text(text) => hash_string_to_seed(text),
            Seed::Clock => clock_seed(),
        }
    }

    /// Whether resolving this seed twice yields the same value.
    ///
    /// False for [`Seed::Clock`] and for empty text, which falls back to the
    /// clock.
    pub fn is_deterministic(&self) -> bool {
        match self {
            Seed::Numeric(_) => true,
            Seed::Text(text) => !text.is_empty(),
            Seed::Clock => false,
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Numeric(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Seed::Clock)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Numeric(value) => write!(f, "{value}"),
            Seed::Text(text) => write!(f, "{text:?}"),
            Seed::Clock => write!(f, "<clock>"),
        }
    }
}

/// Fold a string into a non-negative 32-bit seed.
///
/// Iterates UTF-16 code units left to right with
/// `hash = ((hash << 5) - hash) + unit`, wrapping at 32 bits after every
/// step, and returns the absolute value. `i32::MIN` folds to `2^31`.
///
/// Empty input has nothing to fold and falls back to [`clock_seed`].
pub fn hash_string_to_seed(text: &str) -> u64 {
    if text.is_empty() {
        warn!("empty seed string, falling back to clock seed");
        return clock_seed();
    }
    fold_utf16(text) as u64
}

/// The pure fold behind [`hash_string_to_seed`].
pub fn fold_utf16(text: &str) -> u32 {
    let hash = text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Non-deterministic seed from the current wall-clock time in milliseconds.
///
/// Only suitable for casual play; tournament mazes must use a fixed seed.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        // These values must never change!
        // Tournament mazes are keyed by these seeds.
        assert_eq!(hash_string_to_seed("abc"), 96354);
        assert_eq!(hash_string_to_seed("tournament-42"), 1996644126);
        assert_eq!(hash_string_to_seed("Tournament #1"), 1197695515);
    }

    #[test]
    fn test_hash_stable_across_calls() {
        let first = hash_string_to_seed("tournament-42");
        for _ in 0..100 {
            assert_eq!(hash_string_to_seed("tournament-42"), first);
        }
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        // U+00E9 is a single UTF-16 unit (two UTF-8 bytes)
        assert_eq!(fold_utf16("é"), 233);
        // Astral characters fold as a surrogate pair
        assert_eq!(fold_utf16("😀"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_hash_wraps_at_32_bits() {
        // Long enough to overflow i32 many times over
        let text = "z".repeat(64);
        let folded = fold_utf16(&text);
        assert_eq!(folded, fold_utf16(&text));
        assert!(u64::from(folded) <= 1 << 31);
    }

    #[test]
    fn test_empty_string_uses_clock() {
        let seed = hash_string_to_seed("");
        // Any real clock is well past 2020-01-01
        assert!(seed > 1_577_836_800_000);
    }

    #[test]
    fn test_seed_resolution() {
        assert_eq!(Seed::Numeric(7).resolve(), 7);
        assert_eq!(Seed::from("abc").resolve(), 96354);
        assert!(Seed::Clock.resolve() > 0);

        assert!(Seed::Numeric(7).is_deterministic());
        assert!(Seed::from("abc").is_deterministic());
        assert!(!Seed::from("").is_deterministic());
        assert!(!Seed::Clock.is_deterministic());
    }

    #[test]
    fn test_seed_from_option() {
        assert_eq!(Seed::from(None::<&str>), Seed::Clock);
        assert_eq!(Seed::default(), Seed::Clock);
        assert_eq!(Seed::from(Some(12u64)), Seed::Numeric(12));
    }

    #[test]
    fn test_seed_serde_untagged() {
        let numeric: Seed = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, Seed::Numeric(42));

        let text: Seed = serde_json::from_str("\"tournament-42\"").unwrap();
        assert_eq!(text, Seed::Text("tournament-42".to_string()));

        let clock: Seed = serde_json::from_str("null").unwrap();
        assert_eq!(clock, Seed::Clock);

        assert_eq!(serde_json::to_string(&Seed::Numeric(9)).unwrap(), "9");
    }
}
