//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform determinism.
//! They form the foundation every client relies on to build the same maze.

pub mod rng;
pub mod seed;
pub mod hash;

// Re-export core types
pub use rng::SeededEngine;
pub use seed::{Seed, hash_string_to_seed, clock_seed};
pub use hash::{GridHash, GridHasher, compute_grid_hash};
