//! # Labyrinth Maze Core
//!
//! Deterministic maze generation for Labyrinth Legends tournaments.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    LABYRINTH MAZE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Seeded LCG engine                         │
//! │  ├── seed.rs     - String/number/clock seed resolution       │
//! │  └── hash.rs     - Grid fingerprints for verification        │
//! │                                                              │
//! │  maze/           - Maze generation (deterministic)           │
//! │  ├── builder.rs  - Recursive-backtracking carver             │
//! │  ├── grid.rs     - Wall/passage matrix + seed                │
//! │  └── analysis.rs - Connectivity and acyclicity checks        │
//! │                                                              │
//! │  verify.rs       - Replay verification of claimed mazes      │
//! │  config.rs       - Generation limits from the environment    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given identical seed and dimension, every client produces the
//! **identical grid**:
//! - Exact integer LCG arithmetic
//! - String seeds folded over UTF-16 code units with 32-bit wrapping
//! - Fixed direction enumeration order
//! - No shared engine: each generation owns its [`SeededEngine`]
//!
//! ```
//! use labyrinth_maze::{MazeBuilder, SeededEngine, hash_string_to_seed};
//!
//! let seed = hash_string_to_seed("abc");
//! let grid = MazeBuilder::default()
//!     .generate(5, &mut SeededEngine::new(seed))
//!     .unwrap();
//! assert_eq!(grid.to_string(), "#####\n#...#\n###.#\n#...#\n#####\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod maze;
pub mod verify;

// Re-export commonly used types
pub use config::MazeConfig;
pub use crate::core::rng::SeededEngine;
pub use crate::core::seed::{Seed, hash_string_to_seed};
pub use crate::core::hash::GridHash;
pub use error::MazeError;
pub use maze::{MazeBuilder, MazeGrid, MazeStats};
pub use verify::{verify_maze, verify_grid, VerificationError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
