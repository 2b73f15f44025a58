//! Maze Module
//!
//! Perfect-maze generation on top of the seeded engine. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `builder`: Recursive-backtracking carver
//! - `grid`: Generated wall/passage matrix
//! - `analysis`: Connectivity and acyclicity checks

pub mod builder;
pub mod grid;
pub mod analysis;

// Re-export key types
pub use builder::{MazeBuilder, DIRECTIONS, START_CELL};
pub use grid::MazeGrid;
pub use analysis::MazeStats;
