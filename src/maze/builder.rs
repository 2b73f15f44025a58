//! Maze Builder
//!
//! Randomized recursive backtracking over the odd-indexed lattice.
//! This is what every tournament client must reproduce bit for bit.

use tracing::debug;

use crate::config::{MazeConfig, ABSOLUTE_MAX_DIMENSION, MIN_DIMENSION};
use crate::core::rng::SeededEngine;
use crate::core::seed::Seed;
use crate::error::MazeError;
use crate::maze::grid::MazeGrid;

/// Carving directions as `(row, col)` deltas: north, south, west, east.
///
/// The order is part of the replay format: draws index into the eligible
/// subset in exactly this order.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cell every maze is carved from.
pub const START_CELL: (usize, usize) = (1, 1);

/// Perfect-maze generator.
#[derive(Clone, Debug, Default)]
pub struct MazeBuilder {
    config: MazeConfig,
}

impl MazeBuilder {
    /// Create a builder with the given limits.
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generate a maze of side `dimension` driven by `engine`.
    ///
    /// # Algorithm
    ///
    /// Starting at `(1, 1)`, the top cell of the work stack re-enumerates the
    /// directions whose two-away cell is strictly inside the border and still
    /// a wall. With none left the cell is popped (backtrack). Otherwise one is
    /// drawn with `engine.next_int(0, k - 1)`, the connecting cell and the
    /// two-away cell are carved, and the two-away cell is pushed.
    ///
    /// Re-enumerating the top of stack after every push/pop makes this the
    /// exact iterative equivalent of the recursive formulation: same visit
    /// order, same draws.
    ///
    /// Even dimensions leave the last row and column walled.
    ///
    /// # Errors
    ///
    /// [`MazeError::InvalidDimension`] before any draw is taken.
    pub fn generate(
        &self,
        dimension: usize,
        engine: &mut SeededEngine,
    ) -> Result<MazeGrid, MazeError> {
        self.validate_dimension(dimension)?;

        debug!(dimension, seed = engine.seed(), "generating maze");

        let mut grid = MazeGrid::walled(dimension, engine.seed());
        let (start_row, start_col) = START_CELL;
        grid.carve(start_row, start_col);

        let mut stack = vec![START_CELL];
        let mut draws = 0usize;

        while let Some(&(row, col)) = stack.last() {
            let (eligible, count) = eligible_directions(&grid, row, col);

            let Some(choice) = engine.next_index(count) else {
                stack.pop();
                continue;
            };
            draws += 1;

            let (dr, dc) = eligible[choice];
            let (wall_row, wall_col) = offset(row, col, dr, dc, 1);
            let (next_row, next_col) = offset(row, col, dr, dc, 2);

            #[cfg(feature = "debug-tracing")]
            tracing::trace!(row, col, next_row, next_col, choice, count, "carve");

            grid.carve(wall_row, wall_col);
            grid.carve(next_row, next_col);
            stack.push((next_row, next_col));
        }

        debug!(
            dimension,
            seed = grid.seed(),
            draws,
            open_cells = grid.open_cell_count(),
            "maze generated"
        );

        Ok(grid)
    }

    /// Resolve `seed`, build a fresh engine for it, and generate.
    pub fn generate_from_seed(&self, dimension: usize, seed: &Seed) -> Result<MazeGrid, MazeError> {
        // Validate first so a bad dimension never touches the clock
        self.validate_dimension(dimension)?;
        let mut engine = SeededEngine::new(seed.resolve());
        self.generate(dimension, &mut engine)
    }

    fn validate_dimension(&self, dimension: usize) -> Result<(), MazeError> {
        if dimension < MIN_DIMENSION {
            return Err(MazeError::InvalidDimension {
                dimension,
                reason: format!("must be at least {MIN_DIMENSION} to contain the start cell"),
            });
        }
        // Holds even for hand-built configs that skip `from_lookup`
        if dimension > ABSOLUTE_MAX_DIMENSION || dimension.checked_mul(dimension).is_none() {
            return Err(MazeError::InvalidDimension {
                dimension,
                reason: format!("exceeds the hard limit of {ABSOLUTE_MAX_DIMENSION}"),
            });
        }
        if dimension > self.config.max_dimension {
            return Err(MazeError::InvalidDimension {
                dimension,
                reason: format!("exceeds the maximum of {}", self.config.max_dimension),
            });
        }
        Ok(())
    }
}

/// Directions from `(row, col)` whose two-away cell is inside the border and
/// uncarved, in [`DIRECTIONS`] order.
fn eligible_directions(
    grid: &MazeGrid,
    row: usize,
    col: usize,
) -> ([(isize, isize); 4], usize) {
    let mut eligible = [(0, 0); 4];
    let mut count = 0;
    let limit = grid.dimension() as isize - 1;

    for (dr, dc) in DIRECTIONS {
        let r2 = row as isize + dr * 2;
        let c2 = col as isize + dc * 2;
        if r2 > 0 && r2 < limit && c2 > 0 && c2 < limit && grid.is_wall(r2 as usize, c2 as usize) {
            eligible[count] = (dr, dc);
            count += 1;
        }
    }

    (eligible, count)
}

#[inline]
fn offset(row: usize, col: usize, dr: isize, dc: isize, steps: isize) -> (usize, usize) {
    (
        (row as isize + dr * steps) as usize,
        (col as isize + dc * steps) as usize,
    )
}

// =============================================================================
// TESTS
// =============================================================================
