//! Maze Grid
//!
//! The square wall/passage matrix handed to the rendering and gameplay layers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MIN_DIMENSION;
use crate::core::hash::{compute_grid_hash, GridHash};

/// Glyph used for walls in the text rendering.
pub const WALL_GLYPH: char = '#';

/// Glyph used for passages in the text rendering.
pub const PASSAGE_GLYPH: char = '.';

/// A generated maze.
///
/// `dimension × dimension` cells in row-major order, `true` = wall,
/// `false` = passage. Annotated with the numeric seed that produced it.
/// Grids are only mutated by the builder; callers get an immutable value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct MazeGrid {
    dimension: usize,
    seed: u64,
    cells: Vec<bool>,
}

/// Unvalidated wire form of [`MazeGrid`].
#[derive(Deserialize)]
struct RawGrid {
    dimension: usize,
    seed: u64,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for MazeGrid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.dimension < MIN_DIMENSION {
            return Err(format!(
                "dimension {} is below the minimum of {}",
                raw.dimension, MIN_DIMENSION
            ));
        }
        let expected = raw.dimension.checked_mul(raw.dimension);
        if expected != Some(raw.cells.len()) {
            return Err(format!(
                "expected {} cells for dimension {}, got {}",
                raw.dimension.saturating_mul(raw.dimension),
                raw.dimension,
                raw.cells.len()
            ));
        }
        Ok(Self {
            dimension: raw.dimension,
            seed: raw.seed,
            cells: raw.cells,
        })
    }
}

impl MazeGrid {
    /// Fully walled grid, the starting point for carving.
    pub(crate) fn walled(dimension: usize, seed: u64) -> Self {
        Self {
            dimension,
            seed,
            cells: vec![true; dimension * dimension],
        }
    }

    /// Turn a wall into a passage. Caller guarantees bounds.
    #[inline]
    pub(crate) fn carve(&mut self, row: usize, col: usize) {
        let idx = row * self.dimension + col;
        self.cells[idx] = false;
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Numeric seed that produced this grid.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether `(row, col)` is a wall. Out-of-bounds cells count as walls.
    #[inline]
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        if row >= self.dimension || col >= self.dimension {
            return true;
        }
        self.cells[row * self.dimension + col]
    }

    /// Whether `(row, col)` is a carved passage.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        !self.is_wall(row, col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.dimension)
    }

    /// Number of carved cells.
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&wall| !wall).count()
    }

    /// Rows as `1` (wall) / `0` (passage) bytes, the layout the renderer consumes.
    pub fn to_bit_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&wall| wall as u8).collect())
            .collect()
    }

    /// Fingerprint for cross-client comparison.
    pub fn compute_hash(&self) -> GridHash {
        compute_grid_hash(self.dimension as u32, self.seed, &self.cells)
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|&wall| if wall { WALL_GLYPH } else { PASSAGE_GLYPH })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MazeGrid {{ dimension: {}, seed: {} }}", self.dimension, self.seed)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> MazeGrid {
        let mut grid = MazeGrid::walled(3, 11);
        grid.carve(1, 1);
        grid
    }

    #[test]
    fn test_walled_grid() {
        let grid = MazeGrid::walled(4, 0);
        assert_eq!(grid.cells().len(), 16);
        assert!(grid.cells().iter().all(|&wall| wall));
        assert_eq!(grid.open_cell_count(), 0);
    }

    #[test]
    fn test_cell_access() {
        let grid = sample_grid();
        assert!(grid.is_open(1, 1));
        assert!(grid.is_wall(0, 1));
        assert!(grid.is_wall(1, 2));
        // Outside the grid reads as wall
        assert!(grid.is_wall(3, 0));
        assert!(grid.is_wall(0, usize::MAX));
        assert_eq!(grid.open_cell_count(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample_grid().to_string(), "###\n#.#\n###\n");
    }

    #[test]
    fn test_bit_rows() {
        assert_eq!(
            sample_grid().to_bit_rows(),
            vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn test_hash_tracks_cells() {
        let grid = sample_grid();
        let walled = MazeGrid::walled(3, 11);
        assert_eq!(grid.compute_hash(), sample_grid().compute_hash());
        assert_ne!(grid.compute_hash(), walled.compute_hash());
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = sample_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let back: MazeGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_deserialize_rejects_bad_shape() {
        let json = r#"{"dimension":3,"seed":1,"cells":[true,false]}"#;
        let err = serde_json::from_str::<MazeGrid>(json).unwrap_err();
        assert!(err.to_string().contains("expected 9 cells"));

        let json = r#"{"dimension":0,"seed":1,"cells":[]}"#;
        assert!(serde_json::from_str::<MazeGrid>(json).is_err());
    }
}
