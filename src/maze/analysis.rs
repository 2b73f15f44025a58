//! Structural Analysis
//!
//! Checks that a grid really is a perfect maze: one connected, cycle-free
//! set of passages grown from the start cell.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::maze::builder::START_CELL;
use crate::maze::grid::MazeGrid;

/// Summary of a grid's open-cell graph.
///
/// Vertices are open cells; edges join orthogonally adjacent open cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeStats {
    /// Number of open cells.
    pub open_cells: usize,
    /// Number of edges between orthogonally adjacent open cells.
    pub passages: usize,
    /// Open cells with exactly one open neighbor.
    pub dead_ends: usize,
    /// Open cells reachable from the start cell.
    pub reachable: usize,
}

impl MazeStats {
    /// Analyze a grid.
    pub fn analyze(grid: &MazeGrid) -> Self {
        let dimension = grid.dimension();
        let mut open_cells = 0;
        let mut passages = 0;
        let mut dead_ends = 0;

        for row in 0..dimension {
            for col in 0..dimension {
                if grid.is_wall(row, col) {
                    continue;
                }
                open_cells += 1;

                // Count each edge once, from its upper/left end
                if grid.is_open(row + 1, col) {
                    passages += 1;
                }
                if grid.is_open(row, col + 1) {
                    passages += 1;
                }

                if open_neighbors(grid, row, col).count() == 1 {
                    dead_ends += 1;
                }
            }
        }

        Self {
            open_cells,
            passages,
            dead_ends,
            reachable: reachable_from_start(grid),
        }
    }

    /// Every open cell is reachable from the start cell.
    pub fn is_connected(&self) -> bool {
        self.reachable == self.open_cells
    }

    /// The open-cell graph has no cycles.
    ///
    /// A connected graph is a tree exactly when it has one edge fewer than
    /// vertices.
    pub fn is_acyclic(&self) -> bool {
        self.is_connected() && self.passages + 1 == self.open_cells
    }

    /// Connected and acyclic: exactly one path between any two open cells.
    pub fn is_perfect(&self) -> bool {
        self.open_cells > 0 && self.is_connected() && self.is_acyclic()
    }
}

fn open_neighbors(
    grid: &MazeGrid,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let candidates = [
        row.checked_sub(1).map(|r| (r, col)),
        Some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
        Some((row, col + 1)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(move |&(r, c)| grid.is_open(r, c))
}

fn reachable_from_start(grid: &MazeGrid) -> usize {
    let (start_row, start_col) = START_CELL;
    if grid.is_wall(start_row, start_col) {
        return 0;
    }

    let dimension = grid.dimension();
    let mut seen = vec![false; dimension * dimension];
    let mut queue = VecDeque::new();

    seen[start_row * dimension + start_col] = true;
    queue.push_back(START_CELL);
    let mut reached = 0;

    while let Some((row, col)) = queue.pop_front() {
        reached += 1;
        for (r, c) in open_neighbors(grid, row, col) {
            let idx = r * dimension + c;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back((r, c));
            }
        }
    }

    reached
}
