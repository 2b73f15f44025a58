//! Maze Fingerprints
//!
//! Deterministic hashing of generated grids for:
//! - Anti-cheat comparison between tournament clients
//! - Replay verification of a claimed maze

use sha2::{Digest, Sha256};

/// Hash output type (256 bits / 32 bytes)
pub type GridHash = [u8; 32];

/// Domain separator for grid fingerprints.
pub const GRID_HASH_DOMAIN: &[u8] = b"LABYRINTH_MAZE_V1";

/// Deterministic hasher for maze grids.
///
/// Wraps SHA-256 with little-endian helpers.
/// Order of updates is critical for determinism.
pub struct GridHasher {
    hasher: Sha256,
}

impl GridHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for maze grids.
    pub fn for_grid() -> Self {
        Self::new(GRID_HASH_DOMAIN)
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a run of booleans, one byte each.
    pub fn update_bools(&mut self, values: &[bool]) {
        let bytes: Vec<u8> = values.iter().map(|&v| v as u8).collect();
        self.hasher.update(&bytes);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> GridHash {
        self.hasher.finalize().into()
    }
}

/// Compute the fingerprint of a grid from its raw parts.
///
/// Layout: domain, `dimension` (u32 LE), `seed` (u64 LE), then one byte per
/// cell in row-major order (1 = wall, 0 = passage).
pub fn compute_grid_hash(dimension: u32, seed: u64, cells: &[bool]) -> GridHash {
    let mut hasher = GridHasher::for_grid();
    hasher.update_u32(dimension);
    hasher.update_u64(seed);
    hasher.update_bools(cells);
    hasher.finalize()
}

/// Parse a hex-encoded fingerprint.
pub fn parse_grid_hash(text: &str) -> Option<GridHash> {
    let bytes = hex::decode(text.trim()).ok()?;
    bytes.try_into().ok()
}
