//! RNG module - seeded fruit placement
//!
//! Fruit is placed uniformly at random on a free interior cell. Placement first
//! tries plain rejection sampling; once the attempt budget runs out (a long
//! snake leaves few free cells) it collects the free cells and picks one of
//! them, which stays uniform and always terminates.
//!
//! The generator is seeded so the same seed yields the same fruit sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::types::Position;

/// Rejection-sampling attempts before falling back to a free-cell scan.
pub const MAX_REJECTION_ATTEMPTS: u32 = 64;

/// Seeded sampler for fruit positions.
#[derive(Debug, Clone)]
pub struct FruitSampler {
    seed: u64,
    rng: StdRng,
}

impl FruitSampler {
    /// Create a new sampler with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform interior cell, ignoring occupancy.
    pub fn next_interior(&mut self, grid: &Grid) -> Position {
        let x = self.rng.gen_range(1..=grid.max_x());
        let y = self.rng.gen_range(1..=grid.max_y());
        Position::new(x, y)
    }

    /// Pick a uniformly random interior cell for which `occupied` is false.
    ///
    /// Returns `None` only when every interior cell is occupied.
    pub fn sample_free(
        &mut self,
        grid: &Grid,
        occupied: impl Fn(Position) -> bool,
    ) -> Option<Position> {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let p = self.next_interior(grid);
            if !occupied(p) {
                return Some(p);
            }
        }

        let free: Vec<Position> = grid.interior().filter(|&p| !occupied(p)).collect();
        if free.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..free.len());
        Some(free[idx])
    }
}
