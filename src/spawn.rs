//! Spawn context for neuron initialization.
//!
//! Wraps a small per-neuron RNG plus helpers for the ranges a spawning
//! neuron draws from. Each neuron gets its own stream derived from the
//! batch seed and its index, so a batch is reproducible from a single
//! seed while neighboring neurons stay uncorrelated.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Viewport;

/// Context handed to [`crate::neuron::Neuron::spawn`] for one neuron.
pub struct SpawnContext {
    /// Index of the neuron being spawned (0 to count-1).
    pub index: u32,
    /// Total number of neurons in this batch.
    pub count: u32,
    /// Viewport the batch is spawned into.
    pub viewport: Viewport,
    rng: SmallRng,
}

impl SpawnContext {
    /// Context for the `index`-th neuron of a `count`-sized batch.
    pub fn new(index: u32, count: u32, viewport: Viewport, batch_seed: u64) -> Self {
        // Mix the index in so every neuron draws a distinct sequence from
        // the same batch seed.
        let seed = batch_seed ^ (index as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);
        Self {
            index,
            count,
            viewport,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[min, max)`. An empty range yields `min`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniformly random position inside the viewport.
    pub fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.random_range(0.0, self.viewport.width),
            self.random_range(0.0, self.viewport.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_inside_viewport() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut ctx = SpawnContext::new(0, 1, viewport, 99);
        for _ in 0..200 {
            assert!(viewport.contains(ctx.random_position()));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut a = SpawnContext::new(3, 10, viewport, 7);
        let mut b = SpawnContext::new(3, 10, viewport, 7);
        for _ in 0..10 {
            assert_eq!(a.random_range(0.0, 1.0), b.random_range(0.0, 1.0));
        }
    }

    #[test]
    fn test_distinct_indices_distinct_streams() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut a = SpawnContext::new(0, 10, viewport, 7);
        let mut b = SpawnContext::new(1, 10, viewport, 7);
        assert_ne!(a.random_position(), b.random_position());
    }

    #[test]
    fn test_empty_range_yields_min() {
        let viewport = Viewport::new(0.0, 0.0);
        let mut ctx = SpawnContext::new(0, 1, viewport, 1);
        assert_eq!(ctx.random_range(5.0, 5.0), 5.0);
        assert_eq!(ctx.random_position(), Vec2::ZERO);
    }
}
