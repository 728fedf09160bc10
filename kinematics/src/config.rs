//! Batch configuration: component ranges and pool sizing.

use rand::Rng;

use crate::error::ConfigError;
use crate::math::Vec3;

/// An axis-aligned box described by two corners, `min` and `max`.
///
/// Doubles as the bounce bounds for the simulation and as the sampling range
/// for initial positions and velocities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Range3 {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Inclusive containment check.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Sample a vector uniformly inside the range, one independent draw per
    /// axis, endpoints included. Requires a valid range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
            rng.gen_range(self.min.z..=self.max.z),
        )
    }
}

/// Configuration for a particle batch.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of particles. Fixed for the lifetime of the batch.
    pub count: usize,
    /// Initial positions are sampled from this range.
    pub position_range: Range3,
    /// Initial velocities are sampled from this range.
    pub velocity_range: Range3,
    /// Random seed for reproducible initialization.
    pub seed: u64,
    /// Worker threads for the parallel update path.
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            position_range: Range3::new(Vec3::splat(-100.0), Vec3::splat(100.0)),
            velocity_range: Range3::new(Vec3::splat(-10.0), Vec3::splat(10.0)),
            seed: 12345,
            worker_threads: 4,
        }
    }
}

impl BatchConfig {
    /// Reject malformed configurations before any storage is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_threads == 0 {
            return Err(ConfigError::NoWorkerThreads);
        }
        if !self.position_range.is_valid() {
            return Err(ConfigError::InvertedPositionRange);
        }
        if !self.velocity_range.is_valid() {
            return Err(ConfigError::InvertedVelocityRange);
        }
        Ok(())
    }
}
