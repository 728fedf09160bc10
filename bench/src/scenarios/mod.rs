//! Update-path scenarios for the benchmark harness.
//!
//! Both scenarios simulate the same workload: a fixed population of
//! particles bouncing inside a box, stepped once per frame. The only
//! difference is the scheduling of the per-particle math:
//!
//! - **Batch**: two parallel phases over the whole population, with a
//!   barrier in between
//! - **Naive**: both phases per object, one object at a time

pub mod batch;
pub mod naive;

pub use batch::BatchScenario;
pub use naive::NaiveScenario;

use kinematics::{BatchConfig, Range3, Vec3};

/// Shared workload configuration for both update paths.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of particles to simulate.
    pub particle_count: usize,
    /// Simulated delta time per frame.
    pub delta_time: f32,
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Worker threads for the batch path (ignored by the naive path).
    pub worker_threads: usize,
    /// Bounce box; initial positions are sampled from it too.
    pub bounds: Range3,
    /// Initial velocity sampling range.
    pub velocity_range: Range3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: 100_000,
            delta_time: 1.0 / 60.0, // 60 FPS
            seed: 12345,
            worker_threads: 4,
            bounds: Range3::new(Vec3::splat(-100.0), Vec3::splat(100.0)),
            velocity_range: Range3::new(Vec3::splat(-10.0), Vec3::splat(10.0)),
        }
    }
}

impl SimConfig {
    /// The core-crate config this workload corresponds to.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            count: self.particle_count,
            position_range: self.bounds,
            velocity_range: self.velocity_range,
            seed: self.seed,
            worker_threads: self.worker_threads,
        }
    }
}

/// Common trait for benchmark scenarios.
pub trait Scenario {
    /// Human-readable name of the scenario.
    fn name(&self) -> &'static str;

    /// Brief description of what this scenario measures.
    fn description(&self) -> &'static str;

    /// Number of particles in this scenario.
    fn particle_count(&self) -> usize;

    /// Set up the scenario (allocate and seed the population).
    fn setup(&mut self);

    /// Run one frame of the scenario.
    fn step(&mut self);

    /// Release the population.
    fn teardown(&mut self);
}
