//! Batch update-path scenario.
//!
//! Runs the worker-pool two-phase path: reflection across the whole
//! population, a barrier, then integration across the whole population.
//! This is the path the core crate exists for; the naive scenario is its
//! baseline.

use kinematics::{KinematicsBatch, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::scenarios::{Scenario, SimConfig};

/// Batch update-path benchmark scenario.
pub struct BatchScenario {
    config: SimConfig,
    state: Option<(KinematicsBatch, Vec<Vec3>)>,
}

impl BatchScenario {
    /// Create a batch scenario with default config.
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    /// Create a batch scenario with custom config.
    pub fn with_config(config: SimConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Current positions, or an empty slice before setup.
    pub fn positions(&self) -> &[Vec3] {
        self.state
            .as_ref()
            .map(|(_, positions)| positions.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for BatchScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for BatchScenario {
    fn name(&self) -> &'static str {
        "batch"
    }

    fn description(&self) -> &'static str {
        "Two-phase worker-pool update with an inter-phase barrier"
    }

    fn particle_count(&self) -> usize {
        self.config.particle_count
    }

    fn setup(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let state = KinematicsBatch::init_with_rng(&self.config.batch_config(), &mut rng)
            .expect("benchmark config must be valid");
        self.state = Some(state);
    }

    fn step(&mut self) {
        let (batch, positions) = self
            .state
            .as_mut()
            .expect("setup must run before step");
        batch.step(self.config.delta_time, &self.config.bounds, positions);
    }

    fn teardown(&mut self) {
        self.state = None;
    }
}
