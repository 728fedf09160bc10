//! Naive update-path scenario, the baseline.
//!
//! Runs the sequential per-object path: each particle finishes both phases
//! before the next one starts, all on the calling thread. Identical seeds
//! give trajectories identical to the batch scenario, so the two measure
//! scheduling cost and nothing else.

use kinematics::{NaiveSet, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::scenarios::{Scenario, SimConfig};

/// Naive update-path benchmark scenario.
pub struct NaiveScenario {
    config: SimConfig,
    state: Option<(NaiveSet, Vec<Vec3>)>,
}

impl NaiveScenario {
    /// Create a naive scenario with default config.
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    /// Create a naive scenario with custom config.
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

impl Default for NaiveScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for NaiveScenario {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn description(&self) -> &'static str {
        "Sequential per-object update on the calling thread"
    }

    fn particle_count(&self) -> usize {
        self.config.particle_count
    }

    fn setup(&mut self) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let state = NaiveSet::init_with_rng(&self.config.batch_config(), &mut rng)
            .expect("benchmark config must be valid");
        self.state = Some(state);
    }

    fn step(&mut self) {
        let (set, positions) = self
            .state
            .as_mut()
            .expect("setup must run before step");
        set.step(self.config.delta_time, positions);
    }

    fn teardown(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::BatchScenario;

    #[test]
    fn naive_scenario_setup() {
        let mut scenario = NaiveScenario::with_config(SimConfig {
            particle_count: 100,
            ..Default::default()
        });

        scenario.setup();
        assert_eq!(scenario.positions().len(), 100);

        scenario.teardown();
        assert!(scenario.positions().is_empty());
    }

    #[test]
    fn naive_scenario_step() {
        let mut scenario = NaiveScenario::with_config(SimConfig {
            particle_count: 100,
            ..Default::default()
        });

        scenario.setup();
        let before = scenario.positions().to_vec();

        // Run a few frames
        for _ in 0..10 {
            scenario.step();
        }

        assert_ne!(scenario.positions(), before.as_slice());

        scenario.teardown();
    }

    #[test]
    fn both_scenarios_agree_frame_by_frame() {
        let config = SimConfig {
            particle_count: 200,
            worker_threads: 2,
            ..Default::default()
        };
        let mut naive = NaiveScenario::with_config(config.clone());
        let mut batch = BatchScenario::with_config(config);

        naive.setup();
        batch.setup();

        for _ in 0..30 {
            naive.step();
            batch.step();
            assert_eq!(naive.positions(), batch.positions());
        }
    }
}
