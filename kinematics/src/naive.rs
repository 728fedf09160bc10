//! Naive per-object update path, the benchmark baseline.
//!
//! Same per-particle math as the batch path, scheduled the way a per-object
//! engine callback would run it: each mover finishes both phases before the
//! next mover starts, all on the calling thread. Every mover also carries
//! its own copy of the bounds, the way per-object components duplicate
//! shared configuration.
//!
//! Particles are independent, so the trajectories match the batch path
//! exactly for equal seeds.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{BatchConfig, Range3};
use crate::error::ConfigError;
use crate::math::Vec3;
use crate::motion;

/// One self-updating particle: its velocity plus a private bounds copy.
pub struct NaiveMover {
    velocity: Vec3,
    bounds: Range3,
}

impl NaiveMover {
    pub fn new(velocity: Vec3, bounds: Range3) -> Self {
        Self { velocity, bounds }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Reflect, then integrate, for this one object.
    pub fn update(&mut self, position: &mut Vec3, dt: f32) {
        self.velocity = motion::reflect(self.velocity, *position, &self.bounds);
        *position = motion::integrate(*position, self.velocity, dt);
    }
}

/// The whole baseline population, updated one object at a time.
///
/// The bounce bounds are baked in at init time from the configured position
/// range; `step` takes no bounds argument.
pub struct NaiveSet {
    movers: Vec<NaiveMover>,
}

impl NaiveSet {
    /// Seed a population from `config`. Returns the set plus host-owned
    /// initial positions. Sampling scheme and draw order are identical to
    /// the batch path, so equal seeds give equal initial states.
    ///
    /// `config.worker_threads` is validated but unused here; this path is
    /// single-threaded by definition.
    pub fn init(config: &BatchConfig) -> Result<(Self, Vec<Vec3>), ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::init_with_rng(config, &mut rng)
    }

    /// Like [`init`](Self::init) with caller-supplied randomness.
    pub fn init_with_rng<R: Rng + ?Sized>(
        config: &BatchConfig,
        rng: &mut R,
    ) -> Result<(Self, Vec<Vec3>), ConfigError> {
        config.validate()?;

        let positions: Vec<Vec3> = (0..config.count)
            .map(|_| config.position_range.sample(rng))
            .collect();
        let movers: Vec<NaiveMover> = (0..config.count)
            .map(|_| NaiveMover::new(config.velocity_range.sample(rng), config.position_range))
            .collect();

        debug!("naive mover set ready: {} particles", config.count);

        Ok((Self { movers }, positions))
    }

    /// Advance every object by one frame, sequentially.
    ///
    /// # Panics
    ///
    /// Panics if `positions.len()` differs from the mover count.
    pub fn step(&mut self, dt: f32, positions: &mut [Vec3]) {
        assert_eq!(
            positions.len(),
            self.movers.len(),
            "position slice length must match mover count"
        );

        for (mover, position) in self.movers.iter_mut().zip(positions) {
            mover.update(position, dt);
        }
    }

    pub fn len(&self) -> usize {
        self.movers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movers.is_empty()
    }

    pub fn movers(&self) -> &[NaiveMover] {
        &self.movers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::KinematicsBatch;

    #[test]
    fn single_mover_bounces_inward() {
        let bounds = Range3::new(Vec3::zero(), Vec3::splat(10.0));
        let mut mover = NaiveMover::new(Vec3::new(-2.0, 0.0, 0.0), bounds);
        let mut position = Vec3::new(-0.5, 5.0, 5.0);

        mover.update(&mut position, 1.0);

        assert_eq!(mover.velocity(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(position, Vec3::new(1.5, 5.0, 5.0));
    }

    #[test]
    fn empty_set_step_is_a_noop() {
        let config = BatchConfig {
            count: 0,
            ..Default::default()
        };
        let (mut set, mut positions) = NaiveSet::init(&config).unwrap();

        assert!(set.is_empty());
        set.step(1.0 / 60.0, &mut positions);
    }

    #[test]
    fn init_matches_batch_initial_state() {
        let config = BatchConfig {
            count: 128,
            seed: 31,
            ..Default::default()
        };
        let (set, naive_pos) = NaiveSet::init(&config).unwrap();
        let (batch, batch_pos) = KinematicsBatch::init(&config).unwrap();

        assert_eq!(naive_pos, batch_pos);
        let naive_vels: Vec<Vec3> = set.movers().iter().map(|m| m.velocity()).collect();
        assert_eq!(naive_vels.as_slice(), batch.velocities());
    }

    #[test]
    fn trajectories_match_the_batch_path() {
        let config = BatchConfig {
            count: 300,
            seed: 64,
            ..Default::default()
        };
        let dt = 1.0 / 60.0;

        let (mut set, mut naive_pos) = NaiveSet::init(&config).unwrap();
        let (mut batch, mut batch_pos) = KinematicsBatch::init(&config).unwrap();

        for _ in 0..120 {
            set.step(dt, &mut naive_pos);
            batch.step(dt, &config.position_range, &mut batch_pos);
        }

        assert_eq!(naive_pos, batch_pos);
        let naive_vels: Vec<Vec3> = set.movers().iter().map(|m| m.velocity()).collect();
        assert_eq!(naive_vels.as_slice(), batch.velocities());
    }

    #[test]
    #[should_panic(expected = "position slice length")]
    fn mismatched_position_slice_panics() {
        let config = BatchConfig {
            count: 2,
            ..Default::default()
        };
        let (mut set, _) = NaiveSet::init(&config).unwrap();
        let mut wrong = vec![Vec3::zero(); 5];
        set.step(1.0, &mut wrong);
    }
}
