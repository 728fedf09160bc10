//! Batched two-phase particle update across a worker pool.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{BatchConfig, Range3};
use crate::error::ConfigError;
use crate::executor::Executor;
use crate::math::Vec3;
use crate::motion;

/// A fixed-size batch of particles updated phase-by-phase.
///
/// The batch owns the velocity array and a worker pool. Positions belong to
/// the host; each [`step`](KinematicsBatch::step) call borrows them for its
/// duration and releases them on return.
///
/// Each step runs reflection for the whole batch, waits on the pool's
/// barrier, then runs integration for the whole batch. The barrier is what
/// makes the parallel schedule safe: integration for any index reads the
/// post-reflection velocity, never a stale one.
pub struct KinematicsBatch {
    velocities: Vec<Vec3>,
    executor: Executor,
}

impl KinematicsBatch {
    /// Allocate and seed a batch from `config`.
    ///
    /// Returns the batch plus the initial positions, which the host takes
    /// ownership of. All sampled positions and velocities land inside their
    /// configured ranges, endpoints included. A `count` of zero yields an
    /// empty batch whose `step` is a no-op.
    pub fn init(config: &BatchConfig) -> Result<(Self, Vec<Vec3>), ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::init_with_rng(config, &mut rng)
    }

    /// Like [`init`](Self::init), but with caller-supplied randomness so
    /// initialization is fully deterministic under test.
    ///
    /// Draw order: all positions first, then all velocities.
    pub fn init_with_rng<R: Rng + ?Sized>(
        config: &BatchConfig,
        rng: &mut R,
    ) -> Result<(Self, Vec<Vec3>), ConfigError> {
        config.validate()?;

        let positions: Vec<Vec3> = (0..config.count)
            .map(|_| config.position_range.sample(rng))
            .collect();
        let velocities: Vec<Vec3> = (0..config.count)
            .map(|_| config.velocity_range.sample(rng))
            .collect();

        debug!(
            "kinematics batch ready: {} particles across {} workers",
            config.count, config.worker_threads
        );

        let batch = Self {
            velocities,
            executor: Executor::new(config.worker_threads),
        };
        Ok((batch, positions))
    }

    /// Advance every particle by one frame.
    ///
    /// Phase 1 reflects velocities against `bounds` using the positions as
    /// they were at the end of the previous frame. Phase 2 integrates each
    /// position with its post-reflection velocity. Both phases have finished
    /// for the whole batch by the time this returns.
    ///
    /// `dt` is unvalidated: a negative value integrates backward. The
    /// position slice must be the one this batch was initialized for.
    ///
    /// # Panics
    ///
    /// Panics if `positions.len()` differs from the particle count.
    pub fn step(&mut self, dt: f32, bounds: &Range3, positions: &mut [Vec3]) {
        assert_eq!(
            positions.len(),
            self.velocities.len(),
            "position slice length must match particle count"
        );
        if self.velocities.is_empty() {
            return;
        }

        let chunk = self.velocities.len().div_ceil(self.executor.size());
        let executor = &self.executor;
        let velocities = &mut self.velocities;

        // Phase 1: reflection. Velocity chunks are written, positions only
        // read; no index is touched by more than one task.
        executor.scope(|s| {
            for (vel_chunk, pos_chunk) in velocities.chunks_mut(chunk).zip(positions.chunks(chunk))
            {
                s.spawn(move || {
                    for (vel, pos) in vel_chunk.iter_mut().zip(pos_chunk) {
                        *vel = motion::reflect(*vel, *pos, bounds);
                    }
                });
            }
        });

        // The scope above has drained: every velocity is post-reflection.
        let velocities = &*velocities;

        // Phase 2: integration. Position chunks are written, velocities only
        // read.
        executor.scope(|s| {
            for (pos_chunk, vel_chunk) in positions.chunks_mut(chunk).zip(velocities.chunks(chunk))
            {
                s.spawn(move || {
                    for (pos, vel) in pos_chunk.iter_mut().zip(vel_chunk) {
                        *pos = motion::integrate(*pos, *vel, dt);
                    }
                });
            }
        });
    }

    /// Number of particles in the batch.
    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    /// Current velocities, post any reflection applied by `step`.
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }
}
