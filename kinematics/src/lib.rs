//! Two-phase particle kinematics for large batches of independent movers.
//!
//! The crate simulates N point particles, each with a position and a
//! velocity, bouncing inside an axis-aligned box. Every frame runs two
//! phases over the whole batch:
//!
//! 1. **Reflection**: flip a velocity component when the particle has
//!    crossed the corresponding bound while still heading outward.
//! 2. **Integration**: advance each position by `velocity * dt`.
//!
//! Two update paths implement the same per-particle math:
//!
//! - [`KinematicsBatch`]: batch-owned velocities updated phase-by-phase
//!   across a worker pool, with a barrier between the phases.
//! - [`NaiveSet`]: the baseline. One object at a time, both phases per
//!   object before moving to the next.
//!
//! Positions are host-owned. The host lends a `&mut [Vec3]` to each `step`
//! call and keeps the slice alive for the lifetime of the batch; the batch
//! never retains a reference across frames.

pub mod batch;
pub mod config;
pub mod error;
pub mod executor;
pub mod math;
pub mod motion;
pub mod naive;

pub use batch::KinematicsBatch;
pub use config::{BatchConfig, Range3};
pub use error::ConfigError;
pub use math::Vec3;
pub use naive::{NaiveMover, NaiveSet};
