//! Benchmark harness for the kinematics crate.
//!
//! Measures the two update paths against each other over identical particle
//! populations:
//!
//! - **Batch**: worker-pool two-phase update ([`scenarios::BatchScenario`])
//! - **Naive**: sequential per-object update ([`scenarios::NaiveScenario`])
//!
//! plus supporting infrastructure:
//!
//! - **Frame timing**: per-frame statistics (average, percentiles, fps)
//! - **Memory tracking**: heap allocation profiling via dhat
//!
//! # Running
//!
//! ```bash
//! # Criterion benchmarks
//! cargo bench -p kinematics_bench
//!
//! # Just the step comparison
//! cargo bench -p kinematics_bench -- step
//!
//! # With memory profiling (slower)
//! cargo bench -p kinematics_bench --features memory_profiling
//!
//! # Side-by-side terminal demo
//! cargo run -p kinematics_bench --release --bin demo
//! ```
//!
//! Criterion writes HTML reports to `target/criterion/`. Memory profiles
//! land in `dhat-heap.json` for DHAT's viewer.

pub mod frame_timer;
pub mod memory;
pub mod scenarios;
