//! Memory profiling utilities using dhat.
//!
//! Profiling adds overhead and is off by default; enable it when the
//! allocation behavior of a path is the thing under study:
//!
//! ```bash
//! cargo bench -p kinematics_bench --features memory_profiling
//! ```
//!
//! Results land in `dhat-heap.json`; view them at
//! <https://nnethercote.github.io/dh_view/dh_view.html>.

/// Memory statistics captured during a measurement.
#[derive(Debug, Clone, Default)]
pub struct MemoryStats {
    /// Total bytes allocated during the measurement.
    pub bytes_allocated: u64,
    /// Total number of allocations.
    pub allocation_count: u64,
    /// Peak heap usage in bytes.
    pub peak_bytes: u64,
}

impl MemoryStats {
    /// Allocated bytes per particle.
    pub fn bytes_per_particle(&self, particle_count: usize) -> f64 {
        if particle_count == 0 {
            0.0
        } else {
            self.bytes_allocated as f64 / particle_count as f64
        }
    }

    /// Allocation count per particle.
    pub fn allocations_per_particle(&self, particle_count: usize) -> f64 {
        if particle_count == 0 {
            0.0
        } else {
            self.allocation_count as f64 / particle_count as f64
        }
    }
}

impl std::fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "allocated: {} bytes ({} allocs), peak: {} bytes",
            self.bytes_allocated, self.allocation_count, self.peak_bytes
        )
    }
}

/// Captures heap statistics between `start()` and `finish()`.
///
/// Only one profiler can be active at a time.
#[cfg(feature = "memory_profiling")]
pub struct MemoryProfiler {
    _profiler: dhat::Profiler,
}

#[cfg(feature = "memory_profiling")]
impl MemoryProfiler {
    pub fn start() -> Self {
        Self {
            _profiler: dhat::Profiler::new_heap(),
        }
    }

    /// Finish profiling and get statistics. Also writes the detailed heap
    /// profile to `dhat-heap.json`.
    pub fn finish(self) -> MemoryStats {
        let stats = dhat::HeapStats::get();
        MemoryStats {
            bytes_allocated: stats.total_bytes as u64,
            allocation_count: stats.total_blocks as u64,
            peak_bytes: stats.max_bytes as u64,
        }
    }
}

#[cfg(not(feature = "memory_profiling"))]
pub struct MemoryProfiler;

#[cfg(not(feature = "memory_profiling"))]
impl MemoryProfiler {
    /// No-op when memory profiling is disabled.
    pub fn start() -> Self {
        Self
    }

    /// Returns empty stats when memory profiling is disabled.
    pub fn finish(self) -> MemoryStats {
        MemoryStats::default()
    }
}

/// Measure memory usage of a closure.
pub fn measure_memory<F, R>(f: F) -> (R, MemoryStats)
where
    F: FnOnce() -> R,
{
    let profiler = MemoryProfiler::start();
    let result = f();
    let stats = profiler.finish();
    (result, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_all_counters() {
        let stats = MemoryStats {
            bytes_allocated: 2048,
            allocation_count: 4,
            peak_bytes: 1024,
        };
        let display = format!("{}", stats);
        assert!(display.contains("2048 bytes"));
        assert!(display.contains("4 allocs"));
        assert!(display.contains("peak: 1024"));
    }

    #[test]
    fn per_particle_ratios() {
        let stats = MemoryStats {
            bytes_allocated: 12_000,
            allocation_count: 100,
            peak_bytes: 6_000,
        };
        assert!((stats.bytes_per_particle(1_000) - 12.0).abs() < f64::EPSILON);
        assert!((stats.allocations_per_particle(1_000) - 0.1).abs() < f64::EPSILON);
        assert_eq!(stats.bytes_per_particle(0), 0.0);
    }
}
