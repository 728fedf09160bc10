//! Frame timing for simulated update loops.

use std::time::{Duration, Instant};

/// Statistics over a run of measured frames.
#[derive(Debug, Clone)]
pub struct FrameStats {
    /// Number of frames measured.
    pub frames: usize,
    /// Total duration across all frames.
    pub total: Duration,
    /// Fastest frame.
    pub min: Duration,
    /// Slowest frame.
    pub max: Duration,
    sorted: Vec<Duration>,
}

impl FrameStats {
    pub fn from_times(times: Vec<Duration>) -> Self {
        let frames = times.len();
        let total: Duration = times.iter().sum();
        let min = times.iter().min().copied().unwrap_or(Duration::ZERO);
        let max = times.iter().max().copied().unwrap_or(Duration::ZERO);

        let mut sorted = times;
        sorted.sort();

        Self {
            frames,
            total,
            min,
            max,
            sorted,
        }
    }

    pub fn average(&self) -> Duration {
        if self.frames == 0 {
            Duration::ZERO
        } else {
            self.total / self.frames as u32
        }
    }

    /// Frame time at percentile `p` (0-100).
    pub fn percentile(&self, p: usize) -> Duration {
        if self.sorted.is_empty() {
            return Duration::ZERO;
        }
        let p = p.min(100);
        let index = (self.sorted.len() * p / 100).min(self.sorted.len() - 1);
        self.sorted[index]
    }

    /// Worst 1% of frames.
    pub fn p99(&self) -> Duration {
        self.percentile(99)
    }

    /// Frames per second implied by the average frame time.
    pub fn fps(&self) -> f64 {
        let avg = self.average();
        if avg.is_zero() {
            0.0
        } else {
            1.0 / avg.as_secs_f64()
        }
    }
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames, avg: {:.3}ms ({:.1} fps), p99: {:.3}ms, min: {:.3}ms, max: {:.3}ms",
            self.frames,
            self.average().as_secs_f64() * 1000.0,
            self.fps(),
            self.p99().as_secs_f64() * 1000.0,
            self.min.as_secs_f64() * 1000.0,
            self.max.as_secs_f64() * 1000.0,
        )
    }
}

/// Records individual frame durations in a loop.
pub struct FrameTimer {
    frame_times: Vec<Duration>,
    frame_start: Option<Instant>,
}

impl FrameTimer {
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frame_times: Vec::with_capacity(expected_frames),
            frame_start: None,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.frame_times.push(start.elapsed());
        }
    }

    pub fn stats(self) -> FrameStats {
        FrameStats::from_times(self.frame_times)
    }

    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }
}

/// Run `frame_fn` for `frame_count` frames and collect timing statistics.
pub fn measure_frames<F>(frame_count: usize, mut frame_fn: F) -> FrameStats
where
    F: FnMut(usize),
{
    let mut timer = FrameTimer::new(frame_count);

    for frame in 0..frame_count {
        timer.begin_frame();
        frame_fn(frame);
        timer.end_frame();
    }

    timer.stats()
}
