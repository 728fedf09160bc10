//! Side-by-side terminal comparison of the two update paths.
//!
//! Runs the same workload through the batch and naive scenarios and prints
//! frame statistics for each, plus the resulting speedup.
//!
//! ```bash
//! cargo run -p kinematics_bench --release --bin demo [particle_count]
//! ```

use std::io::{self, Write};

use crossterm::{
    ExecutableCommand,
    style::{self, Attribute, Color},
};
use log::info;

use kinematics_bench::frame_timer::{FrameStats, measure_frames};
use kinematics_bench::scenarios::{BatchScenario, NaiveScenario, Scenario, SimConfig};

const DEMO_FRAMES: usize = 300;

fn run_scenario(scenario: &mut dyn Scenario) -> FrameStats {
    info!("running scenario: {}", scenario.name());

    scenario.setup();
    let stats = measure_frames(DEMO_FRAMES, |_| {
        scenario.step();
    });
    scenario.teardown();

    stats
}

fn print_header(stdout: &mut io::Stdout, text: &str) -> io::Result<()> {
    stdout.execute(style::SetAttribute(Attribute::Bold))?;
    writeln!(stdout, "{text}")?;
    stdout.execute(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn print_result(
    stdout: &mut io::Stdout,
    scenario: &dyn Scenario,
    stats: &FrameStats,
) -> io::Result<()> {
    stdout.execute(style::SetForegroundColor(Color::Cyan))?;
    write!(stdout, "{:>8}", scenario.name())?;
    stdout.execute(style::SetForegroundColor(Color::Reset))?;
    writeln!(stdout, "  {stats}")?;
    writeln!(stdout, "          {}", scenario.description())?;
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let particle_count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100_000);

    let config = SimConfig {
        particle_count,
        ..Default::default()
    };

    let mut stdout = io::stdout();
    print_header(
        &mut stdout,
        &format!(
            "kinematics demo: {} particles, {} frames, {} workers",
            config.particle_count, DEMO_FRAMES, config.worker_threads
        ),
    )?;

    let mut naive = NaiveScenario::with_config(config.clone());
    let naive_stats = run_scenario(&mut naive);
    print_result(&mut stdout, &naive, &naive_stats)?;

    let mut batch = BatchScenario::with_config(config);
    let batch_stats = run_scenario(&mut batch);
    print_result(&mut stdout, &batch, &batch_stats)?;

    let batch_avg = batch_stats.average().as_secs_f64().max(f64::EPSILON);
    let speedup = naive_stats.average().as_secs_f64() / batch_avg;
    let color = if speedup >= 1.0 {
        Color::Green
    } else {
        Color::Red
    };
    stdout.execute(style::SetForegroundColor(color))?;
    writeln!(stdout, "\n speedup: {speedup:.2}x (batch over naive)")?;
    stdout.execute(style::SetForegroundColor(Color::Reset))?;

    Ok(())
}
