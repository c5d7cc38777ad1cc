//! campus — route planning demo for the gridnav planner.
//!
//! Plans a route across a 10 × 15 campus with each strategy, drives the
//! vehicle to the goal (holding at the signal, dodging one injected
//! obstacle), then replays a short scripted edit session.
//!
//! ```text
//! campus [LAYOUT.csv|-] [CONFIG.json|-] [OUTPUT_DIR]
//! ```
//!
//! `-` keeps the default for that argument.  Set `RUST_LOG=debug` to see
//! every planning and replanning decision.

mod layout;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use gn_core::{CellKind, Tick};
use gn_grid::{Grid, load_layout};
use gn_output::{CsvTraceWriter, TraceObserver};
use gn_search::{Algorithm, classify, compute_path};
use gn_sim::{Command, SimBuilder, SimConfig, SimObserver, StepReport, Traversal};

// ── Observer wrapper to count holds and forward to the trace ─────────────────

struct CampusObserver {
    trace:       Option<TraceObserver<CsvTraceWriter>>,
    held_steps:  usize,
    rows:        usize,
}

impl CampusObserver {
    fn new(trace: Option<TraceObserver<CsvTraceWriter>>) -> Self {
        Self { trace, held_steps: 0, rows: 0 }
    }
}

impl SimObserver for CampusObserver {
    fn on_step_end(&mut self, report: &StepReport) {
        self.rows += 1;
        if report.traversal == Traversal::HeldAtSignal {
            self.held_steps += 1;
        }
        if let Some(t) = self.trace.as_mut() {
            t.on_step_end(report);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(t) = self.trace.as_mut() {
            t.on_sim_end(final_tick);
        }
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    layout: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut positional = std::env::args()
        .skip(1)
        .map(|a| (a != "-").then(|| PathBuf::from(a)));
    Args {
        layout: positional.next().flatten(),
        config: positional.next().flatten(),
        output: positional.next().flatten(),
    }
}

fn trace_dir(root: &Path, algorithm: Algorithm) -> PathBuf {
    root.join(algorithm.id().to_lowercase().replace('*', "star"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args();

    println!("=== campus — gridnav route planner ===");

    // 1. Layout.
    let grid: Grid = match &args.layout {
        Some(path) => load_layout(path)
            .with_context(|| format!("loading layout {}", path.display()))?,
        None => layout::campus()?,
    };
    let start  = grid.locate(CellKind::Start);
    let goal   = grid.locate(CellKind::Goal);
    let signal = grid.locate(CellKind::Signal);
    println!(
        "Grid: {} × {}  |  obstacles: {}  |  start: {}  |  goal: {}  |  signal: {}",
        grid.rows(),
        grid.cols(),
        grid.count(CellKind::Obstacle),
        start.map_or("-".into(), |p| p.to_string()),
        goal.map_or("-".into(), |p| p.to_string()),
        signal.map_or("-".into(), |p| p.to_string()),
    );

    // 2. Config.
    let config = match &args.config {
        Some(path) => SimConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    println!(
        "Signal: {} red / {} green  |  replan: {}  |  tick limit: {}",
        config.red_duration,
        config.green_duration,
        if config.replan.enabled { "on" } else { "off" },
        config.total_ticks,
    );
    println!();

    // 3. Static plans, one per strategy.
    for algorithm in Algorithm::ALL {
        let path = compute_path(algorithm.id(), &grid, start, goal);
        let status = match classify(&path, start, goal) {
            Ok(())  => format!("{} steps", path.steps()),
            Err(e)  => e.to_string(),
        };
        println!("── {algorithm}: {status}");
        print!("{}", grid.render(path.cells()));
        println!();
    }

    // 4. Drive the vehicle with each strategy.
    println!("{:<8} {:>6} {:>6} {:>8} {:>9} {:<10}", "Algo", "Steps", "Held", "PathLen", "AtGoal", "Obstacle");
    println!("{}", "-".repeat(54));
    for algorithm in Algorithm::ALL {
        let trace = match &args.output {
            Some(root) => {
                let dir = trace_dir(root, algorithm);
                std::fs::create_dir_all(&dir)?;
                Some(TraceObserver::new(CsvTraceWriter::new(&dir)?))
            }
            None => None,
        };
        let mut obs = CampusObserver::new(trace);

        let mut sim = SimBuilder::new(grid.clone(), config.clone())
            .algorithm(algorithm)
            .build()?;
        let t0 = Instant::now();
        let summary = sim.run(&mut obs);
        info!("{algorithm}: {} steps in {:.3} ms", summary.steps, t0.elapsed().as_secs_f64() * 1e3);

        if let Some(e) = obs.trace.as_mut().and_then(|t| t.take_error()) {
            eprintln!("output error: {e}");
        }

        println!(
            "{:<8} {:>6} {:>6} {:>8} {:>9} {:<10}",
            algorithm.id(),
            summary.steps,
            obs.held_steps,
            summary.path_len,
            if summary.at_goal { "yes" } else { "no" },
            summary.dynamic_obstacle.map_or("-".into(), |p| p.to_string()),
        );
        debug_assert_eq!(obs.rows as u64, summary.steps);
    }
    println!();

    // 5. Scripted edit session: block the route ahead, switch strategy, reset.
    let mut sim = SimBuilder::new(grid.clone(), config.clone()).build()?;
    let first = sim.step(&[]);
    if let Some(ahead) = first.path.get(first.path_index + 2) {
        let r = sim.step(&[Command::ToggleObstacle(ahead)]);
        println!("Blocked {ahead}: new {} path of {} steps", r.algorithm, r.path.steps());
    }
    let r = sim.step(&[Command::SetAlgorithm(Algorithm::AStar)]);
    println!("Switched to {}: {} steps", r.algorithm, r.path.steps());
    let r = sim.step(&[Command::Reset]);
    println!("Reset: {} steps, vehicle at {}", r.path.steps(), r.vehicle);
    let summary = sim.run(&mut gn_sim::NoopObserver);
    println!(
        "Finished at {} after {} more steps ({})",
        summary.last.map_or(r.vehicle, |l| l.vehicle),
        summary.steps,
        if summary.at_goal { "at goal" } else { "short of goal" },
    );
    println!();
    print!("{}", sim.grid().render(sim.planner().path.cells()));

    if let Some(root) = &args.output {
        println!();
        println!("Traces written under {}", root.display());
    }

    Ok(())
}
