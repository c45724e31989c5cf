//! Headless driver for the six-terminal "Panda's Thumb" puzzle.
//!
//! Steps the optimizer until it stagnates (or a generation cap is hit),
//! printing a line whenever the best-of-run improves, then the final
//! network. Pass `-v` for per-generation debug logs.
//!
//! ```text
//! cargo run --release --example panda_thumb -- [seed] [pentagon] [-v]
//! ```

use steiner_ga::ga::{ConvergenceState, SteinerConfig, SteinerOptimizer};
use steiner_ga::geometry::presets;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "-v");
    let terminals = if args.iter().any(|a| a == "pentagon") {
        presets::pentagon()
    } else {
        presets::two_by_three_grid()
    };

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut config = SteinerConfig::for_terminals(terminals).with_max_generations(20_000);
    if let Some(seed) = args.iter().find_map(|a| a.parse::<u64>().ok()) {
        config = config.with_seed(seed);
    }

    let mut opt = SteinerOptimizer::new(config)?;
    println!("seed {}", opt.seed());

    let mut best = f64::INFINITY;
    let result = opt.run_with_observer(None, |report| {
        if report.best.length() < best {
            best = report.best.length();
            let pts: Vec<String> = report
                .best
                .sorted_steiner_points()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!(
                "Gen {:6}: {:4.13} : [{}]",
                report.generation,
                best,
                pts.join(", ")
            );
        }
        if report.state == ConvergenceState::Stopped {
            println!("stagnated at generation {}", report.generation);
        }
    });

    let terminals = &opt.config().terminals;
    println!(
        "Total Length = {:.3} (best from generation {} of {})",
        result.best.length(),
        result.best_generation,
        result.generations
    );
    for seg in result.best.segments() {
        if let Some((a, b)) = seg.resolve(terminals, result.best.steiner_points()) {
            println!("  {} -- {}", a, b);
        }
    }
    Ok(())
}
