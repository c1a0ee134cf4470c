//! Bus Driver simulation binary.
//!
//! Plays many games with random guesses and writes one drink count per line
//! to the results file.

use std::path::PathBuf;
use std::process::ExitCode;

use busdriver::{
    DEFAULT_GAMES, DEFAULT_OUTPUT, GameOptions, MissPolicy, ResultsFile, RoundOrder, Simulator,
};
use clap::{Parser, ValueEnum};

/// Monte Carlo simulation of the Bus Driver drinking game
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
    games: usize,

    /// Seed for a reproducible run (defaults to the wall clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Results file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Order of the first two rounds
    #[arg(long, value_enum, default_value_t = Order::SuitFirst)]
    order: Order,

    /// What a wrong guess does
    #[arg(long, value_enum, default_value_t = Miss::Restart)]
    miss: Miss,

    /// Spread games over all cores
    #[arg(long)]
    parallel: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    SuitFirst,
    ColorFirst,
}

impl From<Order> for RoundOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::SuitFirst => Self::SuitFirst,
            Order::ColorFirst => Self::ColorFirst,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Miss {
    Restart,
    Retry,
}

impl From<Miss> for MissPolicy {
    fn from(miss: Miss) -> Self {
        match miss {
            Miss::Restart => Self::Restart,
            Miss::Retry => Self::Retry,
        }
    }
}

fn log(args: &Args) {
    let level = if args.quiet {
        log::LevelFilter::Warn
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn main() -> ExitCode {
    let args = Args::parse();
    log(&args);

    let output = match ResultsFile::create(&args.output) {
        Ok(output) => output,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let options = GameOptions::default()
        .with_order(args.order.into())
        .with_miss_policy(args.miss.into());
    let simulator = args
        .seed
        .map_or_else(Simulator::from_time, Simulator::new)
        .with_games(args.games)
        .with_options(options);
    log::info!(
        "simulating {} games with seed {}",
        simulator.games(),
        simulator.seed()
    );

    let progress = |pct: u8| log::info!("progress: {pct}%");
    let results = if args.parallel {
        run_parallel(&simulator, progress)
    } else {
        simulator.run_with_progress(progress)
    };

    if let Some(summary) = results.summary() {
        log::info!(
            "mean {:.4} drinks per game (min {}, max {})",
            summary.mean,
            summary.min,
            summary.max
        );
        for (drinks, games) in &summary.histogram {
            log::debug!("{drinks:>3} drinks: {games}");
        }
    }

    match output.write(&results) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "parallel")]
fn run_parallel(simulator: &Simulator, progress: impl Fn(u8) + Sync) -> busdriver::ResultSet {
    simulator.run_parallel_with_progress(progress)
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(simulator: &Simulator, progress: impl Fn(u8) + Sync) -> busdriver::ResultSet {
    log::warn!("built without the `parallel` feature, running on one thread");
    simulator.run_with_progress(progress)
}
