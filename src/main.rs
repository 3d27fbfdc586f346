//! risk-planner: finds the troop combination and attack order that conquer
//! the most enemy territories.
//!
//! The plan comes from a JSON file (`--config`), a random scenario
//! (`--random N`), or interactive prompts on stdin. The report is written to
//! stdout; prompts and logs go to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use risk_planner::board::{BoardSink, UnitTable};
use risk_planner::engine::run_plan;
use risk_planner::eval::TerrainPolicy;
use risk_planner::movegen::random_territories;
use risk_planner::plan::{load_config, PlanConfig, PlanError};
use risk_planner::protocol::{read_plan, write_json, write_text};
use risk_planner::render::TextBoard;
use risk_planner::search::{SearchMode, SearchOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "risk-planner", version, about = "Brute-force Risk attack planner")]
struct Args {
    /// Read the plan from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plan against N random territories
    #[arg(long, conflicts_with = "config")]
    random: Option<usize>,

    /// Random seed for --random, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Troop budget for --random
    #[arg(long, default_value_t = 20)]
    budget: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also draw the board
    #[arg(long)]
    board: bool,

    /// Skip work that cannot change the result
    #[arg(long)]
    pruned: bool,

    /// Score with terrain-adjusted troops
    #[arg(long)]
    apply_terrain: bool,

    /// Attack in permutation order instead of weakest first
    #[arg(long)]
    keep_order: bool,

    /// Largest territory count accepted for order search
    #[arg(long)]
    max_territories: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PlanError> {
    let mut config = load_plan(args)?;
    apply_flags(args, &mut config.options);

    let plan = config.validate()?;
    let report = run_plan(&plan);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        write_json(&report, &mut out)?;
    } else {
        write_text(&report, &mut out)?;
    }
    if args.board {
        writeln!(out)?;
        let mut board = TextBoard::new(&mut out);
        board.render(&report.board)?;
    }
    out.flush()?;
    Ok(())
}

fn load_plan(args: &Args) -> Result<PlanConfig, PlanError> {
    if let Some(path) = &args.config {
        tracing::info!(path = %path.display(), "loading plan");
        return load_config(path);
    }
    if let Some(n) = args.random {
        let mut rng = if args.seed != 0 {
            SmallRng::seed_from_u64(args.seed)
        } else {
            SmallRng::from_entropy()
        };
        return Ok(PlanConfig {
            budget: args.budget,
            costs: UnitTable::new(1, 3, 5),
            strengths: UnitTable::new(1, 3, 5),
            territories: random_territories(n, &mut rng),
            options: SearchOptions::default(),
        });
    }
    let stdin = io::stdin();
    let stderr = io::stderr();
    read_plan(&mut stdin.lock(), &mut stderr.lock())
}

/// Command-line switches override the plan's options when given.
fn apply_flags(args: &Args, options: &mut SearchOptions) {
    if args.pruned {
        options.mode = SearchMode::Pruned;
    }
    if args.apply_terrain {
        options.terrain = TerrainPolicy::Apply;
    }
    if args.keep_order {
        options.prioritize_weakest = false;
    }
    if let Some(max) = args.max_territories {
        options.max_order_territories = max;
    }
}
