use clap::Parser;
use env_logger::Env;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use tiles_solver::local::{
    hill_climbing, random_guessing, random_restart, random_search, stochastic_hill_climbing,
};
use tiles_solver::plan::{TouchPlan, TouchPlanProblem};
use tiles_solver::stats::Statistics;
use tiles_solver::utils::read_puzzles;
use tiles_solver::TilesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Strategy {
    RandomGuessing,
    RandomSearch,
    HillClimbing,
    StochasticHillClimbing,
    /// Many short climbs: `steps / 20` restarts of 20 steps.
    ShortRestarts,
    /// Fewer, longer climbs: `steps / 100` restarts of 100 steps.
    LongRestarts,
}

const ALL_STRATEGIES: [Strategy; 6] = [
    Strategy::RandomGuessing,
    Strategy::RandomSearch,
    Strategy::StochasticHillClimbing,
    Strategy::HillClimbing,
    Strategy::ShortRestarts,
    Strategy::LongRestarts,
];

impl Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::RandomGuessing => "RG",
            Strategy::RandomSearch => "RS",
            Strategy::HillClimbing => "HC",
            Strategy::StochasticHillClimbing => "SHC",
            Strategy::ShortRestarts => "RRHC1",
            Strategy::LongRestarts => "RRHC2",
        }
    }

    fn run(&self, problem: &TouchPlanProblem, steps: usize, rng: &mut SmallRng) -> TouchPlan {
        match self {
            Strategy::RandomGuessing => random_guessing(problem, steps, rng),
            Strategy::RandomSearch => random_search(problem, steps, rng),
            Strategy::HillClimbing => hill_climbing(problem, steps, rng),
            Strategy::StochasticHillClimbing => stochastic_hill_climbing(problem, steps, rng),
            Strategy::ShortRestarts => random_restart(problem, steps / 20, 20, false, rng),
            Strategy::LongRestarts => random_restart(problem, steps / 100, 100, false, rng),
        }
    }
}

impl FromStr for Strategy {
    type Err = TilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STRATEGIES
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TilesError::UnknownStrategy(s.to_string()))
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare local-search strategies over a puzzle file", long_about = None)]
struct Args {
    /// Path to the puzzle file
    puzzle_file: PathBuf,

    /// Runs per puzzle, strategy and step budget
    #[clap(short, long, default_value_t = 10)]
    repeats: usize,

    /// Step budget; repeatable (default 100, 500, 1000, 2000)
    #[clap(long = "steps")]
    steps: Vec<usize>,

    /// Strategy to run (RG, RS, HC, SHC, RRHC1, RRHC2); repeatable (default all)
    #[clap(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Seed for reproducible runs; drawn from the OS when omitted
    #[clap(long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> Result<(), TilesError> {
    let problems: Vec<TouchPlanProblem> = read_puzzles(&args.puzzle_file)?
        .into_iter()
        .map(TouchPlanProblem::new)
        .collect();
    let strategies = if args.strategies.is_empty() {
        ALL_STRATEGIES.to_vec()
    } else {
        args.strategies.clone()
    };
    let step_budgets = if args.steps.is_empty() {
        vec![100, 500, 1000, 2000]
    } else {
        args.steps.clone()
    };
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut rows = Vec::new();
    for &strategy in &strategies {
        for &steps in &step_budgets {
            debug!("starting {} with {} steps", strategy.name(), steps);
            let mut score_stat = Statistics::new();
            let mut time_stat = Statistics::new();
            for problem in &problems {
                for _ in 0..args.repeats {
                    let start = Instant::now();
                    let plan = strategy.run(problem, steps, &mut rng);
                    time_stat.add(start.elapsed().as_secs_f64());
                    score_stat.add(problem.objective(&plan) as f64);
                    debug!("{} {}: {}", strategy.name(), steps, plan);
                }
            }
            rows.push((strategy, steps, score_stat, time_stat));
        }
    }

    println!();
    println!("Averages table for {}", args.puzzle_file.display());
    for (strategy, steps, score_stat, time_stat) in rows {
        println!(
            "{} Steps {} Score {:.1} (stdev {:.1e}, min {}) Time {:.2e}",
            strategy.name(),
            steps,
            score_stat.mean(),
            score_stat.std_dev(),
            score_stat.min().unwrap_or(0.0),
            time_stat.mean()
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
