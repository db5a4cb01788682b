use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tiles_solver::engine::Grid;
use tiles_solver::heuristics::TileHeuristic;
use tiles_solver::problem::SearchMode;
use tiles_solver::record::SearchTerminationRecord;
use tiles_solver::search::Search;
use tiles_solver::stats::{effective_branching_factor, Statistics};
use tiles_solver::tiles::{TileState, TilesProblem};
use tiles_solver::utils::read_puzzles;
use tiles_solver::TilesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Strategy {
    Bfs,
    Dfs,
    Dls,
    Ids,
    Ucs,
    Greedy,
    AStar0,
    AStarH1,
    AStarH2,
}

impl Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Dls => "DLS",
            Strategy::Ids => "IDS",
            Strategy::Ucs => "UCS",
            Strategy::Greedy => "GBFS",
            Strategy::AStar0 => "AStar0",
            Strategy::AStarH1 => "AStarH1",
            Strategy::AStarH2 => "AStarH2",
        }
    }

    /// The heuristic the informed strategies attach to states.
    fn heuristic(&self) -> TileHeuristic {
        match self {
            Strategy::AStarH1 => TileHeuristic::Admissible,
            Strategy::AStarH2 | Strategy::Greedy => TileHeuristic::Inadmissible,
            _ => TileHeuristic::Zero,
        }
    }
}

impl FromStr for Strategy {
    type Err = TilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Strategy; 9] = [
            Strategy::Bfs,
            Strategy::Dfs,
            Strategy::Dls,
            Strategy::Ids,
            Strategy::Ucs,
            Strategy::Greedy,
            Strategy::AStar0,
            Strategy::AStarH1,
            Strategy::AStarH2,
        ];
        ALL.into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TilesError::UnknownStrategy(s.to_string()))
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Run systematic search strategies over a puzzle file", long_about = None)]
struct Args {
    /// Path to the puzzle file
    puzzle_file: PathBuf,

    /// Time limit per puzzle and strategy, in seconds
    #[clap(short, long, default_value_t = 10.0)]
    time_limit: f64,

    /// Depth limit for DLS
    #[clap(short, long, default_value_t = 5)]
    depth_limit: usize,

    /// Strategy to run (BFS, DFS, DLS, IDS, UCS, GBFS, AStar0, AStarH1, AStarH2); repeatable
    #[clap(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Search mode (tree or graph); repeatable
    #[clap(short, long = "mode")]
    modes: Vec<SearchMode>,

    /// Heuristic for GBFS and A* (zero, admissible, inadmissible); overrides the strategy's own
    #[clap(long)]
    heuristic: Option<TileHeuristic>,
}

fn solve(
    strategy: Strategy,
    heuristic: TileHeuristic,
    grid: &Grid,
    mode: SearchMode,
    time_limit: Duration,
    depth_limit: usize,
) -> (TilesProblem, SearchTerminationRecord<TileState>) {
    let problem = TilesProblem::new(grid.clone()).with_heuristic(heuristic);
    let searcher = Search::new(&problem, time_limit);
    let start = problem.initial_state();
    let answer = match strategy {
        Strategy::Bfs => searcher.breadth_first(start, mode),
        Strategy::Dfs => searcher.depth_first(start, mode),
        Strategy::Dls => searcher.depth_limited(start, depth_limit, mode),
        Strategy::Ids => searcher.iterative_deepening(start, mode),
        Strategy::Ucs => searcher.uniform_cost(start, mode),
        Strategy::Greedy => searcher.greedy_best_first(start, mode),
        Strategy::AStar0 | Strategy::AStarH1 | Strategy::AStarH2 => searcher.a_star(start, mode),
    };
    (problem, answer)
}

fn run(args: &Args) -> Result<(), TilesError> {
    let time_limit = Duration::try_from_secs_f64(args.time_limit)
        .map_err(|_| TilesError::InvalidTimeLimit(args.time_limit))?;
    let puzzles = read_puzzles(&args.puzzle_file)?;
    let strategies = if args.strategies.is_empty() {
        vec![Strategy::Bfs, Strategy::Dfs, Strategy::Dls, Strategy::Ids]
    } else {
        args.strategies.clone()
    };
    let modes = if args.modes.is_empty() {
        vec![SearchMode::Tree, SearchMode::Graph]
    } else {
        args.modes.clone()
    };

    println!(
        "Estimated maximum time to solve {} puzzles with {} strategies in {} modes: {:.1} seconds",
        puzzles.len(),
        strategies.len(),
        modes.len(),
        (strategies.len() * modes.len() * puzzles.len()) as f64 * args.time_limit
    );

    for &mode in &modes {
        for &strategy in &strategies {
            let heuristic = args.heuristic.unwrap_or_else(|| strategy.heuristic());
            let mut unsolved = 0;
            let mut depth_stat = Statistics::new();
            let mut time_stat = Statistics::new();
            let mut ebf_stat = Statistics::new();
            let mut nodes_stat = Statistics::new();
            let mut space_stat = Statistics::new();

            for (index, grid) in puzzles.iter().enumerate() {
                let (problem, answer) =
                    solve(strategy, heuristic, grid, mode, time_limit, args.depth_limit);
                debug!("{} {} puzzle {}: {}", strategy.name(), mode, index + 1, answer);

                match answer.result() {
                    Some(goal) => {
                        if goal.state() != &problem.goal_state() {
                            warn!("puzzle {} returned a non-goal state", index + 1);
                        }
                        ebf_stat.add(effective_branching_factor(
                            answer.nodes_expanded(),
                            goal.depth(),
                        ));
                        depth_stat.add(goal.depth() as f64);
                    }
                    None => unsolved += 1,
                }
                time_stat.add(answer.elapsed().as_secs_f64());
                nodes_stat.add(answer.nodes_per_second());
                space_stat.add(answer.peak_frontier_size() as f64);
            }

            println!();
            println!(
                "Summary for {} ({} heuristic) using {} search on {}",
                strategy.name(),
                heuristic,
                mode,
                args.puzzle_file.display()
            );
            println!("Attempted: {}", puzzles.len());
            println!("Solved: {}", puzzles.len() - unsolved);
            println!("Average depth: {:.3}", depth_stat.mean());
            println!("Average time: {:.5}", time_stat.mean());
            println!("Average space: {:.1}", space_stat.mean());
            println!("Average effective branching factor: {:.3}", ebf_stat.mean());
            println!("Average nodes per second: {:.1}", nodes_stat.mean());
            println!("Maximum time: {:.5}", time_stat.max().unwrap_or(0.0));
            println!("Maximum depth: {}", depth_stat.max().unwrap_or(0.0));
        }
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
