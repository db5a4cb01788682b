use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;
use tiles_solver::problem::SearchMode;
use tiles_solver::search::Search;
use tiles_solver::tiles::TilesProblem;
use tiles_solver::utils::read_puzzles;
use tiles_solver::TilesError;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve each puzzle with iterative deepening and show the touches", long_about = None)]
struct Args {
    /// Path to the puzzle file
    puzzle_file: PathBuf,

    /// Time limit per puzzle, in seconds
    #[clap(short, long, default_value_t = 10.0)]
    time_limit: f64,

    /// Search mode (tree or graph)
    #[clap(short, long, default_value_t = SearchMode::Graph)]
    mode: SearchMode,
}

fn run(args: &Args) -> Result<(), TilesError> {
    let time_limit = Duration::try_from_secs_f64(args.time_limit)
        .map_err(|_| TilesError::InvalidTimeLimit(args.time_limit))?;
    let puzzles = read_puzzles(&args.puzzle_file)?;

    for (index, grid) in puzzles.into_iter().enumerate() {
        let problem = TilesProblem::new(grid);
        let start = problem.initial_state();
        let answer =
            Search::new(&problem, time_limit).iterative_deepening(start.clone(), args.mode);

        match answer.result() {
            Some(goal) => {
                println!("{} actions needed to solve problem {}", goal.depth(), index + 1);
                println!("{}", start.display());
                println!("{}", goal.display_steps());
            }
            None => println!("Could not solve problem {}", index + 1),
        }
        println!("----------------");
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
