use clap::Parser;
use env_logger::Env;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tiles_solver::engine::Grid;
use tiles_solver::utils::format_puzzle;
use tiles_solver::TilesError;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generate colored tiles puzzles by scrambling solved grids", long_about = None)]
struct Args {
    /// Number of puzzles to generate
    num_samples: usize,

    /// Side length of each square grid
    grid_size: usize,

    /// Random touches applied to the solved grid; an upper bound on the solution depth
    solution_depth: usize,

    /// Seed for reproducible output; drawn from the OS when omitted
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if args.grid_size == 0 {
        eprintln!("error: {}", TilesError::EmptyGrid);
        std::process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    debug!("generating {} puzzles", args.num_samples);

    for _ in 0..args.num_samples {
        let size = args.grid_size;
        let grid = Grid::scrambled(size, size, args.solution_depth, &mut rng);
        print!("{}", format_puzzle(&grid));
    }
}
