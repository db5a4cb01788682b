use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::time::Duration;
use tempfile::{tempdir, NamedTempFile};
use tiles_solver::engine::Grid;
use tiles_solver::heuristics::TileHeuristic;
use tiles_solver::local::random_restart;
use tiles_solver::plan::TouchPlanProblem;
use tiles_solver::problem::SearchMode;
use tiles_solver::search::Search;
use tiles_solver::tiles::TilesProblem;
use tiles_solver::utils::{format_puzzle, read_puzzles};
use tiles_solver::TilesError;

#[test]
fn test_generated_puzzles_are_solved_by_every_informed_strategy() {
    let mut rng = SmallRng::seed_from_u64(2022);
    let grids: Vec<Grid> = (0..4).map(|_| Grid::scrambled(3, 3, 3, &mut rng)).collect();

    let dir = tempdir().unwrap();
    let path = dir.path().join("puzzles.txt");
    let text: String = grids.iter().map(format_puzzle).collect();
    fs::write(&path, text).unwrap();

    let puzzles = read_puzzles(&path).unwrap();
    assert_eq!(puzzles, grids);

    for grid in puzzles {
        let plain = TilesProblem::new(grid.clone());
        let bfs = Search::new(&plain, Duration::from_secs(10))
            .breadth_first(plain.initial_state(), SearchMode::Graph);
        assert!(bfs.is_success());
        // Three random touches never need more than three to undo.
        assert!(bfs.depth().unwrap() <= 3);

        let informed = TilesProblem::new(grid).with_heuristic(TileHeuristic::Admissible);
        let a_star = Search::new(&informed, Duration::from_secs(10))
            .a_star(informed.initial_state(), SearchMode::Graph);
        assert!(a_star.is_success());
        assert_eq!(a_star.result().unwrap().path_cost(), bfs.depth().unwrap() as f64);
    }
}

#[test]
fn test_hand_written_file_with_blank_lines() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "1\nR\n\n\n2\nRR\nRR\n").unwrap();

    let puzzles = read_puzzles(file.path()).unwrap();
    assert_eq!(puzzles.len(), 2);

    let problem = TilesProblem::new(puzzles[1].clone());
    let answer = Search::new(&problem, Duration::from_secs(10))
        .iterative_deepening(problem.initial_state(), SearchMode::Graph);
    assert!(answer.is_success());
    assert_eq!(answer.depth(), Some(4));
    let steps = answer.result().unwrap().display_steps();
    assert_eq!(steps.lines().count(), 5);
    assert!(steps.starts_with("Solution:"));

    let local = TouchPlanProblem::new(puzzles[0].clone());
    let plan = random_restart(&local, 3, 10, true, &mut SmallRng::seed_from_u64(1));
    assert!(plan.is_solution());
}

#[test]
fn test_malformed_file_reports_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "2\nRG\nGB\n").unwrap();
    let err = read_puzzles(file.path()).unwrap_err();
    assert!(matches!(err, TilesError::InvalidTile { ch: 'B', .. }));
    assert_eq!(err.to_string(), "unrecognized character 'B' in row 1 col 1");
}
