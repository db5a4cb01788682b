use thiserror::Error;

/// Errors raised while building puzzles or reading configuration.
///
/// Search outcomes (success, failure, cutoff) are never reported through this
/// type; they are carried by [`crate::record::SearchTerminationRecord`].
#[derive(Debug, Error)]
pub enum TilesError {
    #[error("puzzle has no rows")]
    EmptyGrid,

    #[error("row {row} has {found} tiles (expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    InvalidTile { ch: char, row: usize, col: usize },

    #[error("invalid dimension line {line}: '{text}'")]
    InvalidDimension { line: usize, text: String },

    #[error("puzzle starting on line {line} expects {expected} rows, found {found}")]
    TruncatedPuzzle {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown search mode '{0}' (expected 'tree' or 'graph')")]
    UnknownMode(String),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("unknown heuristic '{0}' (expected 'zero', 'admissible' or 'inadmissible')")]
    UnknownHeuristic(String),

    #[error("time limit must be a non-negative number of seconds, got {0}")]
    InvalidTimeLimit(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
