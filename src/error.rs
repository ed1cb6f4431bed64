//! Error types for grid construction and site addressing.

use std::fmt;

/// Contract violations raised by the percolation core.
///
/// Both variants indicate a caller bug, raised at the offending call and
/// never recovered internally. The command-line harness is the only place
/// they are caught and turned into a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// Zero grid dimension, or zero trial count at experiment construction.
    /// `trials` is `None` when the failure comes from the grid itself.
    InvalidGridSize { n: usize, trials: Option<usize> },

    /// Row or column outside the 1-indexed `[1, n]` range.
    OutOfRangeCoordinate { row: usize, col: usize, n: usize },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidGridSize { n, trials: None } => {
                write!(f, "{} is not a valid grid size", n)
            }
            PercolationError::InvalidGridSize {
                n,
                trials: Some(trials),
            } => {
                write!(f, "cannot perform {} trials on a {}x{} grid", trials, n, n)
            }
            PercolationError::OutOfRangeCoordinate { row, col, n } => {
                write!(
                    f,
                    "site ({}, {}) out of range: indices must be in 1..={}",
                    row, col, n
                )
            }
        }
    }
}

impl std::error::Error for PercolationError {}
