//! Dense linear solves for the active-set engines.
//!
//! Purpose
//! - Solve `M x = y` for small dense systems (side ≤ dim + 4) by Gaussian
//!   elimination with partial pivoting, in place.
//!
//! Ownership
//! - Every solver takes the matrix and right-hand side **by value** and
//!   destroys them. Callers that keep a live system (the KKT matrix of
//!   `distance`) hand over a fresh clone per solve.
//!
//! Conventions
//! - Pivots with magnitude `<= FLOAT_EPSILON` count as zero.
//! - `PivotMode::Strict` reports `SolveError::Singular` on a zero pivot;
//!   `PivotMode::Safe` zeroes that row/column, pins the unknown to `0`, and
//!   continues.

mod gauss;
mod symmetric;

pub use gauss::solve;
pub use symmetric::solve_symmetric;
pub(crate) use symmetric::is_symmetric;

use std::fmt;

/// What to do when no usable pivot exists in the current column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotMode {
    /// Fail with `SolveError::Singular`.
    #[default]
    Strict,
    /// Drop the unknown (solution entry `0`) and continue eliminating.
    Safe,
}

/// Errors surfaced by the linear solvers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// No unique solution: a pivot fell below the threshold.
    Singular,
    /// Matrix not square, or right-hand side length differs from its side.
    DimensionMismatch { expected: usize, got: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Singular => write!(f, "linear system is singular"),
            SolveError::DimensionMismatch { expected, got } => write!(
                f,
                "linear system dimension mismatch: expected {expected}, got {got}"
            ),
        }
    }
}

impl std::error::Error for SolveError {}
