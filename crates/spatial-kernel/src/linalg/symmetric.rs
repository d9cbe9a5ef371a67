//! Symmetric-system entry point.
//!
//! Same contract as `solve` with `PivotMode::Strict`, and bit-for-bit the same
//! results: it delegates to the generic elimination.

use nalgebra::{DMatrix, DVector};

use super::{gauss, PivotMode, SolveError};

/// Solve `m x = y` for symmetric `m`, consuming both operands.
///
/// Symmetry is checked in debug builds only; shape errors are reported as
/// `SolveError::DimensionMismatch`.
pub fn solve_symmetric(m: DMatrix<f64>, y: DVector<f64>) -> Result<DVector<f64>, SolveError> {
    debug_assert!(
        !m.is_square() || is_symmetric(&m),
        "solve_symmetric called with asymmetric matrix"
    );
    gauss::solve(m, y, PivotMode::Strict)
}

pub(crate) fn is_symmetric(m: &DMatrix<f64>) -> bool {
    if !m.is_square() {
        return false;
    }
    let n = m.nrows();
    (0..n).all(|r| (r + 1..n).all(|c| m[(r, c)] == m[(c, r)]))
}
