//! In-place Gaussian elimination with partial pivoting.

use nalgebra::{DMatrix, DVector};

use super::{PivotMode, SolveError};
use crate::cfg::FLOAT_EPSILON;

/// Solve `m x = y`, consuming both operands.
///
/// Pivot choice in column `i` (rows `>= i`): keep the diagonal if it is
/// exactly `±1`, otherwise take the first row holding an exact `±1`, otherwise
/// the row with the largest magnitude (first one wins on ties).
pub fn solve(
    mut m: DMatrix<f64>,
    mut y: DVector<f64>,
    mode: PivotMode,
) -> Result<DVector<f64>, SolveError> {
    let n = m.nrows();
    if m.ncols() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: m.ncols(),
        });
    }
    if y.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: y.len(),
        });
    }

    // Unknowns dropped in safe mode; their row and column are all zero.
    let mut dropped = vec![false; n];

    for i in 0..n {
        let p = pivot_row(&m, i);
        if m[(p, i)].abs() <= FLOAT_EPSILON {
            match mode {
                PivotMode::Strict => return Err(SolveError::Singular),
                PivotMode::Safe => {
                    m.row_mut(i).fill(0.0);
                    m.column_mut(i).fill(0.0);
                    y[i] = 0.0;
                    dropped[i] = true;
                    continue;
                }
            }
        }
        if p != i {
            m.swap_rows(i, p);
            y.swap_rows(i, p);
        }

        let pivot = m[(i, i)];
        for c in i..n {
            m[(i, c)] /= pivot;
        }
        y[i] /= pivot;

        for r in (i + 1)..n {
            let f = m[(r, i)];
            if f == 0.0 {
                continue;
            }
            for c in i..n {
                m[(r, c)] -= f * m[(i, c)];
            }
            y[r] -= f * y[i];
        }
    }

    // Back substitution; rows are normalized so the diagonal is 1 (or dropped).
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        if dropped[i] {
            continue;
        }
        let mut s = y[i];
        for c in (i + 1)..n {
            s -= m[(i, c)] * x[c];
        }
        x[i] = s;
    }
    Ok(x)
}

fn pivot_row(m: &DMatrix<f64>, i: usize) -> usize {
    let mut best_row = i;
    let mut best = m[(i, i)].abs();
    if best == 1.0 {
        return i;
    }
    for r in (i + 1)..m.nrows() {
        let v = m[(r, i)].abs();
        if v == 1.0 {
            return r;
        }
        if v > best {
            best = v;
            best_row = r;
        }
    }
    best_row
}
