//! KKT system and index partitions shared by the affine and convex engines.
//!
//! Layout
//! - Side `n = max_inactive + 2`. A's inactive slot `j` lives in row/column
//!   `j` (counting up), B's in `max_inactive - 1 - j` (counting down). Rows
//!   `max_inactive` and `max_inactive + 1` hold the Lagrange multipliers that
//!   pin A's and B's coefficients to sum 1.
//! - Unused rows carry a unit diagonal and zeros elsewhere, so they solve to 0
//!   and keep the matrix non-singular.
//! - Entry `(r, s)` is `σ_r σ_s ⟨p_r, p_s⟩` with `σ = +1` for A and `-1` for B:
//!   the Gram matrix of the separation `Σ x_i a_i − Σ y_j b_j`.
//!
//! Partitions
//! - Each side owns a permutation of its point indices, split in place into
//!   `[inactive | active | forthcoming]`. Inactive slot `j` is `pi[j]`.
//!   Moving a point between regions is an index swap or rotation; the caller's
//!   points are never copied or reordered.
//!
//! The matrix is symmetric after every mutation. `solve` hands a clone to the
//! destructive solver and never the live matrix.

use nalgebra::{DMatrix, DVector};

use super::points::{axpy, dot};
use crate::cmp::Comparator;
use crate::linalg::{is_symmetric, solve_symmetric, SolveError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    A,
    B,
}

impl Side {
    pub(crate) const BOTH: [Side; 2] = [Side::A, Side::B];

    #[inline]
    pub(crate) fn sign(self) -> f64 {
        match self {
            Side::A => 1.0,
            Side::B => -1.0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

struct Partition<'p> {
    points: &'p [&'p [f64]],
    pi: Vec<usize>,
    inactive: usize,
    active: usize,
}

impl<'p> Partition<'p> {
    fn new(points: &'p [&'p [f64]]) -> Self {
        Self {
            points,
            pi: (0..points.len()).collect(),
            inactive: 0,
            active: 0,
        }
    }

    #[inline]
    fn point_at(&self, pos: usize) -> &'p [f64] {
        self.points[self.pi[pos]]
    }
}

pub(crate) struct ActiveSetSystem<'p> {
    kkt: DMatrix<f64>,
    rhs: DVector<f64>,
    max_inactive: usize,
    sides: [Partition<'p>; 2],
    /// Last accepted solution, row-aligned with `kkt` (coefficients and multipliers).
    z: DVector<f64>,
    dim: usize,
}

impl<'p> ActiveSetSystem<'p> {
    /// System holding `a[0]` and `b[0]` with coefficient 1 each.
    ///
    /// Both sets must be non-empty.
    pub(crate) fn new(a: &'p [&'p [f64]], b: &'p [&'p [f64]], dim: usize) -> Self {
        debug_assert!(!a.is_empty() && !b.is_empty());
        let max_inactive = (a.len() + b.len()).min(dim + 2);
        let n = max_inactive + 2;
        let mut kkt = DMatrix::zeros(n, n);
        for i in 0..max_inactive {
            kkt[(i, i)] = 1.0;
        }
        let mut rhs = DVector::zeros(n);
        rhs[max_inactive] = 1.0;
        rhs[max_inactive + 1] = 1.0;
        let mut sys = Self {
            kkt,
            rhs,
            max_inactive,
            sides: [Partition::new(a), Partition::new(b)],
            z: DVector::zeros(n),
            dim,
        };
        sys.insert(Side::A, 0);
        sys.insert(Side::B, 0);
        let (ra, rb) = (sys.row(Side::A, 0), sys.row(Side::B, 0));
        sys.z[ra] = 1.0;
        sys.z[rb] = 1.0;
        sys
    }

    #[inline]
    fn side(&self, side: Side) -> &Partition<'p> {
        &self.sides[side.index()]
    }

    #[inline]
    fn side_mut(&mut self, side: Side) -> &mut Partition<'p> {
        &mut self.sides[side.index()]
    }

    /// KKT row of inactive slot `slot` on `side`.
    #[inline]
    pub(crate) fn row(&self, side: Side, slot: usize) -> usize {
        match side {
            Side::A => slot,
            Side::B => self.max_inactive - 1 - slot,
        }
    }

    #[inline]
    fn lagrange_row(&self, side: Side) -> usize {
        self.max_inactive + side.index()
    }

    #[inline]
    pub(crate) fn inactive_len(&self, side: Side) -> usize {
        self.side(side).inactive
    }

    pub(crate) fn inactive_total(&self) -> usize {
        self.inactive_len(Side::A) + self.inactive_len(Side::B)
    }

    #[inline]
    pub(crate) fn max_inactive(&self) -> usize {
        self.max_inactive
    }

    pub(crate) fn is_saturated(&self) -> bool {
        self.inactive_total() == self.max_inactive
    }

    /// Solve the current system on a private copy.
    pub(crate) fn solve(&self) -> Result<DVector<f64>, SolveError> {
        solve_symmetric(self.kkt.clone(), self.rhs.clone())
    }

    /// Lagrange multiplier of `side` in the accepted solution.
    #[inline]
    pub(crate) fn multiplier(&self, side: Side) -> f64 {
        self.z[self.lagrange_row(side)]
    }

    /// Take `x` as the accepted solution.
    pub(crate) fn accept(&mut self, x: DVector<f64>) {
        self.z = x;
    }

    /// `Σ x_i a_i − Σ y_j b_j` over the inactive points of the accepted solution.
    pub(crate) fn separation(&self) -> DVector<f64> {
        let mut v = DVector::zeros(self.dim);
        for side in Side::BOTH {
            let part = self.side(side);
            for slot in 0..part.inactive {
                let c = self.z[self.row(side, slot)] * side.sign();
                axpy(&mut v, c, part.point_at(slot));
            }
        }
        v
    }

    /// Points outside the inactive region (`active` and `forthcoming`), with
    /// their permutation position.
    pub(crate) fn candidates(&self, side: Side) -> impl Iterator<Item = (usize, &'p [f64])> + '_ {
        let part = self.side(side);
        (part.inactive..part.pi.len()).map(move |pos| (pos, part.point_at(pos)))
    }

    /// Move the point at permutation position `pos` (outside the inactive
    /// region) into a new inactive slot and extend the KKT matrix with it.
    ///
    /// Panics in debug builds if the system is saturated.
    pub(crate) fn insert(&mut self, side: Side, pos: usize) {
        debug_assert!(self.inactive_total() < self.max_inactive);
        let part = self.side_mut(side);
        let slot = part.inactive;
        debug_assert!(pos >= slot && pos < part.pi.len());
        if pos < slot + part.active {
            // Re-entry: swap with the first active entry.
            part.pi.swap(slot, pos);
            part.active -= 1;
        } else {
            // Forthcoming: rotate the first active entry to the end of the
            // active region, the first forthcoming entry into `pos`.
            let first_forthcoming = slot + part.active;
            let chosen = part.pi[pos];
            part.pi[pos] = part.pi[first_forthcoming];
            part.pi[first_forthcoming] = part.pi[slot];
            part.pi[slot] = chosen;
        }
        part.inactive += 1;
        let p = part.point_at(slot);

        let r = self.row(side, slot);
        for other in Side::BOTH {
            let sign = side.sign() * other.sign();
            for k in 0..self.inactive_len(other) {
                let rk = self.row(other, k);
                let q = self.side(other).point_at(k);
                let g = sign * dot(p, q);
                self.kkt[(r, rk)] = g;
                self.kkt[(rk, r)] = g;
            }
        }
        let l = self.lagrange_row(side);
        self.kkt[(r, l)] = 1.0;
        self.kkt[(l, r)] = 1.0;
        self.z[r] = 0.0;
        debug_assert!(is_symmetric(&self.kkt));
    }

    /// Remove inactive `slot` of `side` into the active region.
    ///
    /// The last inactive slot's row/column moves into `slot`; the vacated row
    /// is reset to the unused state.
    pub(crate) fn evict(&mut self, side: Side, slot: usize) {
        let last = self.inactive_len(side) - 1;
        debug_assert!(slot <= last && last > 0);
        let r = self.row(side, slot);
        let rl = self.row(side, last);
        let n = self.kkt.nrows();
        if slot != last {
            for c in 0..n {
                self.kkt[(r, c)] = self.kkt[(rl, c)];
            }
            for c in 0..n {
                self.kkt[(c, r)] = self.kkt[(c, rl)];
            }
            self.kkt[(r, r)] = self.kkt[(rl, rl)];
            self.z[r] = self.z[rl];
        }
        self.kkt.row_mut(rl).fill(0.0);
        self.kkt.column_mut(rl).fill(0.0);
        self.kkt[(rl, rl)] = 1.0;
        self.z[rl] = 0.0;

        let part = self.side_mut(side);
        part.pi.swap(slot, last);
        part.inactive -= 1;
        part.active += 1;
        debug_assert!(is_symmetric(&self.kkt));
    }

    /// First inactive coefficient to hit zero on the way from the accepted
    /// (non-negative) solution to `w`, with the step length `θ ∈ [0, 1]`.
    ///
    /// `None` if every coefficient of `w` is positive beyond tolerance. Ties
    /// go to side A, then to the lower slot.
    pub(crate) fn blocking_coefficient(
        &self,
        w: &DVector<f64>,
        cmp: &Comparator,
    ) -> Option<(Side, usize, f64)> {
        let mut best: Option<(Side, usize, f64)> = None;
        for side in Side::BOTH {
            for slot in 0..self.inactive_len(side) {
                let r = self.row(side, slot);
                let wr = w[r];
                if !cmp.less_or_equal(wr, 0.0) {
                    continue;
                }
                let zr = self.z[r];
                let theta = if zr - wr > 0.0 {
                    (zr / (zr - wr)).min(1.0)
                } else {
                    0.0
                };
                if best.map_or(true, |(_, _, t)| theta < t) {
                    best = Some((side, slot, theta));
                }
            }
        }
        best
    }

    /// `z ← z + θ (w − z)` on the inactive coefficient rows.
    pub(crate) fn step_toward(&mut self, w: &DVector<f64>, theta: f64) {
        for side in Side::BOTH {
            for slot in 0..self.inactive_len(side) {
                let r = self.row(side, slot);
                self.z[r] += theta * (w[r] - self.z[r]);
            }
        }
    }

    /// Accepted coefficients scattered to the caller's point indices (zero elsewhere).
    pub(crate) fn coefficients(&self, side: Side) -> Vec<f64> {
        let part = self.side(side);
        let mut out = vec![0.0; part.points.len()];
        for slot in 0..part.inactive {
            out[part.pi[slot]] = self.z[self.row(side, slot)];
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn kkt(&self) -> &DMatrix<f64> {
        &self.kkt
    }

    #[cfg(test)]
    pub(crate) fn permutation(&self, side: Side) -> (&[usize], usize, usize) {
        let part = self.side(side);
        (&part.pi, part.inactive, part.active)
    }
}
