//! Active-set iteration shared by both hull kinds.
//!
//! One loop, two rules:
//! - selection: which excluded point enters next (`HullKind::score`);
//! - eviction: convex hulls additionally push non-positive coefficients out
//!   of the inactive region before a solution is accepted.

use nalgebra::DVector;
use tracing::{debug, trace, warn};

use super::points::{ambient_dim, dot};
use super::system::{ActiveSetSystem, Side};
use crate::cfg::ITERATIONS_PER_POINT;
use crate::cmp::Comparator;

/// Which hull of each point set is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullKind {
    /// Affine hulls: coefficients sum to 1, any sign.
    Affine,
    /// Convex hulls: coefficients sum to 1 and are non-negative.
    Convex,
}

impl HullKind {
    /// Selection score of an excluded point with Lagrangian `l = σ⟨p, v⟩ + μ`.
    ///
    /// Affine hulls take any point off the optimum's tangent plane, convex hulls
    /// only points that decrease the distance when mixed in.
    #[inline]
    fn score(self, lagrangian: f64) -> f64 {
        match self {
            HullKind::Affine => lagrangian.abs(),
            HullKind::Convex => -lagrangian,
        }
    }

    #[inline]
    fn evicts(self) -> bool {
        matches!(self, HullKind::Convex)
    }
}

/// Why the iteration stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// One of the point sets is empty; the distance is `+∞`.
    Empty,
    /// All points are zero-dimensional; the distance is `0`.
    ZeroDimensional,
    /// The hulls touch (distance ≈ 0).
    Touching,
    /// Both Lagrange multipliers vanished.
    ZeroMultipliers,
    /// `max_inactive` points participate; no further point can be independent.
    Saturated,
    /// No excluded point improves the distance.
    Exhausted,
    /// The KKT system became singular; the last accepted solution is kept.
    Singular,
    /// The solve budget ran out; the last accepted solution is kept.
    Budget,
}

/// Owned result of a hull distance query.
#[derive(Clone, Debug, PartialEq)]
pub struct HullDistance {
    /// Squared distance between the hulls.
    pub dist2: f64,
    /// Coefficients of the witness point on A's hull, one per point of A.
    pub coeffs_a: Vec<f64>,
    /// Coefficients of the witness point on B's hull, one per point of B.
    pub coeffs_b: Vec<f64>,
    /// Number of KKT solves performed.
    pub iterations: usize,
    pub termination: Termination,
}

impl HullDistance {
    fn trivial(dist2: f64, len_a: usize, len_b: usize, termination: Termination) -> Self {
        let unit = |len: usize| {
            let mut c = vec![0.0; len];
            if termination == Termination::ZeroDimensional {
                if let Some(first) = c.first_mut() {
                    *first = 1.0;
                }
            }
            c
        };
        Self {
            dist2,
            coeffs_a: unit(len_a),
            coeffs_b: unit(len_b),
            iterations: 0,
            termination,
        }
    }
}

/// Run the active-set iteration for `kind` on borrowed coordinate slices.
pub(crate) fn run(kind: HullKind, a: &[&[f64]], b: &[&[f64]], cmp: &Comparator) -> HullDistance {
    if a.is_empty() || b.is_empty() {
        return HullDistance::trivial(f64::INFINITY, a.len(), b.len(), Termination::Empty);
    }
    let dim = ambient_dim(a, b);
    if dim == 0 {
        return HullDistance::trivial(0.0, a.len(), b.len(), Termination::ZeroDimensional);
    }

    let mut sys = ActiveSetSystem::new(a, b, dim);
    let budget = ITERATIONS_PER_POINT * (a.len() + b.len());
    let mut dist2 = sys.separation().norm_squared();
    let mut iterations = 0;

    let termination = loop {
        if iterations == budget {
            warn!(?kind, iterations, dist2, "active-set budget exhausted");
            break Termination::Budget;
        }
        iterations += 1;
        let x = match sys.solve() {
            Ok(x) => x,
            Err(err) => {
                debug!(?kind, iterations, %err, "falling back to last accepted solution");
                break Termination::Singular;
            }
        };

        if kind.evicts() {
            if let Some((side, slot, theta)) = sys.blocking_coefficient(&x, cmp) {
                trace!(?side, slot, theta, "evicting non-positive coefficient");
                sys.step_toward(&x, theta);
                sys.evict(side, slot);
                continue;
            }
        }

        sys.accept(x);
        let v = sys.separation();
        dist2 = v.norm_squared();
        trace!(
            ?kind,
            iterations,
            inactive_a = sys.inactive_len(Side::A),
            inactive_b = sys.inactive_len(Side::B),
            dist2,
            "accepted"
        );

        if cmp.is_zero(dist2) {
            break Termination::Touching;
        }
        if cmp.is_zero(sys.multiplier(Side::A)) && cmp.is_zero(sys.multiplier(Side::B)) {
            break Termination::ZeroMultipliers;
        }
        if sys.is_saturated() {
            break Termination::Saturated;
        }
        match select(kind, &sys, &v, cmp) {
            Some((side, pos)) => sys.insert(side, pos),
            None => break Termination::Exhausted,
        }
    };

    if matches!(termination, Termination::Singular | Termination::Budget) {
        // Evictions may have moved the accepted point since the last distance.
        dist2 = sys.separation().norm_squared();
    }
    debug!(
        ?kind,
        ?termination,
        iterations,
        inactive = sys.inactive_total(),
        max_inactive = sys.max_inactive(),
        dist2,
        "hull distance"
    );
    HullDistance {
        dist2,
        coeffs_a: sys.coefficients(Side::A),
        coeffs_b: sys.coefficients(Side::B),
        iterations,
        termination,
    }
}

/// Best excluded point over both sides, if its score is positive beyond
/// tolerance. Ties go to side A, then to the lower permutation position.
fn select(
    kind: HullKind,
    sys: &ActiveSetSystem<'_>,
    v: &DVector<f64>,
    cmp: &Comparator,
) -> Option<(Side, usize)> {
    let mut best: Option<(f64, Side, usize)> = None;
    for side in Side::BOTH {
        let mu = sys.multiplier(side);
        for (pos, p) in sys.candidates(side) {
            let score = kind.score(side.sign() * dot(p, v.as_slice()) + mu);
            if best.map_or(true, |(s, _, _)| score > s) {
                best = Some((score, side, pos));
            }
        }
    }
    best.filter(|&(s, _, _)| cmp.greater(s, 0.0))
        .map(|(_, side, pos)| (side, pos))
}
