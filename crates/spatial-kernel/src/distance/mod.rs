//! Minimum distance between affine and convex hulls of finite point sets.
//!
//! Purpose
//! - Answer “how far apart are hull(A) and hull(B)?” in any dimension, with
//!   the barycentric coefficients of a closest pair. The 3D primitive layer
//!   (point-in-triangle, tetrahedron containment, simplex/simplex tests)
//!   reduces its queries to these calls.
//!
//! Method (active set)
//! - Start from one point per side, solve the KKT system of
//!   `min |Σ x_i a_i − Σ y_j b_j|²` subject to `Σ x = Σ y = 1`, then add the
//!   excluded point with the strongest Lagrangian until none is left, the
//!   hulls touch, or `min(|A|+|B|, dim+2)` points participate.
//! - Convex hulls also keep coefficients non-negative: when a solve produces
//!   a coefficient `≤ 0` we step from the last non-negative solution towards
//!   the new one until a coefficient reaches zero, move that point out, and
//!   re-solve. Points moved out may re-enter later.
//!
//! Conventions
//! - Distances are **squared**.
//! - Points are coordinate slices; shorter points are zero-padded to the
//!   longest one. Empty input sets give `+∞`; zero-dimensional input gives 0.
//! - Coefficient buffers must be at least as long as their point set
//!   (panics otherwise). They are zero-filled, then written at the indices of
//!   the participating points.
//! - A singular KKT system is not an error: the last accepted solution is
//!   returned.

mod engine;
mod points;
mod system;

pub use engine::{HullDistance, HullKind, Termination};
pub use points::combine;

use crate::cmp::Comparator;
use points::as_slices;

/// Squared distance between the affine hulls of `a` and `b`.
///
/// Coefficients, when requested, sum to 1 per side but may be negative.
pub fn affine_distance<P, Q>(
    a: &[P],
    b: &[Q],
    coeffs_a: Option<&mut [f64]>,
    coeffs_b: Option<&mut [f64]>,
    cmp: &Comparator,
) -> f64
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    distance_into(HullKind::Affine, a, b, coeffs_a, coeffs_b, cmp)
}

/// Squared distance between the convex hulls of `a` and `b`.
///
/// Coefficients, when requested, are non-negative and sum to 1 per side.
pub fn simplex_distance<P, Q>(
    a: &[P],
    b: &[Q],
    coeffs_a: Option<&mut [f64]>,
    coeffs_b: Option<&mut [f64]>,
    cmp: &Comparator,
) -> f64
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    distance_into(HullKind::Convex, a, b, coeffs_a, coeffs_b, cmp)
}

/// Run a distance query and return owned coefficients plus diagnostics.
pub fn hull_distance<P, Q>(kind: HullKind, a: &[P], b: &[Q], cmp: &Comparator) -> HullDistance
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    let a = as_slices(a);
    let b = as_slices(b);
    engine::run(kind, &a, &b, cmp)
}

/// Do the convex hulls of `a` and `b` intersect (within tolerance)?
///
/// Empty sets intersect nothing.
pub fn convex_hulls_intersect<P, Q>(a: &[P], b: &[Q], cmp: &Comparator) -> bool
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    cmp.is_zero(simplex_distance(a, b, None, None, cmp))
}

/// Is `p` inside the convex hull of `points` (boundary included)?
pub fn convex_hull_contains<P: AsRef<[f64]>>(points: &[P], p: &[f64], cmp: &Comparator) -> bool {
    convex_hulls_intersect(points, &[p], cmp)
}

fn distance_into<P, Q>(
    kind: HullKind,
    a: &[P],
    b: &[Q],
    coeffs_a: Option<&mut [f64]>,
    coeffs_b: Option<&mut [f64]>,
    cmp: &Comparator,
) -> f64
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    check_buffer("coeffs_a", coeffs_a.as_deref(), a.len());
    check_buffer("coeffs_b", coeffs_b.as_deref(), b.len());
    let report = hull_distance(kind, a, b, cmp);
    write_coefficients(coeffs_a, &report.coeffs_a);
    write_coefficients(coeffs_b, &report.coeffs_b);
    report.dist2
}

pub(crate) fn check_buffer(name: &str, buf: Option<&[f64]>, len: usize) {
    if let Some(buf) = buf {
        assert!(
            buf.len() >= len,
            "{name} buffer too short: {} < {len} points",
            buf.len()
        );
    }
}

pub(crate) fn write_coefficients(out: Option<&mut [f64]>, coeffs: &[f64]) {
    if let Some(out) = out {
        out.fill(0.0);
        out[..coeffs.len()].copy_from_slice(coeffs);
    }
}
