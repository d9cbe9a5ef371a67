//! Zero-padded access to caller point sets.
//!
//! Points are plain coordinate slices of possibly different lengths; a
//! missing trailing coordinate reads as `0`. Nothing here copies coordinates.

use nalgebra::DVector;

/// Borrow every point of a caller set as a coordinate slice.
pub(crate) fn as_slices<P: AsRef<[f64]>>(points: &[P]) -> Vec<&[f64]> {
    points.iter().map(AsRef::as_ref).collect()
}

/// Ambient dimension: the longest point of either set.
pub(crate) fn ambient_dim(a: &[&[f64]], b: &[&[f64]]) -> usize {
    a.iter().chain(b).map(|p| p.len()).max().unwrap_or(0)
}

/// Dot product with implicit zero padding of the shorter operand.
#[inline]
pub(crate) fn dot(p: &[f64], q: &[f64]) -> f64 {
    p.iter().zip(q).map(|(x, y)| x * y).sum()
}

/// `acc += alpha * p`, padding `p` with zeros.
#[inline]
pub(crate) fn axpy(acc: &mut DVector<f64>, alpha: f64, p: &[f64]) {
    for (a, x) in acc.iter_mut().zip(p) {
        *a += alpha * x;
    }
}

/// Evaluate the combination `Σ coeffs[i] · points[i]` in the ambient dimension
/// of `points`.
///
/// Use with the coefficient vectors returned by the distance engines to
/// recover the witness point on each hull.
///
/// Panics if `coeffs` is shorter than `points`.
pub fn combine<P: AsRef<[f64]>>(points: &[P], coeffs: &[f64]) -> DVector<f64> {
    assert!(
        coeffs.len() >= points.len(),
        "coefficient buffer too short: {} < {} points",
        coeffs.len(),
        points.len()
    );
    let pts = as_slices(points);
    let dim = ambient_dim(&pts, &[]);
    let mut out = DVector::zeros(dim);
    for (p, &c) in pts.iter().zip(coeffs) {
        axpy(&mut out, c, p);
    }
    out
}
