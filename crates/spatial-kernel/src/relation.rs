//! Point-versus-simplex classification.
//!
//! The vertex is projected onto the affine hull of the simplex; the sign of
//! the smallest barycentric coefficient of the projection decides between
//! interior, boundary and exterior. A one-point simplex is its own interior.

use crate::cmp::Comparator;
use crate::distance::{check_buffer, hull_distance, write_coefficients, HullKind};

/// Position of a vertex relative to a simplex.
///
/// The discriminants are the stable numeric codes used by callers that store
/// relations compactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VertexRelation {
    Interior = 0,
    Boundary = 1,
    Exterior = 2,
}

impl VertexRelation {
    #[inline]
    pub fn as_code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for VertexRelation {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(VertexRelation::Interior),
            1 => Ok(VertexRelation::Boundary),
            2 => Ok(VertexRelation::Exterior),
            other => Err(other),
        }
    }
}

/// Classify `vertex` against the simplex spanned by `simplex`.
///
/// - `projected = false`: a vertex off the simplex's affine hull (distance
///   beyond tolerance) is `Exterior`.
/// - `projected = true`: the orthogonal projection onto the affine hull is
///   classified instead.
///
/// `coeffs`, if given, receives the barycentric coefficients of the
/// projection; it must be at least as long as `simplex` (panics otherwise).
/// The vertices of `simplex` are expected to be affinely independent.
pub fn simplex_vertex_relation<P: AsRef<[f64]>>(
    simplex: &[P],
    vertex: &[f64],
    coeffs: Option<&mut [f64]>,
    cmp: &Comparator,
    projected: bool,
) -> VertexRelation {
    check_buffer("coeffs", coeffs.as_deref(), simplex.len());
    let report = hull_distance(HullKind::Affine, simplex, &[vertex], cmp);
    write_coefficients(coeffs, &report.coeffs_a);

    if simplex.is_empty() || (!projected && cmp.greater(report.dist2, 0.0)) {
        return VertexRelation::Exterior;
    }
    let min = report.coeffs_a.iter().copied().fold(f64::INFINITY, f64::min);
    if cmp.is_zero(min) {
        VertexRelation::Boundary
    } else if min < 0.0 {
        VertexRelation::Exterior
    } else {
        VertexRelation::Interior
    }
}
