//! Numerical kernel for 3D mesh generation.
//!
//! - `distance`: squared distance between affine and convex hulls of point
//!   sets, with barycentric coefficients of a closest pair.
//! - `relation`: classification of a vertex against a simplex.
//! - `linalg`: dense Gaussian elimination used by the KKT solves.
//! - `cmp`, `cfg`: tolerance-based comparison and precision constants.
//! - `sample`: reproducible random point sets for tests and benches.
//!
//! All distances are squared. Points are `f64` coordinate slices; shorter
//! points are zero-padded to the longest one in a query.

pub mod cfg;
pub mod cmp;
pub mod distance;
pub mod linalg;
pub mod relation;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cmp::Comparator;
pub use distance::{affine_distance, hull_distance, simplex_distance, HullDistance, HullKind};
pub use relation::{simplex_vertex_relation, VertexRelation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{DEFAULT_EPS, DOUBLE_EPSILON, FLOAT_EPSILON};
    pub use crate::cmp::Comparator;
    pub use crate::distance::{
        affine_distance, combine, convex_hull_contains, convex_hulls_intersect, hull_distance,
        simplex_distance, HullDistance, HullKind, Termination,
    };
    pub use crate::linalg::{solve, solve_symmetric, PivotMode, SolveError};
    pub use crate::relation::{simplex_vertex_relation, VertexRelation};
}
