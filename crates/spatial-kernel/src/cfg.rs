//! Tolerance defaults and iteration budgets (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling” at call sites.
//!   The only runtime knob is the `Comparator` epsilon; everything here is a
//!   mathematical constant or a guard.

/// Machine epsilon for `f64` (the value iterative halving of `1.0` converges to).
pub const DOUBLE_EPSILON: f64 = f64::EPSILON;

/// Machine epsilon for `f32`, widened to `f64`.
///
/// Used as the absolute pivot threshold of the Gaussian elimination.
pub const FLOAT_EPSILON: f64 = f32::EPSILON as f64;

/// Default comparator tolerance.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Solve budget per input point for the active-set engines.
///
/// Guards against floating-point cycling only; well-conditioned inputs finish
/// after a handful of solves per point.
pub(crate) const ITERATIONS_PER_POINT: usize = 64;
