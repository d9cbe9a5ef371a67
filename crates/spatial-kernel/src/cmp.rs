//! Epsilon-tolerant scalar comparisons shared by every predicate in the crate.
//!
//! A `Comparator` is an immutable `Copy` value. Pass the same instance to
//! related queries so their tolerance decisions agree.

use crate::cfg::DEFAULT_EPS;

/// Absolute-tolerance comparator over `f64`.
///
/// Invariants:
/// - `eps >= 0` and finite.
/// - `equal(a, b)` iff `|a - b| <= eps`; the strict predicates are the
///   complements of the non-strict ones, so exactly one of `less`, `equal`,
///   `greater` holds for finite inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparator {
    eps: f64,
}

impl Default for Comparator {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl Comparator {
    /// Build a comparator with tolerance `eps`.
    ///
    /// Panics if `eps` is negative or not finite.
    pub fn new(eps: f64) -> Self {
        assert!(
            eps.is_finite() && eps >= 0.0,
            "comparator epsilon must be finite and non-negative, got {eps}"
        );
        Self { eps }
    }

    #[inline]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    #[inline]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    #[inline]
    pub fn less(&self, a: f64, b: f64) -> bool {
        a < b - self.eps
    }

    #[inline]
    pub fn greater(&self, a: f64, b: f64) -> bool {
        a > b + self.eps
    }

    #[inline]
    pub fn less_or_equal(&self, a: f64, b: f64) -> bool {
        a <= b + self.eps
    }

    #[inline]
    pub fn greater_or_equal(&self, a: f64, b: f64) -> bool {
        a >= b - self.eps
    }

    /// Shorthand for `equal(a, 0.0)`.
    #[inline]
    pub fn is_zero(&self, a: f64) -> bool {
        self.equal(a, 0.0)
    }
}
