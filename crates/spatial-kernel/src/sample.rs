//! Reproducible random point sets and simplices.
//!
//! Purpose
//! - Feed property tests and benchmarks with point clouds that can be replayed
//!   from a `(seed, index)` token, so a failing draw can be regenerated alone.
//!
//! Model
//! - Points are uniform in the axis-aligned cube `center ± half_extent`.
//! - Simplices are drawn the same way and retried until their vertices are
//!   affinely independent (Gram determinant of the edge vectors above a floor).

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration for a point cloud.
#[derive(Clone, Debug)]
pub struct PointSetCfg {
    pub count: PointCount,
    pub dim: usize,
    /// Cube center; missing coordinates are zero.
    pub center: Vec<f64>,
    pub half_extent: f64,
}

impl Default for PointSetCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 1, max: 5 },
            dim: 3,
            center: Vec::new(),
            half_extent: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud according to `cfg`.
pub fn draw_point_set(cfg: &PointSetCfg, tok: ReplayToken) -> Vec<Vec<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    (0..n).map(|_| draw_point(&mut rng, cfg)).collect()
}

/// Draw a simplex with `vertices` affinely independent vertices in R^dim.
///
/// Returns `None` if `vertices > dim + 1` (no such simplex exists) or if no
/// non-degenerate draw was found within a few attempts.
pub fn draw_simplex(dim: usize, vertices: usize, tok: ReplayToken) -> Option<Vec<Vec<f64>>> {
    if vertices == 0 || vertices > dim + 1 {
        return None;
    }
    let cfg = PointSetCfg {
        count: PointCount::Fixed(vertices),
        dim,
        ..PointSetCfg::default()
    };
    let mut rng = tok.to_std_rng();
    for _ in 0..16 {
        let pts: Vec<Vec<f64>> = (0..vertices).map(|_| draw_point(&mut rng, &cfg)).collect();
        if gram_determinant(&pts) > 1e-6 {
            return Some(pts);
        }
    }
    None
}

fn draw_point<R: Rng>(rng: &mut R, cfg: &PointSetCfg) -> Vec<f64> {
    (0..cfg.dim)
        .map(|k| {
            let c = cfg.center.get(k).copied().unwrap_or(0.0);
            c + rng.gen_range(-1.0..=1.0) * cfg.half_extent
        })
        .collect()
}

/// det(E^T E) for the edge vectors `p_k - p_0`; zero iff affinely dependent.
fn gram_determinant(pts: &[Vec<f64>]) -> f64 {
    let k = pts.len().saturating_sub(1);
    if k == 0 {
        return 1.0;
    }
    let dim = pts[0].len();
    let e = DMatrix::from_fn(dim, k, |r, c| pts[c + 1][r] - pts[0][r]);
    (e.transpose() * e).determinant()
}
