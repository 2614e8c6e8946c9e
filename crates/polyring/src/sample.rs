//! Random simple polygons on the integer grid (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of counterclockwise simple polygons
//!   for tests, benches and the CLI. Draws are reproducible per `(seed, index)`.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, round to integers, then sort by exact angle around the
//!   origin and drop points sharing a ray. Strictly increasing angles with
//!   every gap below π give a polygon that is star-shaped around the origin,
//!   hence simple. Reflex vertices appear wherever the radius dips.

use nalgebra::point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

use crate::error::RingError;
use crate::predicates::area2;
use crate::{Point, Ring};

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Vertex count is drawn uniformly from `min_vertices..=max_vertices`,
    /// both raised to at least 3.
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Radius before jitter, in grid units. Clamped to at least 64.
    pub radius: f64,
    /// Relative radial jitter; radii are `radius * (1 + u)`, `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.75].
    pub radial_jitter: f64,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
}

impl StarCfg {
    /// Default shape parameters with exactly `n` sampled points.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            min_vertices: n,
            max_vertices: n,
            ..Self::default()
        }
    }
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            radius: 1000.0,
            radial_jitter: 0.6,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Names one draw: the same `(seed, index)` always yields the same polygon,
/// and distinct indices under one seed give independent streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

/// Draw a counterclockwise star-shaped polygon around the origin.
///
/// The result may hold fewer points than sampled when rounding puts two of
/// them on the same ray; three-vertex draws always keep all three.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point> {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&tok.seed.to_le_bytes());
    key[8..16].copy_from_slice(&tok.index.to_le_bytes());
    let mut rng = StdRng::from_seed(key);
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    // Keep the widest possible gap, Δ(1 + 2·aj), strictly below π.
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.49)
        .min(((n as f64) / 2.0 - 1.0) / 2.0 - 0.05);
    let rj = cfg.radial_jitter.clamp(0.0, 0.75);
    let r0 = cfg.radius.max(64.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            point![(th.cos() * r).round() as i32, (th.sin() * r).round() as i32]
        })
        .filter(|p| p.x != 0 || p.y != 0)
        .collect();
    pts.sort_by(|a, b| angle_cmp(*a, *b));
    pts.dedup_by(|a, b| same_ray(*a, *b));
    pts
}

/// Same as [`draw_star_polygon`], appended into a fresh ring.
pub fn draw_star_ring(cfg: StarCfg, tok: ReplayToken) -> Result<Ring, RingError> {
    Ring::from_points(draw_star_polygon(cfg, tok))
}

/// Exact counterclockwise order of directions from the origin, starting at angle 0.
fn angle_cmp(a: Point, b: Point) -> Ordering {
    let half = |p: Point| if p.y > 0 || (p.y == 0 && p.x > 0) { 0 } else { 1 };
    let o = point![0, 0];
    half(a)
        .cmp(&half(b))
        .then_with(|| 0.cmp(&area2(o, a, b)))
}

fn same_ray(a: Point, b: Point) -> bool {
    angle_cmp(a, b) == Ordering::Equal
}
