//! Segment-set generators for tests, benchmarks and the CLI.
//!
//! - `quadrant_staircase`: deterministic `2^k` horizontal walls, a staircase
//!   mirrored into the four quadrants. Walls overlap in angle, never intersect.
//! - `radial_shells`: seeded random walls on concentric shells. Each shell's
//!   span is capped so its chord never dips inside the previous shell, which
//!   keeps the set intersection-free while spans still overlap in angle and
//!   may cross the positive x-axis.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geom2::{Real, Segment};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// `2^k` horizontal walls, one staircase per quadrant.
///
/// With `s = ceil(2^k / 4)`, wall `i` of a quadrant runs from `(1 + i, s - i)`
/// to `(1 + s, s - i)` before mirroring.
pub fn quadrant_staircase<T: Real>(k: u32) -> Vec<Segment<T>> {
    let n = 1usize << k;
    let s = n.div_ceil(4);
    let mut out = Vec::with_capacity(n);
    'quadrants: for c in 0..4u8 {
        let mx = if c & 0b01 != 0 { -1.0 } else { 1.0 };
        let my = if c & 0b10 != 0 { -1.0 } else { 1.0 };
        for i in 0..s {
            if out.len() >= n {
                break 'quadrants;
            }
            let y = (s - i) as f64;
            let a = Vector2::new(T::cast(mx * (1 + i) as f64), T::cast(my * y));
            let b = Vector2::new(T::cast(mx * (1 + s) as f64), T::cast(my * y));
            out.push(Segment::new(a, b));
        }
    }
    out
}

/// Radial-shell sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ShellCfg {
    pub count: usize,
    /// Radius of the innermost shell.
    pub inner_radius: f64,
    /// Radial distance between consecutive shells.
    pub gap: f64,
    /// Upper bound on any wall's angular span (radians, clamped below π).
    pub max_span: f64,
    /// Shuffle the output so shells do not arrive in radial order.
    pub shuffle: bool,
}

impl Default for ShellCfg {
    fn default() -> Self {
        Self {
            count: 16,
            inner_radius: 1.0,
            gap: 0.5,
            max_span: std::f64::consts::FRAC_PI_2,
            shuffle: true,
        }
    }
}

/// Intersection-free random walls on concentric shells.
pub fn radial_shells<T: Real>(cfg: ShellCfg, tok: ReplayToken) -> Vec<Segment<T>> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.inner_radius.max(1e-6);
    let gap = cfg.gap.max(1e-6);
    let span_cap = cfg.max_span.clamp(1e-3, std::f64::consts::PI - 1e-3);
    let mut out: Vec<Segment<T>> = (0..cfg.count)
        .map(|k| {
            let r = r0 + k as f64 * gap;
            // Chord of half-span h dips to r·cos(h); stay outside the previous shell.
            let cap = if k == 0 {
                span_cap
            } else {
                let inner = r - gap;
                span_cap.min(0.95 * 2.0 * (inner / r).acos())
            };
            let span = rng.gen_range(0.2..=1.0) * cap;
            let t0 = rng.gen::<f64>() * std::f64::consts::TAU;
            let a = Vector2::new(T::cast(r * t0.cos()), T::cast(r * t0.sin()));
            let b = Vector2::new(T::cast(r * (t0 + span).cos()), T::cast(r * (t0 + span).sin()));
            if rng.gen::<bool>() {
                Segment::new(a, b)
            } else {
                Segment::new(b, a)
            }
        })
        .collect();
    if cfg.shuffle {
        out.shuffle(&mut rng);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::GeomCfg;

    #[test]
    fn staircase_counts_and_quadrants() {
        for k in 0..8 {
            let segs: Vec<Segment<f64>> = quadrant_staircase(k);
            assert_eq!(segs.len(), 1 << k);
        }
        let segs: Vec<Segment<f64>> = quadrant_staircase(3);
        // s = 2: two walls per quadrant.
        assert_eq!(segs[0].a, Vector2::new(1.0, 2.0));
        assert_eq!(segs[0].b, Vector2::new(3.0, 2.0));
        assert_eq!(segs[1].a, Vector2::new(2.0, 1.0));
        assert_eq!(segs[7].b, Vector2::new(-3.0, -1.0));
        let cfg = GeomCfg::default();
        assert!(segs.iter().all(|s| !s.is_degenerate(cfg)));
    }

    #[test]
    fn shells_are_reproducible_and_bounded() {
        let cfg = ShellCfg {
            count: 32,
            ..ShellCfg::default()
        };
        let tok = ReplayToken { seed: 7, index: 3 };
        let x: Vec<Segment<f64>> = radial_shells(cfg, tok);
        let y: Vec<Segment<f64>> = radial_shells(cfg, tok);
        assert_eq!(x, y);
        let z: Vec<Segment<f64>> = radial_shells(cfg, ReplayToken { seed: 7, index: 4 });
        assert_ne!(x, z);
        let r_max = cfg.inner_radius + (cfg.count - 1) as f64 * cfg.gap;
        for s in &x {
            let (ra, rb) = (s.a.norm(), s.b.norm());
            assert!((ra - rb).abs() < 1e-9);
            assert!(ra >= cfg.inner_radius - 1e-9 && ra <= r_max + 1e-9);
            // Span below π: the segment never faces the observer edge-on.
            assert!(!s.is_degenerate(GeomCfg::default()));
        }
    }
}
