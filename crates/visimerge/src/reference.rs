//! Brute-force O(n²) visibility reference.
//!
//! Produces the same sample sequence as the merge sort (stable angular sort
//! of the initial samples) but computes every limit by scanning all segments.
//! Used to validate the merge predicate on small inputs; accepts any segment count.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom2::{cross, normalize, GeomCfg, Real, Segment};
use crate::viewray::ViewRay;
use crate::visimerge::init_viewrays;

/// Side of a direction, seen from the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

/// Whether `seg` occludes directions immediately to `side` of `dir`.
pub fn covers<T: Real>(seg: &Segment<T>, dir: &Vector2<T>, side: Side, cfg: GeomCfg) -> bool {
    if seg.is_degenerate(cfg) {
        return false;
    }
    let s = seg.ccw();
    let tol = T::cast(cfg.eps_rel);
    let from_a = cross(&normalize(&s.a), dir);
    let to_b = cross(dir, &normalize(&s.b));
    match side {
        Side::Left => from_a >= -tol && to_b > tol,
        Side::Right => from_a > tol && to_b >= -tol,
    }
}

/// Distance along `dir` to the supporting line of `seg`, if it lies ahead.
fn line_distance<T: Real>(seg: &Segment<T>, dir: &Vector2<T>, cfg: GeomCfg) -> Option<T> {
    let u = seg.edge();
    let den = cross(dir, &u);
    if cfg.almost_zero(den) {
        return None;
    }
    let t = cross(&seg.a, &u) / den;
    (t > T::zero()).then_some(t)
}

/// Nearest obstacle on `side` of `dir`, or `+∞`.
pub fn nearest_on_side<T: Real>(
    segments: &[Segment<T>],
    dir: &Vector2<T>,
    side: Side,
    cfg: GeomCfg,
) -> T {
    segments
        .iter()
        .filter(|&s| covers(s, dir, side, cfg))
        .filter_map(|s| line_distance(s, dir, cfg))
        .fold(T::INFINITY, |best, d| if d < best { d } else { best })
}

/// Reference samples for `segments`: stable angular order, exact per-side limits.
pub fn brute_force<T: Real>(segments: &[Segment<T>], cfg: GeomCfg) -> Vec<ViewRay<T>> {
    let mut rays = vec![ViewRay::default(); 2 * segments.len()];
    init_viewrays(segments, &mut rays[..]);
    rays.sort_by(|p, q| p.angle.partial_cmp(&q.angle).unwrap_or(Ordering::Equal));
    for ray in &mut rays {
        ray.l = nearest_on_side(segments, &ray.dir, Side::Left, cfg);
        ray.r = nearest_on_side(segments, &ray.dir, Side::Right, cfg);
    }
    rays
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn covers_is_half_open_per_side() {
        let cfg = GeomCfg::default();
        let wall = Segment::new(vector![2.0_f64, 2.0], vector![2.0_f64, -2.0]);
        let at_a = normalize(&vector![2.0_f64, -2.0]);
        let at_b = normalize(&vector![2.0_f64, 2.0]);
        let mid = vector![1.0_f64, 0.0];
        assert!(covers(&wall, &at_a, Side::Left, cfg));
        assert!(!covers(&wall, &at_a, Side::Right, cfg));
        assert!(covers(&wall, &at_b, Side::Right, cfg));
        assert!(!covers(&wall, &at_b, Side::Left, cfg));
        assert!(covers(&wall, &mid, Side::Left, cfg) && covers(&wall, &mid, Side::Right, cfg));
        assert!(!covers(&wall, &vector![-1.0_f64, 0.0], Side::Left, cfg));
    }

    #[test]
    fn nearest_picks_closest_wall() {
        let cfg = GeomCfg::default();
        let segs = [
            Segment::new(vector![3.0_f64, -1.0], vector![3.0_f64, 1.0]),
            Segment::new(vector![1.0_f64, -1.0], vector![1.0_f64, 1.0]),
            Segment::new(vector![-1.0_f64, -1.0], vector![-1.0_f64, 1.0]),
        ];
        let d = nearest_on_side(&segs, &vector![1.0_f64, 0.0], Side::Left, cfg);
        assert!((d - 1.0).abs() < 1e-12);
        let up = nearest_on_side(&segs, &vector![0.0_f64, 1.0], Side::Right, cfg);
        assert!(up.is_infinite());
    }

    #[test]
    fn brute_force_orders_and_bounds_single_wall() {
        let cfg = GeomCfg::default();
        let segs = [Segment::new(vector![1.0_f64, 1.0], vector![1.0_f64, -1.0])];
        let rays = brute_force(&segs, cfg);
        assert_eq!(rays.len(), 2);
        // The wall crosses the positive x-axis: closing sample (π/4) first.
        assert!(rays[0].angle < rays[1].angle);
        assert!((rays[0].r - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(rays[0].l.is_infinite());
        assert!((rays[1].l - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(rays[1].r.is_infinite());
    }
}
