//! Ray/segment intersection for rays cast from the observer at the origin.
//!
//! Degenerate configurations (parallel ray, zero-length segment, hit behind
//! the observer) are reported as `None`: the obstacle simply does not bound
//! the ray there.

use nalgebra::Vector2;

use super::types::{GeomCfg, Real, Segment};
use super::util::cross;

/// Point where the ray `t·dir, t > 0` meets `seg`, if it does.
///
/// Solves `cross(dir, a + i·(b - a)) = 0` for the segment parameter `i` and
/// accepts `i ∈ [0, 1]`, where either bound also passes when `i` is almost
/// equal to it. Shared endpoints of adjacent obstacles therefore never fall
/// through the crack between them.
pub fn ray_segment_intersection<T: Real>(
    dir: &Vector2<T>,
    seg: &Segment<T>,
    cfg: GeomCfg,
) -> Option<Vector2<T>> {
    let u = seg.edge();
    let s = cross(&u, dir);
    if cfg.almost_zero(s) {
        return None;
    }
    let i = cross(dir, &(seg.a / s));
    let above_start = i >= T::zero() || cfg.almost_zero(i);
    let below_end = i <= T::one() || cfg.almost_equal(i, T::one());
    if !(above_start && below_end) {
        return None;
    }
    let p = seg.a + u * i;
    if p.dot(dir) <= T::zero() {
        return None;
    }
    Some(p)
}

/// Distance from the origin along `dir` to `seg`, or `+∞` if the ray misses.
#[inline]
pub fn ray_distance<T: Real>(dir: &Vector2<T>, seg: &Segment<T>, cfg: GeomCfg) -> T {
    ray_segment_intersection(dir, seg, cfg).map_or(T::INFINITY, |p| p.norm())
}
