use nalgebra::Vector2;

use crate::geom2::{ray_distance, GeomCfg, Real, Segment};
use crate::viewray::{RaySource, ViewRay};

/// Distance along `dir` to the chord `prev.dir·prev.l → next.dir·next.r`.
///
/// The chord is the visible boundary of the wedge between two adjacent
/// samples. `+∞` if either end is unbounded or `dir` misses the chord.
pub fn limit_between<T: Real>(
    dir: &Vector2<T>,
    prev: &ViewRay<T>,
    next: &ViewRay<T>,
    cfg: GeomCfg,
) -> T {
    if !prev.l.is_finite() || !next.r.is_finite() {
        return T::INFINITY;
    }
    let chord = Segment::new(prev.dir * prev.l, next.dir * next.r);
    ray_distance(dir, &chord, cfg)
}

/// Limit imposed on `dir` by the chord of `other` ending at position `idx`.
///
/// Inside the run that chord joins `(idx - 1, idx)`. At either end it is the
/// chord `(len - 1, 0)` of the wedge wrapping through angle zero, which is
/// infinite unless some segment of the run crosses the positive x-axis.
pub fn straddling_limit<T, S>(dir: &Vector2<T>, other: &S, idx: usize, cfg: GeomCfg) -> T
where
    T: Real,
    S: RaySource<T> + ?Sized,
{
    let n = other.len();
    if n == 0 {
        return T::INFINITY;
    }
    let (prev, next) = if idx > 0 && idx < n {
        (other.ray(idx - 1), other.ray(idx))
    } else {
        (other.ray(n - 1), other.ray(0))
    };
    limit_between(dir, &prev, &next, cfg)
}

/// Positions `(lo, hi)` delimiting the samples of `run` whose direction
/// equals `angle`; `cursor` is any position near them.
///
/// `lo` is the first such sample and `hi` one past the last, so the chord
/// ending at `lo` bounds the clockwise side of `angle` and the chord ending
/// at `hi` its counter-clockwise side. Angles `0` and `2π` name the same
/// direction: on the positive x-axis the group is made of the samples at
/// `2π` at the end of the run followed by those at `0` at its start.
pub fn tie_bounds<T, S>(run: &S, angle: T, cursor: usize) -> (usize, usize)
where
    T: Real,
    S: RaySource<T> + ?Sized,
{
    let n = run.len();
    let two_pi = T::two_pi();
    if angle == T::zero() || angle == two_pi {
        let mut lo = n;
        while lo > 0 && run.angle(lo - 1) == two_pi {
            lo -= 1;
        }
        let mut hi = 0;
        while hi < n && run.angle(hi) == T::zero() {
            hi += 1;
        }
        return (lo, hi);
    }
    let mut lo = cursor.min(n);
    while lo > 0 && run.angle(lo - 1) >= angle {
        lo -= 1;
    }
    while lo < n && run.angle(lo) < angle {
        lo += 1;
    }
    let mut hi = lo;
    while hi < n && run.angle(hi) <= angle {
        hi += 1;
    }
    (lo, hi)
}

/// Limits `(l, r)` imposed by the run `other` on a sample at `angle`.
///
/// `r` comes from the chord of `other` just clockwise of `angle`, `l` from
/// the chord just counter-clockwise. They differ only when `other` has
/// samples at the same direction.
pub fn side_limits<T, S>(
    dir: &Vector2<T>,
    angle: T,
    other: &S,
    cursor: usize,
    cfg: GeomCfg,
) -> (T, T)
where
    T: Real,
    S: RaySource<T> + ?Sized,
{
    let (lo, hi) = tie_bounds(other, angle, cursor);
    let r = straddling_limit(dir, other, lo, cfg);
    if hi == lo {
        (r, r)
    } else {
        (straddling_limit(dir, other, hi, cfg), r)
    }
}
