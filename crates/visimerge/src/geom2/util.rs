use nalgebra::Vector2;

use super::types::{GeomCfg, Real};

/// `a.x * b.y - a.y * b.x`; positive when `b` is counter-clockwise of `a`.
#[inline]
pub fn cross<T: Real>(a: &Vector2<T>, b: &Vector2<T>) -> T {
    a.x * b.y - a.y * b.x
}

/// Polar angle of `v` in `[0, 2π)`.
#[inline]
pub fn angle_of<T: Real>(v: &Vector2<T>) -> T {
    let t = v.y.atan2(v.x);
    if t >= T::zero() {
        t
    } else {
        t + T::two_pi()
    }
}

/// `v / |v|`. Undefined for the zero vector.
#[inline]
pub fn normalize<T: Real>(v: &Vector2<T>) -> Vector2<T> {
    *v / v.norm()
}

/// Unit direction at polar angle `t`.
#[inline]
pub fn unit_at<T: Real>(t: T) -> Vector2<T> {
    Vector2::new(t.cos(), t.sin())
}

#[inline]
pub fn are_collinear<T: Real>(a: &Vector2<T>, b: &Vector2<T>, c: &Vector2<T>, cfg: GeomCfg) -> bool {
    cfg.almost_zero(cross(&(b - a), &(c - a)))
}
