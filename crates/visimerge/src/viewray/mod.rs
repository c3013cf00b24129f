//! View samples (viewrays) and their storage layouts.
//!
//! Purpose
//! - `ViewRay`: one angular sample with the visibility limits on its
//!   clockwise (`r`) and counter-clockwise (`l`) side.
//! - `RaySource` / `RaySink`: the access contract the merge is written
//!   against, so the same merge runs over either layout.
//! - Array-of-structs is a plain `[ViewRay<T>]`; struct-of-arrays lives in
//!   `columns` and keeps only `angle, l, r`, rebuilding directions from the angle.
//!
//! Limits
//! - Between two angularly adjacent samples `p, q` the visible boundary is the
//!   chord `p.dir·p.l → q.dir·q.r`; `+∞` on either end means no obstacle there.
//! - Straight after initialization at most one limit is finite.

mod columns;

pub use columns::{ColumnsMut, ColumnsRef, RayColumns};

use nalgebra::Vector2;

use crate::geom2::{angle_of, normalize, Real};

/// One angular sample of the visibility region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRay<T: Real> {
    /// Polar angle in `[0, 2π]` (`2π` only for closing events on the positive x-axis).
    pub angle: T,
    /// Unit direction at `angle`.
    pub dir: Vector2<T>,
    /// Visibility limit on the counter-clockwise side.
    pub l: T,
    /// Visibility limit on the clockwise side.
    pub r: T,
}

impl<T: Real> Default for ViewRay<T> {
    fn default() -> Self {
        Self {
            angle: T::zero(),
            dir: Vector2::x(),
            l: T::INFINITY,
            r: T::INFINITY,
        }
    }
}

impl<T: Real> ViewRay<T> {
    #[inline]
    pub fn new(angle: T, dir: Vector2<T>, l: T, r: T) -> Self {
        Self { angle, dir, l, r }
    }

    /// Sample for the opening endpoint `a` of a counter-clockwise segment:
    /// the segment bounds the wedge on its counter-clockwise side.
    #[inline]
    pub fn opening(a: &Vector2<T>) -> Self {
        Self::new(angle_of(a), normalize(a), a.norm(), T::INFINITY)
    }

    /// Sample for the closing endpoint `b`. An angle of exactly zero is moved
    /// to `2π` so the closing event sorts after everything it closes.
    #[inline]
    pub fn closing(b: &Vector2<T>) -> Self {
        let mut angle = angle_of(b);
        if angle == T::zero() {
            angle = T::two_pi();
        }
        Self::new(angle, normalize(b), T::INFINITY, b.norm())
    }

    #[inline]
    pub fn vx(&self) -> T {
        self.dir.x
    }

    #[inline]
    pub fn vy(&self) -> T {
        self.dir.y
    }

    /// Both limits finite.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.l.is_finite() && self.r.is_finite()
    }

    /// Tighten `l` to at most `l` and `r` to at most `r`.
    #[inline]
    pub fn clamp_sides(&mut self, l: T, r: T) {
        if l < self.l {
            self.l = l;
        }
        if r < self.r {
            self.r = r;
        }
    }
}

/// `-1` (or any `sentinel`) for an infinite limit, as printed by text output.
#[inline]
pub fn limit_or_sentinel<T: Real>(limit: T, sentinel: T) -> T {
    if limit.is_finite() {
        limit
    } else {
        sentinel
    }
}

/// Read access to a run of samples, independent of layout.
pub trait RaySource<T: Real> {
    fn len(&self) -> usize;
    fn angle(&self, i: usize) -> T;
    fn ray(&self, i: usize) -> ViewRay<T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write access to an output range, independent of layout.
pub trait RaySink<T: Real> {
    fn len(&self) -> usize;
    fn put(&mut self, i: usize, ray: ViewRay<T>);
}

impl<T: Real> RaySource<T> for [ViewRay<T>] {
    #[inline]
    fn len(&self) -> usize {
        <[ViewRay<T>]>::len(self)
    }
    #[inline]
    fn angle(&self, i: usize) -> T {
        self[i].angle
    }
    #[inline]
    fn ray(&self, i: usize) -> ViewRay<T> {
        self[i]
    }
}

impl<T: Real> RaySink<T> for [ViewRay<T>] {
    #[inline]
    fn len(&self) -> usize {
        <[ViewRay<T>]>::len(self)
    }
    #[inline]
    fn put(&mut self, i: usize, ray: ViewRay<T>) {
        self[i] = ray;
    }
}
