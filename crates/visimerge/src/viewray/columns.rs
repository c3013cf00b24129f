//! Struct-of-arrays sample storage.
//!
//! Keeps `angle`, `l` and `r` in separate columns, the layout a data-parallel
//! kernel wants. Directions are not stored; `RaySource::ray` rebuilds them as
//! `(cos angle, sin angle)`, which agrees with the normalized endpoint up to rounding.

use std::ops::Range;

use super::{RaySink, RaySource, ViewRay};
use crate::geom2::{unit_at, Real};

/// Owned columns of `len` samples.
#[derive(Clone, Debug, Default)]
pub struct RayColumns<T: Real> {
    pub angle: Vec<T>,
    pub l: Vec<T>,
    pub r: Vec<T>,
}

impl<T: Real> RayColumns<T> {
    /// `len` unbounded samples at angle zero.
    pub fn with_len(len: usize) -> Self {
        Self {
            angle: vec![T::zero(); len],
            l: vec![T::INFINITY; len],
            r: vec![T::INFINITY; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angle.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angle.is_empty()
    }

    #[inline]
    pub fn view(&self, range: Range<usize>) -> ColumnsRef<'_, T> {
        ColumnsRef {
            angle: &self.angle[range.clone()],
            l: &self.l[range.clone()],
            r: &self.r[range],
        }
    }

    #[inline]
    pub fn view_mut(&mut self, range: Range<usize>) -> ColumnsMut<'_, T> {
        ColumnsMut {
            angle: &mut self.angle[range.clone()],
            l: &mut self.l[range.clone()],
            r: &mut self.r[range],
        }
    }

    /// Materialize as array-of-structs.
    pub fn to_rays(&self) -> Vec<ViewRay<T>> {
        let all = self.view(0..self.len());
        (0..all.len()).map(|i| all.ray(i)).collect()
    }
}

impl<T: Real> From<&[ViewRay<T>]> for RayColumns<T> {
    fn from(rays: &[ViewRay<T>]) -> Self {
        Self {
            angle: rays.iter().map(|v| v.angle).collect(),
            l: rays.iter().map(|v| v.l).collect(),
            r: rays.iter().map(|v| v.r).collect(),
        }
    }
}

/// Borrowed, read-only window into [`RayColumns`].
#[derive(Clone, Copy, Debug)]
pub struct ColumnsRef<'a, T: Real> {
    pub angle: &'a [T],
    pub l: &'a [T],
    pub r: &'a [T],
}

impl<'a, T: Real> ColumnsRef<'a, T> {
    #[inline]
    pub fn split_at(&self, mid: usize) -> (ColumnsRef<'a, T>, ColumnsRef<'a, T>) {
        let (a0, a1) = self.angle.split_at(mid);
        let (l0, l1) = self.l.split_at(mid);
        let (r0, r1) = self.r.split_at(mid);
        (
            ColumnsRef {
                angle: a0,
                l: l0,
                r: r0,
            },
            ColumnsRef {
                angle: a1,
                l: l1,
                r: r1,
            },
        )
    }
}

impl<T: Real> RaySource<T> for ColumnsRef<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.angle.len()
    }
    #[inline]
    fn angle(&self, i: usize) -> T {
        self.angle[i]
    }
    #[inline]
    fn ray(&self, i: usize) -> ViewRay<T> {
        let t = self.angle[i];
        ViewRay::new(t, unit_at(t), self.l[i], self.r[i])
    }
}

/// Borrowed, writable window into [`RayColumns`].
#[derive(Debug)]
pub struct ColumnsMut<'a, T: Real> {
    pub angle: &'a mut [T],
    pub l: &'a mut [T],
    pub r: &'a mut [T],
}

impl<T: Real> RaySink<T> for ColumnsMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.angle.len()
    }
    #[inline]
    fn put(&mut self, i: usize, ray: ViewRay<T>) {
        self.angle[i] = ray.angle;
        self.l[i] = ray.l;
        self.r[i] = ray.r;
    }
}
