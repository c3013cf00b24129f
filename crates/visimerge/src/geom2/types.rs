//! Scalar, tolerance and obstacle types for the 2D visibility core.
//!
//! - `Real`: numeric field the core is generic over (`f32`, `f64`).
//! - `GeomCfg`: centralizes the relative epsilon used by every boundary decision.
//! - `Segment`: one opaque obstacle, an ordered pair of endpoints.
//!
//! Code cross-refs: `util::{cross, are_collinear}`, `intersect::ray_segment_intersection`

use nalgebra::{ComplexField, RealField, Vector2};

use super::util::{are_collinear, cross};

/// Floating-point field used throughout the core.
///
/// Named helpers avoid clashing with `FromPrimitive`/`ToPrimitive`, which
/// `RealField` already brings into scope for generic code.
pub trait Real: RealField + Copy + Send + Sync {
    const INFINITY: Self;
    /// Lossy conversion from an `f64` literal or configuration value.
    fn cast(x: f64) -> Self;
    fn as_f64(self) -> f64;
}

impl Real for f64 {
    const INFINITY: Self = f64::INFINITY;
    #[inline]
    fn cast(x: f64) -> Self {
        x
    }
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    const INFINITY: Self = f32::INFINITY;
    #[inline]
    fn cast(x: f64) -> Self {
        x as f32
    }
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// Geometry configuration (tolerances).
///
/// Every "is this exactly on a boundary" decision in the crate goes through
/// [`GeomCfg::almost_equal`], so tie-breaking stays consistent between the
/// intersection test, the merge and the reference sweep.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_rel: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_rel: 1e-9 }
    }
}

impl GeomCfg {
    /// `|a - b| <= eps * max(1, |a|, |b|)`.
    #[inline]
    pub fn almost_equal<T: Real>(&self, a: T, b: T) -> bool {
        // `RealField` also brings `Signed::abs` into scope.
        let (abs_a, abs_b) = (ComplexField::abs(a), ComplexField::abs(b));
        let mut scale = T::one();
        if abs_a > scale {
            scale = abs_a;
        }
        if abs_b > scale {
            scale = abs_b;
        }
        ComplexField::abs(a - b) <= T::cast(self.eps_rel) * scale
    }

    #[inline]
    pub fn almost_zero<T: Real>(&self, a: T) -> bool {
        self.almost_equal(a, T::zero())
    }

    /// Componentwise [`GeomCfg::almost_equal`].
    #[inline]
    pub fn almost_equal_vec<T: Real>(&self, p: &Vector2<T>, q: &Vector2<T>) -> bool {
        self.almost_equal(p.x, q.x) && self.almost_equal(p.y, q.y)
    }
}

/// Opaque obstacle `a → b`.
///
/// Undirected as an obstacle; orientation only matters when samples are
/// generated, see [`Segment::ccw`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T: Real> {
    pub a: Vector2<T>,
    pub b: Vector2<T>,
}

impl<T: Real> Segment<T> {
    #[inline]
    pub fn new(a: Vector2<T>, b: Vector2<T>) -> Self {
        Self { a, b }
    }

    /// Endpoints swapped if needed so that `cross(a, b) >= 0`: seen from the
    /// origin, `a` opens the segment and `b` closes it counter-clockwise.
    #[inline]
    pub fn ccw(&self) -> Self {
        if cross(&self.a, &self.b) < T::zero() {
            Self::new(self.b, self.a)
        } else {
            *self
        }
    }

    /// `b - a`.
    #[inline]
    pub fn edge(&self) -> Vector2<T> {
        self.b - self.a
    }

    #[inline]
    pub fn almost_equal(&self, other: &Segment<T>, cfg: GeomCfg) -> bool {
        cfg.almost_equal_vec(&self.a, &other.a) && cfg.almost_equal_vec(&self.b, &other.b)
    }

    #[inline]
    pub fn is_zero_length(&self, cfg: GeomCfg) -> bool {
        cfg.almost_equal_vec(&self.a, &self.b)
    }

    /// Zero length, or lying on a line through the observer. Such segments
    /// cast no shadow of positive angular width.
    pub fn is_degenerate(&self, cfg: GeomCfg) -> bool {
        self.is_zero_length(cfg) || are_collinear(&Vector2::zeros(), &self.a, &self.b, cfg)
    }
}
