//! Allocation-free 2D primitives for the visibility core.
//!
//! Purpose
//! - Vector helpers over `nalgebra::Vector2` (cross, polar angle, normalization).
//! - Obstacle segments and the ray/segment intersection test.
//! - One tolerance rule (`GeomCfg::almost_equal`) shared by every predicate.
//!
//! Nothing in here knows about samples, runs or execution strategy; the
//! merge layer in `crate::visimerge` calls into these pure functions.
//!
//! Code cross-refs: `Segment`, `GeomCfg`, `ray_segment_intersection`

mod intersect;
mod types;
mod util;

pub use intersect::{ray_distance, ray_segment_intersection};
pub use types::{GeomCfg, Real, Segment};
pub use util::{angle_of, are_collinear, cross, normalize, unit_at};
