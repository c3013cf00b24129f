//! Visibility region from a point by merge sort over view samples.
//!
//! An observer sits at the origin among opaque segments. For every segment
//! endpoint direction the crate reports how far the observer sees on either
//! side of that direction. Instead of an angular sweep, samples are merged
//! bottom-up; every merge of a pass is independent, so a pass can run data-parallel.
//!
//! Layout
//! - `geom2`: allocation-free primitives (vectors, segments, intersection, tolerances).
//! - `viewray`: the view sample and its storage layouts.
//! - `visimerge`: limit computation, two-run merge, merge-sort driver, execution strategies.
//! - `reference`: brute-force O(n²) reference used to validate the merge.
//! - `generate`: segment-set generators.
//!
//! Out of scope: chaining samples into a boundary polygon.

pub mod error;
pub mod generate;
pub mod geom2;
pub mod reference;
pub mod viewray;
pub mod visimerge;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Result, VisError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Result, VisError};
    pub use crate::geom2::{GeomCfg, Real, Segment};
    pub use crate::viewray::{limit_or_sentinel, ViewRay};
    pub use crate::visimerge::{build_visibility, visimerge_sort, Exec, Layout, SortCfg};
    pub use nalgebra::Vector2 as Vec2;
}
