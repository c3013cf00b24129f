//! Visibility from the origin by merge sort over view samples.
//!
//! Purpose
//! - Turn `N = 2^k` obstacle segments into `2N` angle-sorted view samples whose
//!   `l`/`r` limits give the farthest visible distance on either side of each
//!   sample direction.
//!
//! Model
//! - Every segment yields an opening and a closing sample, a sorted run of two.
//! - Pass `p` merges adjacent runs of `2^(p+1)` samples; `log2(N)` passes in total.
//! - A merge clamps each emitted sample against the chords of the other run
//!   on either side of its direction (`limit::side_limits`). That constant
//!   amount of extra work per sample is what keeps every merge of a pass
//!   independent, so a pass can run as one data-parallel step.
//!
//! Layers
//! - `limit`, `merge`: pure per-merge logic over the `RaySource`/`RaySink` contract.
//! - `exec`: sequential or rayon dispatch of the merges of one pass.
//! - `sort`: initialization, buffer ping-pong and the pass loop.
//!
//! Code cross-refs: `geom2::ray_segment_intersection`, `viewray::ViewRay`,
//! `reference::brute_force`

mod exec;
mod limit;
mod merge;
mod sort;

pub use exec::{Exec, Layout};
pub use limit::{limit_between, side_limits, straddling_limit, tie_bounds};
pub use merge::merge_runs;
pub use sort::{check_segment_count, init_viewrays, num_passes, sort_columns, sort_into};

use crate::error::Result;
use crate::geom2::{GeomCfg, Real, Segment};
use crate::viewray::ViewRay;

/// Sort configuration: tolerances plus execution strategy and layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortCfg {
    pub geom: GeomCfg,
    pub exec: Exec,
    pub layout: Layout,
}

/// Visibility samples for `segments` with default configuration.
///
/// Fails with [`crate::VisError::SegmentCountNotPowerOfTwo`] before doing any
/// work if `segments.len()` is not a power of two.
pub fn build_visibility<T: Real>(segments: &[Segment<T>]) -> Result<Vec<ViewRay<T>>> {
    visimerge_sort(segments, SortCfg::default())
}

/// Visibility samples for `segments` under `cfg`.
pub fn visimerge_sort<T: Real>(segments: &[Segment<T>], cfg: SortCfg) -> Result<Vec<ViewRay<T>>> {
    check_segment_count(segments.len())?;
    match cfg.layout {
        Layout::ArrayOfStructs => {
            let n = 2 * segments.len();
            let mut out = vec![ViewRay::default(); n];
            let mut scratch = vec![ViewRay::default(); n];
            sort_into(segments, &mut out, &mut scratch, cfg.exec, cfg.geom)?;
            Ok(out)
        }
        Layout::StructOfArrays => Ok(sort_columns(segments, cfg.exec, cfg.geom)?.to_rays()),
    }
}
