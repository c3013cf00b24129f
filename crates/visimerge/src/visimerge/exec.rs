//! Execution strategies for one merge pass.
//!
//! A pass merges every adjacent pair of runs of length `run` from `src` into
//! the matching `2·run` window of `dst`. Pairs read disjoint input windows and
//! write disjoint output windows, so they need no coordination; the only
//! barrier is the end of the pass, which the driver observes by not starting
//! the next pass before this function returns.

use rayon::prelude::*;

use super::merge::merge_runs;
use crate::geom2::{GeomCfg, Real};
use crate::viewray::{ColumnsMut, RayColumns, ViewRay};

/// How the merges of one pass are dispatched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Exec {
    /// One merge after the other on the calling thread.
    #[default]
    Sequential,
    /// All merges of a pass in parallel on the rayon pool.
    Parallel,
}

/// Sample storage used while sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    ArrayOfStructs,
    /// Separate `angle`/`l`/`r` columns, directions rebuilt from angles.
    StructOfArrays,
}

pub(crate) fn merge_pass<T: Real>(
    src: &[ViewRay<T>],
    dst: &mut [ViewRay<T>],
    run: usize,
    exec: Exec,
    cfg: GeomCfg,
) {
    let width = 2 * run;
    match exec {
        Exec::Sequential => {
            for (s, d) in src.chunks(width).zip(dst.chunks_mut(width)) {
                let (a, b) = s.split_at(run);
                merge_runs(a, b, d, cfg);
            }
        }
        Exec::Parallel => {
            src.par_chunks(width)
                .zip(dst.par_chunks_mut(width))
                .for_each(|(s, d)| {
                    let (a, b) = s.split_at(run);
                    merge_runs(a, b, d, cfg);
                });
        }
    }
}

pub(crate) fn merge_pass_columns<T: Real>(
    src: &RayColumns<T>,
    dst: &mut RayColumns<T>,
    run: usize,
    exec: Exec,
    cfg: GeomCfg,
) {
    let width = 2 * run;
    let merge_window = |k: usize, mut d: ColumnsMut<'_, T>| {
        let s = src.view(k * width..(k + 1) * width);
        let (a, b) = s.split_at(run);
        merge_runs(&a, &b, &mut d, cfg);
    };
    let RayColumns { angle, l, r } = dst;
    match exec {
        Exec::Sequential => {
            angle
                .chunks_mut(width)
                .zip(l.chunks_mut(width))
                .zip(r.chunks_mut(width))
                .enumerate()
                .for_each(|(k, ((angle, l), r))| merge_window(k, ColumnsMut { angle, l, r }));
        }
        Exec::Parallel => {
            angle
                .par_chunks_mut(width)
                .zip(l.par_chunks_mut(width))
                .zip(r.par_chunks_mut(width))
                .enumerate()
                .for_each(|(k, ((angle, l), r))| merge_window(k, ColumnsMut { angle, l, r }));
        }
    }
}
