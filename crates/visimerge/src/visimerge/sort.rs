use tracing::{debug, trace};

use super::exec::{merge_pass, merge_pass_columns, Exec};
use crate::error::{Result, VisError};
use crate::geom2::{GeomCfg, Real, Segment};
use crate::viewray::{RayColumns, RaySink, ViewRay};

/// Fail unless `count` is a power of two (zero is not).
pub fn check_segment_count(count: usize) -> Result<()> {
    if count.is_power_of_two() {
        Ok(())
    } else {
        Err(VisError::SegmentCountNotPowerOfTwo { count })
    }
}

/// Merge passes needed for `count` segments: `log2(count)`.
///
/// The initial runs already hold the two samples of one segment.
#[inline]
pub fn num_passes(count: usize) -> u32 {
    count.trailing_zeros()
}

/// Write the two samples of every segment into `dest[2k], dest[2k + 1]`.
///
/// Segments are first oriented counter-clockwise so the opening endpoint
/// carries the finite `l` and the closing endpoint the finite `r`. Each pair
/// is stored in ascending angle, which only reorders segments that cross
/// the positive x-axis.
pub fn init_viewrays<T, D>(segments: &[Segment<T>], dest: &mut D)
where
    T: Real,
    D: RaySink<T> + ?Sized,
{
    debug_assert_eq!(dest.len(), 2 * segments.len());
    for (k, seg) in segments.iter().enumerate() {
        let seg = seg.ccw();
        let open = ViewRay::opening(&seg.a);
        let close = ViewRay::closing(&seg.b);
        if close.angle < open.angle {
            dest.put(2 * k, close);
            dest.put(2 * k + 1, open);
        } else {
            dest.put(2 * k, open);
            dest.put(2 * k + 1, close);
        }
    }
}

fn check_buffer(buffer: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(VisError::BufferLength {
            buffer,
            expected,
            got,
        })
    }
}

/// Array-of-structs merge sort into caller-provided storage.
///
/// `out` and `scratch` must both hold `2·segments.len()` samples. The driver
/// initializes into whichever buffer makes the last pass land in `out`, then
/// ping-pongs between the two.
pub fn sort_into<T: Real>(
    segments: &[Segment<T>],
    out: &mut [ViewRay<T>],
    scratch: &mut [ViewRay<T>],
    exec: Exec,
    cfg: GeomCfg,
) -> Result<()> {
    check_segment_count(segments.len())?;
    let n = 2 * segments.len();
    check_buffer("output", n, out.len())?;
    check_buffer("scratch", n, scratch.len())?;

    let passes = num_passes(segments.len());
    debug!(segments = segments.len(), passes, ?exec, "visimerge sort");
    let (mut src, mut dst) = if passes % 2 == 1 {
        (scratch, out)
    } else {
        (out, scratch)
    };
    init_viewrays(segments, &mut *src);
    for p in 0..passes {
        let run = 2usize << p;
        merge_pass(src, dst, run, exec, cfg);
        trace!(pass = p, run, "merge pass done");
        std::mem::swap(&mut src, &mut dst);
    }
    Ok(())
}

/// Struct-of-arrays merge sort; returns the column buffer holding the result.
pub fn sort_columns<T: Real>(
    segments: &[Segment<T>],
    exec: Exec,
    cfg: GeomCfg,
) -> Result<RayColumns<T>> {
    check_segment_count(segments.len())?;
    let n = 2 * segments.len();
    let passes = num_passes(segments.len());
    debug!(segments = segments.len(), passes, ?exec, "visimerge sort (columns)");
    let mut src = RayColumns::with_len(n);
    let mut dst = RayColumns::with_len(n);
    init_viewrays(segments, &mut src.view_mut(0..n));
    for p in 0..passes {
        let run = 2usize << p;
        merge_pass_columns(&src, &mut dst, run, exec, cfg);
        trace!(pass = p, run, "merge pass done");
        std::mem::swap(&mut src, &mut dst);
    }
    Ok(src)
}
