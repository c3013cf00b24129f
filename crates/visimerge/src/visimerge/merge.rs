use super::limit::side_limits;
use crate::geom2::{GeomCfg, Real};
use crate::viewray::{RaySink, RaySource};

/// Merge two angle-sorted runs into `dest`, reconciling visibility limits.
///
/// Plain merge by angle, ties going to `a`. Each emitted sample was only
/// bounded by obstacles of its own run; before it is written, its `r` is
/// clamped by the chord of the other run just clockwise of its direction and
/// its `l` by the chord just counter-clockwise. Runs are internally
/// consistent, so those chords are the only obstacles of the other run that
/// can cut the sample's line of sight. The two chords differ only where the
/// other run has samples at the same direction, e.g. a shared corner.
pub fn merge_runs<T, S, D>(a: &S, b: &S, dest: &mut D, cfg: GeomCfg)
where
    T: Real,
    S: RaySource<T> + ?Sized,
    D: RaySink<T> + ?Sized,
{
    let (na, nb) = (a.len(), b.len());
    debug_assert_eq!(dest.len(), na + nb, "destination must hold both runs");
    let mut ai = 0usize;
    let mut bi = 0usize;
    for i in 0..na + nb {
        let take_a = if bi >= nb {
            true
        } else if ai >= na {
            false
        } else {
            a.angle(ai) <= b.angle(bi)
        };
        let mut ray = if take_a { a.ray(ai) } else { b.ray(bi) };
        let (l, r) = if take_a {
            side_limits(&ray.dir, ray.angle, b, bi, cfg)
        } else {
            side_limits(&ray.dir, ray.angle, a, ai, cfg)
        };
        ray.clamp_sides(l, r);
        if take_a {
            ai += 1;
        } else {
            bi += 1;
        }
        dest.put(i, ray);
    }
}
