//! Observer inside a square room with a pillar in front of one wall.
//!
//! Usage:
//!   cargo run -p visimerge --example square_room
//!
//! Prints one line per view sample: angle (degrees), left and right limits.

use visimerge::prelude::*;

fn main() -> Result<()> {
    let walls = [
        Segment::new(Vec2::new(3.0_f64, -3.0), Vec2::new(3.0, 3.0)),
        Segment::new(Vec2::new(3.0, 3.0), Vec2::new(-3.0, 3.0)),
        Segment::new(Vec2::new(-3.0, 3.0), Vec2::new(-3.0, -3.0)),
        Segment::new(Vec2::new(-3.0, -3.0), Vec2::new(3.0, -3.0)),
        Segment::new(Vec2::new(1.0, -0.5), Vec2::new(1.0, 0.5)),
        Segment::new(Vec2::new(1.5, -0.5), Vec2::new(1.0, -0.5)),
        Segment::new(Vec2::new(1.0, 0.5), Vec2::new(1.5, 0.5)),
        Segment::new(Vec2::new(1.5, 0.5), Vec2::new(1.5, -0.5)),
    ];
    let rays = visimerge_sort(&walls, SortCfg::default())?;
    for v in &rays {
        println!(
            "{:8.3}°  l = {:7.4}  r = {:7.4}",
            v.angle.to_degrees(),
            limit_or_sentinel(v.l, -1.0),
            limit_or_sentinel(v.r, -1.0),
        );
    }
    Ok(())
}
