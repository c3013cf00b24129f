use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use visimerge::geom2::{Real, Segment};
use visimerge::viewray::{limit_or_sentinel, ViewRay};
use visimerge::Vec2;

/// Parse `ax ay bx by` per line. Commas count as whitespace; blank lines and
/// lines starting with `#` are skipped.
pub fn parse_segments<T: Real>(text: &str) -> Result<Vec<Segment<T>>> {
    let mut out = Vec::new();
    for (no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 4 {
            bail!(
                "line {}: expected 4 numbers (ax ay bx by), found {}",
                no + 1,
                fields.len()
            );
        }
        let mut xs = [0.0f64; 4];
        for (x, f) in xs.iter_mut().zip(&fields) {
            *x = f
                .parse()
                .with_context(|| format!("line {}: bad number {f:?}", no + 1))?;
        }
        out.push(Segment::new(
            Vec2::new(T::cast(xs[0]), T::cast(xs[1])),
            Vec2::new(T::cast(xs[2]), T::cast(xs[3])),
        ));
    }
    Ok(out)
}

pub fn read_segments<T: Real>(path: &Path) -> Result<Vec<Segment<T>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_segments(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Segment list in the format `parse_segments` reads.
pub fn write_segments<T: Real, W: Write>(segments: &[Segment<T>], w: &mut W) -> Result<()> {
    for s in segments {
        writeln!(
            w,
            "{} {} {} {}",
            s.a.x.as_f64(),
            s.a.y.as_f64(),
            s.b.x.as_f64(),
            s.b.y.as_f64()
        )?;
    }
    Ok(())
}

/// `angle vx vy r l` per sample, 5 decimals, `-1` for an unbounded limit.
pub fn write_text<T: Real, W: Write>(rays: &[ViewRay<T>], w: &mut W) -> Result<()> {
    for v in rays {
        writeln!(
            w,
            "{:.5} {:.5} {:.5} {:.5} {:.5}",
            v.angle.as_f64(),
            v.vx().as_f64(),
            v.vy().as_f64(),
            limit_or_sentinel(v.r.as_f64(), -1.0),
            limit_or_sentinel(v.l.as_f64(), -1.0),
        )?;
    }
    Ok(())
}

/// One sample as emitted by `--format json`; unbounded limits become `null`.
#[derive(Debug, Serialize)]
pub struct SampleRecord {
    pub angle: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: Option<f64>,
    pub l: Option<f64>,
}

impl<T: Real> From<&ViewRay<T>> for SampleRecord {
    fn from(v: &ViewRay<T>) -> Self {
        let finite = |x: T| x.is_finite().then(|| x.as_f64());
        Self {
            angle: v.angle.as_f64(),
            vx: v.vx().as_f64(),
            vy: v.vy().as_f64(),
            r: finite(v.r),
            l: finite(v.l),
        }
    }
}

pub fn write_json<T: Real, W: Write>(rays: &[ViewRay<T>], w: &mut W) -> Result<()> {
    let records: Vec<SampleRecord> = rays.iter().map(SampleRecord::from).collect();
    serde_json::to_writer_pretty(&mut *w, &records)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::f64::consts::FRAC_PI_4;
    use tempfile::tempdir;

    #[test]
    fn parse_accepts_commas_comments_and_blank_lines() {
        let text = "# walls\n1 2 3 4\n\n  -1.5,0.25 , 2e1 -3\n";
        let segs: Vec<Segment<f64>> = parse_segments(text).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].a, Vec2::new(1.0, 2.0));
        assert_eq!(segs[1].a, Vec2::new(-1.5, 0.25));
        assert_eq!(segs[1].b, Vec2::new(20.0, -3.0));
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = parse_segments::<f64>("1 2 3 4\n1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
        let err = parse_segments::<f64>("1 2 3 4\n\n1 x 3 4\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 3"), "{err:#}");
    }

    #[test]
    fn read_segments_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("walls.txt");
        fs::write(&path, "2 -1 2 1\n4 4 4 -4\n").unwrap();
        let segs: Vec<Segment<f32>> = read_segments(&path).unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].b, Vec2::new(4.0f32, -4.0));

        let missing = dir.path().join("nope.txt");
        let err = read_segments::<f64>(&missing).unwrap_err();
        assert!(err.to_string().contains("reading"), "{err}");
    }

    #[test]
    fn written_segments_parse_back() {
        let segs = vec![
            Segment::new(Vec2::new(1.0_f64, 2.0), Vec2::new(3.0, 4.0)),
            Segment::new(Vec2::new(-0.125, 7.5), Vec2::new(1e-3, -2.0)),
        ];
        let mut buf = Vec::new();
        write_segments(&segs, &mut buf).unwrap();
        let back: Vec<Segment<f64>> = parse_segments(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(back, segs);
    }

    #[test]
    fn text_output_uses_sentinel_and_five_decimals() {
        let v = ViewRay::opening(&Vec2::new(1.0_f64, 1.0));
        let mut buf = Vec::new();
        write_text(&[v], &mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line, "0.78540 0.70711 0.70711 -1.00000 1.41421\n");
        assert!((v.angle - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn json_output_maps_unbounded_to_null() {
        let v = ViewRay::closing(&Vec2::new(0.0_f64, 2.0));
        let mut buf = Vec::new();
        write_json(&[v], &mut buf).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert!(parsed[0]["l"].is_null());
        assert_eq!(parsed[0]["r"], 2.0);
        assert_eq!(parsed[0]["vy"], 1.0);
    }
}
