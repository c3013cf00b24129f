use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use visimerge::generate::{quadrant_staircase, radial_shells, ReplayToken, ShellCfg};
use visimerge::geom2::{GeomCfg, Real, Segment};
use visimerge::reference::brute_force;
use visimerge::viewray::ViewRay;
use visimerge::visimerge::{visimerge_sort, Exec, Layout, SortCfg};

mod io;

#[derive(Parser)]
#[command(name = "visimerge")]
#[command(about = "Visibility from the origin by merge sort over view samples")]
#[command(version = visimerge::VERSION)]
struct Cmd {
    /// Relative epsilon for every boundary decision
    #[arg(long, global = true, default_value_t = 1e-9)]
    eps: f64,
    /// Dispatch of the merges of one pass
    #[arg(long, global = true, value_enum, default_value_t = ExecArg::Seq)]
    exec: ExecArg,
    /// Sample storage used while sorting
    #[arg(long, global = true, value_enum, default_value_t = LayoutArg::Aos)]
    layout: LayoutArg,
    /// Solve in single precision
    #[arg(long, global = true)]
    single: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExecArg {
    Seq,
    Par,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Aos,
    Soa,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `angle vx vy r l`, `-1` for unbounded
    Text,
    Json,
}

#[derive(Subcommand)]
enum Action {
    /// Read `ax ay bx by` lines and print the view samples
    Solve {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Log the solve time and skip printing samples
        #[arg(long)]
        profile: bool,
    },
    /// Print a segment set with 2^k segments
    Generate {
        #[arg(long)]
        k: u32,
        /// Seeded radial shells instead of the quadrant staircase
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compare the merge sort against the brute-force reference
    Check {
        input: PathBuf,
        /// Largest accepted relative deviation of any limit
        #[arg(long, default_value_t = 1e-7)]
        tol: f64,
    },
}

impl Cmd {
    fn sort_cfg(&self) -> SortCfg {
        SortCfg {
            geom: GeomCfg { eps_rel: self.eps },
            exec: match self.exec {
                ExecArg::Seq => Exec::Sequential,
                ExecArg::Par => Exec::Parallel,
            },
            layout: match self.layout {
                LayoutArg::Aos => Layout::ArrayOfStructs,
                LayoutArg::Soa => Layout::StructOfArrays,
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.sort_cfg();
    match (&cmd.action, cmd.single) {
        (Action::Solve { input, format, profile }, false) => {
            solve::<f64>(input, cfg, *format, *profile)
        }
        (Action::Solve { input, format, profile }, true) => {
            solve::<f32>(input, cfg, *format, *profile)
        }
        (Action::Generate { k, seed }, _) => generate(*k, *seed),
        (Action::Check { input, tol }, false) => check::<f64>(input, cfg, *tol),
        (Action::Check { input, tol }, true) => check::<f32>(input, cfg, *tol),
    }
}

fn load<T: Real>(input: &Path, cfg: GeomCfg) -> Result<Vec<Segment<T>>> {
    let segments = io::read_segments::<T>(input)?;
    for (index, s) in segments.iter().enumerate() {
        if s.is_degenerate(cfg) {
            tracing::warn!(index, "degenerate segment (zero length or edge-on)");
        }
    }
    Ok(segments)
}

fn solve<T: Real>(input: &Path, cfg: SortCfg, format: Format, profile: bool) -> Result<()> {
    let segments = load::<T>(input, cfg.geom)?;
    let started = Instant::now();
    let rays = visimerge_sort(&segments, cfg)
        .with_context(|| format!("solving {}", input.display()))?;
    let elapsed = started.elapsed();
    tracing::info!(
        segments = segments.len(),
        samples = rays.len(),
        exec = ?cfg.exec,
        layout = ?cfg.layout,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "solve"
    );
    if profile {
        return Ok(());
    }
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match format {
        Format::Text => io::write_text(&rays, &mut out)?,
        Format::Json => io::write_json(&rays, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn generate(k: u32, seed: Option<u64>) -> Result<()> {
    if k > 24 {
        bail!("k = {k} is too large (at most 24)");
    }
    let segments: Vec<Segment<f64>> = match seed {
        None => quadrant_staircase(k),
        Some(seed) => radial_shells(
            ShellCfg {
                count: 1 << k,
                ..ShellCfg::default()
            },
            ReplayToken::new(seed),
        ),
    };
    tracing::info!(k, seed = ?seed, segments = segments.len(), "generate");
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    io::write_segments(&segments, &mut out)?;
    out.flush()?;
    Ok(())
}

fn check<T: Real>(input: &Path, cfg: SortCfg, tol: f64) -> Result<()> {
    let segments = load::<T>(input, cfg.geom)?;
    let rays = visimerge_sort(&segments, cfg)
        .with_context(|| format!("solving {}", input.display()))?;
    let reference = brute_force(&segments, cfg.geom);
    let dev = max_deviation(&rays, &reference);
    tracing::info!(samples = rays.len(), max_deviation = dev, tol, "check");
    println!("max relative deviation: {dev:.3e}");
    if dev > tol {
        bail!("merge sort deviates from the reference by {dev:.3e} (tol {tol:.1e})");
    }
    Ok(())
}

/// Largest relative deviation between `rays` and `reference` over angles and
/// both limits of every sample, `+∞` on any length or boundedness mismatch.
fn max_deviation<T: Real>(rays: &[ViewRay<T>], reference: &[ViewRay<T>]) -> f64 {
    if rays.len() != reference.len() {
        return f64::INFINITY;
    }
    let rel = |got: T, want: T| -> f64 {
        let (got, want) = (got.as_f64(), want.as_f64());
        match (got.is_finite(), want.is_finite()) {
            (false, false) => 0.0,
            (true, true) => (got - want).abs() / want.abs().max(1.0),
            _ => f64::INFINITY,
        }
    };
    rays.iter()
        .zip(reference)
        .map(|(p, q)| rel(p.angle, q.angle).max(rel(p.l, q.l)).max(rel(p.r, q.r)))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cmd = Cmd::try_parse_from([
            "visimerge", "solve", "walls.txt", "--exec", "par", "--layout", "soa", "--eps", "1e-6",
        ])
        .unwrap();
        let cfg = cmd.sort_cfg();
        assert_eq!(cfg.exec, Exec::Parallel);
        assert_eq!(cfg.layout, Layout::StructOfArrays);
        assert_eq!(cfg.geom.eps_rel, 1e-6);
        assert!(matches!(cmd.action, Action::Solve { profile: false, .. }));
    }

    #[test]
    fn check_accepts_generated_staircase() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stairs.txt");
        let segs: Vec<Segment<f64>> = quadrant_staircase(4);
        let mut buf = Vec::new();
        io::write_segments(&segs, &mut buf).unwrap();
        fs::write(&path, buf).unwrap();
        check::<f64>(&path, SortCfg::default(), 1e-7).unwrap();
    }

    #[test]
    fn check_accepts_room_with_shared_corners() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("room.txt");
        fs::write(&path, "1 -1 1 1\n1 1 -1 1\n-1 1 -1 -1\n-1 -1 1 -1\n").unwrap();
        for exec in [Exec::Sequential, Exec::Parallel] {
            let cfg = SortCfg {
                exec,
                layout: Layout::StructOfArrays,
                ..SortCfg::default()
            };
            check::<f64>(&path, cfg, 1e-7).unwrap();
        }
    }

    #[test]
    fn solve_rejects_count_that_is_not_power_of_two() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("three.txt");
        fs::write(&path, "1 0 0 1\n2 0 0 2\n3 0 0 3\n").unwrap();
        let err = solve::<f64>(&path, SortCfg::default(), Format::Text, true).unwrap_err();
        assert!(format!("{err:#}").contains("not a power of two"), "{err:#}");
    }

    #[test]
    fn deviation_flags_boundedness_mismatch() {
        let segs = [Segment::new(
            visimerge::Vec2::new(2.0_f64, 1.0),
            visimerge::Vec2::new(1.0, 2.0),
        )];
        let rays = visimerge_sort(&segs, SortCfg::default()).unwrap();
        let reference = brute_force(&segs, GeomCfg::default());
        assert!(max_deviation(&rays, &reference) < 1e-12);
        let mut broken = rays.clone();
        broken[0].l = f64::INFINITY;
        assert!(max_deviation(&broken, &reference).is_infinite());
    }
}
