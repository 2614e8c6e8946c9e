use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use polyring::sample::{draw_star_polygon, ReplayToken, StarCfg};
use polyring::{Ring, VertexId, VertexKind};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

use input::PolygonFile;

#[derive(Parser)]
#[command(name = "polyring")]
#[command(about = "Inspect simple polygons: vertex convexity, diagonals, ears")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify every vertex and flag the ears
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Check the segment between two vertices (by input index)
    Diagonal {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// Sample a random star-shaped polygon in the input format
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1000.0)]
        radius: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { input } => classify(input),
        Action::Diagonal { input, from, to } => diagonal(input, from, to),
        Action::Sample {
            vertices,
            seed,
            index,
            radius,
            out,
        } => sample(vertices, seed, index, radius, out),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct VertexReport {
    index: usize,
    point: [i32; 2],
    kind: &'static str,
    ear: bool,
}

#[derive(Serialize)]
struct ClassifyReport {
    vertices: usize,
    area2: i128,
    convex: usize,
    reflex: usize,
    ears: usize,
    per_vertex: Vec<VertexReport>,
}

#[derive(Serialize)]
struct DiagonalReport {
    from: usize,
    to: usize,
    in_cone_from: bool,
    in_cone_to: bool,
    diagonalie: bool,
    diagonal: bool,
}

fn load(input: &Path) -> Result<(Ring, Vec<VertexId>)> {
    let (ring, ids) = PolygonFile::read(input)?.to_ring()?;
    let area2 = ring.area2();
    if area2 <= 0 {
        tracing::warn!(area2 = %area2, "polygon is not counterclockwise; predicates assume it is");
    }
    Ok((ring, ids))
}

fn kind_name(kind: VertexKind) -> &'static str {
    match kind {
        VertexKind::Convex => "convex",
        VertexKind::Reflex => "reflex",
        VertexKind::Collinear => "collinear",
    }
}

fn classify(input: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), "classify");
    let (ring, ids) = load(&input)?;
    let per_vertex = ids
        .iter()
        .enumerate()
        .map(|(index, &v)| -> Result<VertexReport> {
            let p = ring.point(v)?;
            Ok(VertexReport {
                index,
                point: [p.x, p.y],
                kind: kind_name(ring.classify(v)?),
                ear: ring.is_ear(v)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let count = |k: &str| per_vertex.iter().filter(|r| r.kind == k).count();
    let report = ClassifyReport {
        vertices: ring.len(),
        area2: ring.area2(),
        convex: count("convex"),
        reflex: count("reflex"),
        ears: per_vertex.iter().filter(|r| r.ear).count(),
        per_vertex,
    };
    tracing::info!(
        vertices = report.vertices,
        reflex = report.reflex,
        ears = report.ears,
        "classified"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn diagonal(input: PathBuf, from: usize, to: usize) -> Result<()> {
    tracing::info!(input = %input.display(), from, to, "diagonal");
    let (ring, ids) = load(&input)?;
    let vertex = |i: usize| -> Result<VertexId> {
        match ids.get(i) {
            Some(&v) => Ok(v),
            None => bail!("vertex index {i} out of range (polygon has {})", ids.len()),
        }
    };
    let (u, w) = (vertex(from)?, vertex(to)?);
    let report = DiagonalReport {
        from,
        to,
        in_cone_from: ring.in_cone(u, w)?,
        in_cone_to: ring.in_cone(w, u)?,
        diagonalie: ring.diagonalie(u, w)?,
        diagonal: ring.is_diagonal(u, w)?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn sample(vertices: usize, seed: u64, index: u64, radius: f64, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(vertices, seed, index, radius, "sample");
    let cfg = StarCfg {
        radius,
        ..StarCfg::with_vertices(vertices)
    };
    let file = PolygonFile::from_points(&draw_star_polygon(cfg, ReplayToken { seed, index }));
    match out {
        Some(path) => {
            file.write(&path)?;
            tracing::info!(out = %path.display(), points = file.points.len(), "wrote polygon");
        }
        None => println!("{}", serde_json::to_string_pretty(&file)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "code_rev": rev,
        "polyring": polyring::VERSION,
        "cli": env!("CARGO_PKG_VERSION"),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
