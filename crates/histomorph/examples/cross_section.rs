//! Example: full labeling analysis of a synthetic bone cross-section.
//!
//! Builds one analysis unit the way the orchestration glue would hand it
//! over: a closed periosteal perimeter, red and green color points with
//! their boundary markers (placed slightly off the perimeter to exercise
//! nearest-vertex snapping), and a paired couple of label lines. Runs arc
//! extraction, double/single classification and interlabel thickness
//! estimation, then writes pixel-space and calibrated records to a JSON
//! file. Per-stage timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p histomorph --example cross_section -- --help
//!   cargo run -p histomorph --example cross_section

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use histomorph::{
    ArcKind, Calibration, Curve, LabelColor, Point2f, Surface, UnitRecord, arc_length,
    classify_runs, estimate_thickness, extract_color_arcs, labeled_lengths,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Run the labeling engine on a synthetic double-labeled cross-section")]
struct Args {
    /// Perimeter vertex count
    #[arg(long, default_value_t = 256)]
    points: usize,

    /// Perimeter radius in pixels
    #[arg(long, default_value_t = 220.0)]
    radius: f32,

    /// Interlabel separation in pixels
    #[arg(long, default_value_t = 6.5)]
    separation: f32,

    /// Physical length of one pixel edge, in micrometers
    #[arg(long, default_value_t = 0.65)]
    microns_per_px: f32,

    /// Output JSON path
    #[arg(long, default_value = "cross_section_results.json")]
    out: String,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunDto {
    kind: &'static str,
    seq: usize,
    start: usize,
    len: usize,
    length_px: f32,
}

#[derive(Serialize)]
struct RecordDto {
    unit: String,
    surface: &'static str,
    perimeter_length: f32,
    enclosed_area: f32,
    double_length: f32,
    single_length: f32,
    mean_thickness: Option<f32>,
}

#[derive(Serialize)]
struct AnalysisResult {
    pixel: RecordDto,
    calibrated: RecordDto,
    runs: Vec<RunDto>,
    thickness_samples: usize,
    elapsed_ms: f64,
}

fn kind_name(kind: ArcKind) -> &'static str {
    match kind {
        ArcKind::Unlabeled => "unlabeled",
        ArcKind::Red => "red",
        ArcKind::Green => "green",
        ArcKind::Double => "double",
        ArcKind::Single => "single",
    }
}

fn record_dto(record: &UnitRecord) -> RecordDto {
    RecordDto {
        unit: record.unit.clone(),
        surface: match record.surface {
            Surface::Periosteal => "Ps",
            Surface::Endosteal => "Es",
        },
        perimeter_length: record.perimeter_length,
        enclosed_area: record.enclosed_area,
        double_length: record.double_length,
        single_length: record.single_length,
        mean_thickness: record.mean_thickness,
    }
}

// ── Synthetic unit ────────────────────────────────────────────────────────────

fn ring_point(i: usize, n: usize, radius: f32) -> Point2f {
    let a = core::f32::consts::TAU * i as f32 / n as f32;
    let r = radius + 4.0 * (3.0 * a).sin();
    Point2f::new(300.0 + r * a.cos(), 300.0 + r * a.sin())
}

fn perimeter(n: usize, radius: f32) -> Result<Curve> {
    let pts = (0..n).map(|i| ring_point(i, n, radius)).collect();
    Curve::closed(pts).context("building perimeter")
}

/// Annotation points sit slightly off the perimeter, like hand-placed ones.
fn off_perimeter(i: usize, n: usize, radius: f32) -> Point2f {
    let p = ring_point(i, n, radius);
    Point2f::new(p.x + 1.2, p.y - 0.8)
}

fn annotation(n: usize, radius: f32, from: usize, to: usize) -> (Vec<Point2f>, Vec<Point2f>) {
    let color_points = (from..to)
        .step_by(8)
        .map(|i| off_perimeter(i, n, radius))
        .collect();
    // One marker inside each color-point span, so the whole extent is kept.
    let markers = (from + 4..to - 8)
        .step_by(8)
        .map(|i| off_perimeter(i, n, radius))
        .collect();
    (color_points, markers)
}

fn label_line(n: usize, radius: f32, from_deg: f32, to_deg: f32) -> Result<Curve> {
    let pts = (0..n)
        .map(|i| {
            let t = i as f32 / (n - 1) as f32;
            let a = (from_deg + t * (to_deg - from_deg)).to_radians();
            Point2f::new(300.0 + radius * a.cos(), 300.0 + radius * a.sin())
        })
        .collect();
    Curve::open(pts).context("building label line")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let n = args.points;

    let perimeter = perimeter(n, args.radius)?;
    let (red_points, red_markers) = annotation(n, args.radius, n / 16, n / 2);
    let (green_points, green_markers) = annotation(n, args.radius, n / 3, 3 * n / 4);

    // Paired label lines: the outer line is denser, as traced lines usually
    // are, so it becomes the thickness reference.
    let outer = label_line(72, args.radius - 10.0, 20.0, 160.0)?;
    let inner = label_line(36, args.radius - 10.0 - args.separation, 22.0, 158.0)?;

    println!(
        "unit: {n}-vertex perimeter, red {} + green {} color points, {} + {} line vertices",
        red_points.len(),
        green_points.len(),
        outer.points().len(),
        inner.points().len()
    );

    let t0 = Instant::now();
    let red = extract_color_arcs(
        &perimeter,
        Surface::Periosteal,
        LabelColor::Red,
        &red_points,
        &red_markers,
    );
    let green = extract_color_arcs(
        &perimeter,
        Surface::Periosteal,
        LabelColor::Green,
        &green_points,
        &green_markers,
    );
    let runs = classify_runs(&perimeter, Surface::Periosteal, &red, &green);
    let (double_length, single_length) = labeled_lengths(&perimeter, &runs);
    let classify_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "  arcs: {} red, {} green -> {} runs  ({classify_ms:.2} ms)",
        red.len(),
        green.len(),
        runs.len()
    );

    let t1 = Instant::now();
    let thickness = estimate_thickness(&outer, &inner);
    let thickness_ms = t1.elapsed().as_secs_f64() * 1e3;
    println!(
        "  thickness: {} samples, mean {:?}  ({thickness_ms:.2} ms)",
        thickness.samples.len(),
        thickness.mean
    );

    let record = UnitRecord {
        unit: "demo-01".to_owned(),
        surface: Surface::Periosteal,
        perimeter_length: perimeter.length(),
        enclosed_area: perimeter.enclosed_area().unwrap_or(0.0),
        double_length,
        single_length,
        mean_thickness: thickness.mean,
    };
    let calibrated = Calibration {
        units_per_px: args.microns_per_px,
    }
    .apply(&record);

    let result = AnalysisResult {
        pixel: record_dto(&record),
        calibrated: record_dto(&calibrated),
        runs: runs
            .iter()
            .map(|r| RunDto {
                kind: kind_name(r.kind),
                seq: r.seq,
                start: r.start,
                len: r.len,
                length_px: arc_length(&perimeter, r),
            })
            .collect(),
        thickness_samples: thickness.samples.len(),
        elapsed_ms: classify_ms + thickness_ms,
    };

    let out_file =
        std::fs::File::create(&args.out).with_context(|| format!("creating {}", args.out))?;
    serde_json::to_writer_pretty(out_file, &result)
        .with_context(|| format!("writing JSON to {}", args.out))?;

    println!("results written to {}", args.out);
    Ok(())
}
