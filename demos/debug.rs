//! Contour boolean debug runner: executes a named scenario and logs the
//! resulting polylines.
//!
//! Usage:
//! ```text
//! cargo run --example debug                   # all scenarios
//! cargo run --example debug -- offset         # one scenario
//! RUST_LOG=contour_boolean=trace cargo run --example debug
//! ```

use contour_boolean::geometry::Contour;
use contour_boolean::math::polygon_2d::signed_area;
use contour_boolean::math::Point2;
use contour_boolean::operations::batch::{intersect_sets, subtract_sets, union_sets, xor_sets};
use contour_boolean::operations::boolean::Subtract;
use contour_boolean::operations::query::{FindHoles, FindIslands};
use contour_boolean::Result;
use tracing::info;

const SCENARIOS: &[&str] = &["offset", "nested", "shared_edge", "touching", "islands"];

fn square(x: f64, y: f64, size: f64) -> Vec<Point2> {
    vec![
        Point2::new(x, y),
        Point2::new(x + size, y),
        Point2::new(x + size, y + size),
        Point2::new(x, y + size),
    ]
}

fn log_paths(label: &str, paths: &[Vec<Point2>]) {
    let area: f64 = paths.iter().map(|p| signed_area(p)).sum();
    info!(label, count = paths.len(), area, "result");
    for (i, path) in paths.iter().enumerate() {
        let points: Vec<(f64, f64)> = path.iter().map(|p| (p.x, p.y)).collect();
        info!(label, index = i, ?points, "path");
    }
}

fn offset() {
    let a = vec![square(0.0, 0.0, 1.0)];
    let b = vec![square(0.5, 0.0, 1.0)];
    log_paths("intersect", &intersect_sets(&a, &b));
    log_paths("union", &union_sets(&a, &b));
    log_paths("subtract", &subtract_sets(&a, &b));
    log_paths("xor", &xor_sets(&a, &b));
}

fn nested() {
    let outer = square(0.0, 0.0, 4.0);
    let inner = square(1.0, 1.0, 2.0);
    log_paths("union", &union_sets(&[outer.clone()], &[inner.clone()]));

    let separate = Subtract::new(&outer, &inner).execute();
    let contours: Vec<Contour> = separate
        .iter()
        .map(|points| Contour::new(points.clone(), true))
        .collect();
    info!(holes = ?FindHoles::new(&contours).execute(), "hole detection");
    log_paths("subtract", &separate);
    log_paths(
        "subtract bridged",
        &Subtract::new(&outer, &inner)
            .with_bridged_holes(true)
            .execute(),
    );
}

fn shared_edge() {
    let a = vec![square(0.0, 0.0, 1.0)];
    let b = vec![square(1.0, 0.0, 1.0)];
    log_paths("intersect", &intersect_sets(&a, &b));
    log_paths("union", &union_sets(&a, &b));
}

fn touching() -> Result<()> {
    let frame = Contour::new(square(0.0, 0.0, 2.0), true);
    let diamond = Contour::new(
        vec![
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 1.0),
        ],
        true,
    );
    log_paths("subtract", &Subtract::from_contours(&frame, &diamond)?.execute());
    Ok(())
}

fn islands() -> Result<()> {
    let contours = vec![
        Contour::new(square(0.0, 0.0, 10.0), true),
        Contour::new(square(20.0, 0.0, 5.0), true),
    ];
    // Coordinates in mm, threshold in cm².
    let found = FindIslands::new(1.0)?
        .with_area_scale(0.01)?
        .execute(&contours);
    info!(?found, "islands below 1 cm²");
    Ok(())
}

fn run(name: &str) -> Result<()> {
    info!(scenario = name, "running");
    match name {
        "offset" => offset(),
        "nested" => nested(),
        "shared_edge" => shared_edge(),
        "touching" => touching()?,
        "islands" => islands()?,
        other => tracing::warn!(scenario = other, known = ?SCENARIOS, "unknown scenario"),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this crate and the runner.
    // Override with RUST_LOG env var (e.g. RUST_LOG=contour_boolean=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("contour_boolean=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match std::env::args().nth(1) {
        Some(name) => run(&name),
        None => SCENARIOS.iter().try_for_each(|name| run(name)),
    }
}
