#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

use kdtree_performance::from_wkt::read_points;
use kdtree_performance::{Point, Rectangle};

//// Utility functions

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn test_case_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(format!("{}.wkt", name))
}

pub fn read_test_case(name: &str) -> Vec<Point> {
    read_points(test_case_path(name)).unwrap()
}

pub fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Point::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

/// Points snapped to a coarse grid, so duplicates and shared coordinates are common.
pub fn get_snapped_points(n: usize, cells: u32, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(0, cells + 1) as f64 / cells as f64,
                rng.gen_range(0, cells + 1) as f64 / cells as f64,
            )
        })
        .collect()
}

pub fn get_random_rects(rect: Rectangle, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Rectangle::new(
            Point::new(
                rng.gen_range(rect.x_min, rect.x_max),
                rng.gen_range(rect.y_min, rect.y_max),
            ),
            Point::new(
                rng.gen_range(rect.x_min, rect.x_max),
                rng.gen_range(rect.y_min, rect.y_max),
            ),
        ));
    }

    results
}

pub fn order_points(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}
