#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

use kdtree_performance::from_wkt::read_points;
use kdtree_performance::{Point, PointIndex, Rectangle};

//// Utility functions

pub(crate) fn read_test_case(name: &str) -> Vec<Point> {
    let filepath = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(format!("{}.wkt", name));
    read_points(filepath).unwrap()
}

pub(crate) fn build_index<I: PointIndex>(mut index: I, points: &[Point]) -> I {
    for &p in points {
        index.insert(p).unwrap();
    }
    index
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Point> {
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

/// Small query rectangles, each side at most `extent`.
pub(crate) fn get_random_rects(n: usize, extent: f64, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let x = rng.gen_range(0., 1. - extent);
        let y = rng.gen_range(0., 1. - extent);
        results.push(Rectangle::new(
            Point::new(x, y),
            Point::new(
                x + rng.gen_range(0., extent),
                y + rng.gen_range(0., extent),
            ),
        ));
    }

    results
}
