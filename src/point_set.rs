use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::error::{check_point, check_rect};
use crate::{Point, PointIndex, Rectangle, Result};

// Only finite points are ever stored, so the x-then-y order is a lawful total order.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Key(Point);

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_xy(&other.0)
    }
}

/// Brute-force point set: a sorted set scanned linearly for range and nearest queries.
///
/// Used as the reference the tree is checked and benchmarked against.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    set: BTreeSet<Key>,
}

impl PointIndex for PointSet {
    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn size(&self) -> usize {
        self.set.len()
    }

    fn insert(&mut self, p: Point) -> Result<()> {
        check_point(&p)?;
        self.set.insert(Key(p));
        Ok(())
    }

    fn contains(&self, p: &Point) -> Result<bool> {
        check_point(p)?;
        Ok(self.set.contains(&Key(*p)))
    }

    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>> {
        check_rect(rect)?;
        Ok(self
            .set
            .iter()
            .map(|k| k.0)
            .filter(|p| rect.contains(p))
            .collect())
    }

    fn nearest(&self, p: &Point) -> Result<Option<Point>> {
        check_point(p)?;
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        for q in self.set.iter().map(|k| k.0) {
            let dist = p.distance_squared_to(&q);
            if dist < best_dist {
                best_dist = dist;
                best = Some(q);
            }
        }
        Ok(best)
    }
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored points ordered by x, then y.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.set.iter().map(|k| k.0)
    }
}
