/**
 * A 2d-tree: an unbalanced binary space partition over points in a
 * rectangular region (the unit square by default).
 *
 * Each node splits the plane on one axis, alternating x, y, x, ... by depth.
 * Points strictly below the node's coordinate on that axis go to `below`,
 * everything else (ties included) goes to `above`. Every node remembers the
 * region it owns, which is what lets range queries skip whole subtrees.
 */
use std::iter::FromIterator;

use tracing::{trace, warn};

use crate::error::{check_point, check_rect};
use crate::{Axis, KdError, Point, PointIndex, Rectangle, Result};

#[derive(Debug)]
struct Node {
    point: Point,
    region: Rectangle,
    below: Option<Box<Node>>,
    above: Option<Box<Node>>,
}

impl Node {
    fn new(point: Point, region: Rectangle) -> Self {
        Node {
            point,
            region,
            below: None,
            above: None,
        }
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.below.as_deref().into_iter().chain(self.above.as_deref())
    }

    /// Children ordered so that the one on the same side of the split as `p` comes first.
    fn children_toward(&self, p: &Point, axis: Axis) -> (Option<&Node>, Option<&Node>) {
        let below = self.below.as_deref();
        let above = self.above.as_deref();
        if p.coord(axis) < self.point.coord(axis) {
            (below, above)
        } else {
            (above, below)
        }
    }
}

/// A node visited by [`KdTree::splits`]: its point, the axis it splits on and the region it owns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Split {
    pub point: Point,
    pub axis: Axis,
    pub region: Rectangle,
}

impl Split {
    /// The splitting segment, clipped to the node's region.
    pub fn segment(&self) -> (Point, Point) {
        match self.axis {
            Axis::X => (
                Point::new(self.point.x, self.region.y_min),
                Point::new(self.point.x, self.region.y_max),
            ),
            Axis::Y => (
                Point::new(self.region.x_min, self.point.y),
                Point::new(self.region.x_max, self.point.y),
            ),
        }
    }
}

#[derive(Debug)]
pub struct KdTree {
    root: Option<Box<Node>>,
    bounds: Rectangle,
    size: usize,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PointIndex for KdTree {
    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn insert(&mut self, p: Point) -> Result<()> {
        check_point(&p)?;
        if !self.bounds.contains(p) {
            return Err(KdError::InvalidArgument(format!(
                "point ({}, {}) is outside the tree bounds {:?}",
                p.x, p.y, self.bounds
            )));
        }

        let mut slot = &mut self.root;
        let mut region = self.bounds;
        let mut depth = 0;
        while let Some(node) = slot {
            let axis = Axis::for_depth(depth);
            if node.point == p {
                trace!(x = p.x, y = p.y, "point already present");
                return Ok(());
            }
            let split = node.point.coord(axis);
            let (below, above) = node.region.split(axis, split);
            if p.coord(axis) < split {
                region = below;
                slot = &mut node.below;
            } else {
                region = above;
                slot = &mut node.above;
            }
            depth += 1;
        }

        trace!(x = p.x, y = p.y, depth, "inserting point");
        *slot = Some(Box::new(Node::new(p, region)));
        self.size += 1;
        Ok(())
    }

    fn contains(&self, p: &Point) -> Result<bool> {
        check_point(p)?;

        let mut current = self.root.as_deref();
        let mut axis = Axis::X;
        while let Some(node) = current {
            if node.point == *p {
                return Ok(true);
            }
            current = if p.coord(axis) < node.point.coord(axis) {
                node.below.as_deref()
            } else {
                node.above.as_deref()
            };
            axis = axis.next();
        }
        Ok(false)
    }

    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>> {
        check_rect(rect)?;
        Ok(self.range_with_visits(rect).0)
    }

    fn nearest(&self, p: &Point) -> Result<Option<Point>> {
        check_point(p)?;
        Ok(self.nearest_with_visits(p).0)
    }
}

impl KdTree {
    /// Range query, also returning how many nodes were visited.
    fn range_with_visits(&self, rect: &Rectangle) -> (Vec<Point>, usize) {
        let mut results = Vec::new();
        let mut visits = 0;
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return (results, visits),
        };

        // Invariant: every node on the stack owns a region intersecting rect.
        let mut stack = Vec::new();
        if rect.intersects(root.region) {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            visits += 1;
            if rect.contains(node.point) {
                results.push(node.point);
            }
            for child in node.children() {
                if rect.intersects(child.region) {
                    stack.push(child);
                }
            }
        }

        (results, visits)
    }

    /// Nearest neighbour, also returning how many nodes were visited.
    fn nearest_with_visits(&self, p: &Point) -> (Option<Point>, usize) {
        let mut visits = 0;
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return (None, visits),
        };

        let mut best = root.point;
        let mut best_dist = f64::INFINITY;

        // Entries are (node, axis, squared distance from p to the parent's splitting line).
        // The near child is pushed last so its subtree is exhausted before the far
        // child is checked against the improved bound.
        let mut stack: Vec<(&Node, Axis, f64)> = vec![(root, Axis::X, 0.)];
        while let Some((node, axis, line_dist)) = stack.pop() {
            if line_dist >= best_dist {
                continue;
            }
            visits += 1;

            let dist = p.distance_squared_to(&node.point);
            if dist < best_dist {
                best_dist = dist;
                best = node.point;
            }

            let (first, second) = node.children_toward(p, axis);
            if let Some(second) = second {
                let delta = p.coord(axis) - node.point.coord(axis);
                stack.push((second, axis.next(), delta * delta));
            }
            if let Some(first) = first {
                stack.push((first, axis.next(), 0.));
            }
        }

        (Some(best), visits)
    }

    /// An empty tree over the unit square.
    pub fn new() -> Self {
        Self::with_bounds(Rectangle::unit())
    }

    /// An empty tree whose root owns `bounds`. Points outside it are rejected.
    pub fn with_bounds(bounds: Rectangle) -> Self {
        KdTree {
            root: None,
            bounds,
            size: 0,
        }
    }

    /// Number of levels, 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in node.children() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// All stored points, in pre-order (node, then below, then above).
    pub fn points(&self) -> Vec<Point> {
        self.splits().into_iter().map(|s| s.point).collect()
    }

    /// Every node in pre-order (node, then below, then above).
    pub fn splits(&self) -> Vec<Split> {
        let mut results = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            results.push(Split {
                point: node.point,
                axis: Axis::for_depth(depth),
                region: node.region,
            });
            if let Some(above) = node.above.as_deref() {
                stack.push((above, depth + 1));
            }
            if let Some(below) = node.below.as_deref() {
                stack.push((below, depth + 1));
            }
        }
        results
    }
}

/// Inserts every valid point. Points `insert` would reject are skipped and
/// logged at warn level, not reported to the caller.
impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            if let Err(e) = self.insert(p) {
                warn!("skipping point: {}", e);
            }
        }
    }
}

/// Collects into a unit-square tree, skipping invalid points like `extend`.
impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = KdTree::new();
        tree.extend(iter);
        tree
    }
}

impl Drop for KdTree {
    // Unlink iteratively; a tree built from sorted input is a long chain.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.below.take());
            stack.extend(node.above.take());
        }
    }
}
