use crate::{Point, Rectangle, Result};

/// A mutable set of points in the plane.
///
/// Arguments with non-finite coordinates (or unordered rectangles) are
/// rejected with `KdError::InvalidArgument` before the set is touched.
pub trait PointIndex {
    fn is_empty(&self) -> bool;
    fn size(&self) -> usize;
    /// Add `p` if it is not already present.
    ///
    /// `KdTree` also rejects a finite point outside its root region with
    /// `InvalidArgument`; its range pruning only covers that region.
    fn insert(&mut self, p: Point) -> Result<()>;
    fn contains(&self, p: &Point) -> Result<bool>;
    /// All stored points inside `rect`, edges included, in no particular order.
    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>>;
    /// A closest stored point to `p`, or `None` if the set is empty.
    fn nearest(&self, p: &Point) -> Result<Option<Point>>;
}
