use std::cmp::Ordering;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lexicographic order by x, then y. Total on finite points, and agrees
    /// with `==`: adding 0.0 maps -0.0 to 0.0.
    pub(crate) fn cmp_xy(&self, other: &Point) -> Ordering {
        (self.x + 0.)
            .total_cmp(&(other.x + 0.))
            .then_with(|| (self.y + 0.).total_cmp(&(other.y + 0.)))
    }
}

/// The coordinate a node splits on.
///
/// The root splits on `X`, and the axis alternates with every level below it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}
