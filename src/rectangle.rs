use crate::{Axis, Point};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl HasEnvelope for Point {
    fn envelope(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x,
            y_max: self.y,
        }
    }
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl<T: HasEnvelope> HasEnvelope for &T {
    fn envelope(&self) -> Rectangle {
        (*self).envelope()
    }
}

impl From<Point> for Rectangle {
    fn from(p: Point) -> Self {
        p.envelope()
    }
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    /// The unit square [0, 1] x [0, 1].
    pub fn unit() -> Self {
        Rectangle {
            x_min: 0.,
            y_min: 0.,
            x_max: 1.,
            y_max: 1.,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite()
            && self.y_min.is_finite()
            && self.x_max.is_finite()
            && self.y_max.is_finite()
            && self.x_min <= self.x_max
            && self.y_min <= self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Boundary touching counts as intersecting.
    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    /// Inclusive on all four edges.
    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /**
     * Split at `at` along `axis`, returning the (below, above) halves.
     *
     * The below half keeps this rectangle's lower bound and takes `at` as its
     * upper bound on `axis`; the above half is the mirror.
     */
    pub fn split(&self, axis: Axis, at: f64) -> (Rectangle, Rectangle) {
        match axis {
            Axis::X => (
                Rectangle {
                    x_max: at,
                    ..*self
                },
                Rectangle {
                    x_min: at,
                    ..*self
                },
            ),
            Axis::Y => (
                Rectangle {
                    y_max: at,
                    ..*self
                },
                Rectangle {
                    y_min: at,
                    ..*self
                },
            ),
        }
    }
}
