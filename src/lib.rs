mod draw;
mod error;
pub mod from_wkt;
mod kd_tree;
mod point;
mod point_index;
mod point_set;
mod rectangle;

pub use draw::{Canvas, SvgCanvas, CANVAS_SIZE, PEN_RADIUS};
pub use error::{KdError, Result};
pub use kd_tree::{KdTree, Split};
pub use point::{Axis, Point};
pub use point_index::PointIndex;
pub use point_set::PointSet;
pub use rectangle::{HasEnvelope, Rectangle};
