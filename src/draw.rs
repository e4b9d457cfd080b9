use crate::{Axis, KdTree, Point, PointSet, Rectangle};

pub const CANVAS_SIZE: u32 = 640;
pub const PEN_RADIUS: f64 = 0.01;

/// Receives the points and splitting lines of a drawn index.
pub trait Canvas {
    fn point(&mut self, p: Point);
    /// A splitting segment: vertical for `Axis::X`, horizontal for `Axis::Y`.
    fn line(&mut self, from: Point, to: Point, axis: Axis);
}

impl KdTree {
    /// Draw each point followed by its splitting segment, in pre-order.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for split in self.splits() {
            canvas.point(split.point);
            let (from, to) = split.segment();
            canvas.line(from, to, split.axis);
        }
    }
}

impl PointSet {
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for p in self.points() {
            canvas.point(p);
        }
    }
}

/// Renders to a square SVG document. `view` is mapped onto the whole canvas, y pointing up.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: u32,
    view: Rectangle,
    body: String,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new(CANVAS_SIZE, Rectangle::unit())
    }
}

impl SvgCanvas {
    pub fn new(size: u32, view: Rectangle) -> Self {
        SvgCanvas {
            size,
            view,
            body: String::new(),
        }
    }

    fn project(&self, p: Point) -> (f64, f64) {
        let size = self.size as f64;
        let x = (p.x - self.view.x_min) / self.view.width() * size;
        let y = (self.view.y_max - p.y) / self.view.height() * size;
        (x, y)
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n{body}</svg>\n",
            size = self.size,
            body = self.body
        )
    }
}

impl Canvas for SvgCanvas {
    fn point(&mut self, p: Point) {
        let (cx, cy) = self.project(p);
        let r = PEN_RADIUS * self.size as f64 / 2.;
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"black\"/>\n",
            cx, cy, r
        ));
    }

    fn line(&mut self, from: Point, to: Point, axis: Axis) {
        let (x1, y1) = self.project(from);
        let (x2, y2) = self.project(to);
        let color = match axis {
            Axis::X => "red",
            Axis::Y => "blue",
        };
        self.body.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\"/>\n",
            x1, y1, x2, y2, color
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointIndex;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Canvas for Recorder {
        fn point(&mut self, p: Point) {
            self.calls.push(format!("point {} {}", p.x, p.y));
        }

        fn line(&mut self, from: Point, to: Point, axis: Axis) {
            self.calls.push(format!(
                "line {:?} {} {} {} {}",
                axis, from.x, from.y, to.x, to.y
            ));
        }
    }

    #[test]
    fn test_draw_order() {
        let mut tree = KdTree::new();
        tree.insert(Point::new(0.5, 0.5)).unwrap();
        tree.insert(Point::new(0.25, 0.75)).unwrap();
        tree.insert(Point::new(0.75, 0.25)).unwrap();

        let mut recorder = Recorder::default();
        tree.draw(&mut recorder);
        assert_eq!(
            recorder.calls,
            vec![
                "point 0.5 0.5",
                "line X 0.5 0 0.5 1",
                "point 0.25 0.75",
                "line Y 0 0.75 0.5 0.75",
                "point 0.75 0.25",
                "line Y 0.5 0.25 1 0.25",
            ]
        );
    }

    #[test]
    fn test_svg_output() {
        let mut tree = KdTree::new();
        tree.insert(Point::new(0.5, 0.25)).unwrap();
        let mut canvas = SvgCanvas::default();
        tree.draw(&mut canvas);
        let svg = canvas.finish();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<circle cx=\"320.00\" cy=\"480.00\" r=\"3.20\""));
        assert!(svg.contains(
            "<line x1=\"320.00\" y1=\"640.00\" x2=\"320.00\" y2=\"0.00\" stroke=\"red\"/>"
        ));
    }

    #[test]
    fn test_point_set_draws_points_only() {
        let mut set = PointSet::new();
        set.insert(Point::new(0.1, 0.2)).unwrap();
        set.insert(Point::new(0.3, 0.4)).unwrap();
        let mut recorder = Recorder::default();
        set.draw(&mut recorder);
        assert_eq!(recorder.calls, vec!["point 0.1 0.2", "point 0.3 0.4"]);
    }
}
