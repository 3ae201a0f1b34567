use crate::error::Error;
use crate::geom::Point2f;

/// Ordered polyline of vertices, either a closed perimeter or an open line.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point2f>,
    closed: bool,
}

impl Curve {
    /// Closed perimeter; indices wrap modulo the vertex count.
    pub fn closed(points: Vec<Point2f>) -> Result<Self, Error> {
        Self::build(points, true)
    }

    /// Open line; no wraparound.
    pub fn open(points: Vec<Point2f>) -> Result<Self, Error> {
        Self::build(points, false)
    }

    fn build(points: Vec<Point2f>, closed: bool) -> Result<Self, Error> {
        if points.len() < 2 {
            return Err(Error::DegenerateCurve {
                points: points.len(),
            });
        }
        Ok(Self { points, closed })
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[Point2f] {
        &self.points
    }

    pub fn point(&self, i: usize) -> Point2f {
        self.points[i]
    }

    /// Wrapped index arithmetic for closed-curve traversal.
    pub fn wrap(&self, i: usize) -> usize {
        i % self.points.len()
    }

    /// Polyline length; the closing segment is included for closed curves.
    pub fn length(&self) -> f32 {
        let mut len = 0.0f32;
        for w in self.points.windows(2) {
            len += w[0].distance(w[1]);
        }

        if self.closed {
            let first = self.points[0];
            let last = self.points[self.points.len() - 1];
            len += last.distance(first);
        }

        len
    }

    /// Shoelace area of a closed curve, independent of winding direction.
    /// `None` for open curves.
    pub fn enclosed_area(&self) -> Option<f32> {
        if !self.closed {
            return None;
        }

        let n = self.points.len();
        let mut twice_area = 0.0f32;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }

        Some(0.5 * twice_area.abs())
    }
}
