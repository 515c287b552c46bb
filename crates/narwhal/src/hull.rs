//! Convex hulls and the line predicates used by the rotating-calipers search.

use crate::geometry::{Point, Vector, vector};

/// Convex hull construction plus the two predicates the reassembler needs.
///
/// `hull` must return the hull vertices once each, in counter-clockwise order (with `y`
/// pointing up), without collinear vertices. With that orientation `normal(q, p)` of a hull
/// edge `p -> q` points into the hull.
pub trait ConvexHull {
    fn hull(&self, points: &[Point]) -> Vec<Point>;

    /// Unit normal of the line `start -> end`, or the zero vector if the points coincide.
    fn normal(&self, start: Point, end: Point) -> Vector {
        let n = vector(end.y - start.y, start.x - end.x);
        let len = n.length();
        if len == 0.0 { Vector::zero() } else { n / len }
    }

    /// Signed distance of `point` from the line through `on_line` with unit `normal`; positive
    /// on the side the normal points to.
    fn left_of_line(&self, normal: Vector, point: Point, on_line: Point) -> f64 {
        (point - on_line).dot(normal)
    }
}

/// Andrew's monotone chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotoneChain;

impl ConvexHull for MonotoneChain {
    fn hull(&self, points: &[Point]) -> Vec<Point> {
        let mut pts: Vec<Point> = points
            .iter()
            .copied()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect();
        pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        pts.dedup();
        if pts.len() <= 2 {
            return pts;
        }

        let turn = |o: Point, a: Point, b: Point| (a - o).cross(b - o);

        let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
        for &p in &pts {
            while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
            {
                lower.pop();
            }
            lower.push(p);
        }

        let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
        for &p in pts.iter().rev() {
            while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
            {
                upper.pop();
            }
            upper.push(p);
        }

        // Each chain ends where the other starts.
        lower.pop();
        upper.pop();
        lower.extend(upper);
        lower
    }
}
