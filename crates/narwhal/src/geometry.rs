//! Planar geometry types shared by the hull, packing, and reassembly code.

use std::f64::consts::{FRAC_PI_2, PI};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Box2 = euclid::Box2D<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

/// Integer point; also used for box sizes (`x` = width, `y` = height) handed to packers.
pub type IPoint = euclid::Point2D<i64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// `atan2` with definite answers on the axes.
///
/// On an axis the result no longer depends on the sign of a zero or on the platform's
/// limiting behavior: `x == 0` gives `π/2` (for `y >= 0`) or `3π/2`, and `y == 0` gives `0`
/// (for `x >= 0`) or `π`. The `y == 0` rule is applied last, so the origin maps to `0`.
pub fn atan2ex(y: f64, x: f64) -> f64 {
    let mut angle = y.atan2(x);

    if x == 0.0 {
        angle = if y >= 0.0 { FRAC_PI_2 } else { 1.5 * PI };
    }

    if y == 0.0 {
        angle = if x >= 0.0 { 0.0 } else { PI };
    }

    angle
}

/// Axis-aligned bounds of a point set, or `None` for an empty set.
pub fn bounds<I>(points: I) -> Option<Box2>
where
    I: IntoIterator<Item = Point>,
{
    let mut points = points.into_iter().peekable();
    points.peek()?;
    Some(Box2::from_points(points))
}
