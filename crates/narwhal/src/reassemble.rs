//! Reassembly of separately laid out components into one drawing.
//!
//! Each component is centered on its centroid, turned so that its minimum-area enclosing
//! rectangle is axis aligned and wider than tall, and moved into the slot the packer assigns
//! to that rectangle. The three steps compose into one [`Transform`] per component.

use crate::components::ComponentPartition;
use crate::geometry::{IPoint, Point, Transform, Vector, atan2ex, vector};
use crate::hull::ConvexHull;
use crate::model::AttributedGraph;
use crate::options::SplitterOptions;
use crate::packing::CcPacker;
use euclid::Angle;
use std::f64::consts::{FRAC_PI_2, PI};

/// What the reassembler decided for one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentPlacement {
    /// Mean of the component's node positions and bend points before reassembly.
    pub centroid: Point,
    /// Rotation applied to the centered component.
    pub angle: f64,
    /// Extent of the rotated component (`width >= height`).
    pub width: f64,
    pub height: f64,
    /// Box handed to the packer: truncated extent plus the border.
    pub size: IPoint,
    /// Lower-left corner of the rotated geometry, less half the border on each axis.
    ///
    /// Subtracting it after rotation puts the geometry half a border inside its box. The half
    /// border is subtracted rather than added, so no component reaches past its box's
    /// lower-left corner.
    pub pre_offset: Vector,
    /// Box position chosen by the packer.
    pub offset: IPoint,
}

impl ComponentPlacement {
    /// Rigid motion from the component's layout coordinates to its packed slot: center on the
    /// centroid, rotate by `angle`, then move by `offset - pre_offset`.
    pub fn transform(&self) -> Transform {
        Transform::translation(-self.centroid.x, -self.centroid.y)
            .then_rotate(Angle::radians(self.angle))
            .then_translate(self.offset.to_f64().to_vector() - self.pre_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrientedBox {
    /// Unit normal of the hull edge the box rests on, pointing into the hull.
    pub(crate) normal: Vector,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

fn unit_box() -> OrientedBox {
    OrientedBox {
        normal: vector(1.0, 1.0),
        width: 1.0,
        height: 1.0,
    }
}

/// Rotating calipers: tries every hull edge as the base of the enclosing rectangle.
///
/// Both extents are at least `1.0`. On equal areas the later edge wins. Hulls of at most one
/// point yield a unit box.
pub(crate) fn min_area_box(hull: &dyn ConvexHull, polygon: &[Point]) -> OrientedBox {
    if polygon.len() <= 1 {
        return unit_box();
    }

    let mut best = unit_box();
    let mut best_area = f64::MAX;
    for (k, &p) in polygon.iter().enumerate() {
        let q = polygon[(k + 1) % polygon.len()];

        let normal = hull.normal(q, p);
        let height = polygon
            .iter()
            .map(|&z| hull.left_of_line(normal, z, q))
            .fold(0.0, f64::max)
            .max(1.0);

        let along = hull.normal(Point::origin(), normal.to_point());
        let (left, right) = polygon
            .iter()
            .map(|&z| hull.left_of_line(along, z, q))
            .fold((0.0_f64, 0.0_f64), |(l, r), d| (l.max(d), r.min(d)));
        let width = (left - right).max(1.0);

        let area = width * height;
        if area <= best_area {
            best_area = area;
            best = OrientedBox {
                normal,
                width,
                height,
            };
        }
    }
    best
}

/// Rotation that turns the box's base edge to the bottom (largest y), plus a quarter turn
/// when that would leave it taller than wide. Returns `(angle, width, height)`.
pub(crate) fn orientation(b: &OrientedBox) -> (f64, f64, f64) {
    let mut angle = -atan2ex(b.normal.y, b.normal.x) + 1.5 * PI;
    let (mut width, mut height) = (b.width, b.height);
    if width < height {
        angle += FRAC_PI_2;
        (width, height) = (height, width);
    }
    (angle, width, height)
}

/// Applies `f` to every node position and, when maintained, every bend point of component `i`.
fn map_component_points<F>(
    graph: &mut AttributedGraph,
    ccs: &ComponentPartition,
    i: usize,
    mut f: F,
) where
    F: FnMut(Point) -> Point,
{
    for v in ccs.nodes(i) {
        if let Some(n) = graph.node_mut(v) {
            let p = f(n.position());
            n.set_position(p);
        }
    }
    if !graph.graph().attributes.edge_graphics {
        return;
    }
    for e in ccs.edges(i) {
        if let Some(label) = graph.edge_mut_by_key(e) {
            for bend in &mut label.bends {
                *bend = f(*bend);
            }
        }
    }
}

/// Node positions in component node order, then bends edge by edge.
fn collect_points(graph: &AttributedGraph, ccs: &ComponentPartition, i: usize) -> Vec<Point> {
    let mut points: Vec<Point> = ccs
        .nodes(i)
        .iter()
        .filter_map(|v| graph.node(v).map(|n| n.position()))
        .collect();
    if graph.graph().attributes.edge_graphics {
        for e in ccs.edges(i) {
            if let Some(label) = graph.edge_by_key(e) {
                points.extend(label.bends.iter().copied());
            }
        }
    }
    points
}

fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::origin();
    }
    let sum = points
        .iter()
        .fold(Vector::zero(), |acc, p| acc + p.to_vector());
    (sum / points.len() as f64).to_point()
}

fn place_component(
    graph: &AttributedGraph,
    ccs: &ComponentPartition,
    i: usize,
    border: i64,
    hull: &dyn ConvexHull,
) -> ComponentPlacement {
    let points = collect_points(graph, ccs, i);
    let center = centroid(&points);
    let centered: Vec<Point> = points.iter().map(|&p| (p - center).to_point()).collect();

    let polygon = hull.hull(&centered);
    let (angle, width, height) = orientation(&min_area_box(hull, &polygon));

    let rotation = Transform::rotation(Angle::radians(angle));
    let mut rotated = polygon.iter().map(|&p| rotation.transform_point(p));
    let first = rotated.next().unwrap_or(Point::origin());
    let (left, bottom) = rotated.fold((first.x, first.y), |(l, b), p| (l.min(p.x), b.max(p.y)));

    let half_border = 0.5 * border as f64;
    let placement = ComponentPlacement {
        centroid: center,
        angle,
        width,
        height,
        size: IPoint::new(width as i64 + border, height as i64 + border),
        pre_offset: vector(left - half_border, bottom - height - half_border),
        offset: IPoint::origin(),
    };
    tracing::trace!(
        component = i,
        hull = polygon.len(),
        angle,
        width,
        height,
        "oriented component box"
    );
    placement
}

/// Rotates, packs, and translates every component of `ccs` in place.
///
/// Components are handled in partition order; the returned placements follow the same order.
pub fn reassemble_drawings(
    graph: &mut AttributedGraph,
    ccs: &ComponentPartition,
    options: &SplitterOptions,
    hull: &dyn ConvexHull,
    packer: &dyn CcPacker,
) -> Vec<ComponentPlacement> {
    let mut placements: Vec<ComponentPlacement> = (0..ccs.len())
        .map(|i| place_component(graph, ccs, i, options.border, hull))
        .collect();

    let boxes: Vec<IPoint> = placements.iter().map(|p| p.size).collect();
    let offsets = packer.pack(&boxes, options.target_ratio);
    if offsets.len() != boxes.len() {
        tracing::warn!(
            boxes = boxes.len(),
            offsets = offsets.len(),
            "packer returned a different number of offsets"
        );
    }

    for (i, placement) in placements.iter_mut().enumerate() {
        placement.offset = offsets.get(i).copied().unwrap_or(IPoint::origin());
        let t = placement.transform();
        map_component_points(graph, ccs, i, |p| t.transform_point(p));
    }

    tracing::debug!(components = placements.len(), "reassembled drawing");
    placements
}
