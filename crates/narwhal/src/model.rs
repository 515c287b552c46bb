//! Attributed graph: the drawing shared by the splitter, the secondary layout, and the
//! reassembler.

use crate::geometry::{Point, point};
use crate::graphlib::{Graph, GraphOptions};

/// Which optional attribute groups are meaningful on an [`AttributedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    /// Edge bend points are maintained.
    pub edge_graphics: bool,
    /// Edge weights are maintained.
    pub edge_double_weight: bool,
    /// Node z coordinates are maintained.
    pub three_d: bool,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            edge_graphics: true,
            edge_double_weight: false,
            three_d: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GraphAttributes {
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeAttributes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeAttributes {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn position(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeAttributes {
    pub bends: Vec<Point>,
    pub weight: f64,
}

pub type AttributedGraph = Graph<NodeAttributes, EdgeAttributes, GraphAttributes>;

/// Empty attributed graph carrying `attributes`.
pub fn attributed_graph(options: GraphOptions, attributes: Attributes) -> AttributedGraph {
    let mut g = AttributedGraph::new(options);
    g.set_graph(GraphAttributes { attributes });
    g
}
