//! Constraint graph, routing information, and the per-axis drawing.

use crate::graphlib::{Graph, GraphOptions};
use num_traits::Zero;
use rustc_hash::FxHashMap as HashMap;
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Numeric type of constraint lengths and coordinates.
pub trait Coord:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Zero + Debug + 'static
{
}

impl<T> Coord for T where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T> + Zero + Debug + 'static
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintKind {
    /// Plain minimum distance, taken as is.
    #[default]
    Basic,
    /// Separation between two elements that see each other; never shorter than the routing
    /// channel's separation.
    Visibility,
}

/// `pos(w) - pos(v) >= length` for an edge `v -> w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintEdge<L> {
    pub length: L,
    pub kind: ConstraintKind,
}

impl<L: Coord> ConstraintEdge<L> {
    pub fn basic(length: L) -> Self {
        Self {
            length,
            kind: ConstraintKind::Basic,
        }
    }

    pub fn visibility(length: L) -> Self {
        Self {
            length,
            kind: ConstraintKind::Visibility,
        }
    }
}

impl<L: Coord> Default for ConstraintEdge<L> {
    fn default() -> Self {
        Self::basic(L::zero())
    }
}

/// Constraints along one axis. Node ids are the ids of the drawing elements they place.
pub type ConstraintGraph<L> = Graph<(), ConstraintEdge<L>, ()>;

/// Empty constraint graph; parallel constraints between the same pair are allowed.
pub fn constraint_graph<L: Coord>() -> ConstraintGraph<L> {
    ConstraintGraph::new(GraphOptions { multigraph: true })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingChannel<L> {
    /// Minimum distance between elements joined by a visibility constraint.
    pub separation: L,
}

impl<L: Coord> RoutingChannel<L> {
    pub fn new(separation: L) -> Self {
        Self { separation }
    }

    pub fn effective_length(&self, edge: &ConstraintEdge<L>) -> L {
        match edge.kind {
            ConstraintKind::Basic => edge.length,
            ConstraintKind::Visibility if self.separation > edge.length => self.separation,
            ConstraintKind::Visibility => edge.length,
        }
    }
}

impl<L: Coord> Default for RoutingChannel<L> {
    fn default() -> Self {
        Self::new(L::zero())
    }
}

/// Coordinates of drawing elements along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing<L> {
    coords: HashMap<String, L>,
}

impl<L> Default for Drawing<L> {
    fn default() -> Self {
        Self {
            coords: HashMap::default(),
        }
    }
}

impl<L: Coord> Drawing<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<L> {
        self.coords.get(id).copied()
    }

    pub fn set(&mut self, id: impl Into<String>, coord: L) {
        self.coords.insert(id.into(), coord);
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, L)> {
        self.coords.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
