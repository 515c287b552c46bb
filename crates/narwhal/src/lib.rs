#![forbid(unsafe_code)]

//! Coordinate assignment and component reassembly for graph drawings.
//!
//! Two engines live here:
//!
//! - [`compaction`]: longest-path compaction over one axis's constraint graph, with an optional
//!   tightening pass that slides rigid groups of nodes to shorten edges.
//! - [`splitter`] / [`reassemble`]: lay every connected component out on its own, find a
//!   minimum-area oriented box for each (convex hull + rotating calipers), pack the boxes, and
//!   move every component into its packed slot.

pub use narwhal_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod compaction;
pub mod components;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod model;
pub mod options;
pub mod packing;
pub mod reassemble;
pub mod splitter;

pub use compaction::{
    ConstraintEdge, ConstraintGraph, ConstraintKind, Coord, Drawing, LongestPathCompaction,
    RoutingChannel,
};
pub use components::{ComponentCopy, ComponentPartition};
pub use error::{Error, Result};
pub use geometry::{IPoint, Point, Transform, Vector};
pub use hull::{ConvexHull, MonotoneChain};
pub use model::{AttributedGraph, Attributes, EdgeAttributes, GraphAttributes, NodeAttributes};
pub use options::{CompactionOptions, SplitterOptions};
pub use packing::{CcPacker, TileToRowsPacker};
pub use reassemble::{ComponentPlacement, reassemble_drawings};
pub use splitter::{ComponentSplitterLayout, LayoutModule};
