//! Graph container APIs used by `narwhal`.
//!
//! Nodes are addressed by string ids, edges by [`EdgeKey`] (`v`, `w`, optional `name` for
//! multigraphs). Insertion order is preserved everywhere; every traversal in this crate and in
//! `narwhal` relies on that for deterministic output.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions, alg};
