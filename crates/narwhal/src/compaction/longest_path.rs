//! Longest-path relaxation over the constraint graph.

use super::constraint::{ConstraintGraph, Coord, Drawing, RoutingChannel};
use crate::error::{Error, Result};
use crate::graphlib::alg;

#[derive(Debug, Clone, Copy)]
pub(crate) struct DagEdge<L> {
    pub(crate) v: usize,
    pub(crate) w: usize,
    pub(crate) len: L,
}

/// Index view of one constraint graph, built per call.
pub(crate) struct Dag<'g, L: Coord> {
    graph: &'g ConstraintGraph<L>,
    /// Node indices in topological order (cyclic leftovers last).
    pub(crate) topo: Vec<usize>,
    /// Edges sorted by the topological position of their tail.
    pub(crate) edges: Vec<DagEdge<L>>,
}

impl<'g, L: Coord> Dag<'g, L> {
    pub(crate) fn build(graph: &'g ConstraintGraph<L>, routing: &RoutingChannel<L>) -> Self {
        let topo = alg::topological_order(graph).order;
        let mut position = vec![0usize; graph.node_count()];
        for (i, &v) in topo.iter().enumerate() {
            position[v] = i;
        }

        let mut edges: Vec<DagEdge<L>> = Vec::with_capacity(graph.edge_count());
        graph.for_each_edge_ix(|v, w, _key, label| {
            edges.push(DagEdge {
                v,
                w,
                len: routing.effective_length(label),
            });
        });
        edges.sort_by_key(|e| position[e.v]);

        Self { graph, topo, edges }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.topo.len()
    }

    pub(crate) fn node_id(&self, ix: usize) -> &'g str {
        self.graph.node_id_by_ix(ix).unwrap_or_default()
    }

    /// Smallest coordinates satisfying every constraint, all sources at zero.
    ///
    /// Rounds of edge relaxation in topological order: a DAG settles in the first round and
    /// the second confirms it. Zero-length cycles settle as well. Still changing after
    /// `n + 1` rounds means some cycle has positive length.
    pub(crate) fn longest_paths(&self) -> Result<Vec<L>> {
        let n = self.node_count();
        let mut pos = vec![L::zero(); n];
        let mut last_changed: Option<usize> = None;

        for round in 0..=n {
            last_changed = None;
            for e in &self.edges {
                let candidate = pos[e.v] + e.len;
                if candidate > pos[e.w] {
                    pos[e.w] = candidate;
                    last_changed = Some(e.w);
                }
            }
            if last_changed.is_none() {
                tracing::trace!(rounds = round + 1, nodes = n, "longest paths settled");
                return Ok(pos);
            }
        }

        let node = last_changed
            .map(|ix| self.node_id(ix).to_string())
            .unwrap_or_default();
        Err(Error::PositiveCycle { node })
    }

    pub(crate) fn slack(&self, e: &DagEdge<L>, pos: &[L]) -> L {
        pos[e.w] - pos[e.v] - e.len
    }

    pub(crate) fn is_feasible(&self, pos: &[L]) -> bool {
        self.edges.iter().all(|e| self.slack(e, pos) >= L::zero())
    }

    /// Sum of `pos(w) - pos(v)` over all edges.
    pub(crate) fn total_length(&self, pos: &[L]) -> L {
        self.edges
            .iter()
            .fold(L::zero(), |acc, e| acc + (pos[e.w] - pos[e.v]))
    }

    /// Current coordinates of every node, or `None` if the drawing misses one.
    pub(crate) fn read(&self, drawing: &Drawing<L>) -> Option<Vec<L>> {
        (0..self.node_count())
            .map(|ix| drawing.get(self.node_id(ix)))
            .collect()
    }

    pub(crate) fn write(&self, drawing: &mut Drawing<L>, pos: &[L]) {
        for (ix, &p) in pos.iter().enumerate() {
            drawing.set(self.node_id(ix), p);
        }
    }
}
