//! Helper algorithms over [`Graph`].

use super::Graph;
use std::collections::VecDeque;

/// Connected components, ignoring edge direction.
///
/// Components are numbered by their first node in insertion order; nodes inside a component
/// appear in breadth-first order from that node.
pub fn components<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>> {
    let n = g.node_count();
    let mut seen = vec![false; n];
    let mut out: Vec<Vec<String>> = Vec::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp: Vec<String> = Vec::new();
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(v_ix) = q.pop_front() {
            if let Some(id) = g.node_id_by_ix(v_ix) {
                comp.push(id.to_string());
            }
            g.for_each_neighbor_ix(v_ix, |w_ix| {
                if !seen[w_ix] {
                    seen[w_ix] = true;
                    q.push_back(w_ix);
                }
            });
        }
        out.push(comp);
    }

    out
}

/// Result of [`topological_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    /// Every node index exactly once.
    pub order: Vec<usize>,
    /// Set when some nodes sit on (or behind) a cycle. Those nodes follow the ordered prefix
    /// in insertion order.
    pub cyclic: bool,
}

/// Kahn's algorithm over node indices; ready nodes are taken in insertion order.
pub fn topological_order<N, E, G>(g: &Graph<N, E, G>) -> TopologicalOrder {
    let n = g.node_count();
    let mut indegree = vec![0usize; n];
    let mut succ: Vec<Vec<usize>> = vec![Vec::new(); n];
    g.for_each_edge_ix(|v_ix, w_ix, _key, _label| {
        indegree[w_ix] += 1;
        succ[v_ix].push(w_ix);
    });

    let mut ready: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut placed = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    while let Some(v) = ready.pop_front() {
        placed[v] = true;
        order.push(v);
        for &w in &succ[v] {
            indegree[w] -= 1;
            if indegree[w] == 0 {
                ready.push_back(w);
            }
        }
    }

    let cyclic = order.len() < n;
    if cyclic {
        order.extend((0..n).filter(|&v| !placed[v]));
    }
    TopologicalOrder { order, cyclic }
}
