//! Directed (multi)graph container.
//!
//! Storage is a pair of insertion-ordered vectors plus id indexes. Adjacency lists hold edge
//! indices and are maintained eagerly on insertion. Nothing is ever removed, so dense indices
//! stay valid for the lifetime of the graph.

use rustc_hash::FxBuildHasher;

mod edge_key;
mod options;

pub mod alg;

pub use edge_key::EdgeKey;
pub use options::GraphOptions;

use edge_key::EdgeKeyView;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
struct NodeSlot<N> {
    id: String,
    label: N,
}

/// `tail` and `head` index `nodes`.
#[derive(Debug, Clone)]
struct EdgeSlot<E> {
    key: EdgeKey,
    tail: usize,
    head: usize,
    label: E,
}

#[derive(Debug, Clone)]
pub struct Graph<N, E, G> {
    options: GraphOptions,
    graph_label: G,

    nodes: Vec<NodeSlot<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeSlot<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl<N, E, G> Graph<N, E, G> {
    pub fn new(options: GraphOptions) -> Self
    where
        G: Default,
    {
        Self {
            options,
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    // Nodes

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(&id) {
            self.nodes[ix].label = label;
            return self;
        }
        let ix = self.nodes.len();
        self.nodes.push(NodeSlot {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, ix);
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self
    }

    fn ensure_node(&mut self, id: &str) -> usize
    where
        N: Default,
    {
        if let Some(&ix) = self.node_index.get(id) {
            return ix;
        }
        self.set_node(id, N::default());
        self.nodes.len() - 1
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&ix| &self.nodes[ix].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |ix| &mut self.nodes[ix].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_id_by_ix(&self, ix: usize) -> Option<&str> {
        self.nodes.get(ix).map(|n| n.id.as_str())
    }

    // Edges

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    /// Visits every edge with the dense indices of its endpoints.
    pub fn for_each_edge_ix<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, &EdgeKey, &E),
    {
        for e in &self.edges {
            f(e.tail, e.head, &e.key, &e.label);
        }
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self
    where
        N: Default,
        E: Default,
    {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self
    where
        N: Default,
        E: Default,
    {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    pub fn set_edge_key(&mut self, key: EdgeKey, label: E) -> &mut Self
    where
        N: Default,
        E: Default,
    {
        self.set_edge_named(key.v, key.w, key.name, Some(label))
    }

    /// Inserts or relabels an edge, creating missing endpoints with default labels. The name
    /// only counts in multigraph mode. An existing edge keeps its label when `label` is `None`.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self
    where
        N: Default,
        E: Default,
    {
        let v = v.into();
        let w = w.into();
        let name = if self.options.multigraph {
            name.map(Into::into)
        } else {
            None
        };
        let key = EdgeKey { v, w, name };

        if let Some(&ix) = self.edge_index.get(&key) {
            if let Some(label) = label {
                self.edges[ix].label = label;
            }
            return self;
        }

        let v_ix = self.ensure_node(&key.v);
        let w_ix = self.ensure_node(&key.w);

        let ix = self.edges.len();
        self.out_adj[v_ix].push(ix);
        self.in_adj[w_ix].push(ix);
        self.edge_index.insert(key.clone(), ix);
        self.edges.push(EdgeSlot {
            key,
            tail: v_ix,
            head: w_ix,
            label: label.unwrap_or_default(),
        });
        self
    }

    fn edge_ix_of(&self, key: &EdgeKey) -> Option<usize> {
        let name = if self.options.multigraph {
            key.name.as_deref()
        } else {
            None
        };
        let view = EdgeKeyView {
            v: &key.v,
            w: &key.w,
            name,
        };
        self.edge_index.get(&view).copied()
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        let ix = self.edge_ix_of(key)?;
        Some(&self.edges[ix].label)
    }

    pub fn edge_mut_by_key(&mut self, key: &EdgeKey) -> Option<&mut E> {
        let ix = self.edge_ix_of(key)?;
        Some(&mut self.edges[ix].label)
    }

    /// Neighbor indices of `v_ix` ignoring direction (may repeat for parallel edges).
    pub fn for_each_neighbor_ix<F>(&self, v_ix: usize, mut f: F)
    where
        F: FnMut(usize),
    {
        let (Some(out), Some(inc)) = (self.out_adj.get(v_ix), self.in_adj.get(v_ix)) else {
            return;
        };
        for &e in out {
            f(self.edges[e].head);
        }
        for &e in inc {
            f(self.edges[e].tail);
        }
    }
}
