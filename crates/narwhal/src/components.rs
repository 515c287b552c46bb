//! Connected-component partition and isolated component copies.

use crate::graphlib::{EdgeKey, Graph, GraphOptions, alg};
use crate::model::{AttributedGraph, EdgeAttributes, GraphAttributes, NodeAttributes};
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeKey>,
}

/// Connected components of a graph, each with its node and edge lists.
///
/// The lists are fixed once built. Code that walks a component twice (collect, then write
/// back) must walk the same lists to stay aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPartition {
    components: Vec<Component>,
}

impl ComponentPartition {
    pub fn new<N, E, G>(g: &Graph<N, E, G>) -> Self {
        let node_lists = alg::components(g);

        let mut component_of: HashMap<&str, usize> = HashMap::default();
        for (i, nodes) in node_lists.iter().enumerate() {
            for v in nodes {
                component_of.insert(v.as_str(), i);
            }
        }

        let mut edge_lists: Vec<Vec<EdgeKey>> = vec![Vec::new(); node_lists.len()];
        for e in g.edges() {
            if let Some(&i) = component_of.get(e.v.as_str()) {
                edge_lists[i].push(e.clone());
            }
        }

        let components = node_lists
            .into_iter()
            .zip(edge_lists)
            .map(|(nodes, edges)| Component { nodes, edges })
            .collect();
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Component> {
        self.components.get(i)
    }

    pub fn nodes(&self, i: usize) -> &[String] {
        self.components
            .get(i)
            .map(|c| c.nodes.as_slice())
            .unwrap_or_default()
    }

    pub fn edges(&self, i: usize) -> &[EdgeKey] {
        self.components
            .get(i)
            .map(|c| c.edges.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }
}

/// Standalone copy of one component of an [`AttributedGraph`].
///
/// The copy keeps the original node ids and edge keys. Elements a layout adds to the copy are
/// not members and are skipped by [`ComponentCopy::merge_into`].
pub struct ComponentCopy {
    pub graph: AttributedGraph,
    nodes: Vec<String>,
    edges: Vec<EdgeKey>,
}

impl ComponentCopy {
    /// Copies component `i` of `ccs`: node size and position always, edge weight and bends
    /// when the graph maintains them.
    pub fn new(original: &AttributedGraph, ccs: &ComponentPartition, i: usize) -> Self {
        let attributes = original.graph().attributes;
        let mut graph = AttributedGraph::new(GraphOptions {
            multigraph: original.is_multigraph(),
        });
        graph.set_graph(GraphAttributes { attributes });

        let mut nodes = Vec::with_capacity(ccs.nodes(i).len());
        for v in ccs.nodes(i) {
            let Some(src) = original.node(v) else {
                continue;
            };
            graph.set_node(
                v.clone(),
                NodeAttributes {
                    x: src.x,
                    y: src.y,
                    width: src.width,
                    height: src.height,
                    ..Default::default()
                },
            );
            nodes.push(v.clone());
        }

        let mut edges = Vec::with_capacity(ccs.edges(i).len());
        for key in ccs.edges(i) {
            let Some(src) = original.edge_by_key(key) else {
                continue;
            };
            let mut label = EdgeAttributes::default();
            if attributes.edge_double_weight {
                label.weight = src.weight;
            }
            if attributes.edge_graphics {
                label.bends = src.bends.clone();
            }
            graph.set_edge_key(key.clone(), label);
            edges.push(key.clone());
        }

        Self {
            graph,
            nodes,
            edges,
        }
    }

    /// Ids of the original nodes in this copy.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Keys of the original edges in this copy.
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Writes positions (z too for 3D drawings) and bends (when maintained) back onto the
    /// original elements. Members missing from the copy are left alone.
    pub fn merge_into(&self, original: &mut AttributedGraph) {
        let attributes = original.graph().attributes;

        for v in &self.nodes {
            let (Some(src), Some(target)) = (self.graph.node(v), original.node_mut(v)) else {
                continue;
            };
            target.x = src.x;
            target.y = src.y;
            if attributes.three_d {
                target.z = src.z;
            }
        }

        if !attributes.edge_graphics {
            return;
        }
        for e in &self.edges {
            let (Some(src), Some(target)) = (self.graph.edge_by_key(e), original.edge_mut_by_key(e))
            else {
                continue;
            };
            target.bends.clone_from(&src.bends);
        }
    }
}
