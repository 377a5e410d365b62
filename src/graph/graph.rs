//! In-memory adjacency-list graph.
//!
//! This is deliberately the simplest store that satisfies
//! [`GraphViewOps`](crate::graph::GraphViewOps): node ids are plain `u64`,
//! neighbour lists keep insertion order, and there is no property or
//! temporal machinery. Duplicate edges and self-loops are ignored on
//! insert, matching the semantics of the edge-list datasets this crate
//! samples from.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::graph::{Graph, GraphViewOps};
//!
//! let mut g = Graph::new();
//! g.add_edges_from([(1, 2), (2, 3), (3, 1)]);
//!
//! assert_eq!(g.count_nodes(), 3);
//! assert_eq!(g.count_edges(), 3);
//! assert_eq!(g.neighbours(2), &[1, 3]);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::view::GraphViewOps;

/// External node identifier.
pub type NodeId = u64;

const NO_NEIGHBOURS: &[NodeId] = &[];

/// An adjacency-list graph, undirected by default.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    nodes: Vec<NodeId>,
    slots: FxHashMap<NodeId, usize>,
    out_adj: Vec<Vec<NodeId>>,
    in_adj: Vec<Vec<NodeId>>,
    edges: FxHashSet<(NodeId, NodeId)>,
}

impl Graph {
    /// Create an empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Add a node, a no-op if it already exists.
    pub fn add_node(&mut self, v: NodeId) {
        self.slot(v);
    }

    /// Add an edge, creating missing endpoints. Duplicate edges and
    /// self-loops are ignored. For an undirected graph the edge is entered
    /// in both neighbour lists.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) {
        if src == dst {
            return;
        }
        let key = if self.directed {
            (src, dst)
        } else {
            (src.min(dst), src.max(dst))
        };
        if !self.edges.insert(key) {
            return;
        }
        let src_slot = self.slot(src);
        let dst_slot = self.slot(dst);
        self.out_adj[src_slot].push(dst);
        self.in_adj[dst_slot].push(src);
        if !self.directed {
            self.out_adj[dst_slot].push(src);
            self.in_adj[src_slot].push(dst);
        }
    }

    pub fn add_edges_from<I: IntoIterator<Item = (NodeId, NodeId)>>(&mut self, edges: I) {
        for (src, dst) in edges {
            self.add_edge(src, dst);
        }
    }

    fn slot(&mut self, v: NodeId) -> usize {
        if let Some(&slot) = self.slots.get(&v) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(v);
        self.slots.insert(v, slot);
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        slot
    }
}

impl GraphViewOps for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn count_edges(&self) -> usize {
        self.edges.len()
    }

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn has_node(&self, v: NodeId) -> bool {
        self.slots.contains_key(&v)
    }

    fn neighbours(&self, v: NodeId) -> &[NodeId] {
        match self.slots.get(&v) {
            Some(&slot) => &self.out_adj[slot],
            None => NO_NEIGHBOURS,
        }
    }

    fn in_neighbours(&self, v: NodeId) -> &[NodeId] {
        match self.slots.get(&v) {
            Some(&slot) => &self.in_adj[slot],
            None => NO_NEIGHBOURS,
        }
    }

    fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        if self.directed {
            self.edges.contains(&(src, dst))
        } else {
            self.edges.contains(&(src.min(dst), src.max(dst)))
        }
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut g = Graph::new();
        g.add_edge(1, 2);

        assert!(g.has_edge(1, 2));
        assert!(g.has_edge(2, 1));
        assert_eq!(g.neighbours(1), &[2]);
        assert_eq!(g.neighbours(2), &[1]);
        assert_eq!(g.count_edges(), 1);
    }

    #[test]
    fn duplicate_edges_and_self_loops_are_ignored() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        g.add_edge(1, 2);
        g.add_edge(1, 1);

        assert_eq!(g.count_nodes(), 2);
        assert_eq!(g.count_edges(), 1);
        assert_eq!(g.neighbours(1), &[2]);
    }

    #[test]
    fn neighbour_order_is_insertion_order() {
        let mut g = Graph::new();
        g.add_edges_from([(1, 4), (1, 2), (1, 3)]);

        assert_eq!(g.neighbours(1), &[4, 2, 3]);
        assert_eq!(g.nodes(), &[1, 4, 2, 3]);
    }

    #[test]
    fn directed_degrees() {
        let mut g = Graph::directed();
        g.add_edges_from([(1, 2), (3, 2), (2, 4)]);

        assert_eq!(g.out_degree(2), 1);
        assert_eq!(g.in_degree(2), 2);
        assert_eq!(g.degree(2), 3);
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn missing_node_has_no_neighbours() {
        let g = Graph::new();
        assert!(!g.has_node(7));
        assert!(g.neighbours(7).is_empty());
        assert_eq!(g.degree(7), 0);
    }
}
