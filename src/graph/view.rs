//! The read-only capability set every algorithm in this crate is written
//! against. Samplers, estimators and reducers never mutate a graph; they
//! only need to enumerate nodes, walk neighbour lists and answer edge
//! membership queries, so that is all the trait exposes.

use crate::graph::NodeId;

/// Read-only view of a graph.
///
/// Implementations must iterate nodes and neighbours in a deterministic
/// order for a fixed graph, since traversal tie-breaking follows
/// neighbour-iteration order.
pub trait GraphViewOps {
    /// Whether edges are directed.
    fn is_directed(&self) -> bool;

    /// Number of nodes in the graph.
    fn count_nodes(&self) -> usize;

    /// Number of edges in the graph. Each undirected edge counts once.
    fn count_edges(&self) -> usize;

    /// All node ids, in insertion order.
    fn nodes(&self) -> &[NodeId];

    fn has_node(&self, v: NodeId) -> bool;

    /// Out-neighbours of `v` in insertion order, or an empty slice if `v`
    /// is not in the graph. For an undirected graph these are all
    /// neighbours.
    fn neighbours(&self, v: NodeId) -> &[NodeId];

    /// In-neighbours of `v`. Identical to [`neighbours`](Self::neighbours)
    /// for an undirected graph.
    fn in_neighbours(&self, v: NodeId) -> &[NodeId];

    /// Degree of `v`: the neighbour count for an undirected graph, the sum
    /// of in- and out-degree for a directed one.
    fn degree(&self, v: NodeId) -> usize {
        if self.is_directed() {
            self.in_degree(v) + self.out_degree(v)
        } else {
            self.neighbours(v).len()
        }
    }

    fn out_degree(&self, v: NodeId) -> usize {
        self.neighbours(v).len()
    }

    fn in_degree(&self, v: NodeId) -> usize {
        self.in_neighbours(v).len()
    }

    /// Whether an edge `src -> dst` exists (either orientation for an
    /// undirected graph).
    fn has_edge(&self, src: NodeId, dst: NodeId) -> bool;
}
