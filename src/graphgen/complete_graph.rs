//! Complete graph generator.
//!
//! Every node pair is connected, so every local clustering coefficient is
//! exactly 1.0 - a useful fixed point for checking the sampling
//! estimators.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::graph::GraphViewOps;
//! use graph_sampling::graphgen::complete_graph::complete_graph;
//!
//! let g = complete_graph(10);
//! assert_eq!(g.count_edges(), 45);
//! ```

use crate::graph::{Graph, NodeId};

/// The undirected complete graph on nodes `0..n`.
pub fn complete_graph(n: usize) -> Graph {
    let mut graph = Graph::new();
    for v in 0..n as NodeId {
        graph.add_node(v);
    }
    for i in 0..n as NodeId {
        for j in (i + 1)..n as NodeId {
            graph.add_edge(i, j);
        }
    }
    graph
}
