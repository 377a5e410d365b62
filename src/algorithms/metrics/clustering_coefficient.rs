//! Local clustering coefficient - measures the degree to which the
//! neighbourhood of a node tends to cluster together.
//!
//! For a node `v` it is the fraction of `v`'s neighbour pairs that are
//! themselves connected by an edge: `2 * triangles(v) / (deg(v) * (deg(v) - 1))`.
//! The exact graph-wide average over all nodes is what the random-walk
//! estimators in [`crate::algorithms::sampling`] approximate; it doubles as
//! the ground-truth value fed to normalized-error computation.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::algorithms::metrics::clustering_coefficient::local_clustering_coefficient;
//! use graph_sampling::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edges_from([(1, 2), (1, 3), (2, 3), (1, 4), (4, 5)]);
//!
//! assert_eq!(local_clustering_coefficient(&g, 2), Some(1.0));
//! ```

use crate::graph::{GraphViewOps, NodeId};

/// Local clustering coefficient of node `v`, or `None` if `v` is not in
/// the graph. Nodes with fewer than two neighbours have coefficient `0.0`.
///
/// For a directed graph a neighbour pair counts as connected when an edge
/// exists in either direction.
pub fn local_clustering_coefficient<G: GraphViewOps>(graph: &G, v: NodeId) -> Option<f64> {
    if !graph.has_node(v) {
        return None;
    }
    let neighbours = graph.neighbours(v);
    let degree = neighbours.len();
    if degree < 2 {
        return Some(0.0);
    }
    let mut triangles = 0usize;
    for (i, &u) in neighbours.iter().enumerate() {
        for &w in &neighbours[i + 1..] {
            if graph.has_edge(u, w) || graph.has_edge(w, u) {
                triangles += 1;
            }
        }
    }
    Some(2.0 * triangles as f64 / (degree as f64 * (degree as f64 - 1.0)))
}

/// Exact average of the local clustering coefficient over every node in
/// the graph, `0.0` for an empty graph.
pub fn average_clustering_coefficient<G: GraphViewOps>(graph: &G) -> f64 {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return 0.0;
    }
    let total: f64 = nodes
        .iter()
        .filter_map(|&v| local_clustering_coefficient(graph, v))
        .sum();
    total / nodes.len() as f64
}
