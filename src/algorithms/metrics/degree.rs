//! Degree calculations over the entire graph.
//!
//! The degree of a node is the number of edges connected to it; a directed
//! graph additionally distinguishes in-degree (edges pointing at the node)
//! from out-degree (edges pointing away). Besides the scalar summaries
//! this module builds the in-/out-degree frequency histograms used for
//! degree-distribution plots.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::algorithms::metrics::degree::{average_degree, degree_distribution};
//! use graph_sampling::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edges_from([(1, 2), (2, 3), (3, 4), (4, 1)]);
//!
//! assert_eq!(average_degree(&g), 2.0);
//! let (in_hist, _) = degree_distribution(&g);
//! assert_eq!(in_hist, vec![0, 0, 4]);
//! ```

use crate::graph::GraphViewOps;

/// The maximum degree of any node in the graph.
pub fn max_degree<G: GraphViewOps>(graph: &G) -> usize {
    graph
        .nodes()
        .iter()
        .map(|&v| graph.degree(v))
        .max()
        .unwrap_or(0)
}

/// The minimum degree of any node in the graph.
pub fn min_degree<G: GraphViewOps>(graph: &G) -> usize {
    graph
        .nodes()
        .iter()
        .map(|&v| graph.degree(v))
        .min()
        .unwrap_or(0)
}

/// The average degree of all nodes in the graph, `0.0` when empty.
pub fn average_degree<G: GraphViewOps>(graph: &G) -> f64 {
    let (deg_sum, count) = graph
        .nodes()
        .iter()
        .map(|&v| graph.degree(v))
        .fold((0usize, 0usize), |(deg_sum, count), deg| {
            (deg_sum + deg, count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    deg_sum as f64 / count as f64
}

/// In- and out-degree frequency histograms for the full node set.
///
/// `histogram[d]` is the number of nodes with exactly degree `d`; entries
/// run dense from 0 to the maximum observed degree, with unseen degrees
/// holding count 0. For an undirected graph both histograms are identical
/// by construction. An empty graph yields two empty histograms.
pub fn degree_distribution<G: GraphViewOps>(graph: &G) -> (Vec<usize>, Vec<usize>) {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let in_degrees: Vec<usize> = nodes.iter().map(|&v| graph.in_degree(v)).collect();
    let out_degrees: Vec<usize> = nodes.iter().map(|&v| graph.out_degree(v)).collect();

    let bincount = |degrees: &[usize]| {
        let max = degrees.iter().copied().max().unwrap_or(0);
        let mut histogram = vec![0usize; max + 1];
        for &d in degrees {
            histogram[d] += 1;
        }
        histogram
    };
    (bincount(&in_degrees), bincount(&out_degrees))
}

#[cfg(test)]
mod degree_tests {
    use super::*;
    use crate::graph::Graph;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_cycle_distribution() {
        let mut g = Graph::new();
        g.add_edges_from([(1, 2), (2, 3), (3, 4), (4, 1)]);

        let (in_hist, out_hist) = degree_distribution(&g);
        assert_eq!(in_hist, vec![0, 0, 4]);
        assert_eq!(in_hist, out_hist);
    }

    #[test]
    fn directed_distribution() {
        let mut g = Graph::directed();
        g.add_edges_from([(1, 2), (1, 3), (2, 3)]);

        let (in_hist, out_hist) = degree_distribution(&g);
        // in-degrees: 1 -> 0, 2 -> 1, 3 -> 2
        assert_eq!(in_hist, vec![1, 1, 1]);
        // out-degrees: 1 -> 2, 2 -> 1, 3 -> 0
        assert_eq!(out_hist, vec![1, 1, 1]);
    }

    #[test]
    fn degree_summaries() {
        let mut g = Graph::new();
        g.add_edges_from([(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (4, 7), (4, 8)]);

        assert_eq!(max_degree(&g), 3);
        assert_eq!(min_degree(&g), 1);
        let expected = 2.0 * 7.0 / 8.0;
        assert!((average_degree(&g) - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new();
        assert_eq!(average_degree(&g), 0.0);
        assert_eq!(degree_distribution(&g), (vec![], vec![]));
    }
}
