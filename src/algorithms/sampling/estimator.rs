//! Reduction of a sampled node sequence to a clustering-coefficient
//! estimate.
//!
//! Two estimators are provided because they answer different statistical
//! questions:
//!
//! - [`sampled_clustering_coefficient`] averages the graph's local
//!   clustering coefficient at every occurrence in the sequence (a node
//!   visited twice contributes twice). This estimates the graph-wide
//!   average coefficient under the sampler's visitation distribution.
//! - [`path_clustering_coefficient`] connects consecutive sequence
//!   elements into an induced path graph and reports that subgraph's own
//!   average coefficient, a structural summary of the sampled trace.
//!
//! Both take any `IntoIterator` of `Result<NodeId, GraphError>`, so a
//! [`RandomWalk`](crate::algorithms::sampling::random_walk::RandomWalk)
//! plugs in directly and walk failures propagate unchanged.

use itertools::Itertools;

use crate::{
    algorithms::metrics::clustering_coefficient::{
        average_clustering_coefficient, local_clustering_coefficient,
    },
    errors::{GraphError, Result},
    graph::{Graph, GraphViewOps, NodeId},
};

/// Which estimator the aggregation layer runs per trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimatorMode {
    /// Mean local clustering coefficient over visited nodes.
    #[default]
    VisitedNodes,
    /// Average clustering coefficient of the induced path subgraph.
    PathSubgraph,
}

/// Arithmetic mean of the local clustering coefficient at each node in
/// `sequence`, duplicates counted once per occurrence.
///
/// Fails with [`GraphError::EmptySequence`] on a zero-length sequence and
/// with [`GraphError::NodeNotFound`] if the sequence mentions a node the
/// graph does not contain.
pub fn sampled_clustering_coefficient<G, I>(graph: &G, sequence: I) -> Result<f64>
where
    G: GraphViewOps,
    I: IntoIterator<Item = Result<NodeId>>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for node in sequence {
        let node = node?;
        let coefficient =
            local_clustering_coefficient(graph, node).ok_or(GraphError::NodeNotFound(node))?;
        total += coefficient;
        count += 1;
    }
    if count == 0 {
        return Err(GraphError::EmptySequence);
    }
    Ok(total / count as f64)
}

/// Average clustering coefficient of the path graph induced by connecting
/// consecutive elements of `sequence`.
///
/// Consecutive equal elements (a rejected Metropolis-Hastings step) would
/// form a self-loop and are skipped; repeated edges collapse into one.
/// Fails with [`GraphError::EmptySequence`] on a zero-length sequence.
pub fn path_clustering_coefficient<I>(sequence: I) -> Result<f64>
where
    I: IntoIterator<Item = Result<NodeId>>,
{
    let nodes: Vec<NodeId> = sequence.into_iter().collect::<Result<_>>()?;
    if nodes.is_empty() {
        return Err(GraphError::EmptySequence);
    }
    let mut path = Graph::new();
    for &v in &nodes {
        path.add_node(v);
    }
    for (u, w) in nodes.iter().copied().tuple_windows() {
        path.add_edge(u, w);
    }
    Ok(average_clustering_coefficient(&path))
}

/// Run the estimator selected by `mode` over `sequence`.
pub fn estimate<G, I>(graph: &G, mode: EstimatorMode, sequence: I) -> Result<f64>
where
    G: GraphViewOps,
    I: IntoIterator<Item = Result<NodeId>>,
{
    match mode {
        EstimatorMode::VisitedNodes => sampled_clustering_coefficient(graph, sequence),
        EstimatorMode::PathSubgraph => path_clustering_coefficient(sequence),
    }
}

#[cfg(test)]
mod estimator_tests {
    use super::*;
    use crate::algorithms::sampling::random_walk::{random_walk, WalkConfig};
    use crate::graphgen::complete_graph::complete_graph;

    fn ok_sequence(nodes: &[NodeId]) -> Vec<Result<NodeId>> {
        nodes.iter().map(|&v| Ok(v)).collect()
    }

    #[test]
    fn complete_graph_estimates_one_regardless_of_path() {
        let g = complete_graph(4);
        for seed in 0..5 {
            let config = WalkConfig::new().steps(32).metropolized(seed % 2 == 0);
            let walk = random_walk(&g, &config, Some(seed)).unwrap();
            let estimate = sampled_clustering_coefficient(&g, walk).unwrap();
            assert_eq!(estimate, 1.0);
        }
    }

    #[test]
    fn duplicates_contribute_per_occurrence() {
        // 1 sits in a triangle (coefficient 1), 3 hangs off it (coefficient 0).
        let mut g = complete_graph(3);
        g.add_edge(0, 3);
        let sequence = ok_sequence(&[1, 1, 3]);
        let estimate = sampled_clustering_coefficient(&g, sequence).unwrap();
        assert!((estimate - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let g = complete_graph(3);
        assert!(matches!(
            sampled_clustering_coefficient(&g, Vec::new()),
            Err(GraphError::EmptySequence)
        ));
        assert!(matches!(
            path_clustering_coefficient(Vec::new()),
            Err(GraphError::EmptySequence)
        ));
    }

    #[test]
    fn unknown_node_is_an_error() {
        let g = complete_graph(3);
        assert!(matches!(
            sampled_clustering_coefficient(&g, ok_sequence(&[0, 42])),
            Err(GraphError::NodeNotFound(42))
        ));
    }

    #[test]
    fn walk_failure_propagates() {
        let mut g = crate::graph::Graph::new();
        g.add_node(5);
        let config = WalkConfig::new().start(5).steps(4);
        let walk = random_walk(&g, &config, Some(0)).unwrap();
        assert!(matches!(
            sampled_clustering_coefficient(&g, walk),
            Err(GraphError::DegenerateGraph(5))
        ));
    }

    #[test]
    fn path_subgraph_of_a_simple_trace_has_no_triangles() {
        let estimate = path_clustering_coefficient(ok_sequence(&[1, 2, 3, 4])).unwrap();
        assert_eq!(estimate, 0.0);
    }

    #[test]
    fn path_subgraph_closing_a_triangle() {
        // Trace 1-2-3-1 induces the triangle, so every node scores 1.
        let estimate = path_clustering_coefficient(ok_sequence(&[1, 2, 3, 1])).unwrap();
        assert_eq!(estimate, 1.0);
    }

    #[test]
    fn rejected_steps_do_not_create_self_loops() {
        let with_repeat = path_clustering_coefficient(ok_sequence(&[1, 2, 2, 3, 1])).unwrap();
        let without = path_clustering_coefficient(ok_sequence(&[1, 2, 3, 1])).unwrap();
        assert_eq!(with_repeat, without);
    }
}
