//! Preferential attachment graph generation.
//!
//! Based upon:
//! Barabási, Albert-László, and Réka Albert. "Emergence of scaling in
//! random networks." Science 286.5439 (1999): 509-512.
//!
//! Each step adds one node and connects it to `edges_per_step` existing
//! nodes chosen proportionally to their degree, without replacement, which
//! produces the heavy-tailed degree distributions the degree-distribution
//! reducer is typically pointed at.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::graph::{Graph, GraphViewOps};
//! use graph_sampling::graphgen::preferential_attachment::ba_preferential_attachment;
//!
//! let mut graph = Graph::new();
//! ba_preferential_attachment(&mut graph, 100, 3, Some(42)).unwrap();
//! assert_eq!(graph.count_nodes(), 103);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::{
    errors::{GraphError, Result},
    graph::{Graph, GraphViewOps, NodeId},
};

/// Grow `graph` by `nodes_to_add` nodes, each attached to `edges_per_step`
/// degree-proportionally sampled existing nodes.
///
/// If the graph does not yet hold enough nodes or edges for the initial
/// sample, the minimum of both is added before generation begins. Pass a
/// seed for deterministic output.
pub fn ba_preferential_attachment(
    graph: &mut Graph,
    nodes_to_add: usize,
    edges_per_step: usize,
    seed: Option<u64>,
) -> Result<()> {
    if edges_per_step < 1 {
        return Err(GraphError::InvalidArgument(
            "edges_per_step must be at least 1".to_string(),
        ));
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut next_id: NodeId = graph.nodes().iter().max().map_or(0, |&max| max + 1);
    while graph.count_nodes() < edges_per_step {
        graph.add_node(next_id);
        next_id += 1;
    }
    if graph.count_edges() < edges_per_step {
        let ids = graph.nodes().to_vec();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }
    }

    let mut ids: Vec<NodeId> = graph.nodes().to_vec();
    let mut degrees: Vec<usize> = ids.iter().map(|&v| graph.degree(v)).collect();
    let mut degree_total: usize = degrees.iter().sum();

    for _ in 0..nodes_to_add {
        let new_id = next_id;
        next_id += 1;

        let mut targets: FxHashSet<usize> = FxHashSet::default();
        while targets.len() < edges_per_step {
            let slot = if degree_total == 0 {
                rng.gen_range(0..ids.len())
            } else {
                // Roulette selection over the degree mass.
                let mut ticket = rng.gen_range(0..degree_total);
                let mut chosen = ids.len() - 1;
                for (slot, &degree) in degrees.iter().enumerate() {
                    if ticket < degree {
                        chosen = slot;
                        break;
                    }
                    ticket -= degree;
                }
                chosen
            };
            targets.insert(slot);
        }

        graph.add_node(new_id);
        for &slot in &targets {
            graph.add_edge(new_id, ids[slot]);
            degrees[slot] += 1;
        }
        degree_total += 2 * edges_per_step;
        ids.push(new_id);
        degrees.push(edges_per_step);
    }
    Ok(())
}

#[cfg(test)]
mod preferential_attachment_tests {
    use super::*;

    #[test]
    fn grows_by_requested_nodes() {
        let mut graph = Graph::new();
        ba_preferential_attachment(&mut graph, 50, 2, Some(7)).unwrap();
        // 2 bootstrap nodes plus 50 added.
        assert_eq!(graph.count_nodes(), 52);
        for &v in graph.nodes().to_vec().iter() {
            assert!(graph.degree(v) >= 1);
        }
    }

    #[test]
    fn new_nodes_attach_with_full_fanout() {
        let mut graph = Graph::new();
        ba_preferential_attachment(&mut graph, 30, 3, Some(1)).unwrap();
        // Every added node brought exactly edges_per_step distinct edges.
        assert_eq!(graph.count_edges(), 2 + 30 * 3);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let mut a = Graph::new();
        let mut b = Graph::new();
        ba_preferential_attachment(&mut a, 40, 2, Some(123)).unwrap();
        ba_preferential_attachment(&mut b, 40, 2, Some(123)).unwrap();
        assert_eq!(a.nodes(), b.nodes());
        for &v in a.nodes() {
            assert_eq!(a.neighbours(v), b.neighbours(v));
        }
    }

    #[test]
    fn zero_fanout_is_rejected() {
        let mut graph = Graph::new();
        assert!(matches!(
            ba_preferential_attachment(&mut graph, 10, 0, None),
            Err(GraphError::InvalidArgument(_))
        ));
    }
}
