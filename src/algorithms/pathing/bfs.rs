//! Breadth-first traversal between two nodes.
//!
//! Exploration proceeds level by level, so the first discovered route to
//! any node has the minimum number of edges. [`bfs_visit_order`] reports
//! the nodes in the order the traversal first reached them;
//! [`shortest_path`] reconstructs the minimum-hop path from the recorded
//! predecessor edges. Neighbours at equal depth are visited in the graph
//! view's neighbour-iteration order, which keeps both results
//! deterministic for a fixed graph.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::algorithms::pathing::bfs::shortest_path;
//! use graph_sampling::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edges_from([(1, 2), (2, 3), (3, 4), (4, 5)]);
//!
//! assert_eq!(shortest_path(&g, 1, 5).unwrap(), vec![1, 2, 3, 4, 5]);
//! ```

use std::{collections::VecDeque, mem};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    errors::{GraphError, Result},
    graph::{GraphViewOps, NodeId},
};

/// Nodes in the order breadth-first traversal from `start` first visits
/// them, stopping as soon as `end` is dequeued. If `end` is unreachable
/// the order covers every node reached from `start`.
pub fn bfs_visit_order<G: GraphViewOps>(graph: &G, start: NodeId, end: NodeId) -> Result<Vec<NodeId>> {
    check_endpoints(graph, start, end)?;

    let mut discovered: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order = Vec::new();

    discovered.insert(start);
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        if v == end {
            break;
        }
        for &w in graph.neighbours(v) {
            if discovered.insert(w) {
                queue.push_back(w);
            }
        }
    }
    Ok(order)
}

/// The minimum-hop path from `start` to `end`, inclusive of both.
///
/// Runs breadth-first from `start` recording the predecessor edge that
/// first reached each node, then backtracks from `end` and reverses.
/// `start == end` yields `[start]`. Fails with
/// [`GraphError::UnreachableNode`] when no predecessor chain connects the
/// two.
pub fn shortest_path<G: GraphViewOps>(graph: &G, start: NodeId, end: NodeId) -> Result<Vec<NodeId>> {
    check_endpoints(graph, start, end)?;
    if start == end {
        return Ok(vec![start]);
    }

    let mut predecessor: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut this_level: Vec<NodeId> = Vec::new();
    let mut next_level: Vec<NodeId> = vec![start];

    'search: while !next_level.is_empty() {
        mem::swap(&mut this_level, &mut next_level);
        next_level.clear();
        for &v in this_level.iter() {
            for &w in graph.neighbours(v) {
                if w != start && !predecessor.contains_key(&w) {
                    predecessor.insert(w, v);
                    if w == end {
                        break 'search;
                    }
                    next_level.push(w);
                }
            }
        }
    }

    if !predecessor.contains_key(&end) {
        return Err(GraphError::UnreachableNode { start, end });
    }
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = predecessor[&current];
        path.push(current);
    }
    path.reverse();
    Ok(path)
}

fn check_endpoints<G: GraphViewOps>(graph: &G, start: NodeId, end: NodeId) -> Result<()> {
    if !graph.has_node(start) {
        return Err(GraphError::NodeNotFound(start));
    }
    if !graph.has_node(end) {
        return Err(GraphError::NodeNotFound(end));
    }
    Ok(())
}

#[cfg(test)]
mod bfs_tests {
    use super::*;
    use crate::graph::Graph;
    use pretty_assertions::assert_eq;

    fn path_graph() -> Graph {
        let mut g = Graph::new();
        g.add_edges_from([(1, 2), (2, 3), (3, 4), (4, 5)]);
        g
    }

    #[test]
    fn shortest_path_on_a_path_graph() {
        let g = path_graph();
        assert_eq!(shortest_path(&g, 1, 5).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn shortest_path_prefers_fewer_hops() {
        let mut g = path_graph();
        g.add_edge(1, 4);
        assert_eq!(shortest_path(&g, 1, 5).unwrap(), vec![1, 4, 5]);
    }

    #[test]
    fn same_start_and_end() {
        let g = path_graph();
        assert_eq!(shortest_path(&g, 3, 3).unwrap(), vec![3]);
        assert_eq!(bfs_visit_order(&g, 3, 3).unwrap(), vec![3]);
    }

    #[test]
    fn unreachable_end_fails() {
        let mut g = path_graph();
        g.add_edge(10, 11);
        assert!(matches!(
            shortest_path(&g, 1, 10),
            Err(GraphError::UnreachableNode { start: 1, end: 10 })
        ));
    }

    #[test]
    fn visit_order_follows_neighbour_insertion_order() {
        let mut g = Graph::new();
        g.add_edges_from([(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (4, 7)]);
        assert_eq!(bfs_visit_order(&g, 1, 7).unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn visit_order_stops_at_end() {
        let mut g = Graph::new();
        g.add_edges_from([(1, 2), (1, 3), (1, 4), (2, 5)]);
        assert_eq!(bfs_visit_order(&g, 1, 3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn visit_order_exhausts_component_when_unreachable() {
        let mut g = path_graph();
        g.add_edge(10, 11);
        assert_eq!(bfs_visit_order(&g, 2, 10).unwrap(), vec![2, 1, 3, 4, 5]);
    }

    #[test]
    fn missing_endpoint_is_reported() {
        let g = path_graph();
        assert!(matches!(
            shortest_path(&g, 1, 42),
            Err(GraphError::NodeNotFound(42))
        ));
        assert!(matches!(
            bfs_visit_order(&g, 42, 1),
            Err(GraphError::NodeNotFound(42))
        ));
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = Graph::directed();
        g.add_edges_from([(1, 2), (2, 3)]);
        assert_eq!(shortest_path(&g, 1, 3).unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            shortest_path(&g, 3, 1),
            Err(GraphError::UnreachableNode { start: 3, end: 1 })
        ));
    }
}
