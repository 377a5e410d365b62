//! # graph-sampling
//!
//! Estimation of structural graph properties - primarily the clustering
//! coefficient and the degree distribution - by sampling a small connected
//! subset of a large graph instead of computing over the whole of it.
//!
//! The pipeline: a [`GraphViewOps`](graph::GraphViewOps) view supplies
//! read-only topology, a [random walk](algorithms::sampling::random_walk)
//! (plain or Metropolis-Hastings corrected) produces a lazy node sequence,
//! an [estimator](algorithms::sampling::estimator) reduces the sequence to
//! one scalar, and the [aggregation
//! layer](algorithms::sampling::aggregation) repeats that over many
//! independently seeded trials to report mean, variance and normalized
//! error against a known ground truth. Breadth-first
//! [pathing](algorithms::pathing) and the exact
//! [metrics](algorithms::metrics) round out the toolkit.
//!
//! # Examples
//!
//! ```no_run
//! use graph_sampling::prelude::*;
//!
//! fn main() -> graph_sampling::errors::Result<()> {
//!     let g = load_edge_list("data/input/com-amazon.ungraph.txt", false)?;
//!     let config = WalkConfig::new().steps(10_000).metropolized(true);
//!     let result = random_walk_aggregation(
//!         &g,
//!         &config,
//!         EstimatorMode::VisitedNodes,
//!         100,
//!         Some(0.3967),
//!         None,
//!     )?;
//!     println!(
//!         "average: {}, variance: {}, nmse: {:?}",
//!         result.average, result.variance, result.nmse
//!     );
//!     Ok(())
//! }
//! ```

pub mod algorithms;
pub mod errors;
pub mod graph;
pub mod graph_loader;
pub mod graphgen;

pub mod prelude {
    pub use crate::{
        algorithms::{
            metrics::{
                clustering_coefficient::{
                    average_clustering_coefficient, local_clustering_coefficient,
                },
                degree::{average_degree, degree_distribution, max_degree, min_degree},
            },
            pathing::bfs::{bfs_visit_order, shortest_path},
            sampling::{
                aggregation::{random_walk_aggregation, AggregateResult},
                estimator::{
                    path_clustering_coefficient, sampled_clustering_coefficient, EstimatorMode,
                },
                random_walk::{random_walk, RandomWalk, WalkConfig, WalkStrategy},
            },
        },
        errors::GraphError,
        graph::{Graph, GraphViewOps, NodeId},
        graph_loader::edge_list::load_edge_list,
        graphgen::{
            complete_graph::complete_graph, preferential_attachment::ba_preferential_attachment,
        },
    };
}
