//! Graph algorithms: exact metrics, breadth-first pathing and the
//! random-walk sampling pipeline.
//!
//! The sampling flow is graph view -> walk -> estimator -> aggregation:
//!
//! ```
//! use graph_sampling::prelude::*;
//!
//! let g = complete_graph(8);
//! let config = WalkConfig::new().steps(100).metropolized(true);
//! let truth = average_clustering_coefficient(&g);
//! let result = random_walk_aggregation(
//!     &g,
//!     &config,
//!     EstimatorMode::VisitedNodes,
//!     50,
//!     Some(truth),
//!     Some(1),
//! )
//! .unwrap();
//! println!("estimate {} +/- {}", result.average, result.variance.sqrt());
//! ```

pub mod metrics;
pub mod pathing;
pub mod sampling;
