//! Statistical aggregation of repeated sampling trials.
//!
//! Each trial draws a fresh walk under the same configuration, reduces it
//! with the selected estimator, and the resulting statistics are folded
//! into a mean, a population variance and, when a ground-truth value is
//! supplied, a normalized mean-square error. Trials share nothing but the
//! read-only graph view, so they run in parallel under rayon; results are
//! combined only after every trial completes.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::algorithms::sampling::aggregation::random_walk_aggregation;
//! use graph_sampling::algorithms::sampling::estimator::EstimatorMode;
//! use graph_sampling::algorithms::sampling::random_walk::WalkConfig;
//! use graph_sampling::graphgen::complete_graph::complete_graph;
//!
//! let g = complete_graph(6);
//! let config = WalkConfig::new().steps(50).metropolized(true);
//! let result = random_walk_aggregation(
//!     &g,
//!     &config,
//!     EstimatorMode::VisitedNodes,
//!     20,
//!     Some(1.0),
//!     Some(42),
//! )
//! .unwrap();
//! assert_eq!(result.average, 1.0);
//! assert_eq!(result.variance, 0.0);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    algorithms::sampling::{
        estimator::{estimate, EstimatorMode},
        random_walk::{random_walk, WalkConfig},
    },
    errors::{GraphError, Result},
    graph::GraphViewOps,
};

/// Summary of one aggregation run.
///
/// `variance` is the population variance of the per-trial statistics
/// (denominator = number of trials). `nmse` is present only when a
/// ground-truth value was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub average: f64,
    pub variance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nmse: Option<f64>,
}

/// Run `trials` independent sampling trials and aggregate the statistics.
///
/// Every trial starts a fresh walk from the same start node (drawn once,
/// uniformly, when `config.start` is unset) with an independent random
/// stream: trial `i` is seeded `seed + 1 + i` when a base seed is given,
/// otherwise from entropy. `true_value` enables the NMSE column,
/// `sqrt(mean((true_value - statistic)^2)) / true_value`.
///
/// Fails with [`GraphError::InvalidArgument`] unless `trials >= 1` and the
/// walk is bounded by at least one step, and with
/// [`GraphError::InvalidGroundTruth`] when `true_value` is zero. Trial
/// failures are not retried; the first error aborts the aggregation.
pub fn random_walk_aggregation<G>(
    graph: &G,
    config: &WalkConfig,
    mode: EstimatorMode,
    trials: usize,
    true_value: Option<f64>,
    seed: Option<u64>,
) -> Result<AggregateResult>
where
    G: GraphViewOps + Sync,
{
    if trials < 1 {
        return Err(GraphError::InvalidArgument(
            "trial count must be at least 1".to_string(),
        ));
    }
    match config.steps {
        Some(steps) if steps >= 1 => {}
        Some(_) => {
            return Err(GraphError::InvalidArgument(
                "sample size must be at least 1".to_string(),
            ))
        }
        None => {
            return Err(GraphError::InvalidArgument(
                "aggregation requires a bounded sample size".to_string(),
            ))
        }
    }
    if true_value == Some(0.0) {
        return Err(GraphError::InvalidGroundTruth);
    }

    let mut config = config.clone();
    if config.start.is_none() {
        let nodes = graph.nodes();
        if nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        config.start = Some(nodes[rng.gen_range(0..nodes.len())]);
    }
    debug!(
        trials,
        strategy = ?config.strategy,
        start = config.start,
        "running sampling trials"
    );

    let statistics: Vec<f64> = (0..trials as u64)
        .into_par_iter()
        .map(|trial| {
            let trial_seed = seed.map(|s| s.wrapping_add(1).wrapping_add(trial));
            let walk = random_walk(graph, &config, trial_seed)?;
            estimate(graph, mode, walk)
        })
        .collect::<Result<_>>()?;

    let n = statistics.len() as f64;
    let average = statistics.iter().sum::<f64>() / n;
    let variance = statistics
        .iter()
        .map(|statistic| (statistic - average).powi(2))
        .sum::<f64>()
        / n;
    let nmse = true_value.map(|truth| {
        let mean_square = statistics
            .iter()
            .map(|statistic| (truth - statistic).powi(2))
            .sum::<f64>()
            / n;
        mean_square.sqrt() / truth
    });

    Ok(AggregateResult {
        average,
        variance,
        nmse,
    })
}
