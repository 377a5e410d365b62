//! Exact whole-graph metrics: clustering coefficients and degree
//! statistics. These are the ground truths the samplers estimate.

pub mod clustering_coefficient;
pub mod degree;
