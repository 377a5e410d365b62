//! Random-walk sampling: node-sequence production, per-sequence
//! estimation and multi-trial aggregation.

pub mod aggregation;
pub mod estimator;
pub mod random_walk;
