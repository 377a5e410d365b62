//! Synthetic graph generators, mostly used to exercise the samplers
//! against graphs with known structure.

pub mod complete_graph;
pub mod preferential_attachment;
