//! Loading graphs from on-disk datasets.

pub mod edge_list;
