//! Path-finding between nodes.

pub mod bfs;
