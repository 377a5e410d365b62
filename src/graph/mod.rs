pub mod graph;
pub mod view;

pub use graph::{Graph, NodeId};
pub use view::GraphViewOps;
