use std::{io, path::PathBuf};

use crate::graph::NodeId;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Walk reached node {0} which has no neighbours")]
    DegenerateGraph(NodeId),
    #[error("No path connects {start} to {end}")]
    UnreachableNode { start: NodeId, end: NodeId },
    #[error("Cannot estimate over an empty node sequence")]
    EmptySequence,
    #[error("Ground truth value must be non-zero")]
    InvalidGroundTruth,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),
    #[error("Graph has no nodes")]
    EmptyGraph,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed edge list entry at {path}:{line}: {text:?}")]
    MalformedEdgeList {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
