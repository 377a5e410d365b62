//! Edge-list file loader.
//!
//! The format is the one SNAP-style datasets ship in: one edge per line,
//! two whitespace-separated integer node tokens, `#`-prefixed comment
//! lines and blank lines ignored. Files ending in `.gz` are decompressed
//! transparently.
//!
//! # Examples
//!
//! ```no_run
//! use graph_sampling::graph::GraphViewOps;
//! use graph_sampling::graph_loader::edge_list::load_edge_list;
//!
//! let g = load_edge_list("data/input/com-amazon.ungraph.txt", false).unwrap();
//! println!("{} nodes, {} edges", g.count_nodes(), g.count_edges());
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::GzDecoder;
use tracing::info;

use crate::{
    errors::{GraphError, Result},
    graph::{Graph, GraphViewOps, NodeId},
};

/// Read an edge list from `path` into a new graph, undirected unless
/// `directed` is set. Extra tokens after the first two are ignored.
pub fn load_edge_list<P: AsRef<Path>>(path: P, directed: bool) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut graph = if directed {
        Graph::directed()
    } else {
        Graph::new()
    };
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let malformed = || GraphError::MalformedEdgeList {
            path: path.to_path_buf(),
            line: line_no + 1,
            text: text.to_string(),
        };
        let mut tokens = text.split_whitespace();
        let (src, dst) = match (tokens.next(), tokens.next()) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Err(malformed()),
        };
        let src: NodeId = src.parse().map_err(|_| malformed())?;
        let dst: NodeId = dst.parse().map_err(|_| malformed())?;
        graph.add_edge(src, dst);
    }
    info!(
        "loaded {} nodes and {} edges from {}",
        graph.count_nodes(),
        graph.count_edges(),
        path.display()
    );
    Ok(graph)
}
