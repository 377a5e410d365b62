//! Random-walk node samplers.
//!
//! A walk starts at `start` (or a node drawn uniformly from the graph when
//! unset) and yields one visited node per step, lazily. Three transition
//! rules are available:
//!
//! - [`WalkStrategy::Uniform`] moves to a uniformly random neighbour. The
//!   stationary distribution is degree-biased.
//! - [`WalkStrategy::MetropolisHastings`] proposes a uniformly random
//!   neighbour and accepts it with probability
//!   `min(1, deg(current) / deg(candidate))`, otherwise staying put. The
//!   correction removes the degree bias, making the long-run visitation
//!   frequency approximately uniform over nodes.
//! - [`WalkStrategy::DegreeProposal`] accepts the proposed neighbour with
//!   probability `min(1, deg(current)^2 / sum of neighbour degrees)`.
//!
//! A rejected proposal re-yields the current node and still consumes one
//! step, so a bounded walk always yields exactly `steps` elements.
//!
//! # Examples
//!
//! ```
//! use graph_sampling::algorithms::sampling::random_walk::{random_walk, WalkConfig};
//! use graph_sampling::graphgen::complete_graph::complete_graph;
//!
//! let g = complete_graph(10);
//! let config = WalkConfig::new().start(0).steps(40).metropolized(true);
//! let nodes: Result<Vec<_>, _> = random_walk(&g, &config, Some(7)).unwrap().collect();
//! assert_eq!(nodes.unwrap().len(), 40);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    errors::{GraphError, Result},
    graph::{GraphViewOps, NodeId},
};

/// Transition rule applied at every step of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkStrategy {
    /// Uniformly random neighbour.
    #[default]
    Uniform,
    /// Metropolis-Hastings degree correction.
    MetropolisHastings,
    /// Acceptance proportional to `deg(current)^2 / sum of neighbour degrees`.
    DegreeProposal,
}

/// Configuration of a walk: where to start, how many steps to take, and
/// which transition rule to use.
///
/// `steps: None` means unbounded; the caller stops consuming explicitly.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    pub start: Option<NodeId>,
    pub steps: Option<usize>,
    pub strategy: WalkStrategy,
}

impl WalkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, v: NodeId) -> Self {
        self.start = Some(v);
        self
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn strategy(mut self, strategy: WalkStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Select between the plain rule and the Metropolis-Hastings rule.
    pub fn metropolized(mut self, metropolized: bool) -> Self {
        self.strategy = if metropolized {
            WalkStrategy::MetropolisHastings
        } else {
            WalkStrategy::Uniform
        };
        self
    }
}

/// Start a walk over `graph`.
///
/// With `seed: Some(s)` the walk is fully deterministic; with `None` it
/// draws from entropy. Each call is an independent sequence: walks are
/// restartable, not resumable.
///
/// Fails up front with [`GraphError::NodeNotFound`] if the configured start
/// node is absent, or [`GraphError::EmptyGraph`] if a random start is
/// requested on an empty graph.
pub fn random_walk<'a, G: GraphViewOps>(
    graph: &'a G,
    config: &WalkConfig,
    seed: Option<u64>,
) -> Result<RandomWalk<'a, G>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let current = match config.start {
        Some(v) if graph.has_node(v) => v,
        Some(v) => return Err(GraphError::NodeNotFound(v)),
        None => {
            let nodes = graph.nodes();
            if nodes.is_empty() {
                return Err(GraphError::EmptyGraph);
            }
            nodes[rng.gen_range(0..nodes.len())]
        }
    };
    Ok(RandomWalk {
        graph,
        rng,
        strategy: config.strategy,
        current,
        remaining: config.steps,
        done: false,
    })
}

/// Lazy sequence of visited nodes. The start node itself is not yielded;
/// every `next()` performs exactly one transition.
///
/// Yields `Err` once and then fuses if the walk reaches a node with no
/// neighbours.
pub struct RandomWalk<'a, G> {
    graph: &'a G,
    rng: StdRng,
    strategy: WalkStrategy,
    current: NodeId,
    remaining: Option<usize>,
    done: bool,
}

impl<G: GraphViewOps> RandomWalk<'_, G> {
    fn step(&mut self) -> Result<NodeId> {
        let neighbours = self.graph.neighbours(self.current);
        if neighbours.is_empty() {
            return Err(GraphError::DegenerateGraph(self.current));
        }
        let candidate = neighbours[self.rng.gen_range(0..neighbours.len())];
        match self.strategy {
            WalkStrategy::Uniform => Ok(candidate),
            WalkStrategy::MetropolisHastings => {
                let candidate_degree = self.graph.degree(candidate);
                if candidate_degree == 0 {
                    return Err(GraphError::DegenerateGraph(candidate));
                }
                let ratio = self.graph.degree(self.current) as f64 / candidate_degree as f64;
                if self.rng.gen::<f64>() < ratio {
                    Ok(candidate)
                } else {
                    Ok(self.current)
                }
            }
            WalkStrategy::DegreeProposal => {
                let degree = self.graph.degree(self.current);
                let neighbour_degrees: usize =
                    neighbours.iter().map(|&w| self.graph.degree(w)).sum();
                if neighbour_degrees == 0 {
                    return Err(GraphError::DegenerateGraph(candidate));
                }
                let ratio = (degree * degree) as f64 / neighbour_degrees as f64;
                if self.rng.gen::<f64>() < ratio {
                    Ok(candidate)
                } else {
                    Ok(self.current)
                }
            }
        }
    }
}

impl<G: GraphViewOps> Iterator for RandomWalk<'_, G> {
    type Item = Result<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                self.done = true;
                return None;
            }
            *remaining -= 1;
        }
        match self.step() {
            Ok(v) => {
                self.current = v;
                Some(Ok(v))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
