use crate::algorithm::path;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm bound to one graph, with reusable scratch arrays.
///
/// Each call to [`run`](DijkstraEngine::run) resets the distance and
/// predecessor arrays and computes them for a new source. Running once per
/// origin and reading many targets from the same run is the intended use.
#[derive(Debug)]
pub struct DijkstraEngine<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'g G,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
    frontier: Frontier<W>,
    source: Option<usize>,
}

impl<'g, W, G> DijkstraEngine<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Creates an engine for `graph`; no source has been run yet
    pub fn new(graph: &'g G) -> Self {
        let n = graph.vertex_count();
        DijkstraEngine {
            graph,
            distances: vec![None; n],
            predecessors: vec![None; n],
            frontier: Frontier::with_capacity(n),
            source: None,
        }
    }

    /// Computes distances and predecessors from `source` to every vertex
    pub fn run(&mut self, source: usize) -> Result<()> {
        if !self.graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        self.distances.fill(None);
        self.predecessors.fill(None);
        self.frontier.clear();
        self.source = Some(source);

        self.distances[source] = Some(W::zero());
        self.frontier.push(source, W::zero());

        while let Some((u, dist_u)) = self.frontier.pop() {
            // Stale entry: u was settled with a smaller distance
            if let Some(current_dist) = self.distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for (v, weight) in self.graph.outgoing_edges(u) {
                // A sum past the range of W cannot be a shortest distance
                let Some(new_dist) = dist_u.checked_sum(weight) else {
                    continue;
                };

                // Strict comparison: on ties the first predecessor found stays
                let should_update = match self.distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    self.distances[v] = Some(new_dist);
                    self.predecessors[v] = Some(u);
                    self.frontier.push(v, new_dist);
                }
            }
        }

        Ok(())
    }

    /// Source of the last run
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Distance from the last source to `target`, `None` if unreachable
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Shortest path from the last source to `target`.
    ///
    /// `None` if no run happened yet, the target is unreachable, or the
    /// target is the source itself.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        let source = self.source?;
        self.distance(target)?;
        path::shortest_path(&self.predecessors, source, target)
    }
}

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let mut engine = DijkstraEngine::new(graph);
        engine.run(source)?;

        Ok(ShortestPathResult {
            distances: engine.distances,
            predecessors: engine.predecessors,
            source,
        })
    }
}
