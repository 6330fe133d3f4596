use log::{debug, trace};

use crate::algorithm::{SearchEvent, ShortestPathAlgorithm, ShortestPathResult};
use crate::cost::EdgeCost;
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a `(distance, vertex)` ordered frontier
///
/// Once a vertex is extracted from the frontier its distance is final. When
/// two candidates share a distance the smaller vertex index is settled first,
/// so repeated runs record identical predecessor chains.
///
/// Edge costs are expected to be non-negative. Negative costs are not
/// rejected, but the resulting tables are then meaningless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths into caller-supplied tables
    ///
    /// Both slices must hold exactly `graph.vertex_count()` entries. The
    /// arguments are validated before anything is written, so on error the
    /// tables are left untouched.
    pub fn compute_into<W, G>(
        &self,
        graph: &G,
        source: usize,
        distances: &mut [Option<W>],
        predecessors: &mut [Option<usize>],
    ) -> Result<()>
    where
        W: EdgeCost,
        G: Graph<W>,
    {
        self.search(graph, source, distances, predecessors, |_| {})
    }

    /// Computes shortest paths, reporting every settle and relaxation to `observer`
    pub fn compute_observed<W, G, F>(
        &self,
        graph: &G,
        source: usize,
        observer: F,
    ) -> Result<ShortestPathResult<W>>
    where
        W: EdgeCost,
        G: Graph<W>,
        F: FnMut(SearchEvent<W>),
    {
        let n = graph.vertex_count();
        let mut distances = vec![None; n];
        let mut predecessors = vec![None; n];

        self.search(graph, source, &mut distances, &mut predecessors, observer)?;

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }

    fn search<W, G, F>(
        &self,
        graph: &G,
        source: usize,
        distances: &mut [Option<W>],
        predecessors: &mut [Option<usize>],
        mut observer: F,
    ) -> Result<()>
    where
        W: EdgeCost,
        G: Graph<W>,
        F: FnMut(SearchEvent<W>),
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidSource {
                vertex: source,
                vertex_count: n,
            });
        }
        if distances.len() != n || predecessors.len() != n {
            return Err(Error::TableLengthMismatch {
                expected: n,
                distances: distances.len(),
                predecessors: predecessors.len(),
            });
        }

        // Every vertex starts unreached, the source costs nothing to reach
        distances.fill(None);
        predecessors.fill(None);
        distances[source] = Some(W::zero());

        let mut frontier = Frontier::new(n);
        frontier.upsert(source, W::zero());

        let mut settled = 0usize;
        let mut relaxations = 0usize;

        while let Some((u, dist_u)) = frontier.extract_min() {
            settled += 1;
            observer(SearchEvent::Settled {
                vertex: u,
                distance: dist_u,
            });

            for (v, cost) in graph.outgoing_edges(u) {
                // An unrepresentable sum exceeds every stored distance
                let Some(candidate) = dist_u.checked_sum(cost) else {
                    if distances[v].is_some() {
                        continue;
                    }
                    return Err(Error::CostOverflow { from: u, to: v });
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    relaxations += 1;
                    trace!("relax {} -> {}: {:?} -> {:?}", u, v, distances[v], candidate);
                    observer(SearchEvent::Relaxed {
                        vertex: v,
                        via: u,
                        previous: distances[v],
                        distance: candidate,
                    });

                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.upsert(v, candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {}: settled {} of {} vertices with {} relaxations",
            source, settled, n, relaxations
        );

        Ok(())
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: EdgeCost,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_observed(graph, source, |_| {})
    }
}
