use tracing::debug;

use super::{
    path::{reconstruct_path, PathResult, ShortestPathRequest},
    run_state::RunState,
    selection::SelectionStrategy,
    PathFinding,
};
use crate::{
    error::GraphResult,
    graphs::{Graph, VertexId},
};

/// Dijkstra's algorithm on a borrowed graph.
///
/// Every search works on its own [`RunState`], the graph itself is only
/// read, so a single `Dijkstra` can answer queries from several threads.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a Graph,
    strategy: SelectionStrategy,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> GraphResult<PathResult> {
        self.graph.validate_vertex(request.target)?;
        let state = self.single_source(request.source)?;
        reconstruct_path(&state, request.target)
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Dijkstra<'a> {
        Dijkstra {
            graph,
            strategy: SelectionStrategy::default(),
        }
    }

    pub fn with_strategy(self, strategy: SelectionStrategy) -> Dijkstra<'a> {
        Dijkstra { strategy, ..self }
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Distances and parents of all vertices reachable from `source`.
    pub fn single_source(&self, source: VertexId) -> GraphResult<RunState> {
        let mut state = RunState::new(self.graph.number_of_vertices(), source);
        self.single_source_with(&mut state, source)?;
        Ok(state)
    }

    /// Same as [`Dijkstra::single_source`] but reuses the allocation of
    /// `state`. Whatever the state held before is discarded.
    pub fn single_source_with(&self, state: &mut RunState, source: VertexId) -> GraphResult<()> {
        self.graph.validate_vertex(source)?;
        state.reset(self.graph.number_of_vertices(), source);

        let mut selection = self.strategy.selection();
        selection.push(source, 0.0);

        while let Some(tail) = selection.select(state) {
            state.visit(tail);

            for edge in self.graph.out_edges(tail) {
                if let Some(distance) = state.relax(&edge) {
                    selection.push(edge.head(), distance);
                }
            }
        }

        debug!(
            source,
            visited = state.number_of_visited(),
            strategy = ?self.strategy,
            "search finished"
        );

        Ok(())
    }
}
