use crate::{
    error::GraphResult,
    graphs::{VertexId, Weight},
};

use self::path::{PathResult, ShortestPathRequest};

pub mod brute_force;
pub mod dijkstra;
pub mod path;
pub mod run_state;
pub mod selection;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, request: &ShortestPathRequest) -> GraphResult<PathResult>;

    fn shortest_path_distance(
        &self,
        request: &ShortestPathRequest,
    ) -> GraphResult<Option<Weight>> {
        Ok(self.shortest_path(request)?.distance())
    }

    fn shortest_path_between(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> GraphResult<PathResult> {
        self.shortest_path(&ShortestPathRequest::new(source, target))
    }
}
