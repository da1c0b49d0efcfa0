use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::run_state::RunState;
use crate::{
    error::{GraphError, GraphResult},
    graphs::{VertexId, Weight},
};

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: VertexId,
    pub target: VertexId,
}

impl ShortestPathRequest {
    pub fn new(source: VertexId, target: VertexId) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }
}

/// Vertices of a path from source to target and its total weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Weight,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" "))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathResult {
    Found(Path),
    Unreachable,
}

impl PathResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::Unreachable => None,
        }
    }

    pub fn distance(&self) -> Option<Weight> {
        self.path().map(|path| path.distance)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}

/// Traces the parent links from `target` back to the source of the search.
pub fn reconstruct_path(state: &RunState, target: VertexId) -> GraphResult<PathResult> {
    let Some(distance) = state.entry(target)?.distance else {
        return Ok(PathResult::Unreachable);
    };

    let mut vertices = vec![target];
    let mut current = target;
    while let Some(parent) = state.parent(current) {
        // a simple path can not be longer than the number of vertices
        if vertices.len() >= state.number_of_vertices() as usize {
            return Err(GraphError::ParentCycle { vertex: target });
        }
        current = parent;
        vertices.push(current);
    }
    vertices.reverse();

    Ok(PathResult::Found(Path { vertices, distance }))
}
