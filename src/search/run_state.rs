use serde::{Deserialize, Serialize};

use crate::{
    error::{GraphError, GraphResult},
    graphs::{edge::WeightedEdge, VertexId, Weight},
};

/// Per-vertex state of a single search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Best known distance from the source, `None` while unreached.
    pub distance: Option<Weight>,
    /// Tail of the edge that produced `distance`.
    pub parent: Option<VertexId>,
    pub is_visited: bool,
}

/// Distances and parent links of one single-source search.
///
/// The state is owned by the caller, so any number of searches can run on
/// the same graph at once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    source: VertexId,
    entries: Vec<RunEntry>,
}

impl RunState {
    pub fn new(number_of_vertices: u32, source: VertexId) -> RunState {
        let mut state = RunState {
            source,
            entries: Vec::new(),
        };
        state.reset(number_of_vertices, source);
        state
    }

    /// Forgets everything of a previous search and starts over at `source`.
    pub fn reset(&mut self, number_of_vertices: u32, source: VertexId) {
        self.entries.clear();
        self.entries
            .resize(number_of_vertices as usize, RunEntry::default());
        self.source = source;
        if let Some(entry) = self.entries.get_mut(source as usize) {
            entry.distance = Some(0.0);
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn entry(&self, vertex: VertexId) -> GraphResult<&RunEntry> {
        self.entries
            .get(vertex as usize)
            .ok_or(GraphError::InvalidNode {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            })
    }

    pub fn entries(&self) -> &[RunEntry] {
        &self.entries
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.entries.get(vertex as usize)?.distance
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.entries.get(vertex as usize)?.parent
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.entries
            .get(vertex as usize)
            .map_or(false, |entry| entry.is_visited)
    }

    pub(crate) fn visit(&mut self, vertex: VertexId) {
        if let Some(entry) = self.entries.get_mut(vertex as usize) {
            entry.is_visited = true;
        }
    }

    /// Lowers the distance of the edge's head if going over the tail is
    /// strictly shorter. Distance and parent always change together.
    ///
    /// Returns the new distance of the head if it was lowered.
    /// A sum that overflows to infinity leaves the head unreached.
    pub(crate) fn relax(&mut self, edge: &WeightedEdge) -> Option<Weight> {
        let alternative_distance = self.distance(edge.tail())? + edge.weight();
        if !alternative_distance.is_finite() {
            return None;
        }

        let head = self.entries.get_mut(edge.head() as usize)?;
        if head
            .distance
            .map_or(true, |current_distance| alternative_distance < current_distance)
        {
            head.distance = Some(alternative_distance);
            head.parent = Some(edge.tail());
            return Some(alternative_distance);
        }

        None
    }

    /// Number of vertices that were settled, the search space size.
    pub fn number_of_visited(&self) -> u32 {
        self.entries.iter().filter(|entry| entry.is_visited).count() as u32
    }

    pub fn reachable_vertices(&self) -> Vec<VertexId> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.distance.is_some())
            .map(|(vertex, _)| vertex as VertexId)
            .collect()
    }
}
