use std::{cmp::Ordering, collections::BinaryHeap};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::run_state::RunState;
use crate::graphs::{VertexId, Weight};

/// How the next vertex to settle is picked. Both strategies settle vertices
/// in the same order: smallest distance first, lowest id on ties.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// Scans all vertices, O(V²) overall.
    #[default]
    LinearScan,
    /// Lazy binary heap, O((V + E) log V) overall.
    BinaryHeap,
}

impl SelectionStrategy {
    pub fn selection(&self) -> Box<dyn VertexSelection> {
        match self {
            SelectionStrategy::LinearScan => Box::new(LinearScan {}),
            SelectionStrategy::BinaryHeap => Box::new(HeapSelection::default()),
        }
    }
}

pub trait VertexSelection {
    /// Called whenever the distance of `vertex` was lowered to `distance`.
    fn push(&mut self, vertex: VertexId, distance: Weight);

    /// Next unvisited vertex with minimal finite distance, `None` if every
    /// remaining vertex is unreached.
    fn select(&mut self, state: &RunState) -> Option<VertexId>;
}

pub struct LinearScan {}

impl VertexSelection for LinearScan {
    fn push(&mut self, _vertex: VertexId, _distance: Weight) {}

    fn select(&mut self, state: &RunState) -> Option<VertexId> {
        let mut min: Option<(VertexId, Weight)> = None;

        for (vertex, entry) in state.entries().iter().enumerate() {
            if entry.is_visited {
                continue;
            }
            let Some(distance) = entry.distance else {
                continue;
            };
            // strict comparison keeps the lowest id on ties
            if min.map_or(true, |(_, min_distance)| distance < min_distance) {
                min = Some((vertex as VertexId, distance));
            }
        }

        min.map(|(vertex, _)| vertex)
    }
}

#[derive(Clone, Copy, PartialEq)]
struct HeapElement {
    distance: Weight,
    vertex: VertexId,
}

impl Eq for HeapElement {}

// BinaryHeap is a max-heap, so both keys are flipped: the smallest distance
// and, among equal distances, the smallest vertex id is popped first.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
pub struct HeapSelection {
    heap: BinaryHeap<HeapElement>,
}

impl VertexSelection for HeapSelection {
    fn push(&mut self, vertex: VertexId, distance: Weight) {
        self.heap.push(HeapElement { distance, vertex });
    }

    fn select(&mut self, state: &RunState) -> Option<VertexId> {
        // Outdated elements of an unvisited vertex carry a larger distance
        // than its current one, so they only surface after it was visited.
        while let Some(HeapElement { vertex, .. }) = self.heap.pop() {
            if !state.is_visited(vertex) {
                return Some(vertex);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionStrategy;
    use crate::{graphs::edge::WeightedEdge, search::run_state::RunState};

    fn tied_state() -> RunState {
        let mut state = RunState::new(4, 3);
        state.visit(3);
        for head in [2, 0, 1] {
            state.relax(&WeightedEdge::new(3, head, 1.0));
        }
        state
    }

    #[test]
    fn ties_go_to_lowest_id() {
        for strategy in [SelectionStrategy::LinearScan, SelectionStrategy::BinaryHeap] {
            let mut state = tied_state();
            let mut selection = strategy.selection();
            for head in [2, 0, 1] {
                selection.push(head, 1.0);
            }

            let mut order = Vec::new();
            while let Some(vertex) = selection.select(&state) {
                state.visit(vertex);
                order.push(vertex);
            }
            assert_eq!(order, vec![0, 1, 2], "{:?}", strategy);
        }
    }

    #[test]
    fn unreached_vertices_are_never_selected() {
        let mut state = RunState::new(3, 0);
        state.visit(0);

        let mut selection = SelectionStrategy::LinearScan.selection();
        assert_eq!(selection.select(&state), None);
    }
}
