use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn tailless(&self) -> TaillessWeightedEdge {
        TaillessWeightedEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// An edge as it is stored in the adjacency list of its tail.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct TaillessWeightedEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessWeightedEdge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge::new(tail, self.head, self.weight)
    }
}
