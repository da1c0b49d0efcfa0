use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessWeightedEdge, WeightedEdge},
    VertexId,
};

/// Adjacency lists indexed by tail vertex.
///
/// Parallel edges are kept as they are, every one of them takes part in a
/// search.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
pub struct EdgeStore {
    edges: Vec<Vec<TaillessWeightedEdge>>,
}

impl EdgeStore {
    pub fn new(number_of_vertices: u32) -> EdgeStore {
        EdgeStore {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.iter().map(|edges| edges.len() as u32).sum()
    }

    /// Grows the store so that `vertex` gets an (empty) adjacency list.
    pub fn ensure_vertex(&mut self, vertex: VertexId) {
        if vertex as usize >= self.edges.len() {
            self.edges.resize(vertex as usize + 1, Vec::new());
        }
    }

    /// Appends the edge to the adjacency list of its tail. The caller has to
    /// make sure both endpoints are known to the store.
    pub fn push(&mut self, edge: &WeightedEdge) {
        self.edges[edge.tail() as usize].push(edge.tailless());
    }

    pub fn out_edges(&self, tail: VertexId) -> OutEdgeIterator<'_> {
        let tailless_edge_iterator = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.iter())
            .unwrap_or_default();

        OutEdgeIterator {
            tail,
            tailless_edge_iterator,
        }
    }
}

pub struct OutEdgeIterator<'a> {
    tail: VertexId,
    tailless_edge_iterator: Iter<'a, TaillessWeightedEdge>,
}

impl<'a> Iterator for OutEdgeIterator<'a> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.tailless_edge_iterator.next()?;
        Some(edge.set_tail(self.tail))
    }
}

impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
    fn len(&self) -> usize {
        self.tailless_edge_iterator.len()
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeStore;
    use crate::graphs::edge::WeightedEdge;

    #[test]
    fn parallel_edges_are_kept() {
        let mut store = EdgeStore::new(2);
        store.push(&WeightedEdge::new(0, 1, 3.0));
        store.push(&WeightedEdge::new(0, 1, 1.5));

        let weights: Vec<_> = store.out_edges(0).map(|edge| edge.weight()).collect();
        assert_eq!(weights, vec![3.0, 1.5]);
        assert_eq!(store.number_of_edges(), 2);
    }

    #[test]
    fn ensure_vertex_grows_store() {
        let mut store = EdgeStore::default();
        store.ensure_vertex(4);
        assert_eq!(store.number_of_vertices(), 5);

        store.ensure_vertex(2);
        assert_eq!(store.number_of_vertices(), 5);
    }

    #[test]
    fn unknown_tail_has_no_edges() {
        let store = EdgeStore::new(1);
        assert_eq!(store.out_edges(7).len(), 0);
    }
}
