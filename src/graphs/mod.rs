use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, GraphResult};

use self::{
    edge::WeightedEdge,
    edge_store::{EdgeStore, OutEdgeIterator},
};

pub mod edge;
pub mod edge_store;
pub mod graph_factory;

pub type VertexId = u32;
pub type Weight = f64;

/// Default upper bound on vertex ids when loading edge lists.
pub const MAX_NODES: u32 = 5000;

/// Directed weighted graph over the dense vertex ids `[0, number_of_vertices)`.
///
/// The topology is never touched by a search, all per-run state lives in a
/// separate [`RunState`](crate::search::run_state::RunState). A graph can
/// therefore be shared between threads that query it concurrently.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Graph {
    node_bound: u32,
    edges: EdgeStore,
}

impl Graph {
    /// Creates a graph with the vertices `[0, number_of_vertices)` already
    /// registered. No further vertices can be added.
    pub fn new(number_of_vertices: u32) -> Graph {
        debug!(number_of_vertices, "creating graph");
        Graph {
            node_bound: number_of_vertices,
            edges: EdgeStore::new(number_of_vertices),
        }
    }

    /// Creates an empty graph that grows as vertices below `node_bound` are
    /// registered.
    pub fn with_node_bound(node_bound: u32) -> Graph {
        Graph {
            node_bound,
            edges: EdgeStore::default(),
        }
    }

    pub fn node_bound(&self) -> u32 {
        self.node_bound
    }

    /// Registers `vertex`, and with it every smaller id.
    ///
    /// Returns `false` if the vertex was already registered.
    pub fn add_node(&mut self, vertex: VertexId) -> GraphResult<bool> {
        self.check_node_bound(vertex)?;

        if self.contains(vertex) {
            return Ok(false);
        }

        self.edges.ensure_vertex(vertex);
        Ok(true)
    }

    /// Appends the directed edge `tail -> head`. Both endpoints have to be
    /// registered and the weight has to be finite.
    pub fn add_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> GraphResult<()> {
        self.validate_vertex(tail)?;
        self.validate_vertex(head)?;
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight { weight });
        }

        self.edges.push(&WeightedEdge::new(tail, head, weight));
        Ok(())
    }

    /// Registers every vertex below the node bound.
    pub fn register_all(&mut self) {
        if let Some(last) = self.node_bound.checked_sub(1) {
            self.edges.ensure_vertex(last);
        }
    }

    /// Checks that `vertex` could be registered, without registering it.
    pub fn check_node_bound(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex >= self.node_bound {
            return Err(GraphError::InvalidNode {
                vertex,
                number_of_vertices: self.node_bound,
            });
        }
        Ok(())
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.number_of_vertices()
    }

    pub fn validate_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if !self.contains(vertex) {
            return Err(GraphError::InvalidNode {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        Ok(())
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.edges.number_of_vertices()
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.number_of_edges()
    }

    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.number_of_vertices()
    }

    pub fn out_edges(&self, tail: VertexId) -> OutEdgeIterator<'_> {
        self.edges.out_edges(tail)
    }

    /// Weight of the cheapest edge `tail -> head`, if there is one.
    pub fn get_weight(&self, tail: VertexId, head: VertexId) -> Option<Weight> {
        self.out_edges(tail)
            .filter(|edge| edge.head() == head)
            .map(|edge| edge.weight())
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Sums the cheapest edge of every hop. Returns `None` if some hop is
    /// not an edge of the graph.
    pub fn get_path_weight(&self, vertices: &[VertexId]) -> Option<Weight> {
        let mut weight = 0.0;
        for (&tail, &head) in vertices.iter().tuple_windows() {
            weight += self.get_weight(tail, head)?;
        }
        Some(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::error::GraphError;

    #[test]
    fn add_edge_rejects_out_of_range_head() {
        let mut graph = Graph::new(3);
        let result = graph.add_edge(0, 3, 1.0);

        assert!(matches!(
            result,
            Err(GraphError::InvalidNode { vertex: 3, .. })
        ));
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn add_edge_rejects_non_finite_weight() {
        let mut graph = Graph::new(2);
        assert!(matches!(
            graph.add_edge(0, 1, f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(graph.add_edge(0, 1, f64::INFINITY).is_err());
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::with_node_bound(10);
        assert!(graph.add_node(4).unwrap());
        assert!(!graph.add_node(4).unwrap());
        assert!(!graph.add_node(2).unwrap());
        assert_eq!(graph.number_of_vertices(), 5);
    }

    #[test]
    fn add_node_respects_bound() {
        let mut graph = Graph::with_node_bound(10);
        assert_eq!(graph.node_bound(), 10);
        assert!(graph.add_node(10).is_err());
        assert_eq!(graph.number_of_vertices(), 0);
    }

    #[test]
    fn register_all_fills_up_to_bound() {
        let mut graph = Graph::with_node_bound(6);
        graph.add_node(2).unwrap();
        graph.register_all();
        assert_eq!(graph.number_of_vertices(), 6);
        assert!(graph.check_node_bound(5).is_ok());
        assert!(graph.check_node_bound(6).is_err());

        let mut empty = Graph::with_node_bound(0);
        empty.register_all();
        assert_eq!(empty.number_of_vertices(), 0);
    }

    #[test]
    fn path_weight_uses_cheapest_parallel_edge() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 4.0).unwrap();
        graph.add_edge(0, 1, 2.5).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();

        assert_eq!(graph.get_path_weight(&[0, 1, 2]), Some(3.5));
        assert_eq!(graph.get_path_weight(&[0]), Some(0.0));
        assert_eq!(graph.get_path_weight(&[2, 0]), None);
    }
}
