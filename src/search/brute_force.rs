use crate::{
    error::GraphResult,
    graphs::{Graph, VertexId, Weight},
};

/// Shortest distance over all simple paths from `source` to `target`.
///
/// Exponential in the size of the graph, only meant as a reference for
/// small test graphs.
pub fn brute_force_distance(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> GraphResult<Option<Weight>> {
    graph.validate_vertex(source)?;
    graph.validate_vertex(target)?;

    let mut on_path = vec![false; graph.number_of_vertices() as usize];
    on_path[source as usize] = true;

    Ok(shortest_extension(graph, source, target, &mut on_path))
}

fn shortest_extension(
    graph: &Graph,
    current: VertexId,
    target: VertexId,
    on_path: &mut [bool],
) -> Option<Weight> {
    if current == target {
        return Some(0.0);
    }

    let mut best: Option<Weight> = None;
    for edge in graph.out_edges(current) {
        if on_path[edge.head() as usize] {
            continue;
        }

        on_path[edge.head() as usize] = true;
        if let Some(rest) = shortest_extension(graph, edge.head(), target, on_path) {
            let distance = edge.weight() + rest;
            if best.map_or(true, |best| distance < best) {
                best = Some(distance);
            }
        }
        on_path[edge.head() as usize] = false;
    }

    best
}
