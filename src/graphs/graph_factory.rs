use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Graph, VertexId, Weight, MAX_NODES};
use crate::error::{GraphError, GraphResult};

/// Settings for reading edge lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Skip the first line of the input.
    pub has_header: bool,
    /// Vertex ids have to be smaller than this bound.
    pub node_bound: u32,
    /// Abort on the first bad row instead of skipping it.
    pub strict: bool,
    pub reject_negative_weights: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            has_header: true,
            node_bound: MAX_NODES,
            strict: false,
            reject_negative_weights: false,
        }
    }
}

/// A row that did not make it into the graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoadReport {
    pub rows: usize,
    pub edges_added: usize,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_csv_file(path: &Path, config: &LoaderConfig) -> GraphResult<(Graph, LoadReport)> {
        let file = File::open(path)?;
        info!(path = %path.display(), "reading edge list");
        Self::from_csv_reader(BufReader::new(file), config)
    }

    /// Reads `source,destination,weight` rows. Bad rows are logged and
    /// skipped unless `config.strict` is set, io errors always abort.
    pub fn from_csv_reader<R: BufRead>(
        reader: R,
        config: &LoaderConfig,
    ) -> GraphResult<(Graph, LoadReport)> {
        let mut graph = Graph::with_node_bound(config.node_bound);
        let mut report = LoadReport::default();

        let mut lines = reader.lines().enumerate();
        if config.has_header {
            if let Some((_, header)) = lines.next() {
                let header = header?;
                debug!(%header, "skipping header");
            }
        }

        for (index, line) in lines {
            let line = line?;
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            report.rows += 1;

            let result = parse_row(&line, line_number, config)
                .and_then(|(tail, head, weight)| insert_row(&mut graph, tail, head, weight));

            match result {
                Ok(()) => report.edges_added += 1,
                Err(error) if config.strict => return Err(error),
                Err(error) => {
                    warn!(line = line_number, %error, "skipping row");
                    report.skipped.push(SkippedRow {
                        line: line_number,
                        reason: error.to_string(),
                    });
                }
            }
        }

        // every id below the bound is a vertex, mentioned by an edge or not
        graph.register_all();

        info!(
            vertices = graph.number_of_vertices(),
            edges = report.edges_added,
            skipped = report.skipped.len(),
            "edge list read"
        );

        Ok((graph, report))
    }

    pub fn from_bincode_file(path: &Path) -> GraphResult<Graph> {
        let reader = BufReader::new(File::open(path)?);
        let graph: Graph = bincode::deserialize_from(reader)?;
        Ok(graph)
    }

    pub fn to_bincode_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, graph)?;
        Ok(())
    }
}

fn parse_row(
    line: &str,
    line_number: usize,
    config: &LoaderConfig,
) -> GraphResult<(VertexId, VertexId, Weight)> {
    let malformed = |reason: String| GraphError::MalformedInput {
        line: line_number,
        reason,
    };

    let values: Vec<&str> = line.split(',').map(str::trim).collect();
    if values.len() != 3 {
        return Err(malformed(format!(
            "expected 3 fields, found {}",
            values.len()
        )));
    }

    let tail: VertexId = values[0]
        .parse()
        .map_err(|_| malformed(format!("unable to parse source '{}'", values[0])))?;
    let head: VertexId = values[1]
        .parse()
        .map_err(|_| malformed(format!("unable to parse destination '{}'", values[1])))?;
    let weight: Weight = values[2]
        .parse()
        .map_err(|_| malformed(format!("unable to parse weight '{}'", values[2])))?;

    if config.reject_negative_weights && weight < 0.0 {
        return Err(GraphError::InvalidWeight { weight });
    }

    Ok((tail, head, weight))
}

fn insert_row(
    graph: &mut Graph,
    tail: VertexId,
    head: VertexId,
    weight: Weight,
) -> GraphResult<()> {
    graph.check_node_bound(tail)?;
    graph.check_node_bound(head)?;
    graph.add_node(tail)?;
    graph.add_node(head)?;
    graph.add_edge(tail, head, weight)
}

#[cfg(test)]
mod tests {
    use super::{insert_row, parse_row, LoaderConfig};
    use crate::{error::GraphError, graphs::Graph};

    #[test]
    fn rejected_row_registers_nothing() {
        let mut graph = Graph::with_node_bound(5);
        insert_row(&mut graph, 0, 1, 1.0).unwrap();

        assert!(insert_row(&mut graph, 3, 9, 1.0).is_err());
        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn parse_row_trims_fields() {
        let config = LoaderConfig::default();
        let row = parse_row(" 1, 2 ,0.5\r", 2, &config).unwrap();
        assert_eq!(row, (1, 2, 0.5));
    }

    #[test]
    fn parse_row_rejects_missing_weight() {
        let config = LoaderConfig::default();
        assert!(matches!(
            parse_row("1,2,", 4, &config),
            Err(GraphError::MalformedInput { line: 4, .. })
        ));
        assert!(parse_row("1,2", 4, &config).is_err());
        assert!(parse_row("1,2,3,4", 4, &config).is_err());
        assert!(parse_row("a,2,3", 4, &config).is_err());
    }

    #[test]
    fn parse_row_negative_weight_policy() {
        let lenient = LoaderConfig::default();
        assert!(parse_row("0,1,-2", 2, &lenient).is_ok());

        let rejecting = LoaderConfig {
            reject_negative_weights: true,
            ..LoaderConfig::default()
        };
        assert!(matches!(
            parse_row("0,1,-2", 2, &rejecting),
            Err(GraphError::InvalidWeight { .. })
        ));
    }
}
