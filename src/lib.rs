use std::path::Path;

use clap::ValueEnum;
use graphs::{
    graph_factory::{GraphFactory, LoadReport, LoaderConfig},
    Graph,
};

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Edge list with a header and `source,destination,weight` rows
    Csv,
    /// Graph snapshot written by `csv_to_bincode`
    Bincode,
}

/// Reads a graph in the given format. Snapshots carry no load report, an
/// empty one is returned for them.
pub fn reading_graph(
    path: &Path,
    file_type: &FileType,
    config: &LoaderConfig,
) -> error::GraphResult<(Graph, LoadReport)> {
    match file_type {
        FileType::Csv => GraphFactory::from_csv_file(path, config),
        FileType::Bincode => {
            let graph = GraphFactory::from_bincode_file(path)?;
            Ok((graph, LoadReport::default()))
        }
    }
}
