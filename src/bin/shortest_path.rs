use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{anyhow, Context};
use clap::Parser;
use scan_paths::{
    graphs::{graph_factory::LoaderConfig, VertexId, MAX_NODES},
    reading_graph,
    search::{
        dijkstra::Dijkstra,
        path::{PathResult, ShortestPathRequest},
        selection::SelectionStrategy,
        PathFinding,
    },
    utility::{get_progressspinner, init_logging},
    FileType,
};

/// Reads an edge list and prints a shortest path between two vertices.
///
/// Vertices that are not given on the command line are asked for on stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(short, long, default_value = "DataSet.csv")]
    graph: PathBuf,

    /// Type of the input file
    #[arg(short = 't', long, value_enum, default_value = "csv")]
    file_type: FileType,

    /// Start vertex
    #[arg(short, long)]
    start: Option<VertexId>,

    /// End vertex
    #[arg(short, long)]
    end: Option<VertexId>,

    /// How the next vertex is selected
    #[arg(long, value_enum, default_value = "linear-scan")]
    strategy: SelectionStrategy,

    /// Vertex ids have to be smaller than this bound
    #[arg(short, long, default_value_t = MAX_NODES)]
    node_bound: u32,

    /// The first line of the input is an edge, not a header
    #[arg(long)]
    no_header: bool,

    /// Abort on the first malformed row
    #[arg(long)]
    strict: bool,

    /// Treat negative weights as malformed rows
    #[arg(long)]
    reject_negative_weights: bool,

    /// Print the result as json
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = LoaderConfig {
        has_header: !args.no_header,
        node_bound: args.node_bound,
        strict: args.strict,
        reject_negative_weights: args.reject_negative_weights,
    };

    let spinner = get_progressspinner("reading graph");
    let (graph, _) = reading_graph(&args.graph, &args.file_type, &config)
        .with_context(|| format!("unable to read {}", args.graph.display()))?;
    spinner.finish_and_clear();

    let mut stdin = io::stdin().lock();
    let source = match args.start {
        Some(start) => start,
        None => prompt_vertex(&mut stdin, "Enter the start node ID: ")?,
    };
    let target = match args.end {
        Some(end) => end,
        None => prompt_vertex(&mut stdin, "Enter the end node ID: ")?,
    };

    let request = ShortestPathRequest::new(source, target);
    let result = Dijkstra::new(&graph)
        .with_strategy(args.strategy)
        .shortest_path(&request)?;

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    match result {
        PathResult::Found(path) => {
            println!("Shortest Path from {} to {}: {}", source, target, path);
            println!("Shortest Distance: {:.2}", path.distance);
        }
        PathResult::Unreachable => {
            println!("No path from {} to {}", source, target);
        }
    }

    Ok(())
}

fn prompt_vertex(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<VertexId> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("no vertex given"));
    }
    line.trim()
        .parse()
        .with_context(|| format!("'{}' is not a vertex id", line.trim()))
}
