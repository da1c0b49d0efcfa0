use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use scan_paths::{
    graphs::graph_factory::{GraphFactory, LoaderConfig},
    utility::{get_progressspinner, init_logging},
};

/// Reading a .bincode file is way faster than parsing an edge list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .csv format
    #[arg(short = 'c', long)]
    graph_csv: PathBuf,

    /// Outfile in .bincode format
    #[arg(short = 'b', long)]
    graph_bincode: PathBuf,

    /// Vertex ids have to be smaller than this bound
    #[arg(short, long, default_value_t = LoaderConfig::default().node_bound)]
    node_bound: u32,

    /// Abort on the first malformed row
    #[arg(long)]
    strict: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = LoaderConfig {
        node_bound: args.node_bound,
        strict: args.strict,
        ..LoaderConfig::default()
    };

    let start = Instant::now();
    let spinner = get_progressspinner("reading edge list");
    let (graph, report) = GraphFactory::from_csv_file(&args.graph_csv, &config)
        .with_context(|| format!("unable to read {}", args.graph_csv.display()))?;
    spinner.finish_and_clear();
    println!(
        "Reading csv graph took {:?} ({} edges, {} rows skipped)",
        start.elapsed(),
        report.edges_added,
        report.skipped.len()
    );

    let start = Instant::now();
    GraphFactory::to_bincode_file(&graph, &args.graph_bincode)
        .with_context(|| format!("unable to write {}", args.graph_bincode.display()))?;
    println!("Writing bincode took {:?}", start.elapsed());

    Ok(())
}
