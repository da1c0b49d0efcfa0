use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use scan_paths::{
    graphs::graph_factory::LoaderConfig,
    reading_graph,
    search::{dijkstra::Dijkstra, selection::SelectionStrategy, PathFinding},
    utility::{benchmark, gen_requests, get_progressspinner, init_logging},
    FileType,
};

/// Runs random queries with every selection strategy in parallel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(short, long)]
    graph: PathBuf,

    /// Type of the input file
    #[arg(short = 't', long, value_enum, default_value = "csv")]
    file_type: FileType,

    /// Number of queries to be run
    #[arg(short, long, default_value_t = 100)]
    number_of_requests: u32,

    /// Seed for the random queries
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the queries and their distances as json
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let spinner = get_progressspinner("reading graph");
    let (graph, _) = reading_graph(&args.graph, &args.file_type, &LoaderConfig::default())
        .with_context(|| format!("unable to read {}", args.graph.display()))?;
    spinner.finish_and_clear();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(thread_rng())?,
    };
    let requests = gen_requests(&graph, args.number_of_requests, &mut rng);

    println!("Value over {} parallel searches", requests.len());
    for strategy in [SelectionStrategy::LinearScan, SelectionStrategy::BinaryHeap] {
        let average_duration = benchmark(&graph, &requests, strategy)?;
        println!("Average {:?} duration is {:?}", strategy, average_duration);
    }

    let linear = Dijkstra::new(&graph);
    let heap = Dijkstra::new(&graph).with_strategy(SelectionStrategy::BinaryHeap);
    let mut results = Vec::with_capacity(requests.len());
    for request in &requests {
        let linear_result = linear.shortest_path(request)?;
        if linear_result != heap.shortest_path(request)? {
            bail!("strategies disagree on {:?}", request);
        }
        results.push((request, linear_result));
    }
    println!("Both strategies agree on all {} queries", results.len());

    if let Some(out) = &args.out {
        let writer = BufWriter::new(
            File::create(out).with_context(|| format!("unable to create {}", out.display()))?,
        );
        serde_json::to_writer(writer, &results)?;
    }

    Ok(())
}
