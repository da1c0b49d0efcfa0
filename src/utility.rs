use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::Level;

use crate::{
    error::GraphResult,
    graphs::Graph,
    search::{
        dijkstra::Dijkstra, path::ShortestPathRequest, run_state::RunState,
        selection::SelectionStrategy,
    },
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} eta: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Random requests between vertices of the graph. Returns an empty list for
/// a graph without vertices.
pub fn gen_requests<R: Rng>(
    graph: &Graph,
    number_of_requests: u32,
    rng: &mut R,
) -> Vec<ShortestPathRequest> {
    if graph.number_of_vertices() == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            ShortestPathRequest::new(
                rng.gen_range(graph.vertices()),
                rng.gen_range(graph.vertices()),
            )
        })
        .collect()
}

/// Answers all requests in parallel and returns the average duration of a
/// single search. Each rayon job owns its run state, the graph is shared.
pub fn benchmark(
    graph: &Graph,
    requests: &[ShortestPathRequest],
    strategy: SelectionStrategy,
) -> GraphResult<Duration> {
    if requests.is_empty() {
        return Ok(Duration::ZERO);
    }

    let dijkstra = Dijkstra::new(graph).with_strategy(strategy);
    let bar = get_progressbar(&format!("{:?}", strategy), requests.len() as u64);

    let durations = requests
        .par_iter()
        .progress_with(bar)
        .map_init(
            || RunState::new(graph.number_of_vertices(), 0),
            |state, request| -> GraphResult<Duration> {
                let start = Instant::now();
                dijkstra.single_source_with(state, request.source)?;
                Ok(start.elapsed())
            },
        )
        .collect::<GraphResult<Vec<_>>>()?;

    Ok(durations.iter().sum::<Duration>() / durations.len() as u32)
}

/// Installs a stderr subscriber. No flag shows warnings, `-v` info and
/// `-vv` debug output.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{benchmark, gen_requests};
    use crate::{graphs::Graph, search::selection::SelectionStrategy};

    #[test]
    fn requests_stay_inside_graph() {
        let graph = Graph::new(5);
        let mut rng = StdRng::seed_from_u64(1);

        let requests = gen_requests(&graph, 50, &mut rng);
        assert_eq!(requests.len(), 50);
        assert!(requests
            .iter()
            .all(|request| graph.contains(request.source) && graph.contains(request.target)));
    }

    #[test]
    fn empty_graph_has_no_requests() {
        let graph = Graph::new(0);
        let mut rng = StdRng::seed_from_u64(1);

        let requests = gen_requests(&graph, 10, &mut rng);
        assert!(requests.is_empty());
        assert!(benchmark(&graph, &requests, SelectionStrategy::LinearScan).is_ok());
    }
}
