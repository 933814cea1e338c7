//! CLI for exact k-nearest-neighbor search with the TI-k-Neighborhood-Index.

mod data;
mod logger;
mod report;

use std::{fmt::Display, path::PathBuf, time::Instant};

use clap::Parser;
use ftlog::LevelFilter;
use tikni::{
    dataset_id, io::Labels, query_id, ErrorPolicy, Features, Heuristic, Metric, Minkowski, NeighborhoodIndex,
    SearchConfig,
};

use data::ShellData;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dataset file (dense `.csv` or sparse text).
    #[arg(short('D'), long)]
    dataset: Option<PathBuf>,

    /// File with the query vectors, in the same format as the dataset.
    #[arg(short('S'), long)]
    sample: Option<PathBuf>,

    /// File with one class label per dataset record.
    #[arg(short('d'), long)]
    decision: Option<PathBuf>,

    /// 1-based column of the dataset file holding the class labels.
    #[arg(short('n'), long)]
    decision_column: Option<usize>,

    /// The number of neighbors to find.
    #[arg(short('k'), long, default_value_t = 3)]
    k: usize,

    /// The order of the Minkowski distance.
    #[arg(short('m'), long, default_value_t = 2, allow_negative_numbers = true)]
    metric: i32,

    /// Keep every record tied with the k-th neighbor.
    #[arg(short('p'), long)]
    k_plus: bool,

    /// Compare each query against every record.
    #[arg(short('b'), long)]
    brute_force: bool,

    /// Prefer the larger anchor gap and verify forward first.
    #[arg(short('f'), long)]
    forward: bool,

    /// Read the input files as sparse vectors.
    #[arg(short('s'), long)]
    sparse: bool,

    /// Search in the other representation than the one read.
    #[arg(short('c'), long)]
    convert: bool,

    /// Show the features of every neighbor.
    #[arg(short('t'), long)]
    talkative: bool,

    /// Do not print the report to the terminal.
    #[arg(short('o'), long)]
    quiet: bool,

    /// The file the report is written to.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Optional `.csv` file for a table of all neighbors.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip queries that fail instead of stopping.
    #[arg(long)]
    skip_errors: bool,

    /// Log every query.
    #[arg(long)]
    verbose: bool,
}

impl Args {
    /// Builds the search configuration, clamping an invalid metric order to 2.
    fn config(&self) -> SearchConfig {
        let order = if self.metric <= 0 {
            ftlog::warn!("Minkowski order {} is not positive; using 2.", self.metric);
            println!("Metric order must be positive, using 2 instead of {}.", self.metric);
            2
        } else {
            self.metric
        };

        SearchConfig::default()
            .with_k(self.k)
            .with_order(order)
            .with_tie_inclusive(self.k_plus)
            .with_heuristic(if self.forward {
                Heuristic::Forward
            } else {
                Heuristic::Backward
            })
            .with_brute_force(self.brute_force)
            .with_on_error(if self.skip_errors {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            })
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let (_guard, log_path) = logger::configure_logger("tikni", level)?;
    println!("Log file: {log_path:?}");
    ftlog::info!("{args:?}");

    let config = args.config();

    let start = Instant::now();
    let paths = data::Paths::resolve(
        args.dataset.clone(),
        args.sample.clone(),
        args.decision.clone(),
        args.sparse,
    );
    let (data, labels) = data::load(&paths, args.decision_column, args.sparse, args.convert)?;
    let load_time = start.elapsed();
    let (n, m) = data.sizes();
    ftlog::info!("Loaded {n} records and {m} queries in {:.6} s.", load_time.as_secs_f64());

    let algorithm_time = match data {
        ShellData::Dense { dataset, queries } => run(dataset, &queries, config, &labels, &args)?,
        ShellData::Sparse { dataset, queries } => run(dataset, &queries, config, &labels, &args)?,
    };

    if !args.quiet {
        print!("{}", report::timings(load_time, algorithm_time));
    }
    report::append_timings(&args.output, load_time, algorithm_time)?;

    Ok(())
}

/// Searches all queries and writes the report.
///
/// Returns the time taken by the index construction and the search.
fn run<I: Features + Display>(
    dataset: Vec<I>,
    queries: &[I],
    config: SearchConfig,
    labels: &Labels,
    args: &Args,
) -> Result<std::time::Duration, String>
where
    Minkowski: Metric<I, f32>,
{
    if !args.quiet {
        print!("{}", report::listing("Dataset", &dataset, dataset_id)?);
        print!("{}", report::listing("Samples", queries, query_id)?);
    }

    let start = Instant::now();
    let mut index =
        NeighborhoodIndex::<I, f32, Minkowski>::with_minkowski(dataset.clone(), config).map_err(|e| e.to_string())?;
    let results = index.run(queries).map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    println!(
        "{} queries answered with {} comparisons and {} distance calls.",
        results.results.len(),
        results.total_comparisons(),
        results.total_distance_calls()
    );
    if !results.skipped.is_empty() {
        println!("{} queries were skipped; see {:?}.", results.skipped.len(), args.output);
    }

    let text = report::render(&dataset, queries, &results, labels, args.talkative)?;
    if !args.quiet {
        print!("{text}");
    }
    report::write_output(&args.output, &text)?;

    if let Some(path) = &args.csv {
        report::write_csv(path, &report::neighbor_rows(&results, labels))?;
        ftlog::info!("Wrote the neighbor table to {path:?}.");
    }

    Ok(elapsed)
}
