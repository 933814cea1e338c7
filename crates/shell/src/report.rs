//! Human- and machine-readable output of a run.

use std::{
    fmt::{self, Display, Write as _},
    io::Write as _,
    path::Path,
    time::Duration,
};

use distances::{number::Float, Number};
use serde::Serialize;
use tikni::{classify, dataset_row, io::Labels, RunReport};

/// One neighbor of one query, as written to the CSV table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborRow {
    /// The query's row in the sample file.
    pub query: usize,
    /// The query's record id.
    pub query_id: i64,
    /// 1-based rank of the neighbor.
    pub rank: usize,
    /// The neighbor's record id.
    pub neighbor_id: i64,
    /// The distance between the query and the neighbor.
    pub distance: f64,
    /// The neighbor's class, or empty if it has none.
    pub label: String,
}

/// Lists the records of a dataset, one per line.
pub fn listing<I: Display>(title: &str, records: &[I], id_of: impl Fn(usize) -> i64) -> Result<String, String> {
    let mut out = String::new();
    write_listing(&mut out, title, records, id_of).map_err(|e| e.to_string())?;
    Ok(out)
}

fn write_listing<I: Display>(
    out: &mut String,
    title: &str,
    records: &[I],
    id_of: impl Fn(usize) -> i64,
) -> fmt::Result {
    writeln!(out, "{title}:")?;
    for (row, record) in records.iter().enumerate() {
        writeln!(out, "{row}\t<{}> {record}", id_of(row))?;
    }
    Ok(())
}

/// Renders the neighbors, class votes and comparison counts of every query.
///
/// With `talkative`, each neighbor line also shows the neighbor's features.
pub fn render<I: Display, T: Float>(
    dataset: &[I],
    queries: &[I],
    report: &RunReport<T>,
    labels: &Labels,
    talkative: bool,
) -> Result<String, String> {
    let mut out = String::new();
    write_report(&mut out, dataset, queries, report, labels, talkative).map_err(|e| e.to_string())?;
    Ok(out)
}

fn write_report<I: Display, T: Float>(
    out: &mut String,
    dataset: &[I],
    queries: &[I],
    report: &RunReport<T>,
    labels: &Labels,
    talkative: bool,
) -> fmt::Result {
    writeln!(out, "Results\nObject:")?;
    if talkative {
        writeln!(out, "\tDist:\t<NN id> & NN parameters & NN classes:")?;
    } else {
        writeln!(out, "\tDist:\t<NN id> & NN classes:")?;
    }

    let mut skipped = report.skipped.iter().peekable();
    for (i, hood) in &report.results {
        while let Some((j, e)) = skipped.next_if(|(j, _)| j < i) {
            write_skipped(out, *j, queries, e)?;
        }

        writeln!(out, "{i}# {}", display_at(queries, *i))?;
        for neighbor in &hood.neighbors {
            let label = labels.get(neighbor.id).unwrap_or("");
            if talkative {
                let features = dataset_row(neighbor.id).map_or_else(String::new, |row| display_at(dataset, row));
                writeln!(out, "\t{}\t<{}> {features}\t{label}", neighbor.distance, neighbor.id)?;
            } else {
                writeln!(out, "\t{}\t<{}>\t{label}", neighbor.distance, neighbor.id)?;
            }
        }

        let tally = classify::neighbor_tally(hood, labels);
        writeln!(out, "Occurrences of neighbours' classes: ")?;
        for (label, count) in &tally {
            writeln!(out, "{label} {count}")?;
        }
        writeln!(out, "Chosen class: {}", classify::majority_vote(&tally).unwrap_or("?"))?;
        writeln!(out, "Number of comparisons: {}\n", hood.comparisons)?;
    }
    for (j, e) in skipped {
        write_skipped(out, *j, queries, e)?;
    }

    Ok(())
}

/// Writes the entry of a query that failed under the skip policy.
fn write_skipped<I: Display>(out: &mut String, i: usize, queries: &[I], e: &tikni::Error) -> fmt::Result {
    writeln!(out, "{i}# {}\nSkipped: {e}\n", display_at(queries, i))
}

/// The displayed record at row `i`, or an empty string if there is none.
fn display_at<I: Display>(records: &[I], i: usize) -> String {
    records.get(i).map_or_else(String::new, ToString::to_string)
}

/// Flattens the neighborhoods into one row per neighbor.
pub fn neighbor_rows<T: Float>(report: &RunReport<T>, labels: &Labels) -> Vec<NeighborRow> {
    report
        .results
        .iter()
        .flat_map(|(query, hood)| {
            hood.neighbors.iter().enumerate().map(move |(rank, neighbor)| NeighborRow {
                query: *query,
                query_id: hood.query_id,
                rank: rank + 1,
                neighbor_id: neighbor.id,
                distance: neighbor.distance.as_f64(),
                label: labels.get(neighbor.id).unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Writes the neighbor table to a `.csv` file with a header.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[NeighborRow]) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(&path).map_err(|e| format!("{:?}: {e}", path.as_ref()))?;
    for row in rows {
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Overwrites the file with the rendered results.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<(), String> {
    std::fs::write(&path, text).map_err(|e| format!("{:?}: {e}", path.as_ref()))
}

/// The timing lines printed after a run.
pub fn timings(load: Duration, algorithm: Duration) -> String {
    format!(
        "Data loaded in: {:.6} s\nAlgorithm processed in: {:.6} s\n",
        load.as_secs_f64(),
        algorithm.as_secs_f64()
    )
}

/// Appends the timing lines to the output file.
pub fn append_timings<P: AsRef<Path>>(path: P, load: Duration, algorithm: Duration) -> Result<(), String> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .map_err(|e| format!("{:?}: {e}", path.as_ref()))?;
    file.write_all(timings(load, algorithm).as_bytes())
        .map_err(|e| e.to_string())
}
