//! Common functions for checking search results.

use tikni::{Features, Minkowski, Neighborhood, NeighborhoodIndex, SearchConfig};

/// Runs the same queries with the index and with brute force.
pub fn both<I: Features>(
    dataset: &[I],
    queries: &[I],
    config: &SearchConfig,
) -> (Vec<Neighborhood<f32>>, Vec<Neighborhood<f32>>)
where
    Minkowski: tikni::Metric<I, f32>,
{
    let run = |brute_force: bool| {
        let config = config.clone().with_brute_force(brute_force);
        let mut index = NeighborhoodIndex::with_minkowski(dataset.to_vec(), config).unwrap();
        let report = index.run(queries).unwrap();
        assert!(report.skipped.is_empty());
        report.results.into_iter().map(|(_, h)| h).collect::<Vec<_>>()
    };
    (run(false), run(true))
}

/// Checks that a neighborhood is sorted by distance.
pub fn check_sorted(hood: &Neighborhood<f32>) {
    let distances = hood.distances().collect::<Vec<_>>();
    assert!(
        distances.windows(2).all(|w| w[0] <= w[1]),
        "Query {}: unsorted {distances:?}",
        hood.query_id
    );
}

/// Checks that two neighborhoods hold the same ids with the same distances.
pub fn check_by_id(pred: &Neighborhood<f32>, truth: &Neighborhood<f32>) {
    let mut p = pred.neighbors.iter().map(|n| (n.id, n.distance)).collect::<Vec<_>>();
    let mut t = truth.neighbors.iter().map(|n| (n.id, n.distance)).collect::<Vec<_>>();
    p.sort_by_key(|&(id, _)| id);
    t.sort_by_key(|&(id, _)| id);
    assert_eq!(p, t, "Query {}: ids differ", pred.query_id);
}

/// Checks that two neighborhoods hold the same distances, ignoring which of
/// several tied records were chosen.
pub fn check_by_distance(pred: &Neighborhood<f32>, truth: &Neighborhood<f32>) {
    let p = pred.distances().collect::<Vec<_>>();
    let t = truth.distances().collect::<Vec<_>>();
    assert_eq!(p, t, "Query {}: distances differ", pred.query_id);
}
