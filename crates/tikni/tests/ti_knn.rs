//! Tests of the indexed search against brute force.

use test_case::test_case;

use tikni::{io::convert, Dense, Error, Heuristic, Metric, Minkowski, NeighborhoodIndex, SearchConfig, Sparse};

mod common;

fn dense(rows: Vec<Vec<f32>>) -> Vec<Dense<f32>> {
    convert::dense_features(rows)
}

#[test]
fn four_points() {
    let dataset = dense(common::data_gen::line(&[0.0, 1.0, 2.0, 5.0]));
    let query = Dense::new(vec![0.0, 0.0]);

    for heuristic in [Heuristic::Backward, Heuristic::Forward] {
        let config = SearchConfig::default().with_k(2).with_heuristic(heuristic);
        let mut index = NeighborhoodIndex::with_minkowski(dataset.clone(), config).unwrap();
        let hood = index.search_one(0, &query).unwrap();

        assert_eq!(hood.ids().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(hood.distances().collect::<Vec<_>>(), vec![0.0, 1.0]);
    }
}

#[test]
fn query_outside_dataset() {
    let dataset = dense(common::data_gen::line(&[1.0, 2.0, 5.0]));
    let query = Dense::new(vec![0.0, 0.0]);

    let config = SearchConfig::default().with_k(2).with_order(1);
    let mut index = NeighborhoodIndex::with_minkowski(dataset, config).unwrap();
    let hood = index.search_one(0, &query).unwrap();

    assert_eq!(hood.ids().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(hood.distances().collect::<Vec<_>>(), vec![1.0, 2.0]);
    assert_eq!(hood.eps, 2.0);
}

#[test]
fn sparse_distance() {
    let a = Sparse::new(vec![(1, 2.0_f32)]).unwrap();
    let b = Sparse::new(vec![(1, 2.0_f32), (2, 3.0)]).unwrap();
    let metric = Minkowski::new(1).unwrap();
    assert_eq!(metric.distance(&a, &b), Ok(3.0));
}

#[test_case(1, 1, Heuristic::Backward ; "k1_l1_backward")]
#[test_case(3, 2, Heuristic::Backward ; "k3_l2_backward")]
#[test_case(10, 2, Heuristic::Forward ; "k10_l2_forward")]
#[test_case(5, 3, Heuristic::Forward ; "k5_l3_forward")]
#[test_case(25, 1, Heuristic::Backward ; "k25_l1_backward")]
fn random_matches_brute_force(k: usize, order: i32, heuristic: Heuristic) {
    let dataset = dense(common::data_gen::tabular(200, 8, -10.0, 10.0, 42));
    let queries = dense(common::data_gen::tabular(20, 8, -10.0, 10.0, 7));

    let config = SearchConfig::default()
        .with_k(k)
        .with_order(order)
        .with_heuristic(heuristic);
    let (indexed, brute) = common::search::both(&dataset, &queries, &config);

    for (pred, truth) in indexed.iter().zip(brute.iter()) {
        assert_eq!(pred.len(), k);
        common::search::check_sorted(pred);
        common::search::check_by_id(pred, truth);
        assert!(pred.distance_calls <= dataset.len());
        assert_eq!(truth.comparisons, dataset.len());
    }
}

#[test_case(1, Heuristic::Backward ; "k1_backward")]
#[test_case(4, Heuristic::Backward ; "k4_backward")]
#[test_case(4, Heuristic::Forward ; "k4_forward")]
#[test_case(9, Heuristic::Forward ; "k9_forward")]
fn ties_on_a_grid(k: usize, heuristic: Heuristic) {
    let dataset = dense(common::data_gen::grid(5));
    let queries = dense(vec![vec![0.0, 0.0], vec![0.5, 0.5], vec![3.0, -2.0], vec![7.0, 7.0]]);

    // Taxicab distances on integer and half-integer points are exact in f32.
    let config = SearchConfig::default()
        .with_k(k)
        .with_order(1)
        .with_heuristic(heuristic);
    let (indexed, brute) = common::search::both(&dataset, &queries, &config);
    for (pred, truth) in indexed.iter().zip(brute.iter()) {
        assert_eq!(pred.len(), k);
        common::search::check_sorted(pred);
        common::search::check_by_distance(pred, truth);
    }

    let config = config.with_tie_inclusive(true);
    let (indexed, brute) = common::search::both(&dataset, &queries, &config);
    for (pred, truth) in indexed.iter().zip(brute.iter()) {
        assert!(pred.len() >= k);
        common::search::check_sorted(pred);
        common::search::check_by_id(pred, truth);

        let kth = pred.neighbors[k - 1].distance;
        assert!(pred.neighbors[k..].iter().all(|n| n.distance == kth));
    }
}

#[test]
fn k_larger_than_dataset() {
    let dataset = dense(common::data_gen::line(&[1.0, 2.0, 3.0]));
    let queries = dense(vec![vec![0.0, 0.0], vec![2.5, 0.0]]);

    for brute_force in [false, true] {
        let config = SearchConfig::default().with_k(10).with_brute_force(brute_force);
        let mut index = NeighborhoodIndex::with_minkowski(dataset.clone(), config).unwrap();
        let report = index.run(&queries).unwrap();
        for (_, hood) in &report.results {
            let mut ids = hood.ids().collect::<Vec<_>>();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }
}

#[test]
fn idempotent_runs() {
    let dataset = dense(common::data_gen::tabular(100, 4, 0.0, 1.0, 3));
    let queries = dense(common::data_gen::tabular(10, 4, 0.0, 1.0, 4));
    let config = SearchConfig::default().with_k(5);

    let mut index = NeighborhoodIndex::with_minkowski(dataset.clone(), config.clone()).unwrap();
    let first = index.run(&queries).unwrap();
    let again = index.run(&queries).unwrap();
    assert_eq!(first, again);

    let mut fresh = NeighborhoodIndex::with_minkowski(dataset, config).unwrap();
    assert_eq!(first, fresh.run(&queries).unwrap());
}

#[test]
fn index_is_restored() {
    let dataset = dense(common::data_gen::tabular(50, 3, -1.0, 1.0, 11));
    let queries = dense(common::data_gen::tabular(5, 3, -1.0, 1.0, 12));
    let mut index = NeighborhoodIndex::with_minkowski(dataset, SearchConfig::default()).unwrap();

    let before = index.index().records().to_vec();
    index.run(&queries).unwrap();
    assert_eq!(index.index().records(), before.as_slice());
}

#[test_case(1 ; "l1")]
#[test_case(2 ; "l2")]
fn dense_and_sparse_agree(order: i32) {
    let rows = common::data_gen::sparse_tabular(80, 12, 5);
    let query_rows = common::data_gen::sparse_tabular(10, 12, 6);
    let config = SearchConfig::default().with_k(4).with_order(order);

    let mut dense_index = NeighborhoodIndex::with_minkowski(dense(rows.clone()), config.clone()).unwrap();
    let dense_report = dense_index.run(&dense(query_rows.clone())).unwrap();

    let sparse_rows = convert::sparse_features(convert::to_sparse(&rows)).unwrap();
    let sparse_queries = convert::sparse_features(convert::to_sparse(&query_rows)).unwrap();
    let mut sparse_index = NeighborhoodIndex::with_minkowski(sparse_rows, config).unwrap();
    let sparse_report = sparse_index.run(&sparse_queries).unwrap();

    assert_eq!(dense_report, sparse_report);
}

#[test]
fn mismatched_query() {
    let dataset = dense(common::data_gen::line(&[1.0, 2.0]));
    for brute_force in [false, true] {
        let config = SearchConfig::default().with_k(1).with_brute_force(brute_force);
        let mut index = NeighborhoodIndex::with_minkowski(dataset.clone(), config).unwrap();
        let result = index.search_one(0, &Dense::new(vec![1.0, 2.0, 3.0]));
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
        assert_eq!(index.index().len(), 2);
    }
}
