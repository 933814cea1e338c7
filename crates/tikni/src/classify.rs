//! Majority-vote classification of a query from its neighbors' labels.

use std::collections::BTreeMap;

use distances::number::Float;

use crate::{io::Labels, Neighborhood};

/// Counts the occurrences of each label, in ascending label order.
pub fn tally<'a, L: IntoIterator<Item = &'a str>>(labels: L) -> BTreeMap<String, usize> {
    labels.into_iter().fold(BTreeMap::new(), |mut counts, label| {
        *counts.entry(label.to_string()).or_insert(0) += 1;
        counts
    })
}

/// The label with the highest count.
///
/// Among equal counts, the label that comes first in the tally wins.
#[must_use]
pub fn majority_vote(tally: &BTreeMap<String, usize>) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (label, &count) in tally {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Tallies the labels of a query's neighbors.
///
/// Neighbors without a label are not counted.
pub fn neighbor_tally<T: Float>(hood: &Neighborhood<T>, labels: &Labels) -> BTreeMap<String, usize> {
    tally(hood.ids().filter_map(|id| labels.get(id)))
}

#[cfg(test)]
mod tests {
    use super::{majority_vote, tally};

    #[test]
    fn counts() {
        let t = tally(["b", "a", "b", "c"]);
        assert_eq!(t.into_iter().collect::<Vec<_>>(), vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 1)
        ]);
    }

    #[test]
    fn votes() {
        assert_eq!(majority_vote(&tally(["b", "a", "b"])), Some("b"));
        assert_eq!(majority_vote(&tally(["b", "a"])), Some("a"));
        assert_eq!(majority_vote(&tally(Vec::<&str>::new())), None);
    }
}
