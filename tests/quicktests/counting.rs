use dedup_bst::OrderedCountingSet;
use quickcheck_macros::quickcheck;

use std::collections::BTreeMap;

use crate::Crowded;

fn occurrences(xs: &[i32]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for &x in xs {
        *counts.entry(x).or_insert(0) += 1;
    }

    counts
}

#[quickcheck]
fn counts_match_occurrences(Crowded(xs): Crowded) -> bool {
    let set = OrderedCountingSet::build_from(xs.iter().copied()).unwrap();

    set.iter().eq(occurrences(&xs))
}

#[quickcheck]
fn duplicates_are_values_seen_more_than_once(Crowded(xs): Crowded) -> bool {
    let set = OrderedCountingSet::build_from(xs.iter().copied()).unwrap();
    let expected = occurrences(&xs).into_iter().filter(|&(_, n)| n > 1);

    set.duplicates().eq(expected)
}

#[quickcheck]
fn unique_are_values_seen_once(Crowded(xs): Crowded) -> bool {
    let set = OrderedCountingSet::build_from(xs.iter().copied()).unwrap();
    let expected = occurrences(&xs)
        .into_iter()
        .filter(|&(_, n)| n == 1)
        .map(|(x, _)| x);

    set.unique().eq(expected)
}

#[quickcheck]
fn total_counts_every_insert(xs: Vec<i32>) -> bool {
    let set = OrderedCountingSet::build_from(xs.iter().copied()).unwrap();

    set.total() == xs.len() && set.iter().map(|(_, n)| n).sum::<usize>() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let set = OrderedCountingSet::build_from(xs.iter().copied()).unwrap();

    xs.iter().all(|&x| set.contains(x) && set.count(x) > 0)
}

#[quickcheck]
fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
    let set = OrderedCountingSet::build_from(xs.iter().copied()).unwrap();

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|&x| !set.contains(x) && set.count(x) == 0)
}
