use dedup_bst::filters;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Crowded;

#[quickcheck]
fn tree_keeps_first_occurrences_in_order(Crowded(xs): Crowded) -> bool {
    let kept = filters::tree(&xs).unwrap();
    let mut seen = HashSet::new();
    let expected = xs.iter().copied().filter(|&x| seen.insert(x)).collect::<Vec<_>>();

    kept == expected
}

#[quickcheck]
fn bitmap_agrees_with_tree(Crowded(xs): Crowded) -> bool {
    filters::bitmap(&xs).unwrap() == filters::tree(&xs).unwrap()
}
