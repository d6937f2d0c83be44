use dedup_bst::OrderedSet;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Crowded;

#[quickcheck]
fn keeps_each_distinct_value_once(Crowded(xs): Crowded) -> bool {
    let set = OrderedSet::build_from(xs.iter().copied()).unwrap();
    let distinct = xs.iter().copied().collect::<BTreeSet<_>>();

    set.len() == distinct.len() && set.iter().eq(distinct)
}

#[quickcheck]
fn rotated_input_keeps_same_values(Crowded(xs): Crowded, by: usize) -> bool {
    let mut rotated = xs.clone();
    if !rotated.is_empty() {
        let by = by % rotated.len();
        rotated.rotate_left(by);
    }
    let a = OrderedSet::build_from(xs).unwrap();
    let b = OrderedSet::build_from(rotated).unwrap();

    a.iter().eq(b.iter())
}

#[quickcheck]
fn shallow_report_matches_first_values(xs: Vec<i32>) -> bool {
    let set = OrderedSet::build_from(xs.iter().copied()).unwrap();
    let shallow = set.shallow();

    match xs.first() {
        None => shallow.values().next().is_none(),
        Some(&root) => {
            // The root's children are the first values inserted on either side of it.
            let left = xs.iter().copied().find(|&x| x < root);
            let right = xs.iter().copied().find(|&x| x > root);

            shallow.root == Some(root) && shallow.left == left && shallow.right == right
        }
    }
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let set = OrderedSet::build_from(xs.iter().copied()).unwrap();

    xs.iter().all(|&x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
    let set = OrderedSet::build_from(xs.iter().copied()).unwrap();

    nots.iter().filter(|x| !xs.contains(x)).all(|&x| !set.contains(x))
}
