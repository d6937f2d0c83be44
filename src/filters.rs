//! Ways of removing duplicates from a sequence while keeping the first occurrence of every value
//! in its original position. They all agree on the output and only differ in cost, which makes
//! them useful yardsticks for the tree.
//!
//! ```
//! use dedup_bst::filters;
//!
//! let input = [16, 17, 2, 17, 4, 2, 97, 4, 17];
//! let expected = vec![16, 17, 2, 4, 97];
//!
//! assert_eq!(filters::naive(&input), expected);
//! assert_eq!(filters::hashed(&input), expected);
//! assert_eq!(filters::bucketed(&input), expected);
//! assert_eq!(filters::bitmap(&input)?, expected);
//! assert_eq!(filters::tree(&input)?, expected);
//! # Ok::<(), dedup_bst::Error>(())
//! ```

use std::collections::HashSet;

use crate::{Error, OrderedSet};

/// Checks every value against everything kept so far. `O(n^2)`.
pub fn naive(input: &[i32]) -> Vec<i32> {
    let mut output = Vec::new();
    for &x in input {
        if !output.contains(&x) {
            output.push(x);
        }
    }

    output
}

/// Remembers kept values in a hash set.
pub fn hashed(input: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(input.len());
    input.iter().copied().filter(|&x| seen.insert(x)).collect()
}

/// Number of chains in [`bucketed`].
const BUCKETS: usize = 32;

/// Spreads kept values over a fixed number of chains by `value mod 32` and scans only the chain a
/// value falls in. Values that share a chain are still compared in full, so colliding values are
/// never mistaken for each other.
pub fn bucketed(input: &[i32]) -> Vec<i32> {
    let mut buckets = vec![Vec::new(); BUCKETS];
    let mut output = Vec::new();
    for &x in input {
        // `rem_euclid` is never negative, so negative values land in a bucket too.
        let bucket = &mut buckets[x.rem_euclid(BUCKETS as i32) as usize];
        if !bucket.contains(&x) {
            bucket.push(x);
            output.push(x);
        }
    }

    output
}

/// Keeps one bit per value between the smallest and largest input. Fast, but the scratch space
/// grows with the spread of the values rather than their number.
pub fn bitmap(input: &[i32]) -> Result<Vec<i32>, Error> {
    let (min, max) = match (input.iter().min(), input.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Ok(Vec::new()),
    };
    let span = i64::from(max) - i64::from(min) + 1;
    let words = usize::try_from((span + 63) / 64)
        .map_err(|_| Error::InvalidInput("value spread too wide for a bitmap"))?;

    let mut bits: Vec<u64> = Vec::new();
    bits.try_reserve_exact(words)?;
    bits.resize(words, 0);
    log::debug!("Bitmap over {min}..={max} uses {words} words for {} values", input.len());

    let mut output = Vec::new();
    for &x in input {
        // `x - min` is in `0..span`, which fits in a usize since `words` did.
        let bit = (i64::from(x) - i64::from(min)) as usize;
        let (word, mask) = (bit / 64, 1u64 << (bit % 64));
        if bits[word] & mask == 0 {
            bits[word] |= mask;
            output.push(x);
        }
    }

    Ok(output)
}

/// Uses an [`OrderedSet`] for membership: a value is kept when inserting it creates a node.
pub fn tree(input: &[i32]) -> Result<Vec<i32>, Error> {
    let mut set = OrderedSet::new();
    let mut output = Vec::new();
    for &x in input {
        if set.insert(x)? {
            output.push(x);
        }
    }

    Ok(output)
}
