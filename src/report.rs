//! Text reports printed by the `dedup-bst` binary. They write to any [`io::Write`] so they can be
//! checked without capturing stdout.

use std::io;
use std::time::Duration;

use crate::{OrderedCountingSet, OrderedSet};

/// Lists every value inserted more than once along with how often.
pub fn duplicates<W: io::Write>(out: &mut W, set: &OrderedCountingSet) -> io::Result<()> {
    writeln!(out, "Non-unique elements:")?;
    for (value, count) in set.duplicates() {
        writeln!(out, "{value} appears {count} times")?;
    }

    Ok(())
}

/// Lists every value inserted exactly once.
pub fn unique<W: io::Write>(out: &mut W, set: &OrderedCountingSet) -> io::Result<()> {
    writeln!(out, "Unique elements:")?;
    for value in set.unique() {
        writeln!(out, "{value} is unique")?;
    }

    Ok(())
}

/// Prints the root and its direct children, one per line. Deeper values are never printed.
pub fn shallow<W: io::Write>(out: &mut W, set: &OrderedSet) -> io::Result<()> {
    writeln!(out, "Unique values:")?;
    for value in set.shallow().values() {
        writeln!(out, "{value}")?;
    }

    Ok(())
}

/// Prints every value in the set.
pub fn listing<W: io::Write>(out: &mut W, set: &OrderedSet) -> io::Result<()> {
    writeln!(out, "All unique values:")?;
    for value in set.iter() {
        writeln!(out, "{value}")?;
    }

    Ok(())
}

/// Summarises one filter run.
pub fn filtered<W: io::Write>(
    out: &mut W,
    name: &str,
    input: &[i32],
    output: &[i32],
    elapsed: Duration,
) -> io::Result<()> {
    let name = name.to_uppercase();
    writeln!(out, "{name} START")?;
    writeln!(out, "Original array: {input:?}")?;
    writeln!(out, "Filtered array: {output:?}")?;
    writeln!(out, "Execution time: {elapsed:?}")?;
    writeln!(out, "{name} END")?;
    writeln!(out)
}
