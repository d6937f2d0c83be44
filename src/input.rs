//! Input sequences to feed the sets and filters: the fixed demo sequence plus generators for
//! random and sorted input of any size.

use rand::Rng;

use crate::Error;

/// The sequence the demo reports are built from.
pub const DEMO: [i32; 8] = [1, 2, 3, 2, 4, 5, 1, 6];

/// Room for `len` values, reserved up front so a huge `len` fails cleanly.
fn with_room(len: usize) -> Result<Vec<i32>, Error> {
    if len < 1 {
        return Err(Error::InvalidInput("len must be at least 1"));
    }
    let mut values = Vec::new();
    values.try_reserve_exact(len)?;
    log::debug!("Reserved room for {len} input values");

    Ok(values)
}

fn to_i32(x: usize, what: &'static str) -> Result<i32, Error> {
    i32::try_from(x).map_err(|_| Error::InvalidInput(what))
}

/// `len` values, each with a random sign and a magnitude in `0..max`.
pub fn random<R>(rng: &mut R, len: usize, max: usize) -> Result<Vec<i32>, Error>
where
    R: Rng + ?Sized,
{
    if max < 1 {
        return Err(Error::InvalidInput("max must be at least 1"));
    }
    let max = to_i32(max, "max must fit in an i32")?;
    let mut values = with_room(len)?;

    values.extend((0..len).map(|_| {
        let magnitude = rng.gen_range(0..max);
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }));
    log::debug!("Generated {len} random values with magnitudes below {max}");

    Ok(values)
}

/// Like [`random`] but with magnitudes in `0..max / repeats`, so each value shows up roughly
/// `repeats` times as often.
pub fn random_repeating<R>(
    rng: &mut R,
    len: usize,
    max: usize,
    repeats: usize,
) -> Result<Vec<i32>, Error>
where
    R: Rng + ?Sized,
{
    if repeats < 1 {
        return Err(Error::InvalidInput("repeats must be at least 1"));
    }
    if max / repeats < 1 {
        return Err(Error::InvalidInput("max / repeats must be at least 1"));
    }

    random(rng, len, max / repeats)
}

/// `0, 1, .., len - 1`. Sorted input like this degenerates the tree into a list.
pub fn growing(len: usize) -> Result<Vec<i32>, Error> {
    let end = to_i32(len, "len must fit in an i32")?;
    let mut values = with_room(len)?;
    values.extend(0..end);
    log::debug!("Generated {len} ascending values");

    Ok(values)
}

/// `i % (len / repeats)` for `i` in `0..len`: ascending runs that start over `repeats` times.
pub fn repeating(len: usize, repeats: usize) -> Result<Vec<i32>, Error> {
    if repeats < 1 {
        return Err(Error::InvalidInput("repeats must be at least 1"));
    }
    let period = to_i32(len / repeats, "len must fit in an i32")?;
    if period < 1 {
        return Err(Error::InvalidInput("len / repeats must be at least 1"));
    }
    let end = to_i32(len, "len must fit in an i32")?;
    let mut values = with_room(len)?;
    values.extend((0..end).map(|i| i % period));
    log::debug!("Generated {len} values repeating every {period}");

    Ok(values)
}
