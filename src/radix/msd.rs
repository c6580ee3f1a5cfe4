use partition::partition_index;

use crate::radix::SortError;

/// Sorts `values` in ascending order, partitioning by digits of `radix`.
///
/// The choice of radix only changes the recursion shape (branching factor and
/// depth), never the result. `radix` below 2 is rejected before any division
/// takes place.
pub fn sort_with_radix(values: &[i64], radix: u32) -> Result<Vec<i64>, SortError> {
    crate::scope!("sort_with_radix");
    if radix < 2 {
        return Err(SortError::InvalidRadix(radix));
    }

    // By definition, this is already sorted
    if values.len() <= 1 || values.windows(2).all(|w| w[0] <= w[1]) {
        return Ok(values.to_vec());
    }

    let mut values = values.to_vec();
    let negative = partition_index(&mut values, |v| *v < 0);
    let radix = u64::from(radix);

    // Both groups sort by magnitude; the negative group comes out reversed,
    // since a larger magnitude means a smaller value there.
    let magnitudes =
        |group: &[i64]| -> Vec<u64> { group.iter().map(|v| v.unsigned_abs()).collect() };
    let negatives = sort_unsigned(magnitudes(&values[..negative]), radix);
    let rest = sort_unsigned(magnitudes(&values[negative..]), radix);

    let mut sorted = Vec::with_capacity(values.len());
    // wrapping_neg maps the i64::MIN magnitude back onto i64::MIN.
    sorted.extend(negatives.into_iter().rev().map(|m| (m as i64).wrapping_neg()));
    sorted.extend(rest.into_iter().map(|m| m as i64));
    Ok(sorted)
}

fn sort_unsigned(values: Vec<u64>, radix: u64) -> Vec<u64> {
    if values.len() <= 1 {
        return values;
    }

    let max = values.iter().copied().max().unwrap_or(0);
    sort_at_place(values, leading_place(max, radix), radix)
}

/// Largest power of `radix` not exceeding `max`.
///
/// An all-zero group settles at place value 1; the next level's `place == 0`
/// base case then retires it after a single-bucket pass. The loop condition
/// keeps `place * radix <= max`, so the accumulator never overflows.
fn leading_place(max: u64, radix: u64) -> u64 {
    let mut place = 1;
    while max / place >= radix {
        place *= radix;
    }
    place
}

fn sort_at_place(values: Vec<u64>, place: u64, radix: u64) -> Vec<u64> {
    crate::scope!("sort_at_place");
    if values.len() <= 1 || place == 0 {
        return values;
    }

    // Pushing in slice order keeps the bucketing stable.
    let mut buckets: Vec<Vec<u64>> = vec![Vec::new(); radix as usize];
    for value in &values {
        buckets[((value / place) % radix) as usize].push(*value);
    }

    let mut sorted = Vec::with_capacity(values.len());
    for bucket in buckets {
        if !bucket.is_empty() {
            sorted.extend(sort_at_place(bucket, place / radix, radix));
        }
    }

    sorted
}
