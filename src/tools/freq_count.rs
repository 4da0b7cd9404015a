use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Occurrence count of each distinct run length.
pub type FreqTable = FxHashMap<usize, usize>;

/// Returns a frequency count of the run lengths. Uses parallelism when data set is over 64k.
pub fn freqs(runs: &[usize]) -> FreqTable {
    if runs.len() > 64_000 {
        // Count each 16k chunk on its own, then merge partial tables by summing counts per key.
        runs
            .par_chunks(16_000)
            .fold(FreqTable::default, |mut freqs, chunk| {
                chunk.iter().for_each(|&run| *freqs.entry(run).or_insert(0) += 1);
                freqs
            })
            .reduce(FreqTable::default, merge)
    } else {
        // Small sets are not worth the thread overhead.
        let mut freqs = FreqTable::default();
        runs.iter().for_each(|&run| *freqs.entry(run).or_insert(0) += 1);
        freqs
    }
}

/// Fold the counts of the smaller table into the larger one.
fn merge(a: FreqTable, b: FreqTable) -> FreqTable {
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (run, count) in from {
        *into.entry(run).or_insert(0) += count;
    }
    into
}
