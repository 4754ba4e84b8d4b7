use alloc::vec::Vec;

use crate::pattern::Pattern;

/// How many elements each collection contributes to reach `total`.
///
/// Every collection first gets its share of the full rounds that fit in
/// `total`. The remainder is then handed out left to right, each position
/// taking at most one more group's worth. The remainder is recomputed from
/// the running counts at every position, so the walk is order-dependent and
/// must happen exactly once.
///
/// A round longer than `usize::MAX` never fits, so only the remainder walk
/// applies to it.
pub(crate) fn pattern_counts(pattern: &Pattern, total: usize) -> Vec<usize> {
    let full_repetitions = pattern
        .iter()
        .try_fold(0usize, |len, &size| len.checked_add(size))
        .map_or(0, |round_len| total / round_len);
    let mut counts: Vec<usize> = pattern.iter().map(|n| n * full_repetitions).collect();

    for (index, &size) in pattern.iter().enumerate() {
        let assigned: usize = counts.iter().sum();
        let remaining = total.saturating_sub(assigned);
        counts[index] += remaining.min(size);
    }

    counts
}
