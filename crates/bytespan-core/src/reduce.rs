//! Folding exclusion lists into a base interval list.

use crate::interval::{Interval, difference};

/// Subtract every interval in `exclusions` from `base`.
///
/// Exclusions are applied one at a time. After each step the working list is
/// replaced by the concatenation of `difference(current, exclusion)` over all
/// of its intervals, so the relative order of `base` survives. Fragments
/// produced from one base interval are disjoint; fragments of different base
/// intervals are disjoint whenever the base intervals were.
pub fn reduce_intervals(base: &[Interval], exclusions: &[Interval]) -> Vec<Interval> {
    let mut working = base.to_vec();
    for &exclusion in exclusions {
        working = working
            .into_iter()
            .flat_map(|current| difference(current, exclusion))
            .collect();
    }
    working
}
