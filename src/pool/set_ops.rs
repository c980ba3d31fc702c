use std::collections::HashSet;
use std::hash::Hash;

/// All ids appearing in any input set.
pub fn union_sets<T: Eq + Hash + Clone>(sets: &[HashSet<T>]) -> HashSet<T> {
    let capacity = sets.iter().map(HashSet::len).max().unwrap_or(0);
    let mut out = HashSet::with_capacity(capacity);
    for set in sets {
        out.extend(set.iter().cloned());
    }
    out
}

/// Ids present in every input set. No input sets yields the empty set.
///
/// Walks the smallest set and probes the others, so the cost is bounded by
/// the smallest set times the number of sets.
pub fn intersect_sets<T: Eq + Hash + Clone>(sets: &[HashSet<T>]) -> HashSet<T> {
    let Some((smallest_idx, smallest)) = sets.iter().enumerate().min_by_key(|(_, s)| s.len())
    else {
        return HashSet::new();
    };

    smallest
        .iter()
        .filter(|id| {
            sets.iter().enumerate().all(|(idx, other)| idx == smallest_idx || other.contains(*id))
        })
        .cloned()
        .collect()
}
