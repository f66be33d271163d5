use std::collections::BTreeSet;

/// Ingredients present in both collections.
pub fn intersect(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.intersection(b).cloned().collect()
}

/// Ingredients of `a` that do not appear in `b`.
pub fn difference(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.difference(b).cloned().collect()
}

pub fn jaccard_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f32 {
    let union = a.union(b).count() as f32;
    if union == 0.0 {
        return 0.0;
    }

    a.intersection(b).count() as f32 / union
}

/// Squared euclidean distance between the binary feature vectors of two sets,
/// which is the size of their symmetric difference.
pub fn squared_distance(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    a.symmetric_difference(b).count()
}
