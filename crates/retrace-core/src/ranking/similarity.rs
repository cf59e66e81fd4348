use super::tfidf::WeightVector;

/// Cosine similarity over the key union of two sparse vectors. Weights are
/// non-negative here, so the result lands in `[0, 1]`; a zero-norm side
/// returns exactly 0.0.
#[must_use]
pub(crate) fn cosine_similarity(a: &WeightVector, b: &WeightVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut dot = 0.0;
    for (token, weight) in small {
        if let Some(other) = large.get(token) {
            dot += weight * other;
        }
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn l2_norm(vector: &WeightVector) -> f64 {
    vector
        .values()
        .map(|weight| weight * weight)
        .sum::<f64>()
        .sqrt()
}
