use crate::models::ScoredSession;

use super::config::SelectionPolicy;

/// Presentation-level filtering over an already-ranked list: drop entries
/// below the threshold, cap the survivors, and when the threshold removes
/// everything fall back to the top few by score so the caller is never left
/// empty-handed by a strict cutoff alone.
#[must_use]
pub fn select_relevant(
    mut ranked: Vec<ScoredSession>,
    policy: &SelectionPolicy,
) -> Vec<ScoredSession> {
    if ranked.is_empty() {
        return ranked;
    }

    let cap = policy.max_results.max(1);
    if ranked.iter().any(|entry| entry.score >= policy.min_score) {
        ranked.retain(|entry| entry.score >= policy.min_score);
        ranked.truncate(cap);
    } else {
        ranked.truncate(policy.fallback_top_n.max(1));
    }
    ranked
}
