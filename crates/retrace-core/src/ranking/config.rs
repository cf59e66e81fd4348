/// Caller-side selection applied after ranking: threshold, cap, and the
/// fallback window used when the threshold empties the result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    pub min_score: f64,
    pub max_results: usize,
    pub fallback_top_n: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.3,
            max_results: 5,
            fallback_top_n: 3,
        }
    }
}
