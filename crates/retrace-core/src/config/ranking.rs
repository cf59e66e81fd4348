use crate::corpus::CorpusPolicy;
use crate::error::{Result, RetraceError};
use crate::ranking::SelectionPolicy;

const ENV_MIN_SCORE: &str = "RETRACE_MIN_SCORE";
const ENV_MAX_RESULTS: &str = "RETRACE_MAX_RESULTS";
const ENV_FALLBACK_TOP_N: &str = "RETRACE_FALLBACK_TOP_N";
const ENV_MAX_CORPUS: &str = "RETRACE_MAX_CORPUS";

pub(super) fn selection_from_env() -> Result<SelectionPolicy> {
    selection_from_raw(
        std::env::var(ENV_MIN_SCORE).ok().as_deref(),
        std::env::var(ENV_MAX_RESULTS).ok().as_deref(),
        std::env::var(ENV_FALLBACK_TOP_N).ok().as_deref(),
    )
}

pub(super) fn corpus_from_env() -> CorpusPolicy {
    CorpusPolicy {
        max_sessions: parse_usize_or(
            std::env::var(ENV_MAX_CORPUS).ok().as_deref(),
            CorpusPolicy::default().max_sessions,
            1,
        ),
    }
}

fn selection_from_raw(
    min_score: Option<&str>,
    max_results: Option<&str>,
    fallback_top_n: Option<&str>,
) -> Result<SelectionPolicy> {
    let defaults = SelectionPolicy::default();
    Ok(SelectionPolicy {
        min_score: parse_min_score(min_score, defaults.min_score)?,
        max_results: parse_usize_or(max_results, defaults.max_results, 1),
        fallback_top_n: parse_usize_or(fallback_top_n, defaults.fallback_top_n, 1),
    })
}

// A score threshold outside the fused-score range would silently select
// everything or nothing, so malformed values are rejected rather than
// defaulted.
fn parse_min_score(raw: Option<&str>, default_value: f64) -> Result<f64> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(default_value);
    };
    raw.parse::<f64>()
        .ok()
        .filter(|value| (0.0..=1.0).contains(value))
        .ok_or_else(|| {
            RetraceError::Validation(format!(
                "invalid {ENV_MIN_SCORE}: {raw} (expected a number in 0.0..=1.0)"
            ))
        })
}

fn parse_usize_or(raw: Option<&str>, default_value: usize, min_value: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}
