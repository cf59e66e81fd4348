use std::collections::HashSet;

use crate::error::Result;
use crate::models::SessionRecord;

/// Bound on how many stored sessions a single ranking call may consider.
/// Ranking cost is linear in corpus size, so the facade trims before it
/// ranks; the store itself may hold more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusPolicy {
    pub max_sessions: usize,
}

impl Default for CorpusPolicy {
    fn default() -> Self {
        Self { max_sessions: 50 }
    }
}

#[derive(Debug, Clone)]
pub struct CorpusParseOutcome {
    pub sessions: Vec<SessionRecord>,
    pub skipped_lines: usize,
    pub first_error: Option<(usize, String)>,
}

/// Tolerant JSONL read of recorded sessions. Blank lines are ignored;
/// invalid lines are counted and skipped with the first failure remembered
/// for diagnostics. A half-corrupted store still yields every readable
/// session rather than failing the ranking path.
#[must_use]
pub fn parse_corpus(raw: &str) -> CorpusParseOutcome {
    let mut sessions = Vec::new();
    let mut skipped_lines = 0usize;
    let mut first_error = None::<(usize, String)>;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<SessionRecord>(line) {
            Ok(record) => sessions.push(record),
            Err(err) => {
                skipped_lines += 1;
                if first_error.is_none() {
                    first_error = Some((line_no + 1, err.to_string()));
                }
            }
        }
    }

    if skipped_lines > 0 {
        let detail = first_error
            .as_ref()
            .map_or_else(String::new, |(line, msg)| format!("line {line}: {msg}"));
        tracing::warn!(
            skipped = skipped_lines,
            first_error = %detail,
            "skipped unreadable session lines"
        );
    }

    CorpusParseOutcome {
        sessions,
        skipped_lines,
        first_error,
    }
}

/// Strict single-record decode, for callers that hold one session document
/// and want the parse failure instead of a silent skip.
pub fn decode_session(raw: &str) -> Result<SessionRecord> {
    Ok(serde_json::from_str(raw)?)
}

/// Keeps the `max_sessions` most recent records, preserving input order
/// among the survivors. Records with unreadable timestamps count as oldest
/// and are evicted first.
#[must_use]
pub fn cap_corpus(sessions: Vec<SessionRecord>, max_sessions: usize) -> Vec<SessionRecord> {
    let max = max_sessions.max(1);
    if sessions.len() <= max {
        return sessions;
    }

    let mut by_age: Vec<usize> = (0..sessions.len()).collect();
    by_age.sort_by_key(|&index| sessions[index].recorded_at());
    let evicted: HashSet<usize> = by_age[..sessions.len() - max].iter().copied().collect();

    sessions
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !evicted.contains(index))
        .map(|(_, session)| session)
        .collect()
}
