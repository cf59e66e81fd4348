use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::{CurrentContext, ScoredSession, SessionRecord};
use crate::text::{tokenize, tokenize_path};

use super::similarity::cosine_similarity;
use super::tfidf::{document_frequency, tfidf_weights};

// Fusion constants. At maximum bonus the three weights sum to 1.0; the
// explicit clamp in `fuse` covers the corner where similarity and time
// weight both reach 1.0 at once.
const SIMILARITY_WEIGHT: f64 = 0.4;
const RECENCY_WEIGHT: f64 = 0.45;
pub(crate) const CONVERSATION_BONUS: f64 = 0.15;

const LINEAR_DECAY_BOUNDARY_HOURS: f64 = 24.0;
const LINEAR_DECAY_SPAN_HOURS: f64 = 48.0;
const EXP_DECAY_TIME_CONSTANT_DAYS: f64 = 14.0;

/// Ranks a session corpus against the current working context. Stateless;
/// every call rebuilds its document-frequency table from the exact corpus it
/// was handed, so idf values are always corpus-relative.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceEngine;

impl RelevanceEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Ranks `corpus` by relevance to `context`, most relevant first.
    #[must_use]
    pub fn rank(&self, context: &CurrentContext, corpus: Vec<SessionRecord>) -> Vec<ScoredSession> {
        self.rank_at(Utc::now(), context, corpus)
    }

    /// Same as [`rank`](Self::rank) with an explicit clock, so recency decay
    /// is reproducible in tests and replays.
    #[must_use]
    pub fn rank_at(
        &self,
        now: DateTime<Utc>,
        context: &CurrentContext,
        corpus: Vec<SessionRecord>,
    ) -> Vec<ScoredSession> {
        if corpus.is_empty() {
            return Vec::new();
        }

        let context_tokens = context_document(context);
        let session_docs: Vec<Vec<String>> = corpus.iter().map(session_document).collect();

        let mut documents: Vec<&[String]> = Vec::with_capacity(session_docs.len() + 1);
        documents.push(&context_tokens);
        documents.extend(session_docs.iter().map(Vec::as_slice));
        let total_docs = documents.len();
        let df_table = document_frequency(&documents);

        let context_vector = tfidf_weights(&context_tokens, &df_table, total_docs);

        let mut scored: Vec<ScoredSession> = corpus
            .into_iter()
            .zip(session_docs)
            .map(|(session, tokens)| {
                let session_vector = tfidf_weights(&tokens, &df_table, total_docs);
                let similarity = cosine_similarity(&context_vector, &session_vector);
                let time_weight = time_weight_at(now, session.recorded_at());
                let structural_bonus = if session.conversations.is_empty() {
                    0.0
                } else {
                    CONVERSATION_BONUS
                };
                let score = fuse(similarity, time_weight, structural_bonus);
                ScoredSession {
                    session,
                    similarity,
                    time_weight,
                    structural_bonus,
                    score,
                }
            })
            .collect();

        // Stable sort: equal scores keep corpus order. Insertion order is
        // the tie-break contract, so no secondary key.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        tracing::debug!(
            corpus = total_docs - 1,
            context_tokens = context_tokens.len(),
            top_score = scored.first().map_or(0.0, |entry| entry.score),
            "ranked session corpus"
        );

        scored
    }
}

fn fuse(similarity: f64, time_weight: f64, structural_bonus: f64) -> f64 {
    (similarity * SIMILARITY_WEIGHT + time_weight * RECENCY_WEIGHT + structural_bonus).min(1.0)
}

/// Two-regime recency decay over the session's age.
///
/// Up to and including 24 h the weight ramps linearly from 1.0 down to 0.5;
/// past that it restarts on `exp(-days/14)`. The curves do not meet at the
/// boundary (0.5 vs `exp(-1/14)` ~= 0.93); the cliff is part of the scoring
/// contract and must not be smoothed. An unparseable timestamp is maximally
/// stale: weight 0.0, never an error.
#[must_use]
pub(crate) fn time_weight_at(now: DateTime<Utc>, recorded_at: Option<DateTime<Utc>>) -> f64 {
    let Some(recorded) = recorded_at else {
        return 0.0;
    };

    let elapsed_ms = now.signed_duration_since(recorded).num_milliseconds();
    let hours = (elapsed_ms as f64 / 3_600_000.0).max(0.0);

    if hours <= LINEAR_DECAY_BOUNDARY_HOURS {
        1.0 - hours / LINEAR_DECAY_SPAN_HOURS
    } else {
        let days = hours / 24.0;
        (-days / EXP_DECAY_TIME_CONSTANT_DAYS).exp()
    }
}

fn context_document(context: &CurrentContext) -> Vec<String> {
    let mut tokens = tokenize_path(&context.working_dir);
    for path in &context.recent_files {
        tokens.extend(tokenize_path(path));
    }
    tokens
}

// Concatenation order mirrors capture order: summary, then dialogue, then
// per-observation summary / file path / command text.
fn session_document(session: &SessionRecord) -> Vec<String> {
    let mut tokens = tokenize(&session.summary);
    for turn in &session.conversations {
        tokens.extend(tokenize(&turn.message));
    }
    for observation in &session.observations {
        tokens.extend(tokenize(&observation.summary));
        if let Some(file) = &observation.details.file {
            tokens.extend(tokenize_path(file));
        }
        if let Some(command) = &observation.details.command {
            tokens.extend(tokenize(command));
        }
    }
    tokens
}
