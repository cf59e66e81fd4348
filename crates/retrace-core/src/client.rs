use uuid::Uuid;

use crate::config::AppConfig;
use crate::corpus::cap_corpus;
use crate::error::Result;
use crate::models::{CurrentContext, ScoredSession, SessionRecord};
use crate::ranking::{RelevanceEngine, select_relevant};

/// Entry point the surrounding hook/command layer holds: bounds the corpus,
/// ranks it, and applies the selection policy, in that order.
#[derive(Debug, Clone)]
pub struct Retrace {
    config: AppConfig,
    engine: RelevanceEngine,
}

impl Retrace {
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AppConfig::from_env()?))
    }

    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            engine: RelevanceEngine::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the sessions worth re-surfacing for `context`, most relevant
    /// first. The full ranking with per-session score breakdowns is
    /// available through [`RelevanceEngine`] directly.
    #[must_use]
    pub fn recollect(
        &self,
        context: &CurrentContext,
        corpus: Vec<SessionRecord>,
    ) -> Vec<ScoredSession> {
        let trace_id = Uuid::new_v4().to_string();
        let offered = corpus.len();

        let corpus = cap_corpus(corpus, self.config.corpus.max_sessions);
        let ranked = self.engine.rank(context, corpus);
        let selected = select_relevant(ranked, &self.config.selection);

        tracing::debug!(
            trace_id = %trace_id,
            offered,
            selected = selected.len(),
            "recollect complete"
        );
        selected
    }
}
