use crate::corpus::CorpusPolicy;
use crate::error::Result;
use crate::ranking::SelectionPolicy;

mod ranking;
mod summarize;

pub use summarize::SummarizerConfig;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub selection: SelectionPolicy,
    pub corpus: CorpusPolicy,
    pub summarizer: SummarizerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            selection: ranking::selection_from_env()?,
            corpus: ranking::corpus_from_env(),
            summarizer: SummarizerConfig::from_env(),
        })
    }
}
