use std::collections::HashSet;

use crate::config::SummarizerConfig;
use crate::models::{ConversationKind, ConversationTurn, ToolObservation};
use crate::text::truncate_text;

const SUMMARY_MAX_CHARS: usize = 600;
const MAX_USER_MESSAGES: usize = 3;
const MAX_OBSERVATION_NOTES: usize = 4;
const MAX_TOUCHED_FILES: usize = 5;

/// Produces the summary string stored on a session record when it is
/// committed. The service-backed variant lives outside this crate; callers
/// inject it and [`select_summarizer`] only picks it when credentials are
/// configured, so the local heuristic remains the non-failing floor.
pub trait Summarizer {
    fn name(&self) -> &'static str;

    fn summarize(
        &self,
        conversations: &[ConversationTurn],
        observations: &[ToolObservation],
    ) -> String;
}

/// Credential-free fallback: stitches the user's own words together with
/// what the tools touched. Never fails; an idle session summarizes to an
/// empty string rather than filler text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSummarizer;

impl Summarizer for HeuristicSummarizer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn summarize(
        &self,
        conversations: &[ConversationTurn],
        observations: &[ToolObservation],
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        parts.extend(
            conversations
                .iter()
                .filter(|turn| turn.kind == ConversationKind::User)
                .map(|turn| turn.message.trim())
                .filter(|message| !message.is_empty())
                .take(MAX_USER_MESSAGES)
                .map(str::to_string),
        );

        parts.extend(
            observations
                .iter()
                .map(|observation| observation.summary.trim())
                .filter(|summary| !summary.is_empty())
                .take(MAX_OBSERVATION_NOTES)
                .map(str::to_string),
        );

        let files = touched_files(observations);
        if !files.is_empty() {
            parts.push(format!("files: {}", files.join(", ")));
        }

        truncate_text(&parts.join("; "), SUMMARY_MAX_CHARS)
    }
}

/// Picks the injected service-backed summarizer only when its credentials
/// are configured; everything else falls through to the heuristic.
#[must_use]
pub fn select_summarizer(
    config: &SummarizerConfig,
    external: Option<Box<dyn Summarizer>>,
) -> Box<dyn Summarizer> {
    if config.service_available()
        && let Some(service) = external
    {
        tracing::debug!(summarizer = service.name(), "using service summarizer");
        return service;
    }
    Box::new(HeuristicSummarizer)
}

fn touched_files(observations: &[ToolObservation]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for observation in observations {
        let Some(path) = observation.details.file.as_deref() else {
            continue;
        };
        let name = path
            .replace('\\', "/")
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(path)
            .to_string();
        if !name.is_empty() && seen.insert(name.clone()) {
            files.push(name);
        }
        if files.len() >= MAX_TOUCHED_FILES {
            break;
        }
    }
    files
}
