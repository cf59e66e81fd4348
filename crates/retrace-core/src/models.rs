use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The working state a ranking call is made for: the project directory the
/// agent is sitting in, plus any recently touched file paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentContext {
    pub working_dir: String,
    #[serde(default)]
    pub recent_files: Vec<String>,
}

impl CurrentContext {
    #[must_use]
    pub fn new(working_dir: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            recent_files: Vec::new(),
        }
    }
}

/// One recorded unit of past work. Produced by the capture layer, stored as
/// JSON lines, handed here read-only. Every field beyond `timestamp` and
/// `summary` is optional on the wire; partial records deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub conversations: Vec<ConversationTurn>,
    #[serde(default)]
    pub observations: Vec<ToolObservation>,
}

impl SessionRecord {
    /// Lenient ISO-8601 parse. A missing or garbled timestamp is `None`,
    /// which downstream scoring treats as maximally stale, never an error.
    #[must_use]
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: ConversationKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ConversationKind {
    User,
    Assistant,
    Tool,
    #[default]
    Other,
}

// Foreign wire values degrade to `Other` instead of failing the record.
impl From<String> for ConversationKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            "tool" => Self::Tool,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolObservation {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub details: ObservationDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Ranker output unit: the input record, unchanged, plus its score breakdown.
/// `score` is clamped to at most 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSession {
    pub session: SessionRecord,
    pub similarity: f64,
    pub time_weight: f64,
    pub structural_bonus: f64,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_record_deserializes_partial_wire_shapes() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"timestamp":"2026-08-01T09:30:00Z","summary":"wired up login flow"}"#,
        )
        .expect("partial record");
        assert_eq!(record.summary, "wired up login flow");
        assert!(record.conversations.is_empty());
        assert!(record.observations.is_empty());
        assert!(record.recorded_at().is_some());
    }

    #[test]
    fn unknown_conversation_kind_maps_to_other() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"message":"hi","type":"system_notice"}"#)
                .expect("turn with foreign kind");
        assert_eq!(turn.kind, ConversationKind::Other);
    }

    #[test]
    fn recorded_at_is_none_for_missing_or_garbled_timestamps() {
        let mut record: SessionRecord = serde_json::from_str("{}").expect("empty record");
        assert!(record.recorded_at().is_none());

        record.timestamp = "not-a-date".to_string();
        assert!(record.recorded_at().is_none());
    }

    #[test]
    fn recorded_at_accepts_offset_timestamps() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"timestamp":"2026-08-01T18:30:00+09:00"}"#)
                .expect("offset timestamp");
        let parsed = record.recorded_at().expect("parsed");
        assert_eq!(parsed.to_rfc3339(), "2026-08-01T09:30:00+00:00");
    }
}
