const ENV_SUMMARIZER_API_KEY: &str = "RETRACE_SUMMARIZER_API_KEY";
const ENV_SUMMARIZER_ENDPOINT: &str = "RETRACE_SUMMARIZER_ENDPOINT";

/// Presence of credentials decides whether the service-backed summarizer may
/// be used at all; the heuristic variant needs none of this.
#[derive(Clone, Default)]
pub struct SummarizerConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("service_available", &self.service_available())
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SummarizerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: read_non_empty_env(ENV_SUMMARIZER_API_KEY),
            endpoint: read_non_empty_env(ENV_SUMMARIZER_ENDPOINT),
        }
    }

    #[must_use]
    pub fn service_available(&self) -> bool {
        self.api_key.is_some()
    }
}

fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_availability_tracks_the_api_key() {
        assert!(!SummarizerConfig::default().service_available());

        let configured = SummarizerConfig {
            api_key: Some("key".to_string()),
            endpoint: None,
        };
        assert!(configured.service_available());
    }

    #[test]
    fn debug_output_never_contains_the_key_material() {
        let configured = SummarizerConfig {
            api_key: Some("super-secret".to_string()),
            endpoint: Some("http://127.0.0.1:11434".to_string()),
        };
        let printed = format!("{configured:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("service_available: true"));
    }
}
