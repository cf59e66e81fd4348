use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetraceError>;

#[derive(Debug, Error)]
pub enum RetraceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RetraceError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
