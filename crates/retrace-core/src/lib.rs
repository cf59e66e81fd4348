// Public fallible APIs in this crate share one concrete error contract
// (`RetraceError`); per-function `# Errors` boilerplate would restate it.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod client;
pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod ranking;
pub mod summarize;
pub(crate) mod text;

pub use client::Retrace;
pub use error::{Result, RetraceError};
pub use models::{CurrentContext, ScoredSession, SessionRecord};
pub use ranking::{RelevanceEngine, SelectionPolicy};
