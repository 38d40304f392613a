// src/core/error.rs
use thiserror::Error;

/// The two ways a unit of work can go wrong: the wire, or the body.
///
/// `Fetch` covers transport failures and non-success HTTP statuses;
/// `Parse` covers bodies that are not in the expected shape. Callers
/// treat both as non-fatal for the pipeline: report, skip, continue.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

impl From<ureq::Error> for ScrapeError {
    fn from(e: ureq::Error) -> Self {
        ScrapeError::Fetch(e.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(e: serde_json::Error) -> Self {
        ScrapeError::Parse(e.to_string())
    }
}
