use std::io;

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Failures a single probe can run into.
///
/// The transport variants happen before a usable response exists and are
/// reported to the operator as a connection problem. A 200 with a body that is
/// not JSON, or a broken output stream, ends the run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("API key cannot be sent as a header value: {0}")]
    InvalidCredential(#[from] InvalidHeaderValue),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl ProbeError {
    /// True for the failures that happen before a response could be read.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProbeError::InvalidCredential(_) | ProbeError::Connect(_) | ProbeError::Timeout(_) | ProbeError::Transport(_)
        )
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ProbeError::Connect(err)
        } else if err.is_timeout() {
            ProbeError::Timeout(err)
        } else {
            ProbeError::Transport(err)
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::MalformedBody(err)
    }
}
