//! Payload and error types for the results (download) endpoint

use std::fmt;

use serde_json::Value;

/// What the download endpoint returned after a successful request.
///
/// The endpoint either answers with a JSON array of result URLs, or with
/// any other JSON value which is treated as a human-readable message
/// (the backend uses plain strings like "Download not ready yet.").
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPayload {
    Links(Vec<String>),
    Message(String),
}

impl ResultsPayload {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => ResultsPayload::Links(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(url) => url,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::String(message) => ResultsPayload::Message(message),
            other => ResultsPayload::Message(other.to_string()),
        }
    }
}

/// Errors that can occur while fetching the results list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// The endpoint answered with a non-success status code
    Http(u16),
    /// The request itself failed (connect, DNS, ...)
    Request(String),
    /// The body was not valid JSON
    Parse(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::Http(status) => write!(f, "HTTP error, status: {}", status),
            DownloadError::Request(msg) => write!(f, "request error: {}", msg),
            DownloadError::Parse(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}
